//! Relevance scoring and ranking.
//!
//! Scores are heuristic points, not probabilities:
//! - name: 100 when it starts with the term, else 80 when it contains it
//! - category: 60 on exact match, else 40 when it contains the term
//! - subcategory: 50 on exact match, else 30 when it contains the term
//! - description: 20 when it contains the term
//! - +30 when at least as many field matches as terms were found
//! - +10 for top or featured products, +15 for most-selling products
//! - scaled by `matched / terms` when fewer than half as many matches as terms

use serde::Serialize;

use crate::models::Product;
use crate::search::tokenize_query;

const NAME_PREFIX_POINTS: f64 = 100.0;
const NAME_CONTAINS_POINTS: f64 = 80.0;
const CATEGORY_EXACT_POINTS: f64 = 60.0;
const CATEGORY_CONTAINS_POINTS: f64 = 40.0;
const SUBCATEGORY_EXACT_POINTS: f64 = 50.0;
const SUBCATEGORY_CONTAINS_POINTS: f64 = 30.0;
const DESCRIPTION_POINTS: f64 = 20.0;
const ALL_TERMS_BONUS: f64 = 30.0;
const TOP_OR_FEATURED_BONUS: f64 = 10.0;
const MOST_SELLING_BONUS: f64 = 15.0;
const MIN_MATCH_RATIO: f64 = 0.5;

/// A product paired with its relevance score for one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredProduct {
    #[serde(flatten)]
    pub product: Product,
    pub score: f64,
}

/// Computes the relevance of `product` for `query`.
///
/// Blank queries score 0. A term matching several fields counts once per
/// field toward the matched total.
pub fn compute_score(query: &str, product: &Product) -> f64 {
    let terms = tokenize_query(query);
    if terms.is_empty() {
        return 0.0;
    }

    let name = product.name_str().to_lowercase();
    let category = product.category_str().to_lowercase();
    let subcategory = product.subcategory_str().to_lowercase();
    let description = product.description_str().to_lowercase();

    let mut score = 0.0;
    let mut matched_terms = 0usize;

    for term in &terms {
        let term = term.as_str();

        if name.contains(term) {
            score += if name.starts_with(term) {
                NAME_PREFIX_POINTS
            } else {
                NAME_CONTAINS_POINTS
            };
            matched_terms += 1;
        }

        if category.contains(term) {
            score += if category == term {
                CATEGORY_EXACT_POINTS
            } else {
                CATEGORY_CONTAINS_POINTS
            };
            matched_terms += 1;
        }

        if subcategory.contains(term) {
            score += if subcategory == term {
                SUBCATEGORY_EXACT_POINTS
            } else {
                SUBCATEGORY_CONTAINS_POINTS
            };
            matched_terms += 1;
        }

        if description.contains(term) {
            score += DESCRIPTION_POINTS;
            matched_terms += 1;
        }
    }

    if matched_terms >= terms.len() {
        score += ALL_TERMS_BONUS;
    }

    if product.is_top_product || product.featured {
        score += TOP_OR_FEATURED_BONUS;
    }
    if product.is_most_selling {
        score += MOST_SELLING_BONUS;
    }

    let match_ratio = matched_terms as f64 / terms.len() as f64;
    if match_ratio < MIN_MATCH_RATIO {
        score *= match_ratio;
    }

    score
}

/// Scores every product, drops non-matches and sorts best first.
///
/// Ties keep their catalog order.
pub fn rank(query: &str, products: &[Product]) -> Vec<ScoredProduct> {
    let mut scored: Vec<ScoredProduct> = products
        .iter()
        .map(|product| ScoredProduct {
            score: compute_score(query, product),
            product: product.clone(),
        })
        .filter(|scored| scored.score > 0.0)
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}
