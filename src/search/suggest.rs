//! Autocomplete suggestions.

use std::collections::HashSet;

use tracing::warn;

use crate::catalog::ProductSource;
use crate::models::Product;

/// Shortest trimmed query, in characters, that yields suggestions.
pub const MIN_SUGGESTION_QUERY_LEN: usize = 2;

/// Collects up to `limit` distinct suggestions for `query`.
///
/// Products are scanned in order. Name words starting with the query (but
/// not equal to it) come first for each product, then its category and
/// subcategory verbatim when they contain the query. No ranking is applied.
/// Scanning stops as soon as `limit` suggestions are collected.
pub fn extract_suggestions<'a>(
    query: &str,
    products: impl IntoIterator<Item = &'a Product>,
    limit: usize,
) -> Vec<String> {
    let term = query.trim().to_lowercase();
    if term.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    products
        .into_iter()
        .flat_map(|product| candidates(product, &term))
        .filter(|candidate| seen.insert(candidate.clone()))
        .take(limit)
        .collect()
}

/// Matching name words (lowercased) then matching category fields (verbatim).
fn candidates(product: &Product, term: &str) -> Vec<String> {
    let name = product.name_str().to_lowercase();
    let words = name
        .split_whitespace()
        .filter(|word| word.starts_with(term) && *word != term)
        .map(str::to_string);
    let fields = [product.category_str(), product.subcategory_str()]
        .into_iter()
        .filter(|field| !field.is_empty() && field.to_lowercase().contains(term))
        .map(str::to_string);

    words.chain(fields).collect()
}

/// Suggestions with the minimum query length enforced.
pub fn suggest(query: &str, products: &[Product], limit: usize) -> Vec<String> {
    if query.trim().chars().count() < MIN_SUGGESTION_QUERY_LEN {
        return Vec::new();
    }
    extract_suggestions(query, products, limit)
}

/// Suggestions drawn from a product source.
///
/// A failing source yields an empty list; the failure is only logged.
pub fn suggest_from_source(source: &dyn ProductSource, query: &str, limit: usize) -> Vec<String> {
    if query.trim().chars().count() < MIN_SUGGESTION_QUERY_LEN {
        return Vec::new();
    }

    match source.products() {
        Ok(products) => extract_suggestions(query, &products, limit),
        Err(error) => {
            warn!(%error, "Failed to load products for suggestions");
            Vec::new()
        }
    }
}
