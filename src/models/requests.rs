//! Request DTOs for the catalog API
//!
//! Query-string parameters accepted by the product endpoints.

use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::Product;

/// Default number of search results.
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Upper bound on search results and suggestions per request.
pub const MAX_RESULT_LIMIT: usize = 100;

/// Filters for GET /api/products
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    /// Case-insensitive category match
    #[serde(default)]
    pub category: Option<String>,
    /// Case-insensitive subcategory match
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub top: Option<bool>,
    #[serde(default)]
    pub most_selling: Option<bool>,
    /// Free-text query; ranks results and drops non-matches
    #[serde(default)]
    pub search: Option<String>,
}

impl ProductQuery {
    /// Returns true if `product` passes every filter that is set.
    pub fn matches(&self, product: &Product) -> bool {
        fn same(filter: &Option<String>, value: &str) -> bool {
            filter
                .as_deref()
                .map(|f| f.trim().eq_ignore_ascii_case(value.trim()))
                .unwrap_or(true)
        }

        same(&self.category, product.category_str())
            && same(&self.subcategory, product.subcategory_str())
            && self.featured.map_or(true, |f| product.featured == f)
            && self.top.map_or(true, |t| product.is_top_product == t)
            && self
                .most_selling
                .map_or(true, |m| product.is_most_selling == m)
    }

    /// The search text, if it has any non-whitespace content.
    pub fn search_text(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// Parameters for GET /api/products/search and /api/products/suggestions
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl SearchQuery {
    /// Requested limit, or `default` when none was given.
    ///
    /// An explicit limit above [`MAX_RESULT_LIMIT`] is rejected; a default
    /// above it is clamped.
    pub fn effective_limit(&self, default: usize) -> Result<usize> {
        match self.limit {
            Some(limit) if limit > MAX_RESULT_LIMIT => Err(AppError::InvalidRequest(format!(
                "limit must be at most {MAX_RESULT_LIMIT}, got {limit}"
            ))),
            Some(limit) => Ok(limit),
            None => Ok(default.min(MAX_RESULT_LIMIT)),
        }
    }
}
