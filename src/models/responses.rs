//! Response DTOs for the catalog API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::catalog::CategorySummary;
use crate::models::Product;
use crate::search::ScoredProduct;

/// Response body for GET /api/products
#[derive(Debug, Clone, Serialize)]
pub struct ProductListResponse {
    pub count: usize,
    pub products: Vec<Product>,
}

impl ProductListResponse {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            count: products.len(),
            products,
        }
    }
}

/// Response body for GET /api/products/search
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub count: usize,
    pub results: Vec<ScoredProduct>,
}

impl SearchResponse {
    pub fn new(query: impl Into<String>, results: Vec<ScoredProduct>) -> Self {
        Self {
            query: query.into(),
            count: results.len(),
            results,
        }
    }
}

/// Response body for GET /api/products/suggestions
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionResponse {
    pub query: String,
    pub suggestions: Vec<String>,
}

impl SuggestionResponse {
    pub fn new(query: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self {
            query: query.into(),
            suggestions,
        }
    }
}

/// Response body for GET /api/categories
#[derive(Debug, Clone, Serialize)]
pub struct CategoriesResponse {
    pub count: usize,
    pub categories: Vec<CategorySummary>,
}

impl CategoriesResponse {
    pub fn new(categories: Vec<CategorySummary>) -> Self {
        Self {
            count: categories.len(),
            categories,
        }
    }
}

/// Response body for DELETE /api/cache
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub message: String,
    pub removed: usize,
}

impl ClearResponse {
    pub fn new(removed: usize) -> Self {
        Self {
            message: format!("Cleared {} cached responses", removed),
            removed,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
