//! Request and Response models for the catalog API
//!
//! This module defines the product record and the DTOs used for
//! serializing/deserializing HTTP query strings and response bodies.

pub mod product;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use product::Product;
pub use requests::{ProductQuery, SearchQuery, DEFAULT_SEARCH_LIMIT, MAX_RESULT_LIMIT};
pub use responses::{
    CategoriesResponse, ClearResponse, HealthResponse, ProductListResponse, SearchResponse,
    SuggestionResponse,
};
