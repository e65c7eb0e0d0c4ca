//! API Module
//!
//! HTTP handlers, response cache middleware and routing for the catalog API.
//!
//! # Endpoints
//! - `GET /api/products` - List and filter products
//! - `GET /api/products/search` - Relevance-ranked search
//! - `GET /api/products/suggestions` - Autocomplete suggestions
//! - `GET /api/categories` - Category summaries
//! - `GET /api/cache/stats` - Cache introspection
//! - `DELETE /api/cache` - Clear the response cache
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use handlers::*;
pub use middleware::{cache_key, CachePolicy, CachedResponse, X_CACHE};
pub use routes::create_router;
