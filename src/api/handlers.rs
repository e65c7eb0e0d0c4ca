//! API Handlers
//!
//! HTTP request handlers for each catalog endpoint.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Query, State},
    http::Uri,
    Json,
};
use tracing::{debug, info};

use crate::api::middleware::CachedResponse;
use crate::cache::{CacheSnapshot, ResponseCache};
use crate::catalog::{summarize_categories, JsonFileCatalog, ProductSource};
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{
    CategoriesResponse, ClearResponse, HealthResponse, Product, ProductListResponse, ProductQuery,
    SearchQuery, SearchResponse, SuggestionResponse, DEFAULT_SEARCH_LIMIT,
};
use crate::search::{rank, suggest_from_source};

/// Application state shared across all handlers.
///
/// Owns the one response cache of the process; handlers and middleware get
/// clones of the handle.
#[derive(Clone)]
pub struct AppState {
    /// Where products come from
    pub catalog: Arc<dyn ProductSource>,
    /// Shared GET response cache
    pub cache: ResponseCache<CachedResponse>,
    /// TTL for product list and search responses
    pub collection_ttl: Duration,
    /// TTL for category responses
    pub content_ttl: Duration,
    /// Default number of suggestions
    pub suggestion_limit: usize,
}

impl AppState {
    /// Creates a new AppState with default TTLs and suggestion limit.
    pub fn new(catalog: Arc<dyn ProductSource>, cache: ResponseCache<CachedResponse>) -> Self {
        let defaults = Config::default();
        Self {
            catalog,
            cache,
            collection_ttl: defaults.collection_ttl(),
            content_ttl: defaults.content_ttl(),
            suggestion_limit: defaults.suggestion_limit,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Reads products from the JSON catalog at `config.catalog_path`.
    pub fn from_config(config: &Config) -> Self {
        Self {
            catalog: Arc::new(JsonFileCatalog::new(&config.catalog_path)),
            cache: ResponseCache::from_config(config),
            collection_ttl: config.collection_ttl(),
            content_ttl: config.content_ttl(),
            suggestion_limit: config.suggestion_limit,
        }
    }
}

/// Handler for GET /api/products
///
/// Lists products passing the query filters. With `search`, results are
/// ordered by relevance and non-matching products are dropped.
pub async fn list_products_handler(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<ProductListResponse>> {
    let products: Vec<Product> = state
        .catalog
        .products()?
        .into_iter()
        .filter(|product| query.matches(product))
        .collect();

    let products = match query.search_text() {
        Some(text) => rank(text, &products)
            .into_iter()
            .map(|scored| scored.product)
            .collect(),
        None => products,
    };

    Ok(Json(ProductListResponse::new(products)))
}

/// Handler for GET /api/products/search
///
/// Returns products ranked by relevance with their scores. A blank query
/// yields no results rather than an error.
pub async fn search_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>> {
    let text = query.q.trim();
    if text.is_empty() {
        return Ok(Json(SearchResponse::new(text, Vec::new())));
    }

    let limit = query.effective_limit(DEFAULT_SEARCH_LIMIT)?;
    let products = state.catalog.products()?;
    let mut results = rank(text, &products);
    results.truncate(limit);

    debug!(query = text, results = results.len(), "Search completed");
    Ok(Json(SearchResponse::new(text, results)))
}

/// Handler for GET /api/products/suggestions
///
/// Short queries and catalog errors both produce an empty list. Only a
/// limit above the maximum is rejected.
pub async fn suggestions_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SuggestionResponse>> {
    let limit = query.effective_limit(state.suggestion_limit)?;
    let suggestions = suggest_from_source(state.catalog.as_ref(), &query.q, limit);

    Ok(Json(SuggestionResponse::new(query.q.trim(), suggestions)))
}

/// Handler for GET /api/categories
pub async fn categories_handler(State(state): State<AppState>) -> Result<Json<CategoriesResponse>> {
    let products = state.catalog.products()?;
    Ok(Json(CategoriesResponse::new(summarize_categories(&products))))
}

/// Handler for GET /api/cache/stats
///
/// Returns live entry count and keys plus hit/miss counters.
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<CacheSnapshot> {
    Json(state.cache.stats().await)
}

/// Handler for DELETE /api/cache
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let removed = state.cache.clear().await;
    info!("Response cache cleared ({} entries)", removed);
    Json(ClearResponse::new(removed))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Fallback for unmatched routes: a JSON 404.
pub async fn not_found_handler(uri: Uri) -> AppError {
    debug!(path = uri.path(), "No route");
    AppError::NotFound(format!("no route for {}", uri.path()))
}
