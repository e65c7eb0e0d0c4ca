//! API Routes
//!
//! Configures the Axum router with all catalog endpoints.

use axum::{
    middleware,
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cache_stats_handler, categories_handler, clear_cache_handler, health_handler,
    list_products_handler, not_found_handler, search_handler, suggestions_handler, AppState,
};
use super::middleware::{cache_response, CachePolicy};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/products` - List and filter products (cached, collection TTL)
/// - `GET /api/products/search` - Relevance-ranked search (cached, collection TTL)
/// - `GET /api/products/suggestions` - Autocomplete suggestions
/// - `GET /api/categories` - Category summaries (cached, content TTL)
/// - `GET /api/cache/stats` - Cache introspection
/// - `DELETE /api/cache` - Clear the response cache
/// - `GET /health` - Health check endpoint
///
/// Anything else gets a JSON 404.
///
/// # Middleware
/// - Response cache on the cached route groups
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let collections: Router<AppState> = Router::new()
        .route("/api/products", get(list_products_handler))
        .route("/api/products/search", get(search_handler))
        .route_layer(middleware::from_fn_with_state(
            CachePolicy::new(state.cache.clone(), state.collection_ttl),
            cache_response,
        ));

    let content: Router<AppState> = Router::new()
        .route("/api/categories", get(categories_handler))
        .route_layer(middleware::from_fn_with_state(
            CachePolicy::new(state.cache.clone(), state.content_ttl),
            cache_response,
        ));

    Router::new()
        .merge(collections)
        .merge(content)
        .route("/api/products/suggestions", get(suggestions_handler))
        .route("/api/cache/stats", get(cache_stats_handler))
        .route("/api/cache", delete(clear_cache_handler))
        .route("/health", get(health_handler))
        .fallback(not_found_handler)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
