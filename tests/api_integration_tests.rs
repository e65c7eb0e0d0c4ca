//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycles, including response caching.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use showroom::{
    api::{create_router, X_CACHE},
    cache::{CacheStore, ResponseCache},
    catalog::{InMemoryCatalog, ProductSource},
    config::EvictionStrategy,
    error::{AppError, Result},
    models::Product,
    AppState,
};
use tower::ServiceExt;

// == Helper Functions ==

/// Catalog that counts how often it is read.
struct CountingCatalog {
    inner: InMemoryCatalog,
    reads: AtomicUsize,
}

impl ProductSource for CountingCatalog {
    fn products(&self) -> Result<Vec<Product>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.products()
    }
}

struct FailingCatalog;

impl ProductSource for FailingCatalog {
    fn products(&self) -> Result<Vec<Product>> {
        Err(AppError::Catalog("database offline".to_string()))
    }
}

fn products() -> Vec<Product> {
    vec![
        Product {
            is_top_product: true,
            ..Product::named("Steel Almirah")
                .with_category("Storage")
                .with_subcategory("Almirahs")
        },
        Product::named("Office Chair")
            .with_category("Seating")
            .with_subcategory("Office Chairs"),
        Product {
            is_most_selling: true,
            ..Product::named("Steel Locker")
                .with_category("Storage")
                .with_subcategory("Lockers")
        },
    ]
}

fn new_cache() -> ResponseCache<showroom::api::CachedResponse> {
    ResponseCache::new(CacheStore::new(), EvictionStrategy::Timer)
}

fn counting_app() -> (Router, Arc<CountingCatalog>) {
    let catalog = Arc::new(CountingCatalog {
        inner: InMemoryCatalog::new(products()),
        reads: AtomicUsize::new(0),
    });
    let state = AppState::new(catalog.clone(), new_cache());
    (create_router(state), catalog)
}

fn create_test_app() -> Router {
    counting_app().0
}

async fn send(app: &Router, method: &str, uri: &str) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// == Product Endpoint Tests ==

#[tokio::test]
async fn test_list_products() {
    let app = create_test_app();

    let response = send(&app, "GET", "/api/products").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["count"], 3);
    assert_eq!(json["products"][0]["isTopProduct"], true);
}

#[tokio::test]
async fn test_list_products_filters() {
    let app = create_test_app();

    let response = send(&app, "GET", "/api/products?category=storage&mostSelling=true").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["count"], 1);
    assert_eq!(json["products"][0]["name"], "Steel Locker");
}

#[tokio::test]
async fn test_list_products_invalid_filter_is_bad_request() {
    let app = create_test_app();

    let response = send(&app, "GET", "/api/products?top=sometimes").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_ranks_results() {
    let app = create_test_app();

    let response = send(&app, "GET", "/api/products/search?q=steel").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["query"], "steel");
    assert_eq!(json["count"], 2);
    // Almirah: 100 + 30 + 10 top; Locker: 100 + 30 + 15 most selling
    assert_eq!(json["results"][0]["name"], "Steel Locker");
    assert_eq!(json["results"][0]["score"], 145.0);
    assert_eq!(json["results"][1]["name"], "Steel Almirah");
    assert_eq!(json["results"][1]["score"], 140.0);
}

#[tokio::test]
async fn test_search_blank_query_is_empty() {
    let app = create_test_app();

    let response = send(&app, "GET", "/api/products/search?q=%20%20").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["count"], 0);
}

#[tokio::test]
async fn test_search_limit_above_max_is_rejected() {
    let (app, catalog) = counting_app();

    let response = send(&app, "GET", "/api/products/search?q=steel&limit=500").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers()[X_CACHE], "MISS");
    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("limit"));
    assert_eq!(catalog.reads.load(Ordering::SeqCst), 0);

    let stats = body_to_json(send(&app, "GET", "/api/cache/stats").await.into_body()).await;
    assert_eq!(stats["count"], 0);
}

#[tokio::test]
async fn test_suggestions() {
    let app = create_test_app();

    let response = send(&app, "GET", "/api/products/suggestions?q=al").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["suggestions"], serde_json::json!(["almirah", "Almirahs"]));
}

#[tokio::test]
async fn test_suggestions_short_query_and_zero_limit() {
    let app = create_test_app();

    let short = body_to_json(send(&app, "GET", "/api/products/suggestions?q=a").await.into_body()).await;
    assert_eq!(short["suggestions"], serde_json::json!([]));

    let none = body_to_json(
        send(&app, "GET", "/api/products/suggestions?q=al&limit=0")
            .await
            .into_body(),
    )
    .await;
    assert_eq!(none["suggestions"], serde_json::json!([]));
}

#[tokio::test]
async fn test_categories() {
    let app = create_test_app();

    let response = send(&app, "GET", "/api/categories").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["count"], 2);
    assert_eq!(json["categories"][1]["name"], "Storage");
    assert_eq!(json["categories"][1]["productCount"], 2);
    assert_eq!(
        json["categories"][1]["subcategories"],
        serde_json::json!(["Almirahs", "Lockers"])
    );
}

// == Failure Handling Tests ==

#[tokio::test]
async fn test_catalog_failure() {
    let app = create_router(AppState::new(Arc::new(FailingCatalog), new_cache()));

    let response = send(&app, "GET", "/api/categories").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.headers()[X_CACHE], "MISS");
    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("database offline"));

    // Suggestions fail soft
    let response = send(&app, "GET", "/api/products/suggestions?q=steel").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["suggestions"], serde_json::json!([]));

    // Errors are not cached
    let stats = body_to_json(send(&app, "GET", "/api/cache/stats").await.into_body()).await;
    assert_eq!(stats["count"], 0);
}

// == Response Cache Tests ==

#[tokio::test]
async fn test_second_request_is_cache_hit() {
    let (app, catalog) = counting_app();

    let first = send(&app, "GET", "/api/products?top=true").await;
    assert_eq!(first.headers()[X_CACHE], "MISS");
    let first_json = body_to_json(first.into_body()).await;

    let second = send(&app, "GET", "/api/products?top=true").await;
    assert_eq!(second.headers()[X_CACHE], "HIT");
    assert_eq!(second.headers()["content-type"], "application/json");
    let second_json = body_to_json(second.into_body()).await;

    assert_eq!(first_json, second_json);
    assert_eq!(catalog.reads.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_query_order_shares_cache_entry() {
    let (app, catalog) = counting_app();

    send(&app, "GET", "/api/products?category=Storage&top=true").await;
    let response = send(&app, "GET", "/api/products?top=true&category=Storage").await;

    assert_eq!(response.headers()[X_CACHE], "HIT");
    assert_eq!(catalog.reads.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_suggestions_are_not_cached() {
    let (app, catalog) = counting_app();

    let response = send(&app, "GET", "/api/products/suggestions?q=steel").await;
    assert!(response.headers().get(X_CACHE).is_none());
    send(&app, "GET", "/api/products/suggestions?q=steel").await;

    assert_eq!(catalog.reads.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_cache_stats_and_clear() {
    let (app, catalog) = counting_app();

    send(&app, "GET", "/api/products").await;
    send(&app, "GET", "/api/categories").await;
    send(&app, "GET", "/api/products").await;

    let stats = body_to_json(send(&app, "GET", "/api/cache/stats").await.into_body()).await;
    assert_eq!(stats["count"], 2);
    assert_eq!(
        stats["keys"],
        serde_json::json!(["/api/categories", "/api/products"])
    );
    assert_eq!(stats["hits"], 1);
    assert_eq!(stats["misses"], 2);

    let cleared = send(&app, "DELETE", "/api/cache").await;
    assert_eq!(cleared.status(), StatusCode::OK);
    let cleared = body_to_json(cleared.into_body()).await;
    assert_eq!(cleared["removed"], 2);

    let response = send(&app, "GET", "/api/products").await;
    assert_eq!(response.headers()[X_CACHE], "MISS");
    assert_eq!(catalog.reads.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_cached_response_expires() {
    let catalog = Arc::new(CountingCatalog {
        inner: InMemoryCatalog::new(products()),
        reads: AtomicUsize::new(0),
    });
    let mut state = AppState::new(catalog.clone(), new_cache());
    state.collection_ttl = Duration::from_millis(100);
    let app = create_router(state);

    send(&app, "GET", "/api/products/search?q=chair").await;
    assert_eq!(send(&app, "GET", "/api/products/search?q=chair").await.headers()[X_CACHE], "HIT");

    tokio::time::sleep(Duration::from_millis(150)).await;

    let response = send(&app, "GET", "/api/products/search?q=chair").await;
    assert_eq!(response.headers()[X_CACHE], "MISS");
    assert_eq!(catalog.reads.load(Ordering::SeqCst), 2);
}

// == Live Server Test ==

#[tokio::test]
async fn test_live_server_round_trip() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_test_app();

    let server = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = reqwest::Client::new();
    let url = format!("http://{}/api/products/search?q=office", addr);

    let first = client.get(&url).send().await.unwrap();
    assert_eq!(first.status(), reqwest::StatusCode::OK);
    assert_eq!(first.headers()["x-cache"], "MISS");
    let json: Value = first.json().await.unwrap();
    assert_eq!(json["results"][0]["name"], "Office Chair");

    let second = client.get(&url).send().await.unwrap();
    assert_eq!(second.headers()["x-cache"], "HIT");

    let health: Value = client
        .get(format!("http://{}/health", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "healthy");

    server.abort();
}
