//! Response Cache Middleware
//!
//! Memoizes successful GET responses in the shared [`ResponseCache`],
//! keyed by path plus normalized query string.

use std::time::Duration;

use axum::{
    body::{Body, Bytes, HttpBody},
    extract::{Request, State},
    http::{header, HeaderName, HeaderValue, Method, StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use crate::cache::ResponseCache;
use crate::error::AppError;

/// Header reporting whether a response came from the cache.
pub const X_CACHE: HeaderName = HeaderName::from_static("x-cache");

/// Largest response body that will be buffered for caching.
pub const MAX_CACHEABLE_BODY: usize = 8 * 1024 * 1024;

// == Cached Response ==
/// Status, content type and body of a memoized response.
#[derive(Debug, Clone)]
pub struct CachedResponse {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

impl CachedResponse {
    /// A 200 response with a JSON content type.
    pub fn json(body: Bytes) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: Some(HeaderValue::from_static("application/json")),
            body,
        }
    }

    fn into_response_with(self, cache_status: &'static str) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;

        let headers = response.headers_mut();
        if let Some(content_type) = self.content_type {
            headers.insert(header::CONTENT_TYPE, content_type);
        }
        headers.insert(X_CACHE, HeaderValue::from_static(cache_status));
        response
    }
}

// == Cache Policy ==
/// Middleware state: the shared cache and the TTL for one group of routes.
#[derive(Debug, Clone)]
pub struct CachePolicy {
    pub cache: ResponseCache<CachedResponse>,
    pub ttl: Duration,
}

impl CachePolicy {
    pub fn new(cache: ResponseCache<CachedResponse>, ttl: Duration) -> Self {
        Self { cache, ttl }
    }
}

/// Derives the cache key for a request URI.
///
/// Query pairs are sorted so `?a=1&b=2` and `?b=2&a=1` share an entry.
pub fn cache_key(uri: &Uri) -> String {
    let mut pairs: Vec<&str> = uri
        .query()
        .unwrap_or_default()
        .split('&')
        .filter(|pair| !pair.is_empty())
        .collect();

    if pairs.is_empty() {
        return uri.path().to_string();
    }

    pairs.sort_unstable();
    format!("{}?{}", uri.path(), pairs.join("&"))
}

/// Serves GET requests from the cache, filling it on a miss.
///
/// Only 2xx responses with a known length up to [`MAX_CACHEABLE_BODY`] are
/// stored; anything else passes through uncached. Every GET response
/// carries `x-cache`.
pub async fn cache_response(
    State(policy): State<CachePolicy>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() != Method::GET {
        return next.run(request).await;
    }

    let key = cache_key(request.uri());

    if let Some(cached) = policy.cache.get(&key).await {
        debug!(%key, "Cache hit");
        return cached.into_response_with("HIT");
    }
    debug!(%key, "Cache miss");

    let mut response = next.run(request).await;
    response
        .headers_mut()
        .insert(X_CACHE, HeaderValue::from_static("MISS"));

    if !response.status().is_success() {
        return response;
    }

    let (parts, body) = response.into_parts();
    match HttpBody::size_hint(&body).upper() {
        Some(len) if len <= MAX_CACHEABLE_BODY as u64 => {}
        len => {
            debug!(%key, ?len, "Response not cacheable, passing through");
            return Response::from_parts(parts, body);
        }
    }

    let bytes = match axum::body::to_bytes(body, MAX_CACHEABLE_BODY).await {
        Ok(bytes) => bytes,
        Err(error) => {
            warn!(%key, %error, "Failed to buffer response for caching");
            return AppError::Internal("failed to read response body".to_string()).into_response();
        }
    };

    let cached = CachedResponse {
        status: parts.status,
        content_type: parts.headers.get(header::CONTENT_TYPE).cloned(),
        body: bytes.clone(),
    };
    policy.cache.set(key, cached, policy.ttl).await;

    Response::from_parts(parts, Body::from(bytes))
}
