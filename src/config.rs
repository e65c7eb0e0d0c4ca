//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// How stale cache entries get physically removed.
///
/// Staleness is always enforced on read; this only controls the eager path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvictionStrategy {
    /// One deferred eviction task per `set`, firing after the entry's TTL
    Timer,
    /// A single background task sweeping all entries at a fixed interval
    Sweep { interval: Duration },
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// TTL in milliseconds for general collections (product lists, search)
    pub collection_ttl_ms: u64,
    /// TTL in milliseconds for slower-changing content (categories)
    pub content_ttl_ms: u64,
    /// Optional cap on cached entries, None = unbounded
    pub max_entries: Option<usize>,
    /// Eager eviction strategy
    pub eviction: EvictionStrategy,
    /// Path of the JSON product catalog
    pub catalog_path: PathBuf,
    /// Default number of autocomplete suggestions
    pub suggestion_limit: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `COLLECTION_TTL_MS` - Collection cache TTL (default: 300000)
    /// - `CONTENT_TTL_MS` - Content cache TTL (default: 600000)
    /// - `MAX_ENTRIES` - Maximum cache entries (default: unbounded)
    /// - `EVICTION_MODE` - `timer` or `sweep` (default: timer)
    /// - `SWEEP_INTERVAL_MS` - Sweep frequency when `EVICTION_MODE=sweep` (default: 1000)
    /// - `CATALOG_PATH` - Product catalog file (default: data/catalog.json)
    /// - `SUGGESTION_LIMIT` - Suggestions per request (default: 8)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable lookup.
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let parsed = |name: &str| lookup(name).and_then(|v| v.trim().parse::<u64>().ok());

        let eviction = match lookup("EVICTION_MODE").as_deref().map(str::trim) {
            Some(mode) if mode.eq_ignore_ascii_case("sweep") => EvictionStrategy::Sweep {
                interval: Duration::from_millis(parsed("SWEEP_INTERVAL_MS").unwrap_or(1000)),
            },
            _ => defaults.eviction,
        };

        Self {
            server_port: lookup("SERVER_PORT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.server_port),
            collection_ttl_ms: parsed("COLLECTION_TTL_MS").unwrap_or(defaults.collection_ttl_ms),
            content_ttl_ms: parsed("CONTENT_TTL_MS").unwrap_or(defaults.content_ttl_ms),
            max_entries: lookup("MAX_ENTRIES")
                .and_then(|v| v.trim().parse().ok())
                .filter(|max: &usize| *max > 0),
            eviction,
            catalog_path: lookup("CATALOG_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.catalog_path),
            suggestion_limit: lookup("SUGGESTION_LIMIT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.suggestion_limit),
        }
    }

    /// TTL applied to cached collection responses.
    pub fn collection_ttl(&self) -> Duration {
        Duration::from_millis(self.collection_ttl_ms)
    }

    /// TTL applied to cached content responses.
    pub fn content_ttl(&self) -> Duration {
        Duration::from_millis(self.content_ttl_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            collection_ttl_ms: 300_000,
            content_ttl_ms: 600_000,
            max_entries: None,
            eviction: EvictionStrategy::Timer,
            catalog_path: PathBuf::from("data/catalog.json"),
            suggestion_limit: 8,
        }
    }
}
