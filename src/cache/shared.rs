//! Shared Response Cache
//!
//! Thread-safe handle over a [`CacheStore`], cloned into request handlers
//! and background tasks.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheSnapshot, CacheStore};
use crate::config::{Config, EvictionStrategy};
use crate::tasks::schedule_expiry;

// == Response Cache ==
/// Cloneable cache handle. All clones share the same entries.
#[derive(Debug)]
pub struct ResponseCache<V> {
    store: Arc<RwLock<CacheStore<V>>>,
    strategy: EvictionStrategy,
}

impl<V> Clone for ResponseCache<V> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            strategy: self.strategy,
        }
    }
}

impl<V> ResponseCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Wraps an existing store.
    pub fn new(store: CacheStore<V>, strategy: EvictionStrategy) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            strategy,
        }
    }

    /// Builds a cache from the entry cap and eviction mode in `config`.
    pub fn from_config(config: &Config) -> Self {
        let store = match config.max_entries {
            Some(max) => CacheStore::with_max_entries(max),
            None => CacheStore::new(),
        };
        Self::new(store, config.eviction)
    }

    /// Returns the value if present and fresh, None on a miss.
    pub async fn get(&self, key: &str) -> Option<V> {
        // Write lock: a stale read removes the entry and counters change
        self.store.write().await.get(key)
    }

    /// Stores `value` under `key` for `ttl`, replacing any existing entry.
    ///
    /// In timer mode this spawns one eviction task on the current tokio
    /// runtime; it must therefore be called from within a runtime.
    pub async fn set(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let key = key.into();
        self.store.write().await.set(key.clone(), value, ttl);

        if self.strategy == EvictionStrategy::Timer {
            debug!(%key, ttl_ms = ttl.as_millis() as u64, "Scheduled cache expiry");
            schedule_expiry(Arc::clone(&self.store), key, ttl);
        }
    }

    /// Drops every entry, returning how many were held.
    ///
    /// Pending expiry timers are left running and become no-ops.
    pub async fn clear(&self) -> usize {
        self.store.write().await.clear()
    }

    /// Live entry count and keys plus hit/miss counters.
    pub async fn stats(&self) -> CacheSnapshot {
        self.store.read().await.snapshot()
    }

    /// Removes all stale entries now.
    pub async fn cleanup_expired(&self) -> usize {
        self.store.write().await.cleanup_expired()
    }

    /// Number of physically stored entries, stale ones included.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    pub fn strategy(&self) -> EvictionStrategy {
        self.strategy
    }
}
