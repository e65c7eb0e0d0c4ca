//! Per-entry Expiry Timer
//!
//! One-shot task that removes a cache entry after its TTL elapses.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::cache::CacheStore;

/// Spawns a task that sleeps for `ttl` and then removes `key` if stale.
///
/// Removal is conditional so the timer is idempotent with the lazy check in
/// `get`, with `clear`, and with a later overwrite of the same key. The
/// returned handle may be dropped; the task runs to completion regardless.
pub fn schedule_expiry<V>(
    store: Arc<RwLock<CacheStore<V>>>,
    key: String,
    ttl: Duration,
) -> JoinHandle<()>
where
    V: Send + Sync + 'static,
{
    tokio::spawn(async move {
        tokio::time::sleep(ttl).await;

        let removed = store.write().await.remove_if_expired(&key);
        if removed {
            debug!(%key, "Expiry timer removed stale entry");
        }
    })
}
