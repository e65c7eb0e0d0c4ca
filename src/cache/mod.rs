//! Cache Module
//!
//! Provides in-memory response caching with per-entry TTL expiration.
//! Stale entries are dropped lazily on read and eagerly by a per-entry
//! timer or a periodic sweep.

mod entry;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use shared::ResponseCache;
pub use stats::{CacheSnapshot, CacheStats};
pub use store::CacheStore;
