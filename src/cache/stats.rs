//! Cache Statistics Module
//!
//! Tracks hit/miss/eviction counters and exposes introspection snapshots.

use serde::Serialize;

// == Cache Stats ==
/// Running performance counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups served from a fresh entry
    pub hits: u64,
    /// Lookups for absent or stale keys
    pub misses: u64,
    /// Entries dropped to stay under the entry cap
    pub evictions: u64,
    /// Stale entries physically removed (read, timer or sweep)
    pub expirations: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_expirations(&mut self, count: usize) {
        self.expirations += count as u64;
    }
}

// == Cache Snapshot ==
/// Point-in-time view of the cache: live entries plus counters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheSnapshot {
    /// Number of live (fresh) entries
    pub count: usize,
    /// Keys of live entries, sorted
    pub keys: Vec<String>,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub hit_rate: f64,
}

impl CacheSnapshot {
    /// Combines the live key set with the running counters.
    pub fn new(mut keys: Vec<String>, stats: &CacheStats) -> Self {
        keys.sort();
        Self {
            count: keys.len(),
            keys,
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            hit_rate: stats.hit_rate(),
        }
    }
}
