//! Cache Store Module
//!
//! Key → entry map with lazy TTL checks on read, eager removal hooks for
//! timers and sweeps, and an optional entry cap.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheSnapshot, CacheStats};

// == Cache Store ==
/// Single-owner cache storage. Share it through [`crate::cache::ResponseCache`].
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed, None = unbounded
    max_entries: Option<usize>,
}

impl<V> Default for CacheStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> CacheStore<V> {
    // == Constructors ==
    /// Creates an unbounded store.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            max_entries: None,
        }
    }

    /// Creates a store holding at most `max_entries` entries.
    ///
    /// A cap of zero is treated as unbounded.
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            max_entries: (max_entries > 0).then_some(max_entries),
            ..Self::new()
        }
    }

    // == Set ==
    /// Stores a value under `key`, fresh for `ttl`.
    ///
    /// Overwrites any existing entry and resets its insertion time. When a
    /// cap is configured and a new key would exceed it, expired entries are
    /// purged first, then the oldest insertion is evicted.
    pub fn set(&mut self, key: String, value: V, ttl: Duration) {
        if let Some(max) = self.max_entries {
            if !self.entries.contains_key(&key) && self.entries.len() >= max {
                self.cleanup_expired();
                while self.entries.len() >= max {
                    if !self.evict_oldest() {
                        break;
                    }
                }
            }
        }

        self.entries.insert(key, CacheEntry::new(value, ttl));
    }

    // == Get ==
    /// Returns the stored value if present and fresh.
    ///
    /// Stale entries are removed on the spot and reported as a miss.
    pub fn get(&mut self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        let value = match self.entries.get(key) {
            Some(entry) if !entry.is_expired() => Some(entry.value.clone()),
            Some(_) => {
                self.entries.remove(key);
                self.stats.record_expirations(1);
                None
            }
            None => None,
        };

        match value {
            Some(_) => self.stats.record_hit(),
            None => self.stats.record_miss(),
        }
        value
    }

    // == Remove If Expired ==
    /// Removes `key` only if its entry is stale.
    ///
    /// Returns true when something was removed. Absent keys and fresh
    /// entries (e.g. rewritten since the caller scheduled this) are left alone.
    pub fn remove_if_expired(&mut self, key: &str) -> bool {
        let stale = self
            .entries
            .get(key)
            .map(CacheEntry::is_expired)
            .unwrap_or(false);

        if stale {
            self.entries.remove(key);
            self.stats.record_expirations(1);
        }
        stale
    }

    // == Cleanup Expired ==
    /// Removes all stale entries, returning how many were dropped.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        let removed = before - self.entries.len();
        self.stats.record_expirations(removed);
        removed
    }

    // == Clear ==
    /// Drops every entry, returning how many were held.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }

    // == Snapshot ==
    /// Returns live entry count, live keys and counters.
    pub fn snapshot(&self) -> CacheSnapshot {
        let keys = self
            .entries
            .iter()
            .filter(|(_, entry)| !entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();
        CacheSnapshot::new(keys, &self.stats)
    }

    /// Returns the running counters.
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Number of physically stored entries, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> Option<usize> {
        self.max_entries
    }

    fn evict_oldest(&mut self) -> bool {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.inserted_at)
            .map(|(key, _)| key.clone());

        match oldest {
            Some(key) => {
                self.entries.remove(&key);
                self.stats.record_eviction();
                true
            }
            None => false,
        }
    }
}
