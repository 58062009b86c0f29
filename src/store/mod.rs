//! Bounded Store Module
//!
//! The process-private L1 tier: a fixed-capacity, recency-ordered
//! key/value store with per-entry expiry. Pure data structure, no I/O.
//!
//! Expiry is lazy: expired entries are removed when touched by a lookup,
//! not swept proactively. Callers that want proactive sweeping use [`BoundedStore::gc`].

mod entry;
mod lru;
mod stats;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use lru::RecencyTracker;
pub use stats::StoreStats;

use std::collections::HashMap;
use std::time::Duration;

use crate::value::CacheValue;

// == Bounded Store ==
/// Fixed-capacity store with LRU eviction and TTL expiry.
///
/// Invariants after every operation: the entry map and the recency tracker
/// hold exactly the same keys, and the entry count never exceeds capacity.
#[derive(Debug)]
pub struct BoundedStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Recency tracker for eviction ordering
    recency: RecencyTracker,
    /// Performance counters
    stats: StoreStats,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl BoundedStore {
    // == Constructor ==
    /// Creates a new BoundedStore holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            recency: RecencyTracker::new(),
            stats: StoreStats::new(),
            capacity: capacity.max(1),
        }
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Misses if the key is absent or its TTL has elapsed; an expired entry
    /// is removed on access. A hit marks the key most recently used.
    pub fn get(&mut self, key: &str) -> Option<CacheValue> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                self.recency.remove(key);
                self.stats.record_expired();
                self.stats.record_miss();
                self.stats.set_total_entries(self.entries.len());
                None
            }
            Some(entry) => {
                let value = entry.value.clone();
                self.stats.record_hit();
                self.recency.touch(key);
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Stores a key-value pair with the given TTL.
    ///
    /// Overwriting an existing key resets its TTL. Inserting a new key at
    /// capacity evicts first: an already-expired entry found scanning from
    /// the least-recently-used end is reclaimed in preference to live data;
    /// only if nothing has expired is the true LRU entry sacrificed.
    pub fn set(&mut self, key: &str, value: CacheValue, ttl: Duration) {
        let is_overwrite = self.entries.contains_key(key);

        if !is_overwrite && self.entries.len() >= self.capacity {
            self.evict_one();
        }

        self.entries.insert(key.to_string(), CacheEntry::new(value, ttl));
        self.recency.touch(key);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Delete ==
    /// Removes an entry by key. Returns true if the key was present.
    pub fn delete(&mut self, key: &str) -> bool {
        if self.entries.remove(key).is_some() {
            self.recency.remove(key);
            self.stats.set_total_entries(self.entries.len());
            true
        } else {
            false
        }
    }

    // == Has ==
    /// Checks whether a live (non-expired) entry exists for the key.
    ///
    /// Does not count toward hit/miss stats and does not refresh recency.
    pub fn has(&self, key: &str) -> bool {
        self.entries
            .get(key)
            .map(|entry| !entry.is_expired())
            .unwrap_or(false)
    }

    // == Length ==
    /// Returns the current number of entries (expired-but-unswept included).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == GC ==
    /// Proactively removes all expired entries.
    ///
    /// Returns the number of entries removed.
    pub fn gc(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
            self.recency.remove(&key);
            self.stats.record_expired();
        }

        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Clear ==
    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.recency = RecencyTracker::new();
        self.stats.set_total_entries(0);
    }

    // == Stats ==
    /// Returns current store statistics.
    pub fn stats(&self) -> StoreStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Eviction ==
    /// Reclaims one slot: dead weight first, then the LRU entry.
    fn evict_one(&mut self) {
        let expired_victim = self
            .recency
            .iter_oldest_first()
            .find(|key| {
                self.entries
                    .get(*key)
                    .map(|entry| entry.is_expired())
                    .unwrap_or(false)
            })
            .map(str::to_string);

        let victim = match expired_victim {
            Some(key) => {
                self.recency.remove(&key);
                self.stats.record_expired();
                Some(key)
            }
            None => {
                let key = self.recency.evict_oldest();
                self.stats.record_eviction();
                key
            }
        };

        if let Some(key) = victim {
            self.entries.remove(&key);
        }
    }
}
