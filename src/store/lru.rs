//! Recency Tracker Module
//!
//! Tracks access order for LRU eviction with amortized O(1) operations.
//!
//! Instead of rewriting a queue on every touch, each touch pushes a fresh
//! `(key, stamp)` pair to the front and records the stamp as current.
//! Queue entries whose stamp is no longer current are ghosts and are
//! skipped (and discarded) whenever they surface at the back. The queue is
//! compacted once ghosts outnumber live entries.

use std::collections::{HashMap, VecDeque};

// == Recency Tracker ==
/// Tracks access order for LRU eviction strategy.
///
/// Queue layout: front = most recently used, back = least recently used.
#[derive(Debug, Default)]
pub struct RecencyTracker {
    /// Access queue; may contain ghost entries with stale stamps
    queue: VecDeque<(String, u64)>,
    /// Current stamp per live key
    stamps: HashMap<String, u64>,
    /// Monotonic stamp source
    clock: u64,
}

impl RecencyTracker {
    // == Constructor ==
    /// Creates a new empty recency tracker.
    pub fn new() -> Self {
        Self::default()
    }

    // == Touch ==
    /// Marks a key as most recently used.
    pub fn touch(&mut self, key: &str) {
        self.clock += 1;
        self.stamps.insert(key.to_string(), self.clock);
        self.queue.push_front((key.to_string(), self.clock));
        self.maybe_compact();
    }

    // == Remove ==
    /// Removes a key from the tracker. Its queue entries become ghosts.
    pub fn remove(&mut self, key: &str) {
        self.stamps.remove(key);
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used key.
    ///
    /// Returns None if the tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<String> {
        while let Some((key, stamp)) = self.queue.pop_back() {
            if self.stamps.get(&key) == Some(&stamp) {
                self.stamps.remove(&key);
                return Some(key);
            }
        }
        None
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    pub fn peek_oldest(&self) -> Option<&str> {
        self.iter_oldest_first().next()
    }

    // == Oldest-First Iterator ==
    /// Iterates live keys from least to most recently used.
    ///
    /// Used by the store's eviction scan to find expired entries near the
    /// cold end before sacrificing live data.
    pub fn iter_oldest_first(&self) -> impl Iterator<Item = &str> {
        self.queue
            .iter()
            .rev()
            .filter(|(key, stamp)| self.stamps.get(key) == Some(stamp))
            .map(|(key, _)| key.as_str())
    }

    // == Length ==
    /// Returns the number of tracked (live) keys.
    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    pub fn contains(&self, key: &str) -> bool {
        self.stamps.contains_key(key)
    }

    // == Compaction ==
    /// Drops ghost entries once they dominate the queue.
    fn maybe_compact(&mut self) {
        if self.queue.len() > self.stamps.len() * 2 + 16 {
            let stamps = &self.stamps;
            self.queue.retain(|(key, stamp)| stamps.get(key) == Some(stamp));
        }
    }
}
