//! Engine Statistics Module
//!
//! Coordinator-level counters. Engine methods take `&self` and run
//! concurrently, so the live counters are atomics; [`StatsSnapshot`] is the
//! serializable point-in-time view handed to consumers.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::store::StoreStats;

// == Engine Stats ==
/// Live atomic counters maintained by the coordinator.
#[derive(Debug, Default)]
pub(crate) struct EngineStats {
    pub l1_hits: AtomicU64,
    pub l2_hits: AtomicU64,
    pub l3_hits: AtomicU64,
    pub misses: AtomicU64,
    pub tier_degradations: AtomicU64,
    pub lock_contentions: AtomicU64,
}

impl EngineStats {
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_degradation(&self) {
        self.tier_degradations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_lock_contention(&self) {
        self.lock_contentions.fetch_add(1, Ordering::Relaxed);
    }
}

// == Stats Snapshot ==
/// Point-in-time view of engine and L1 store metrics.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    /// Hits served from the process-private L1 store
    pub l1_hits: u64,
    /// Hits served from the shared host-local L2 tier
    pub l2_hits: u64,
    /// Hits served from the networked L3 tier
    pub l3_hits: u64,
    /// Full misses (all tiers probed without a hit)
    pub misses: u64,
    /// Tier backend failures silently degraded around
    pub tier_degradations: u64,
    /// Lock waits that timed out and took the fallback path
    pub lock_contentions: u64,
    /// Keys recorded in the existence filter
    pub filter_size: u64,
    /// Detailed L1 store counters
    pub l1: StoreStats,
}

impl StatsSnapshot {
    /// Overall hit rate across all tiers.
    pub fn hit_rate(&self) -> f64 {
        let hits = self.l1_hits + self.l2_hits + self.l3_hits;
        let total = hits + self.misses;
        if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        }
    }
}

impl EngineStats {
    /// Builds a snapshot combining coordinator counters with L1 details.
    pub fn snapshot(&self, filter_size: u64, l1: StoreStats) -> StatsSnapshot {
        StatsSnapshot {
            l1_hits: self.l1_hits.load(Ordering::Relaxed),
            l2_hits: self.l2_hits.load(Ordering::Relaxed),
            l3_hits: self.l3_hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            tier_degradations: self.tier_degradations.load(Ordering::Relaxed),
            lock_contentions: self.lock_contentions.load(Ordering::Relaxed),
            filter_size,
            l1,
        }
    }
}
