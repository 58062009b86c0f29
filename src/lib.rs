//! Tiercache - a hierarchical cache engine
//!
//! Protects an expensive lookup path (e.g. resolving a shortlink key to its
//! target) from load spikes and staleness. A vertical stack of tiers
//! (process-private L1, shared host-local L2, networked L3) is coordinated
//! as a load-through cache with LRU eviction, TTL jitter, an existence
//! filter, per-key lease locks, and delayed double-delete invalidation.
//!
//! Staleness and duplicate-load behavior are bounded, not eliminated: this
//! is a performance component, not a consistency layer, and every tier may
//! be rebuilt from the source of truth at any time.

pub mod config;
pub mod engine;
pub mod error;
pub mod filter;
pub mod lock;
pub mod stats;
pub mod store;
pub mod tasks;
pub mod tier;
pub mod value;

pub use config::CacheConfig;
pub use engine::{CacheEngine, EngineBuilder};
pub use error::{CacheError, Result};
pub use filter::ExistenceFilter;
pub use lock::{KeyLock, LockBackend, LockRecord, MemoryLockBackend};
pub use stats::StatsSnapshot;
pub use store::BoundedStore;
pub use tasks::spawn_gc_task;
pub use tier::{MemoryTier, TierBackend};
pub use value::CacheValue;
