//! Error types for the cache engine
//!
//! Provides unified error handling using thiserror.
//!
//! Propagation policy: every fault that originates inside the cache layer
//! (tier outages, serialization problems, lock contention) is absorbed at
//! the tier boundary and never surfaces from the public API. Only loader
//! failures cross over to the caller, wrapped in [`CacheError::Loader`].

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache engine.
#[derive(Error, Debug)]
pub enum CacheError {
    /// A cache tier backend is unreachable. Non-fatal: the engine degrades
    /// to the remaining tiers and counts the event in its stats.
    #[error("cache tier '{tier}' unavailable: {reason}")]
    BackendUnavailable { tier: &'static str, reason: String },

    /// Lock acquisition did not succeed within the configured timeout.
    /// Treated as a miss-path event, never surfaced to consumers.
    #[error("lock acquisition timed out for key: {0}")]
    LockTimeout(String),

    /// The caller-supplied loader failed. Propagated verbatim and never
    /// cached.
    #[error("loader failed: {0}")]
    Loader(#[source] anyhow::Error),

    /// A value could not be serialized or restored at a tier boundary.
    /// Treated as a miss on read and a no-op on write.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache engine.
pub type Result<T> = std::result::Result<T, CacheError>;
