//! Configuration Module
//!
//! Handles loading and managing cache engine configuration from environment variables.

use std::env;
use std::time::Duration;

/// Cache engine configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries the private L1 store can hold
    pub l1_capacity: usize,
    /// Upper bound on L1 entry TTL; the private tier stays fresher than the
    /// shared tiers so invalidations converge quickly
    pub l1_ttl_cap: Duration,
    /// Default TTL for entries stored without an explicit TTL
    pub default_ttl: Duration,
    /// TTL for cached "known absent" results (penetration dampening)
    pub null_ttl: Duration,
    /// Maximum uniform random jitter added to every TTL (avalanche decorrelation)
    pub jitter_max: Duration,
    /// Lease duration written into each lock record
    pub lock_lease: Duration,
    /// How long a caller waits for the per-key lock before falling back
    pub lock_timeout: Duration,
    /// Sleep between lock acquisition attempts
    pub lock_poll_interval: Duration,
    /// Delay before the deferred second delete fires
    pub double_delete_delay: Duration,
    /// Number of bits in the existence filter
    pub filter_bits: usize,
    /// Number of hash-derived bit positions per key (k)
    pub filter_hashes: u32,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `TIERCACHE_L1_CAPACITY` - Maximum L1 entries (default: 10000)
    /// - `TIERCACHE_L1_TTL_CAP` - L1 TTL cap in seconds (default: 10)
    /// - `TIERCACHE_DEFAULT_TTL` - Default TTL in seconds (default: 300)
    /// - `TIERCACHE_NULL_TTL` - Negative-result TTL in seconds (default: 60)
    /// - `TIERCACHE_TTL_JITTER` - Maximum TTL jitter in seconds (default: 60)
    /// - `TIERCACHE_LOCK_LEASE` - Lock lease duration in seconds (default: 5)
    /// - `TIERCACHE_LOCK_TIMEOUT` - Lock wait timeout in seconds (default: 5)
    /// - `TIERCACHE_LOCK_POLL_MS` - Lock poll interval in milliseconds (default: 10)
    /// - `TIERCACHE_DOUBLE_DELETE_DELAY_MS` - Deferred delete delay in milliseconds (default: 400)
    /// - `TIERCACHE_FILTER_BITS` - Existence filter size in bits (default: 1048576)
    /// - `TIERCACHE_FILTER_HASHES` - Hash functions per key (default: 3)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            l1_capacity: env_parse("TIERCACHE_L1_CAPACITY", defaults.l1_capacity),
            l1_ttl_cap: env_secs("TIERCACHE_L1_TTL_CAP", defaults.l1_ttl_cap),
            default_ttl: env_secs("TIERCACHE_DEFAULT_TTL", defaults.default_ttl),
            null_ttl: env_secs("TIERCACHE_NULL_TTL", defaults.null_ttl),
            jitter_max: env_secs("TIERCACHE_TTL_JITTER", defaults.jitter_max),
            lock_lease: env_secs("TIERCACHE_LOCK_LEASE", defaults.lock_lease),
            lock_timeout: env_secs("TIERCACHE_LOCK_TIMEOUT", defaults.lock_timeout),
            lock_poll_interval: env_millis("TIERCACHE_LOCK_POLL_MS", defaults.lock_poll_interval),
            double_delete_delay: env_millis(
                "TIERCACHE_DOUBLE_DELETE_DELAY_MS",
                defaults.double_delete_delay,
            ),
            filter_bits: env_parse("TIERCACHE_FILTER_BITS", defaults.filter_bits),
            filter_hashes: env_parse("TIERCACHE_FILTER_HASHES", defaults.filter_hashes),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            l1_capacity: 10_000,
            l1_ttl_cap: Duration::from_secs(10),
            default_ttl: Duration::from_secs(300),
            null_ttl: Duration::from_secs(60),
            jitter_max: Duration::from_secs(60),
            lock_lease: Duration::from_secs(5),
            lock_timeout: Duration::from_secs(5),
            lock_poll_interval: Duration::from_millis(10),
            double_delete_delay: Duration::from_millis(400),
            filter_bits: 1 << 20,
            filter_hashes: 3,
        }
    }
}

// == Env Helpers ==

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_secs(name: &str, default: Duration) -> Duration {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or(default)
}

fn env_millis(name: &str, default: Duration) -> Duration {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_millis)
        .unwrap_or(default)
}
