//! Mutual Exclusion Lock Module
//!
//! Named, lease-based locking used to serialize expensive recomputation per
//! key across workers. Coordination happens through an atomic
//! create-if-absent primitive on a [`LockBackend`], never through in-process
//! mutexes alone, so the same code works whether the backend is a shared
//! networked store or the in-memory fallback for single-process deployments.
//!
//! A lock is a lease, not a permanent claim: if a holder crashes before
//! releasing, any later caller reclaims the record once the lease expires.
//! There is no permanent deadlock.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;
use tracing::debug;

use crate::error::CacheError;
use crate::store::current_timestamp_ms;

// == Lock Record ==
/// State stored per held lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockRecord {
    /// Random token identifying the holder
    pub owner: u64,
    /// Lease expiry (Unix milliseconds); an expired record equals "no lock"
    pub lease_expires_at: u64,
}

impl LockRecord {
    /// True once the lease has lapsed and the record may be reclaimed.
    pub fn is_expired(&self) -> bool {
        self.lease_expires_at <= current_timestamp_ms()
    }
}

// == Lock Backend Trait ==
/// Atomic create-if-absent storage for lock records.
///
/// Networked deployments implement this over their shared store's native
/// atomic operation (e.g. SET NX); [`MemoryLockBackend`] covers
/// single-process deployments and tests.
#[async_trait]
pub trait LockBackend: Send + Sync {
    /// Atomically creates the record if no record exists under `name`.
    /// Returns false if a record is already present.
    async fn try_create(&self, name: &str, record: LockRecord) -> bool;

    /// Reads the current record, if any.
    async fn read(&self, name: &str) -> Option<LockRecord>;

    /// Removes the record unconditionally.
    async fn remove(&self, name: &str);
}

// == Memory Lock Backend ==
/// In-process lock backend for single-process deployments and tests.
#[derive(Debug, Default)]
pub struct MemoryLockBackend {
    records: Mutex<HashMap<String, LockRecord>>,
}

impl MemoryLockBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LockBackend for MemoryLockBackend {
    async fn try_create(&self, name: &str, record: LockRecord) -> bool {
        let mut records = self.records.lock().expect("lock backend poisoned");
        if records.contains_key(name) {
            false
        } else {
            records.insert(name.to_string(), record);
            true
        }
    }

    async fn read(&self, name: &str) -> Option<LockRecord> {
        self.records
            .lock()
            .expect("lock backend poisoned")
            .get(name)
            .cloned()
    }

    async fn remove(&self, name: &str) {
        self.records
            .lock()
            .expect("lock backend poisoned")
            .remove(name);
    }
}

// == Key Lock ==
/// Per-key mutual exclusion with lease expiry and bounded waiting.
pub struct KeyLock {
    backend: std::sync::Arc<dyn LockBackend>,
    lease: Duration,
    poll_interval: Duration,
}

impl KeyLock {
    // == Constructor ==
    /// Creates a KeyLock over the given backend.
    ///
    /// # Arguments
    /// * `lease` - How long a granted lock stays valid before any caller may reclaim it
    /// * `poll_interval` - Sleep between acquisition attempts while contended
    pub fn new(
        backend: std::sync::Arc<dyn LockBackend>,
        lease: Duration,
        poll_interval: Duration,
    ) -> Self {
        Self {
            backend,
            lease,
            poll_interval,
        }
    }

    // == Acquire ==
    /// Attempts to take the lock for `key` within `timeout`.
    ///
    /// The loop is a bounded poll-with-backoff, never a busy spin: each
    /// failed attempt checks for a reclaimable expired lease, then sleeps
    /// for the poll interval. Returns [`CacheError::LockTimeout`] once the
    /// timeout elapses; callers treat that as a miss-path signal.
    pub async fn acquire(&self, key: &str, timeout: Duration) -> Result<(), CacheError> {
        let name = lock_name(key);
        let owner: u64 = rand::random();
        let deadline = Instant::now() + timeout;

        loop {
            let record = LockRecord {
                owner,
                lease_expires_at: current_timestamp_ms()
                    .saturating_add(self.lease.as_millis() as u64),
            };
            if self.backend.try_create(&name, record).await {
                return Ok(());
            }

            // A crashed holder leaves an expired lease behind; reclaim it
            if let Some(existing) = self.backend.read(&name).await {
                if existing.is_expired() {
                    debug!(key, "reclaiming expired lock lease");
                    self.backend.remove(&name).await;
                    continue;
                }
            }

            if Instant::now() >= deadline {
                return Err(CacheError::LockTimeout(key.to_string()));
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    // == Release ==
    /// Releases the lock for `key` unconditionally.
    ///
    /// Safe because a caller only releases within its own lease window; a
    /// stale release after lease expiry removes at worst a reclaimable record.
    pub async fn release(&self, key: &str) {
        self.backend.remove(&lock_name(key)).await;
    }
}

/// Lock records are keyed by a hash of the cache key, keeping backend key
/// length bounded regardless of cache key size.
fn lock_name(key: &str) -> String {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    format!("lock:{:016x}", hasher.finish())
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn test_lock(lease_ms: u64) -> KeyLock {
        KeyLock::new(
            Arc::new(MemoryLockBackend::new()),
            Duration::from_millis(lease_ms),
            Duration::from_millis(5),
        )
    }

    #[tokio::test]
    async fn test_acquire_and_release() {
        let lock = test_lock(5000);

        assert!(lock.acquire("key1", Duration::from_millis(100)).await.is_ok());
        lock.release("key1").await;

        // Re-acquirable after release
        assert!(lock.acquire("key1", Duration::from_millis(100)).await.is_ok());
    }

    #[tokio::test]
    async fn test_acquire_times_out_while_held() {
        let lock = test_lock(5000);

        lock.acquire("key1", Duration::from_millis(100)).await.unwrap();

        let result = lock.acquire("key1", Duration::from_millis(50)).await;
        assert!(matches!(result, Err(CacheError::LockTimeout(_))));
    }

    #[tokio::test]
    async fn test_distinct_keys_do_not_contend() {
        let lock = test_lock(5000);

        lock.acquire("key1", Duration::from_millis(100)).await.unwrap();
        assert!(lock.acquire("key2", Duration::from_millis(50)).await.is_ok());
    }

    #[tokio::test]
    async fn test_expired_lease_is_reclaimed() {
        let lock = test_lock(30);

        lock.acquire("key1", Duration::from_millis(100)).await.unwrap();
        // Holder "crashes" without releasing; lease lapses after 30ms
        tokio::time::sleep(Duration::from_millis(60)).await;

        assert!(
            lock.acquire("key1", Duration::from_millis(200)).await.is_ok(),
            "expired lease must be reclaimable"
        );
    }

    #[tokio::test]
    async fn test_waiter_proceeds_after_release() {
        let lock = Arc::new(test_lock(5000));

        lock.acquire("key1", Duration::from_millis(100)).await.unwrap();

        let waiter = {
            let lock = Arc::clone(&lock);
            tokio::spawn(async move { lock.acquire("key1", Duration::from_secs(1)).await })
        };

        tokio::time::sleep(Duration::from_millis(50)).await;
        lock.release("key1").await;

        assert!(waiter.await.unwrap().is_ok());
    }
}
