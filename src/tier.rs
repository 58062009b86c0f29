//! Tier Backend Module
//!
//! Boundary to the shared cache tiers. L2 is a host-local store shared by
//! sibling workers; L3 is a networked store shared across hosts. Both are
//! external collaborators reached through [`TierBackend`]; the engine only
//! assumes get/set/delete/exists semantics with TTL.
//!
//! Backend faults are reported as [`CacheError::BackendUnavailable`] and
//! absorbed by the coordinator: a tier outage degrades service to the
//! remaining tiers, it never fails a cache call.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;
use crate::store::current_timestamp_ms;

// == Tier Backend Trait ==
/// Key/value store with TTL, polymorphic over the concrete backend.
///
/// Values cross this boundary pre-serialized: each tier owns its own copy
/// of every entry.
#[async_trait]
pub trait TierBackend: Send + Sync {
    /// Short tier label used in logs and degradation counters.
    fn name(&self) -> &'static str;

    /// Fetches the serialized payload for `key`, None on miss.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores a serialized payload under `key` for `ttl`.
    async fn set(&self, key: &str, payload: &str, ttl: Duration) -> Result<()>;

    /// Removes `key`. Deleting an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<()>;

    /// Checks for a live entry without fetching it.
    async fn exists(&self, key: &str) -> Result<bool>;

    /// Drops every entry this backend holds.
    async fn clear(&self) -> Result<()>;
}

// == Memory Tier ==
/// In-process [`TierBackend`] for single-host deployments and tests.
///
/// Expiry is lazy, matching the contract real shared stores provide: an
/// entry past its TTL is indistinguishable from an absent one.
#[derive(Debug)]
pub struct MemoryTier {
    name: &'static str,
    entries: Mutex<HashMap<String, (String, u64)>>,
}

impl MemoryTier {
    /// Creates an empty tier labeled `name` (e.g. "l2").
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Current number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.lock().expect("tier poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl TierBackend for MemoryTier {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut entries = self.entries.lock().expect("tier poisoned");
        match entries.get(key) {
            Some((_, expires_at)) if *expires_at <= current_timestamp_ms() => {
                entries.remove(key);
                Ok(None)
            }
            Some((payload, _)) => Ok(Some(payload.clone())),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, payload: &str, ttl: Duration) -> Result<()> {
        let expires_at = current_timestamp_ms().saturating_add(ttl.as_millis() as u64);
        self.entries
            .lock()
            .expect("tier poisoned")
            .insert(key.to_string(), (payload.to_string(), expires_at));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.entries.lock().expect("tier poisoned").remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }

    async fn clear(&self) -> Result<()> {
        self.entries.lock().expect("tier poisoned").clear();
        Ok(())
    }
}
