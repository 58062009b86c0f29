//! Cache Engine Module
//!
//! The tier coordinator. Orchestrates the vertical cache stack (private
//! L1 [`BoundedStore`], shared host-local L2, networked L3) as a
//! load-through cache with the protections the hierarchy exists for:
//!
//! - probe L1→L2→L3 with promotion into faster tiers on hit
//! - TTL jitter on every write, decorrelating mass expiry (avalanche)
//! - existence-filter rejection of never-loaded keys (penetration)
//! - per-key lease locks around loader calls (stampede)
//! - negative caching of "not found" loads (penetration dampening)
//! - delayed double delete to close the write/invalidate race window
//!
//! One `CacheEngine` is constructed per long-lived process and passed to
//! consumers by value (it is a cheap `Arc` handle); there are no ambient
//! singletons.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;

use rand::Rng;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::CacheConfig;
use crate::error::{CacheError, Result};
use crate::filter::ExistenceFilter;
use crate::lock::{KeyLock, LockBackend, MemoryLockBackend};
use crate::stats::{EngineStats, StatsSnapshot};
use crate::store::BoundedStore;
use crate::tier::TierBackend;
use crate::value::{decode, encode, is_negative, negative_marker, CacheValue};

// == Cache Engine ==
/// Hierarchical load-through cache coordinator.
///
/// Cloning is cheap and shares all state; hand clones to every consumer
/// that needs cache access.
#[derive(Clone)]
pub struct CacheEngine {
    inner: Arc<EngineInner>,
}

struct EngineInner {
    config: CacheConfig,
    l1: RwLock<BoundedStore>,
    l2: Option<Arc<dyn TierBackend>>,
    l3: Option<Arc<dyn TierBackend>>,
    filter: RwLock<ExistenceFilter>,
    lock: KeyLock,
    stats: EngineStats,
    /// Handles for in-flight deferred deletes; awaited by `flush_deferred`
    deferred: StdMutex<Vec<JoinHandle<()>>>,
}

// == Engine Builder ==
/// Assembles a [`CacheEngine`] with optional shared tiers.
///
/// Without an explicit lock backend the engine falls back to an in-memory
/// one, which is only correct for single-process deployments; multi-worker
/// deployments must supply a [`LockBackend`] over a shared store.
pub struct EngineBuilder {
    config: CacheConfig,
    l2: Option<Arc<dyn TierBackend>>,
    l3: Option<Arc<dyn TierBackend>>,
    lock_backend: Option<Arc<dyn LockBackend>>,
}

impl EngineBuilder {
    /// Attaches the shared host-local tier.
    pub fn l2(mut self, tier: Arc<dyn TierBackend>) -> Self {
        self.l2 = Some(tier);
        self
    }

    /// Attaches the networked tier.
    pub fn l3(mut self, tier: Arc<dyn TierBackend>) -> Self {
        self.l3 = Some(tier);
        self
    }

    /// Uses a shared lock backend instead of the in-memory fallback.
    pub fn lock_backend(mut self, backend: Arc<dyn LockBackend>) -> Self {
        self.lock_backend = Some(backend);
        self
    }

    /// Builds the engine.
    pub fn build(self) -> CacheEngine {
        let lock_backend = self
            .lock_backend
            .unwrap_or_else(|| Arc::new(MemoryLockBackend::new()));
        let lock = KeyLock::new(
            lock_backend,
            self.config.lock_lease,
            self.config.lock_poll_interval,
        );

        CacheEngine {
            inner: Arc::new(EngineInner {
                l1: RwLock::new(BoundedStore::new(self.config.l1_capacity)),
                l2: self.l2,
                l3: self.l3,
                filter: RwLock::new(ExistenceFilter::new(
                    self.config.filter_bits,
                    self.config.filter_hashes,
                )),
                lock,
                stats: EngineStats::default(),
                deferred: StdMutex::new(Vec::new()),
                config: self.config,
            }),
        }
    }
}

impl CacheEngine {
    // == Constructors ==
    /// Creates a single-process engine: L1 only, in-memory lock backend.
    pub fn new(config: CacheConfig) -> Self {
        Self::builder(config).build()
    }

    /// Starts building an engine with shared tiers.
    pub fn builder(config: CacheConfig) -> EngineBuilder {
        EngineBuilder {
            config,
            l2: None,
            l3: None,
            lock_backend: None,
        }
    }

    // == Get ==
    /// Load-through lookup.
    ///
    /// Probes L1→L2→L3, promoting hits into faster tiers. On a full miss
    /// the existence filter may reject the key outright; otherwise the
    /// per-key lock serializes the loader call and the result is backfilled
    /// into every tier with a jittered TTL. A loader that finds nothing
    /// produces a short-lived negative entry so repeated misses for the
    /// same absent key stay off the source of truth.
    ///
    /// If the lock cannot be acquired within the configured timeout, the
    /// tiers are re-probed once (the holder may have just finished) and the
    /// loader is then invoked directly, a deliberate, bounded duplicate
    /// load in exchange for liveness when a holder is slow or has crashed.
    ///
    /// Loader errors propagate unchanged and are never cached. `ttl` of
    /// `None` uses the configured default.
    pub async fn get<F, Fut>(
        &self,
        key: &str,
        loader: F,
        ttl: Option<Duration>,
    ) -> Result<Option<CacheValue>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = anyhow::Result<Option<CacheValue>>>,
    {
        let inner = &self.inner;
        let ttl = ttl.unwrap_or(inner.config.default_ttl);

        if let Some(value) = inner.probe_tiers(key, ttl).await {
            return Ok(resolve(value));
        }
        inner.stats.record_miss();

        if !inner.filter.read().await.might_contain(key) {
            debug!(key, "existence filter rejected key, skipping loader");
            return Ok(None);
        }

        match inner.lock.acquire(key, inner.config.lock_timeout).await {
            Ok(()) => {
                // The previous holder may have backfilled while we waited
                if let Some(value) = inner.probe_tiers(key, ttl).await {
                    inner.lock.release(key).await;
                    return Ok(resolve(value));
                }

                let loaded = loader().await;
                let result = inner.finish_load(key, loaded, ttl).await;
                inner.lock.release(key).await;
                result
            }
            Err(err) => {
                debug!(key, %err, "lock wait timed out, taking bounded fallback");
                inner.stats.record_lock_contention();

                if let Some(value) = inner.probe_tiers(key, ttl).await {
                    return Ok(resolve(value));
                }
                inner.finish_load(key, loader().await, ttl).await
            }
        }
    }

    // == Set ==
    /// Writes through to all tiers synchronously (L1, then L2, then L3)
    /// with `ttl + jitter`. Tier faults are absorbed; always returns true.
    pub async fn set(&self, key: &str, value: CacheValue, ttl: Option<Duration>) -> bool {
        let inner = &self.inner;
        let ttl = ttl.unwrap_or(inner.config.default_ttl);
        let store_ttl = inner.jittered(ttl);
        inner.backfill_all(key, &value, store_ttl).await;
        true
    }

    // == Delete ==
    /// Deletes from all tiers immediately; with `double_delete`, schedules
    /// a second delete after the configured delay.
    ///
    /// The deferred pass closes the race where a reader that started
    /// loading just before the first delete writes a stale value back into
    /// a tier after it. The timer runs on the engine's runtime; callers
    /// shutting the process down should await [`CacheEngine::flush_deferred`]
    /// so pending passes are not lost.
    pub async fn delete(&self, key: &str, double_delete: bool) -> bool {
        self.inner.delete_all(key).await;

        if double_delete {
            let inner = Arc::clone(&self.inner);
            let owned_key = key.to_string();
            let delay = self.inner.config.double_delete_delay;
            let handle = tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                inner.delete_all(&owned_key).await;
                debug!(key = %owned_key, "deferred second delete completed");
            });

            let mut deferred = self.inner.deferred.lock().expect("deferred list poisoned");
            deferred.retain(|h| !h.is_finished());
            deferred.push(handle);
        }
        true
    }

    // == MGet ==
    /// Batched lookup: probes the tiers per key, then resolves the entire
    /// miss set with a single `batch_loader` call, avoiding per-key load
    /// stampedes at scale.
    ///
    /// Keys cached as negative are treated as resolved-absent and neither
    /// reloaded nor returned. Keys the loader does not return are simply
    /// absent from the result.
    pub async fn mget<F, Fut>(
        &self,
        keys: &[&str],
        batch_loader: F,
    ) -> Result<HashMap<String, CacheValue>>
    where
        F: FnOnce(Vec<String>) -> Fut,
        Fut: Future<Output = anyhow::Result<HashMap<String, CacheValue>>>,
    {
        let inner = &self.inner;
        let ttl = inner.config.default_ttl;
        let mut results = HashMap::new();
        let mut missing = Vec::new();

        for key in keys {
            match inner.probe_tiers(key, ttl).await {
                Some(value) if is_negative(&value) => {}
                Some(value) => {
                    results.insert((*key).to_string(), value);
                }
                None => {
                    inner.stats.record_miss();
                    missing.push((*key).to_string());
                }
            }
        }

        if !missing.is_empty() {
            let loaded = batch_loader(missing).await.map_err(CacheError::Loader)?;
            for (key, value) in loaded {
                inner.filter.write().await.add(&key);
                let store_ttl = inner.jittered(ttl);
                inner.backfill_all(&key, &value, store_ttl).await;
                results.insert(key, value);
            }
        }

        Ok(results)
    }

    // == Warmup ==
    /// Populates all tiers and the existence filter before traffic arrives.
    ///
    /// Returns the number of items seeded.
    pub async fn warmup(&self, items: HashMap<String, CacheValue>) -> usize {
        let inner = &self.inner;
        let mut count = 0;

        for (key, value) in items {
            let store_ttl = inner.jittered(inner.config.default_ttl);
            inner.backfill_all(&key, &value, store_ttl).await;
            inner.filter.write().await.add(&key);
            count += 1;
        }

        info!(count, "cache warmup complete");
        count
    }

    // == Stats ==
    /// Returns a point-in-time view of engine counters.
    pub async fn stats(&self) -> StatsSnapshot {
        let l1 = self.inner.l1.read().await.stats();
        let filter_size = self.inner.filter.read().await.len();
        self.inner.stats.snapshot(filter_size, l1)
    }

    // == GC ==
    /// Proactively sweeps expired L1 entries. Returns the number removed.
    pub async fn gc(&self) -> usize {
        let removed = self.inner.l1.write().await.gc();
        if removed > 0 {
            info!(removed, "gc swept expired L1 entries");
        }
        removed
    }

    // == Flush ==
    /// Clears L1, resets the existence filter to cold, and clears the
    /// shared tiers best-effort.
    pub async fn flush(&self) {
        let inner = &self.inner;
        inner.l1.write().await.clear();
        inner.filter.write().await.clear();

        for tier in [&inner.l2, &inner.l3].into_iter().flatten() {
            if let Err(err) = tier.clear().await {
                inner.note_degradation(tier.name(), &err);
            }
        }
        info!("cache flushed");
    }

    // == Flush Deferred ==
    /// Awaits every pending deferred delete.
    ///
    /// Call during graceful shutdown; otherwise a process exit can silently
    /// drop scheduled second deletes.
    pub async fn flush_deferred(&self) {
        let handles: Vec<JoinHandle<()>> = {
            let mut deferred = self.inner.deferred.lock().expect("deferred list poisoned");
            deferred.drain(..).collect()
        };
        for handle in handles {
            let _ = handle.await;
        }
    }
}

impl EngineInner {
    // == Tier Probe ==
    /// L1→L2→L3 in order, promoting the value into every faster tier that
    /// missed. Returns the raw cached value; a negative marker means "known
    /// absent".
    async fn probe_tiers(&self, key: &str, ttl: Duration) -> Option<CacheValue> {
        use std::sync::atomic::Ordering;

        if let Some(value) = self.l1.write().await.get(key) {
            self.stats.l1_hits.fetch_add(1, Ordering::Relaxed);
            return Some(value);
        }

        if let Some(tier) = &self.l2 {
            if let Some(value) = self.tier_get(tier, key).await {
                self.stats.l2_hits.fetch_add(1, Ordering::Relaxed);
                self.l1.write().await.set(key, value.clone(), self.l1_ttl(ttl));
                return Some(value);
            }
        }

        if let Some(tier) = &self.l3 {
            if let Some(value) = self.tier_get(tier, key).await {
                self.stats.l3_hits.fetch_add(1, Ordering::Relaxed);
                if let Some(l2) = &self.l2 {
                    self.tier_set(l2, key, &value, self.jittered(ttl)).await;
                }
                self.l1.write().await.set(key, value.clone(), self.l1_ttl(ttl));
                return Some(value);
            }
        }

        None
    }

    // == Load Completion ==
    /// Handles a loader outcome: backfill and filter update on success,
    /// negative caching on "not found", verbatim propagation on error.
    async fn finish_load(
        &self,
        key: &str,
        loaded: anyhow::Result<Option<CacheValue>>,
        ttl: Duration,
    ) -> Result<Option<CacheValue>> {
        match loaded {
            Ok(Some(value)) => {
                self.filter.write().await.add(key);
                let store_ttl = self.jittered(ttl);
                self.backfill_all(key, &value, store_ttl).await;
                Ok(Some(value))
            }
            Ok(None) => {
                // Dampen repeated misses for the same absent key
                self.backfill_all(key, &negative_marker(), self.config.null_ttl)
                    .await;
                Ok(None)
            }
            Err(err) => Err(CacheError::Loader(err)),
        }
    }

    // == Backfill ==
    /// Writes a value into every configured tier. `ttl` is final (jitter
    /// already applied where wanted); L1 additionally caps it so the
    /// private tier converges quickly after invalidations elsewhere.
    async fn backfill_all(&self, key: &str, value: &CacheValue, ttl: Duration) {
        self.l1.write().await.set(key, value.clone(), self.l1_ttl(ttl));

        match encode(value) {
            Ok(payload) => {
                for tier in [&self.l2, &self.l3].into_iter().flatten() {
                    if let Err(err) = tier.set(key, &payload, ttl).await {
                        self.note_degradation(tier.name(), &err);
                    }
                }
            }
            Err(err) => {
                // No-op on write per the serialization failure policy
                warn!(key, %err, "value not written to shared tiers");
            }
        }
    }

    // == Delete All Tiers ==
    async fn delete_all(&self, key: &str) {
        self.l1.write().await.delete(key);
        for tier in [&self.l2, &self.l3].into_iter().flatten() {
            if let Err(err) = tier.delete(key).await {
                self.note_degradation(tier.name(), &err);
            }
        }
    }

    // == Tier Helpers ==
    async fn tier_get(&self, tier: &Arc<dyn TierBackend>, key: &str) -> Option<CacheValue> {
        match tier.get(key).await {
            Ok(Some(payload)) => match decode(&payload) {
                Ok(value) => Some(value),
                Err(err) => {
                    // Undecodable payload is a miss, not a failure
                    warn!(tier = tier.name(), key, %err, "dropping undecodable payload");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                self.note_degradation(tier.name(), &err);
                None
            }
        }
    }

    async fn tier_set(&self, tier: &Arc<dyn TierBackend>, key: &str, value: &CacheValue, ttl: Duration) {
        match encode(value) {
            Ok(payload) => {
                if let Err(err) = tier.set(key, &payload, ttl).await {
                    self.note_degradation(tier.name(), &err);
                }
            }
            Err(err) => {
                warn!(tier = tier.name(), key, %err, "value not written");
            }
        }
    }

    fn note_degradation(&self, tier: &'static str, err: &CacheError) {
        self.stats.record_degradation();
        warn!(tier, %err, "tier degraded, continuing with remaining tiers");
    }

    // == TTL Helpers ==
    /// Uniform random jitter in `[0, jitter_max]` on top of `ttl`.
    fn jittered(&self, ttl: Duration) -> Duration {
        let max_ms = self.config.jitter_max.as_millis() as u64;
        let jitter = if max_ms == 0 {
            0
        } else {
            rand::thread_rng().gen_range(0..=max_ms)
        };
        ttl + Duration::from_millis(jitter)
    }

    fn l1_ttl(&self, ttl: Duration) -> Duration {
        ttl.min(self.config.l1_ttl_cap)
    }
}

fn resolve(value: CacheValue) -> Option<CacheValue> {
    if is_negative(&value) {
        None
    } else {
        Some(value)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::tier::MemoryTier;
    use async_trait::async_trait;
    use serde_json::json;

    /// Loader that must not be reached; panics with a clear message.
    async fn never_load() -> anyhow::Result<Option<CacheValue>> {
        panic!("loader must not run")
    }

    /// Batch loader that must not be reached.
    async fn never_batch_load(_missing: Vec<String>) -> anyhow::Result<HashMap<String, CacheValue>> {
        panic!("batch loader must not run")
    }

    fn test_config() -> CacheConfig {
        CacheConfig {
            jitter_max: Duration::ZERO,
            l1_ttl_cap: Duration::from_secs(300),
            ..CacheConfig::default()
        }
    }

    /// Tier that refuses every operation, simulating an outage.
    struct DownTier;

    #[async_trait]
    impl TierBackend for DownTier {
        fn name(&self) -> &'static str {
            "l3"
        }
        async fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(CacheError::BackendUnavailable {
                tier: "l3",
                reason: "connection refused".to_string(),
            })
        }
        async fn set(&self, _key: &str, _payload: &str, _ttl: Duration) -> Result<()> {
            Err(CacheError::BackendUnavailable {
                tier: "l3",
                reason: "connection refused".to_string(),
            })
        }
        async fn delete(&self, _key: &str) -> Result<()> {
            Err(CacheError::BackendUnavailable {
                tier: "l3",
                reason: "connection refused".to_string(),
            })
        }
        async fn exists(&self, _key: &str) -> Result<bool> {
            Err(CacheError::BackendUnavailable {
                tier: "l3",
                reason: "connection refused".to_string(),
            })
        }
        async fn clear(&self) -> Result<()> {
            Err(CacheError::BackendUnavailable {
                tier: "l3",
                reason: "connection refused".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_set_then_get_hits_l1() {
        let engine = CacheEngine::new(test_config());

        engine.set("key1", json!("value1"), None).await;
        let value = engine
            .get("key1", || never_load(), None)
            .await
            .unwrap();

        assert_eq!(value, Some(json!("value1")));
        assert_eq!(engine.stats().await.l1_hits, 1);
    }

    #[tokio::test]
    async fn test_get_invokes_loader_on_miss() {
        let engine = CacheEngine::new(test_config());

        let value = engine
            .get("key1", || async { Ok(Some(json!("loaded"))) }, None)
            .await
            .unwrap();

        assert_eq!(value, Some(json!("loaded")));
        // Backfilled: second get served from cache
        let value = engine
            .get("key1", || never_load(), None)
            .await
            .unwrap();
        assert_eq!(value, Some(json!("loaded")));
    }

    #[tokio::test]
    async fn test_loader_error_propagates_uncached() {
        let engine = CacheEngine::new(test_config());

        let result = engine
            .get(
                "key1",
                || async { Err(anyhow::anyhow!("source of truth down")) },
                None,
            )
            .await;
        assert!(matches!(result, Err(CacheError::Loader(_))));

        // The failure was not cached: the next loader runs and succeeds
        let value = engine
            .get("key1", || async { Ok(Some(json!("recovered"))) }, None)
            .await
            .unwrap();
        assert_eq!(value, Some(json!("recovered")));
    }

    #[tokio::test]
    async fn test_hit_promotes_from_l3_to_l1_and_l2() {
        let l2 = Arc::new(MemoryTier::new("l2"));
        let l3 = Arc::new(MemoryTier::new("l3"));
        let engine = CacheEngine::builder(test_config())
            .l2(l2.clone())
            .l3(l3.clone())
            .build();

        l3.set("key1", "\"remote\"", Duration::from_secs(60))
            .await
            .unwrap();

        let value = engine
            .get("key1", || never_load(), None)
            .await
            .unwrap();
        assert_eq!(value, Some(json!("remote")));

        // Promoted into L2
        assert_eq!(l2.get("key1").await.unwrap(), Some("\"remote\"".to_string()));
        // And into L1: another get is an L1 hit
        engine
            .get("key1", || never_load(), None)
            .await
            .unwrap();
        assert_eq!(engine.stats().await.l1_hits, 1);
        assert_eq!(engine.stats().await.l3_hits, 1);
    }

    #[tokio::test]
    async fn test_filter_rejects_unknown_key_after_first_load() {
        let engine = CacheEngine::new(test_config());

        // Warm the filter with one successful load
        engine
            .get("real", || async { Ok(Some(json!(1))) }, None)
            .await
            .unwrap();

        // Filter now warm; an unknown key is rejected without a loader call
        let value = engine
            .get("ghost", || never_load(), None)
            .await
            .unwrap();
        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn test_down_tier_degrades_silently() {
        let engine = CacheEngine::builder(test_config())
            .l3(Arc::new(DownTier))
            .build();

        assert!(engine.set("key1", json!("v"), None).await);
        let value = engine
            .get("key1", || never_load(), None)
            .await
            .unwrap();
        assert_eq!(value, Some(json!("v")));

        let stats = engine.stats().await;
        assert!(stats.tier_degradations >= 1);
    }

    #[tokio::test]
    async fn test_delete_removes_from_all_tiers() {
        let l2 = Arc::new(MemoryTier::new("l2"));
        let engine = CacheEngine::builder(test_config()).l2(l2.clone()).build();

        engine.set("key1", json!("v"), None).await;
        assert!(engine.delete("key1", false).await);

        assert_eq!(l2.get("key1").await.unwrap(), None);
        let value = engine
            .get("key1", || async { Ok(None) }, None)
            .await
            .unwrap();
        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn test_warmup_seeds_tiers_and_filter() {
        let l2 = Arc::new(MemoryTier::new("l2"));
        let engine = CacheEngine::builder(test_config()).l2(l2.clone()).build();

        let mut items = HashMap::new();
        items.insert("a".to_string(), json!(1));
        items.insert("b".to_string(), json!(2));
        assert_eq!(engine.warmup(items).await, 2);

        assert_eq!(engine.stats().await.filter_size, 2);
        assert!(l2.get("a").await.unwrap().is_some());
        let value = engine
            .get("a", || never_load(), None)
            .await
            .unwrap();
        assert_eq!(value, Some(json!(1)));
    }

    #[tokio::test]
    async fn test_mget_batches_miss_set() {
        let engine = CacheEngine::new(test_config());
        engine.set("cached", json!("c"), None).await;

        let results = engine
            .mget(&["cached", "miss1", "miss2"], |missing| async move {
                let mut loaded = HashMap::new();
                assert_eq!(missing.len(), 2);
                for key in missing {
                    loaded.insert(key.clone(), json!(format!("loaded:{}", key)));
                }
                Ok(loaded)
            })
            .await
            .unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results["cached"], json!("c"));
        assert_eq!(results["miss1"], json!("loaded:miss1"));

        // Backfilled: a repeat mget loads nothing
        let results = engine
            .mget(&["miss1", "miss2"], never_batch_load)
            .await
            .unwrap();
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn test_flush_resets_everything() {
        let l2 = Arc::new(MemoryTier::new("l2"));
        let engine = CacheEngine::builder(test_config()).l2(l2.clone()).build();

        engine
            .get("key1", || async { Ok(Some(json!("v"))) }, None)
            .await
            .unwrap();
        engine.flush().await;

        assert!(l2.is_empty());
        assert_eq!(engine.stats().await.filter_size, 0);
        // Cold filter fails open again, so the loader runs
        let value = engine
            .get("key1", || async { Ok(Some(json!("v2"))) }, None)
            .await
            .unwrap();
        assert_eq!(value, Some(json!("v2")));
    }

    #[tokio::test]
    async fn test_gc_sweeps_expired_l1_entries() {
        let engine = CacheEngine::new(test_config());

        engine
            .set("short", json!("v"), Some(Duration::from_millis(20)))
            .await;
        engine.set("long", json!("v"), None).await;
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(engine.gc().await, 1);
    }
}
