//! GC Sweep Task
//!
//! Background task that periodically sweeps expired L1 entries.
//!
//! The engine does not require this: L1 expiry is lazy and correct without
//! it. Deployments that prefer steady memory pressure over sweep-on-access
//! spawn this task alongside the engine.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::engine::CacheEngine;

/// Spawns a background task that periodically calls [`CacheEngine::gc`].
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps.
///
/// # Arguments
/// * `engine` - Engine handle (cheap clone)
/// * `interval` - Time between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_gc_task(engine: CacheEngine, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(interval_secs = interval.as_secs(), "starting gc sweep task");

        loop {
            tokio::time::sleep(interval).await;

            let removed = engine.gc().await;
            if removed > 0 {
                info!(removed, "gc sweep removed expired entries");
            } else {
                debug!("gc sweep found no expired entries");
            }
        }
    })
}
