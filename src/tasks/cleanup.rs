//! TTL Cleanup Task
//!
//! Background task that periodically sweeps expired entries out of every
//! registered cache, so cold entries do not hold capacity between accesses.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::info;

use crate::registry::CacheRegistry;

/// Spawns a background task that periodically cleans up expired cache entries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. Each sweep locks one cache at a time.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let registry = CacheRegistry::new(&CacheSettings::default())?;
/// let cleanup_handle = spawn_cleanup_task(registry.clone(), Duration::from_secs(300));
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(registry: CacheRegistry, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {:?}",
            interval
        );

        loop {
            tokio::time::sleep(interval).await;
            // Logging of removed counts happens inside the sweep
            registry.cleanup_all().await;
        }
    })
}
