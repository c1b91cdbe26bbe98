//! Shared Cache Handle
//!
//! Thread-safe wrapper around [`LruCache`] for use across request handlers and
//! background tasks.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::cache::{CacheStatsSnapshot, LruCache};
use crate::config::{CacheConfig, ConfigUpdate};
use crate::error::Result;

// == Shared Cache ==
/// Cloneable handle to one cache instance.
///
/// Every call takes the lock once and holds it for the whole operation, so
/// each engine operation is a single critical section. Lookups that move an
/// entry in the recency order (`get`, `has`) need the write lock.
#[derive(Debug)]
pub struct SharedCache<V> {
    inner: Arc<RwLock<LruCache<V>>>,
}

impl<V> Clone for SharedCache<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V: Clone> SharedCache<V> {
    // == Constructor ==
    pub fn new(config: CacheConfig) -> Result<Self> {
        Ok(Self::from_cache(LruCache::new(config)?))
    }

    pub fn from_cache(cache: LruCache<V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(cache)),
        }
    }

    // == Engine Operations ==
    /// Returns a clone of the cached value, if live.
    pub async fn get(&self, key: &str) -> Option<V> {
        self.inner.write().await.get(key).cloned()
    }

    pub async fn set(&self, key: impl Into<String>, value: V) {
        self.inner.write().await.set(key, value);
    }

    pub async fn delete(&self, key: &str) -> bool {
        self.inner.write().await.delete(key)
    }

    pub async fn has(&self, key: &str) -> bool {
        self.inner.write().await.has(key)
    }

    pub async fn peek(&self, key: &str) -> Option<V> {
        self.inner.read().await.peek(key).cloned()
    }

    pub async fn clear(&self) {
        self.inner.write().await.clear();
    }

    pub async fn cleanup(&self) -> usize {
        self.inner.write().await.cleanup()
    }

    pub async fn update_config(&self, update: ConfigUpdate) -> Result<()> {
        self.inner.write().await.update_config(update)
    }

    pub async fn reset_stats(&self) {
        self.inner.write().await.reset_stats();
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    pub async fn keys(&self) -> Vec<String> {
        self.inner.read().await.keys()
    }

    pub async fn stats(&self) -> CacheStatsSnapshot {
        self.inner.read().await.stats()
    }

    pub async fn config(&self) -> CacheConfig {
        self.inner.read().await.config()
    }

    // == Read-Through ==
    /// Returns the cached value for `key`, or runs `fetch` and caches its result.
    ///
    /// The lock is released while `fetch` runs, so concurrent misses on the same
    /// key may each fetch; the last writer wins. A failed fetch caches nothing.
    pub async fn get_or_try_insert_with<F, Fut, E>(
        &self,
        key: &str,
        fetch: F,
    ) -> std::result::Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<V, E>>,
    {
        if let Some(value) = self.get(key).await {
            return Ok(value);
        }

        let value = fetch().await?;
        self.set(key, value.clone()).await;
        Ok(value)
    }
}
