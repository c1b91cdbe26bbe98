//! Cache Store Module
//!
//! Main cache engine combining HashMap indexing with LRU ordering and TTL expiration.

use std::collections::HashMap;
use std::time::Instant;

use crate::cache::{CacheEntry, CacheStats, CacheStatsSnapshot, LruTracker};
use crate::config::{CacheConfig, ConfigUpdate};
use crate::error::Result;

/// Recency list payload: the key travels with the entry so eviction from the
/// back can drop the index entry too.
#[derive(Debug)]
struct Node<V> {
    key: String,
    entry: CacheEntry<V>,
}

// == LRU Cache ==
/// Bounded key-value store with LRU eviction and TTL expiry.
///
/// `get`, `set`, `delete` and `has` are O(1) on average: the index maps each
/// key to its slot in the recency list, and the list unlinks any slot in
/// constant time. `cleanup` and `keys` walk every entry.
///
/// Reads promote an entry but never extend its lifetime; only `set` restarts
/// the expiry clock.
#[derive(Debug)]
pub struct LruCache<V> {
    /// Key to recency-list slot
    index: HashMap<String, usize>,
    /// Entries ordered from most to least recently used
    order: LruTracker<Node<V>>,
    /// Performance statistics
    stats: CacheStats,
    config: CacheConfig,
}

impl<V> LruCache<V> {
    // == Constructor ==
    /// Creates an empty cache.
    ///
    /// Fails with `CacheError::InvalidConfig` when capacity or ttl is zero.
    pub fn new(config: CacheConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            index: HashMap::with_capacity(config.capacity),
            order: LruTracker::with_capacity(config.capacity),
            stats: CacheStats::new(),
            config,
        })
    }

    // == Get ==
    /// Retrieves a value by key and marks it most recently used.
    ///
    /// Expired entries are removed, counted as an eviction and reported as a miss.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        let Some(&idx) = self.index.get(key) else {
            self.record(CacheStats::record_miss);
            return None;
        };

        if self.slot_expired(idx, Instant::now()) {
            self.purge(key, idx);
            self.record(CacheStats::record_miss);
            return None;
        }

        self.order.touch(idx);
        self.record(CacheStats::record_hit);

        let node = self.order.get_mut(idx)?;
        node.entry.access_count += 1;
        Some(&node.entry.value)
    }

    // == Set ==
    /// Stores a value under `key` as the most recently used entry.
    ///
    /// Overwriting an existing key replaces the value and restarts its expiry
    /// clock without touching capacity. A new key on a full cache evicts the
    /// least recently used entry first.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        let now = Instant::now();

        if let Some(&idx) = self.index.get(&key) {
            if let Some(node) = self.order.get_mut(idx) {
                node.entry.refresh(value, now);
            }
            self.order.touch(idx);
            return;
        }

        if self.order.len() >= self.config.capacity {
            self.evict_lru();
        }

        let idx = self.order.push_front(Node {
            key: key.clone(),
            entry: CacheEntry::stamped(value, now),
        });
        self.index.insert(key, idx);
    }

    // == Delete ==
    /// Removes an entry by key. Returns whether anything was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        match self.index.remove(key) {
            Some(idx) => {
                self.order.remove(idx);
                true
            }
            None => false,
        }
    }

    // == Has ==
    /// Existence probe with the same expiry handling as `get`.
    ///
    /// Does not promote the entry, bump its access count, or count as a request.
    pub fn has(&mut self, key: &str) -> bool {
        let Some(&idx) = self.index.get(key) else {
            return false;
        };

        if self.slot_expired(idx, Instant::now()) {
            self.purge(key, idx);
            return false;
        }
        true
    }

    // == Peek ==
    /// Reads a live value without promoting it or touching any counter.
    pub fn peek(&self, key: &str) -> Option<&V> {
        let idx = *self.index.get(key)?;
        let node = self.order.get(idx)?;
        if node.entry.is_expired(self.config.ttl) {
            return None;
        }
        Some(&node.entry.value)
    }

    /// Raw entry metadata, expired or not.
    pub fn entry(&self, key: &str) -> Option<&CacheEntry<V>> {
        let idx = *self.index.get(key)?;
        self.order.get(idx).map(|node| &node.entry)
    }

    // == Clear ==
    /// Removes every entry. Statistics are left as they are.
    pub fn clear(&mut self) {
        self.index.clear();
        self.order.clear();
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Each removal counts as an eviction. Returns the number of entries removed.
    pub fn cleanup(&mut self) -> usize {
        let now = Instant::now();
        let ttl = self.config.ttl;
        let expired_keys: Vec<String> = self
            .order
            .iter()
            .filter(|node| node.entry.is_expired_at(ttl, now))
            .map(|node| node.key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.delete(&key);
        }

        self.record(|stats| stats.record_evictions(count));
        count
    }

    // == Update Config ==
    /// Applies a new capacity and/or ttl.
    ///
    /// The update is validated as a whole before anything changes. Shrinking
    /// below the current size evicts least recently used entries. A new ttl only
    /// affects later expiry checks.
    pub fn update_config(&mut self, update: ConfigUpdate) -> Result<()> {
        update.validate()?;

        if let Some(capacity) = update.capacity {
            self.config.capacity = capacity;
        }
        if let Some(ttl) = update.ttl {
            self.config.ttl = ttl;
        }

        while self.order.len() > self.config.capacity {
            if !self.evict_lru() {
                break;
            }
        }
        Ok(())
    }

    // == Keys ==
    /// Snapshot of current keys, most recently used first.
    pub fn keys(&self) -> Vec<String> {
        self.order.iter().map(|node| node.key.clone()).collect()
    }

    // == Stats ==
    /// Returns a copy of the current statistics.
    pub fn stats(&self) -> CacheStatsSnapshot {
        CacheStatsSnapshot::new(
            &self.stats,
            self.len(),
            self.config.capacity,
            self.config.ttl.as_secs(),
        )
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    pub fn config(&self) -> CacheConfig {
        self.config
    }

    // == Length ==
    /// Returns the current number of entries, including expired ones not yet purged.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // == Internals ==
    fn slot_expired(&self, idx: usize, now: Instant) -> bool {
        self.order
            .get(idx)
            .is_some_and(|node| node.entry.is_expired_at(self.config.ttl, now))
    }

    /// Drops an expired entry found during a lookup.
    fn purge(&mut self, key: &str, idx: usize) {
        self.index.remove(key);
        self.order.remove(idx);
        self.record(CacheStats::record_eviction);
    }

    /// Drops the least recently used entry. Returns false on an empty cache.
    fn evict_lru(&mut self) -> bool {
        match self.order.evict_oldest() {
            Some(node) => {
                self.index.remove(&node.key);
                self.record(CacheStats::record_eviction);
                true
            }
            None => false,
        }
    }

    fn record<F: FnOnce(&mut CacheStats)>(&mut self, update: F) {
        if self.config.enable_stats {
            update(&mut self.stats);
        }
    }
}
