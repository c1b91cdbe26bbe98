//! Cache Statistics Module
//!
//! Tracks cache performance metrics including hits, misses, and evictions.

use serde::Serialize;

// == Cache Stats ==
/// Live counters owned by a cache instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals (key not found or expired)
    pub misses: u64,
    /// Entries removed by LRU pressure or expiry
    pub evictions: u64,
    /// Number of `get` calls
    pub total_requests: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / total_requests, or 0.0 if no requests have been made.
    pub fn hit_rate(&self) -> f64 {
        if self.total_requests == 0 {
            0.0
        } else {
            self.hits as f64 / self.total_requests as f64
        }
    }

    // == Record Hit ==
    /// Counts a request answered from the cache.
    pub fn record_hit(&mut self) {
        self.total_requests += 1;
        self.hits += 1;
    }

    // == Record Miss ==
    /// Counts a request that fell through to the caller's slow path.
    pub fn record_miss(&mut self) {
        self.total_requests += 1;
        self.misses += 1;
    }

    // == Record Eviction ==
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_evictions(&mut self, count: usize) {
        self.evictions += count as u64;
    }

    // == Reset ==
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// == Stats Snapshot ==
/// Point-in-time copy of a cache's counters, safe to hand out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheStatsSnapshot {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub total_requests: u64,
    pub hit_rate: f64,
    /// Current number of entries, expired-but-unpurged included
    pub total_entries: usize,
    pub capacity: usize,
    pub ttl_secs: u64,
}

impl CacheStatsSnapshot {
    /// Freezes `stats` together with the instance's current shape.
    pub fn new(stats: &CacheStats, total_entries: usize, capacity: usize, ttl_secs: u64) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            total_requests: stats.total_requests,
            hit_rate: stats.hit_rate(),
            total_entries,
            capacity,
            ttl_secs,
        }
    }
}
