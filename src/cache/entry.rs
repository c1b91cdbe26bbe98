//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
///
/// The timestamp is refreshed only when the value is overwritten. Reads bump
/// `access_count` but leave the expiry clock alone.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Creation or last overwrite instant
    pub created_at: Instant,
    /// Number of successful reads, diagnostics only
    pub access_count: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current instant.
    pub fn new(value: V) -> Self {
        Self::stamped(value, Instant::now())
    }

    /// Creates an entry with an explicit creation instant.
    pub fn stamped(value: V, created_at: Instant) -> Self {
        Self {
            value,
            created_at,
            access_count: 0,
        }
    }

    // == Refresh ==
    /// Replaces the value and restarts the expiry clock.
    pub fn refresh(&mut self, value: V, now: Instant) {
        self.value = value;
        self.created_at = now;
    }

    // == Age ==
    /// Time elapsed between creation and `now`. Saturates at zero.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks if the entry has outlived `ttl` as of `now`.
    ///
    /// Boundary condition: an entry aged exactly `ttl` is still live; it
    /// expires once its age is strictly greater.
    pub fn is_expired_at(&self, ttl: Duration, now: Instant) -> bool {
        self.age_at(now) > ttl
    }

    /// Same as [`is_expired_at`](Self::is_expired_at) against the current instant.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.is_expired_at(ttl, Instant::now())
    }

    // == Time To Live ==
    /// Returns the remaining lifetime under `ttl`, zero once expired.
    pub fn ttl_remaining(&self, ttl: Duration, now: Instant) -> Duration {
        ttl.saturating_sub(self.age_at(now))
    }
}
