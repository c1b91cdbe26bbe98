//! Cache Module
//!
//! Provides a bounded in-memory cache with TTL expiration and LRU eviction.

mod entry;
mod keys;
mod lru;
mod shared;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use keys::CacheKey;
pub use lru::LruTracker;
pub use shared::SharedCache;
pub use stats::{CacheStats, CacheStatsSnapshot};
pub use store::LruCache;
