//! UNO Cache - Bounded LRU cache with TTL expiry
//!
//! Memoizes derived UNO game-state documents keyed by namespaced strings, with
//! hit/miss/eviction statistics and a periodic expiry sweep.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod registry;
pub mod tasks;

pub use api::AppState;
pub use cache::{CacheKey, LruCache, SharedCache};
pub use config::{CacheConfig, Config, ConfigUpdate};
pub use error::CacheError;
pub use registry::{CacheName, CacheRegistry};
pub use tasks::spawn_cleanup_task;
