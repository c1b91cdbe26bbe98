//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the engine's invariants over arbitrary operation
//! sequences, against a simple reference model of the recency order.

use proptest::prelude::*;
use std::collections::VecDeque;
use std::thread::sleep;
use std::time::Duration;

use crate::cache::LruCache;
use crate::config::{CacheConfig, ConfigUpdate};

// == Test Configuration ==
const LONG_TTL: Duration = Duration::from_secs(300);

fn new_cache(capacity: usize) -> LruCache<u32> {
    LruCache::new(CacheConfig::new(capacity, LONG_TTL)).unwrap()
}

// == Strategies ==
/// Small key space so operations collide often.
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-h]{1,2}".prop_map(|s| s)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: u32 },
    Get { key: String },
    Has { key: String },
    Delete { key: String },
    Resize { capacity: usize },
    Cleanup,
    Clear,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        4 => (key_strategy(), any::<u32>()).prop_map(|(key, value)| CacheOp::Set { key, value }),
        4 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        2 => key_strategy().prop_map(|key| CacheOp::Has { key }),
        2 => key_strategy().prop_map(|key| CacheOp::Delete { key }),
        1 => (1usize..12).prop_map(|capacity| CacheOp::Resize { capacity }),
        1 => Just(CacheOp::Cleanup),
        1 => Just(CacheOp::Clear),
    ]
}

/// Reference model: front = most recently used.
#[derive(Default)]
struct Model {
    order: VecDeque<(String, u32)>,
    capacity: usize,
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl Model {
    fn position(&self, key: &str) -> Option<usize> {
        self.order.iter().position(|(k, _)| k == key)
    }

    fn set(&mut self, key: String, value: u32) {
        if let Some(pos) = self.position(&key) {
            self.order.remove(pos);
        } else if self.order.len() >= self.capacity {
            self.order.pop_back();
            self.evictions += 1;
        }
        self.order.push_front((key, value));
    }

    fn get(&mut self, key: &str) -> Option<u32> {
        match self.position(key) {
            Some(pos) => {
                let item = self.order.remove(pos)?;
                let value = item.1;
                self.order.push_front(item);
                self.hits += 1;
                Some(value)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    fn delete(&mut self, key: &str) -> bool {
        match self.position(key) {
            Some(pos) => self.order.remove(pos).is_some(),
            None => false,
        }
    }

    fn resize(&mut self, capacity: usize) {
        self.capacity = capacity;
        while self.order.len() > capacity {
            self.order.pop_back();
            self.evictions += 1;
        }
    }

    fn keys(&self) -> Vec<String> {
        self.order.iter().map(|(k, _)| k.clone()).collect()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Size never exceeds capacity, and the cache agrees with the reference
    // model on every observation when nothing expires.
    #[test]
    fn prop_matches_reference_model(
        capacity in 1usize..8,
        ops in prop::collection::vec(cache_op_strategy(), 1..120)
    ) {
        let mut cache = new_cache(capacity);
        let mut model = Model { capacity, ..Model::default() };

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    cache.set(key.clone(), value);
                    model.set(key, value);
                }
                CacheOp::Get { key } => {
                    prop_assert_eq!(cache.get(&key).copied(), model.get(&key));
                }
                CacheOp::Has { key } => {
                    prop_assert_eq!(cache.has(&key), model.position(&key).is_some());
                }
                CacheOp::Delete { key } => {
                    prop_assert_eq!(cache.delete(&key), model.delete(&key));
                }
                CacheOp::Resize { capacity } => {
                    cache.update_config(ConfigUpdate::capacity(capacity)).unwrap();
                    model.resize(capacity);
                }
                CacheOp::Cleanup => {
                    prop_assert_eq!(cache.cleanup(), 0);
                }
                CacheOp::Clear => {
                    cache.clear();
                    model.order.clear();
                }
            }

            prop_assert!(cache.len() <= cache.config().capacity);
            prop_assert_eq!(cache.keys(), model.keys());
        }

        let stats = cache.stats();
        prop_assert_eq!(stats.hits, model.hits);
        prop_assert_eq!(stats.misses, model.misses);
        prop_assert_eq!(stats.evictions, model.evictions);
        prop_assert_eq!(stats.total_requests, model.hits + model.misses);
    }

    // Hit rate is exactly hits / total_requests.
    #[test]
    fn prop_hit_rate_exact(hits in 0u32..40, misses in 0u32..40) {
        let mut cache = new_cache(4);
        cache.set("present", 1);

        for _ in 0..hits {
            cache.get("present");
        }
        for _ in 0..misses {
            cache.get("absent");
        }

        let stats = cache.stats();
        let total = u64::from(hits + misses);
        prop_assert_eq!(stats.total_requests, total);
        if total == 0 {
            prop_assert_eq!(stats.hit_rate, 0.0);
        } else {
            prop_assert_eq!(stats.hit_rate, f64::from(hits) / total as f64);
        }
    }

    // A successful get is immediately observable through has.
    #[test]
    fn prop_get_then_has(
        entries in prop::collection::vec((key_strategy(), any::<u32>()), 1..30),
        probe in key_strategy()
    ) {
        let mut cache = new_cache(6);
        for (key, value) in entries {
            cache.set(key, value);
        }

        if cache.get(&probe).is_some() {
            prop_assert!(cache.has(&probe));
        }
    }

    // Clear empties the cache and leaves counters alone.
    #[test]
    fn prop_clear_keeps_stats(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut cache = new_cache(5);
        for op in ops {
            match op {
                CacheOp::Set { key, value } => cache.set(key, value),
                CacheOp::Get { key } => {
                    cache.get(&key);
                }
                _ => {}
            }
        }

        let before = cache.stats();
        cache.clear();
        let after = cache.stats();

        prop_assert_eq!(cache.len(), 0);
        prop_assert_eq!(after.hits, before.hits);
        prop_assert_eq!(after.misses, before.misses);
        prop_assert_eq!(after.evictions, before.evictions);
        prop_assert_eq!(after.total_requests, before.total_requests);
    }
}

// Separate proptest block with fewer cases for time-sensitive TTL tests
proptest! {
    #![proptest_config(ProptestConfig::with_cases(5))]

    // Cleanup removes exactly the entries written before the ttl elapsed.
    #[test]
    fn prop_cleanup_removes_only_expired(
        stale in prop::collection::hash_set("s[a-z]{1,4}", 0..8),
        fresh in prop::collection::hash_set("f[a-z]{1,4}", 0..8)
    ) {
        let ttl = Duration::from_millis(60);
        let mut cache = LruCache::new(CacheConfig::new(32, ttl)).unwrap();

        for key in &stale {
            cache.set(key.clone(), 0u32);
        }
        sleep(Duration::from_millis(90));
        for key in &fresh {
            cache.set(key.clone(), 1u32);
        }

        prop_assert_eq!(cache.cleanup(), stale.len());
        prop_assert_eq!(cache.len(), fresh.len());
        for key in &fresh {
            prop_assert_eq!(cache.get(key), Some(&1));
        }
        prop_assert_eq!(cache.stats().evictions, stale.len() as u64);
    }
}
