//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables,
//! plus the per-instance cache settings the engine validates.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{CacheError, Result};

// == Cache Config ==
/// Shape of a single cache instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of live entries
    pub capacity: usize,
    /// Age after which an entry is treated as absent
    pub ttl: Duration,
    /// Whether hit/miss/eviction counters are maintained
    pub enable_stats: bool,
}

impl CacheConfig {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            capacity,
            ttl,
            enable_stats: true,
        }
    }

    pub fn with_stats(mut self, enable_stats: bool) -> Self {
        self.enable_stats = enable_stats;
        self
    }

    /// Rejects zero capacity or zero ttl. Values are never clamped.
    pub fn validate(&self) -> Result<()> {
        validate_capacity(self.capacity)?;
        validate_ttl(self.ttl)
    }
}

/// Partial reconfiguration; `None` keeps the current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigUpdate {
    pub capacity: Option<usize>,
    pub ttl: Option<Duration>,
}

impl ConfigUpdate {
    pub fn capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            ttl: None,
        }
    }

    pub fn ttl(ttl: Duration) -> Self {
        Self {
            capacity: None,
            ttl: Some(ttl),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(capacity) = self.capacity {
            validate_capacity(capacity)?;
        }
        if let Some(ttl) = self.ttl {
            validate_ttl(ttl)?;
        }
        Ok(())
    }
}

fn validate_capacity(capacity: usize) -> Result<()> {
    if capacity == 0 {
        return Err(CacheError::InvalidConfig(
            "capacity must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

fn validate_ttl(ttl: Duration) -> Result<()> {
    if ttl.is_zero() {
        return Err(CacheError::InvalidConfig(
            "ttl must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

// == Cache Settings ==
/// Settings for the three logical caches the registry owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheSettings {
    /// Derived game-state documents
    pub game: CacheConfig,
    /// Player profiles
    pub player: CacheConfig,
    /// Game stats and leaderboard
    pub stats: CacheConfig,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            game: CacheConfig::new(50, Duration::from_secs(10 * 60)),
            player: CacheConfig::new(200, Duration::from_secs(5 * 60)),
            stats: CacheConfig::new(100, Duration::from_secs(30 * 60)),
        }
    }
}

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Per-instance cache configuration
    pub caches: CacheSettings,
    /// HTTP server port
    pub server_port: u16,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 300)
    /// - `CACHE_ENABLE_STATS` - Maintain hit/miss counters (default: true)
    /// - `GAME_CACHE_CAPACITY` / `GAME_CACHE_TTL` - (default: 50 / 600s)
    /// - `PLAYER_CACHE_CAPACITY` / `PLAYER_CACHE_TTL` - (default: 200 / 300s)
    /// - `STATS_CACHE_CAPACITY` / `STATS_CACHE_TTL` - (default: 100 / 1800s)
    ///
    /// Unparseable values fall back to the default. A parseable zero is kept
    /// and rejected later when the caches are built.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let enable_stats = parse_or(&lookup, "CACHE_ENABLE_STATS", true);

        let cache = |prefix: &str, fallback: CacheConfig| CacheConfig {
            capacity: parse_or(&lookup, &format!("{prefix}_CACHE_CAPACITY"), fallback.capacity),
            ttl: Duration::from_secs(parse_or(
                &lookup,
                &format!("{prefix}_CACHE_TTL"),
                fallback.ttl.as_secs(),
            )),
            enable_stats,
        };

        Self {
            caches: CacheSettings {
                game: cache("GAME", defaults.caches.game),
                player: cache("PLAYER", defaults.caches.player),
                stats: cache("STATS", defaults.caches.stats),
            },
            server_port: parse_or(&lookup, "SERVER_PORT", defaults.server_port),
            cleanup_interval: parse_or(&lookup, "CLEANUP_INTERVAL", defaults.cleanup_interval),
        }
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(name)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            caches: CacheSettings::default(),
            server_port: 3000,
            cleanup_interval: 300,
        }
    }
}
