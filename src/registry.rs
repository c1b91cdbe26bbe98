//! Cache Registry
//!
//! Owns the pre-configured logical caches (game state, players, game stats)
//! and the administrative operations that span all of them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::cache::{CacheKey, CacheStatsSnapshot, SharedCache};
use crate::config::{CacheSettings, Config};
use crate::error::{CacheError, Result};

/// Memoized documents are stored as JSON snapshots.
pub type Document = Value;

// == Cache Name ==
/// Identifies one of the registered logical caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheName {
    Game,
    Player,
    Stats,
}

impl CacheName {
    pub const ALL: [CacheName; 3] = [CacheName::Game, CacheName::Player, CacheName::Stats];

    pub fn as_str(&self) -> &'static str {
        match self {
            CacheName::Game => "game",
            CacheName::Player => "player",
            CacheName::Stats => "stats",
        }
    }
}

impl fmt::Display for CacheName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CacheName {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "game" => Ok(CacheName::Game),
            "player" => Ok(CacheName::Player),
            "stats" => Ok(CacheName::Stats),
            other => Err(CacheError::UnknownCache(other.to_string())),
        }
    }
}

// == Reports ==
/// Stats of every registered cache at one instant.
#[derive(Debug, Clone, Serialize)]
pub struct CombinedStats {
    pub game_cache: CacheStatsSnapshot,
    pub player_cache: CacheStatsSnapshot,
    pub game_stats_cache: CacheStatsSnapshot,
    /// RFC 3339 timestamp
    pub timestamp: String,
}

/// Entries removed per cache by a cleanup sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CleanupReport {
    pub game: usize,
    pub player: usize,
    pub stats: usize,
}

impl CleanupReport {
    pub fn total(&self) -> usize {
        self.game + self.player + self.stats
    }
}

// == Cache Registry ==
/// Explicitly constructed set of logical caches, shared by handle.
#[derive(Debug, Clone)]
pub struct CacheRegistry {
    game: SharedCache<Document>,
    player: SharedCache<Document>,
    stats: SharedCache<Document>,
}

impl CacheRegistry {
    // == Constructor ==
    /// Builds all caches. Fails if any configuration is invalid.
    pub fn new(settings: &CacheSettings) -> Result<Self> {
        Ok(Self {
            game: SharedCache::new(settings.game)?,
            player: SharedCache::new(settings.player)?,
            stats: SharedCache::new(settings.stats)?,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.caches)
    }

    // == Accessors ==
    /// Game-state documents, keyed by `game:*`.
    pub fn game(&self) -> &SharedCache<Document> {
        &self.game
    }

    /// Player documents, keyed by `player:*`.
    pub fn player(&self) -> &SharedCache<Document> {
        &self.player
    }

    /// Game stats and the leaderboard.
    pub fn stats(&self) -> &SharedCache<Document> {
        &self.stats
    }

    pub fn cache(&self, name: CacheName) -> &SharedCache<Document> {
        match name {
            CacheName::Game => &self.game,
            CacheName::Player => &self.player,
            CacheName::Stats => &self.stats,
        }
    }

    // == Admin Operations ==
    pub async fn combined_stats(&self) -> CombinedStats {
        CombinedStats {
            game_cache: self.game.stats().await,
            player_cache: self.player.stats().await,
            game_stats_cache: self.stats.stats().await,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub async fn clear_all(&self) {
        for name in CacheName::ALL {
            self.cache(name).clear().await;
        }
        info!("All caches cleared");
    }

    /// Sweeps expired entries out of every cache.
    pub async fn cleanup_all(&self) -> CleanupReport {
        let report = CleanupReport {
            game: self.game.cleanup().await,
            player: self.player.cleanup().await,
            stats: self.stats.cleanup().await,
        };

        if report.total() > 0 {
            info!(
                "Cache cleanup: {} game, {} player, {} stats entries removed",
                report.game, report.player, report.stats
            );
        } else {
            debug!("Cache cleanup: no expired entries found");
        }
        report
    }

    // == Invalidation ==
    /// Drops the game document and its derived player/history documents.
    ///
    /// Returns how many keys were present.
    pub async fn invalidate_game(&self, game_id: &str) -> usize {
        let keys = [
            CacheKey::game(game_id),
            CacheKey::game_players(game_id),
            CacheKey::game_history(game_id),
        ];
        let removed = remove_keys(&self.game, &keys).await;
        info!("Invalidated cache for game {}", game_id);
        removed
    }

    /// Drops the player document and the player's stats document.
    pub async fn invalidate_player(&self, player_id: &str) -> usize {
        let keys = [CacheKey::player(player_id), CacheKey::player_stats(player_id)];
        let removed = remove_keys(&self.player, &keys).await;
        info!("Invalidated cache for player {}", player_id);
        removed
    }

    pub async fn invalidate_leaderboard(&self) -> bool {
        let removed = self
            .stats
            .delete(&CacheKey::leaderboard().to_string())
            .await;
        info!("Invalidated leaderboard cache");
        removed
    }
}

async fn remove_keys(cache: &SharedCache<Document>, keys: &[CacheKey]) -> usize {
    let mut removed = 0;
    for key in keys {
        if cache.delete(&key.to_string()).await {
            removed += 1;
        }
    }
    removed
}
