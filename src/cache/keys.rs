//! Cache Key Module
//!
//! Builds namespaced string keys so several logical resources can share one
//! cache instance without colliding.

use std::borrow::Cow;
use std::fmt;

// == Cache Key ==
/// A logical resource that can be memoized.
///
/// Rendering is injective: `:` and `%` inside identifiers are percent-escaped,
/// so an identifier can never forge another variant's suffix. Identifiers
/// without those characters render verbatim, e.g. `game:42:players`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// `game:{id}`
    Game(String),
    /// `player:{id}`
    Player(String),
    /// `game:{id}:players`
    GamePlayers(String),
    /// `game:{id}:history`
    GameHistory(String),
    /// `player:{id}:stats`
    PlayerStats(String),
    /// `leaderboard:global`
    Leaderboard,
}

impl CacheKey {
    pub fn game(id: impl Into<String>) -> Self {
        Self::Game(id.into())
    }

    pub fn player(id: impl Into<String>) -> Self {
        Self::Player(id.into())
    }

    pub fn game_players(id: impl Into<String>) -> Self {
        Self::GamePlayers(id.into())
    }

    pub fn game_history(id: impl Into<String>) -> Self {
        Self::GameHistory(id.into())
    }

    pub fn player_stats(id: impl Into<String>) -> Self {
        Self::PlayerStats(id.into())
    }

    pub fn leaderboard() -> Self {
        Self::Leaderboard
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Game(id) => write!(f, "game:{}", escape(id)),
            Self::Player(id) => write!(f, "player:{}", escape(id)),
            Self::GamePlayers(id) => write!(f, "game:{}:players", escape(id)),
            Self::GameHistory(id) => write!(f, "game:{}:history", escape(id)),
            Self::PlayerStats(id) => write!(f, "player:{}:stats", escape(id)),
            Self::Leaderboard => f.write_str("leaderboard:global"),
        }
    }
}

impl From<CacheKey> for String {
    fn from(key: CacheKey) -> Self {
        key.to_string()
    }
}

fn escape(id: &str) -> Cow<'_, str> {
    if !id.contains([':', '%']) {
        return Cow::Borrowed(id);
    }
    let mut out = String::with_capacity(id.len() + 4);
    for c in id.chars() {
        match c {
            '%' => out.push_str("%25"),
            ':' => out.push_str("%3A"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
