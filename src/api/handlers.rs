//! API Handlers
//!
//! HTTP request handlers for the cache admin and memoization endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    validate_key, ActionResponse, CacheAction, CacheActionRequest, ConfigResponse,
    ConfigUpdateRequest, DeleteResponse, GetResponse, HealthResponse, KeysResponse, SetResponse,
};
use crate::registry::{CacheName, CacheRegistry, CombinedStats};

/// Application state shared across all handlers.
///
/// The registry is a bundle of shared handles, so cloning the state is cheap
/// and every clone sees the same caches.
#[derive(Clone)]
pub struct AppState {
    pub caches: CacheRegistry,
}

impl AppState {
    pub fn new(caches: CacheRegistry) -> Self {
        Self { caches }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Fails if any cache configuration is invalid.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(CacheRegistry::from_config(config)?))
    }
}

fn checked_key(key: &str) -> Result<()> {
    match validate_key(key) {
        Some(msg) => Err(CacheError::InvalidRequest(msg)),
        None => Ok(()),
    }
}

/// Handler for GET /cache/stats
///
/// Returns the statistics of every registered cache.
pub async fn stats_handler(State(state): State<AppState>) -> Json<CombinedStats> {
    Json(state.caches.combined_stats().await)
}

/// Handler for POST /cache/stats
///
/// Runs an administrative action (`clear` or `cleanup`) on every cache.
pub async fn action_handler(
    State(state): State<AppState>,
    Json(req): Json<CacheActionRequest>,
) -> Result<Json<ActionResponse>> {
    match req.action() {
        Some(CacheAction::Clear) => {
            state.caches.clear_all().await;
            Ok(Json(ActionResponse::cleared()))
        }
        Some(CacheAction::Cleanup) => {
            let report = state.caches.cleanup_all().await;
            Ok(Json(ActionResponse::cleaned(report)))
        }
        None => Err(CacheError::InvalidRequest(format!(
            "Invalid action '{}'",
            req.action
        ))),
    }
}

/// Handler for GET /cache/:cache/keys
pub async fn keys_handler(
    State(state): State<AppState>,
    Path(cache): Path<String>,
) -> Result<Json<KeysResponse>> {
    let name: CacheName = cache.parse()?;
    let keys = state.caches.cache(name).keys().await;

    Ok(Json(KeysResponse::new(name, keys)))
}

/// Handler for GET /cache/:cache/entries/:key
///
/// Counts as a cache request: a hit promotes the entry, a miss is recorded.
pub async fn get_handler(
    State(state): State<AppState>,
    Path((cache, key)): Path<(String, String)>,
) -> Result<Json<GetResponse>> {
    let name: CacheName = cache.parse()?;

    match state.caches.cache(name).get(&key).await {
        Some(value) => {
            debug!("Cache hit for {} in {} cache", key, name);
            Ok(Json(GetResponse::new(key, value)))
        }
        None => {
            debug!("Cache miss for {} in {} cache", key, name);
            Err(CacheError::NotFound(key))
        }
    }
}

/// Handler for PUT /cache/:cache/entries/:key
///
/// Stores the request body as the document for `key`.
pub async fn set_handler(
    State(state): State<AppState>,
    Path((cache, key)): Path<(String, String)>,
    Json(value): Json<Value>,
) -> Result<Json<SetResponse>> {
    let name: CacheName = cache.parse()?;
    checked_key(&key)?;

    state.caches.cache(name).set(key.clone(), value).await;

    Ok(Json(SetResponse::new(key)))
}

/// Handler for DELETE /cache/:cache/entries/:key
pub async fn delete_handler(
    State(state): State<AppState>,
    Path((cache, key)): Path<(String, String)>,
) -> Result<Json<DeleteResponse>> {
    let name: CacheName = cache.parse()?;

    if state.caches.cache(name).delete(&key).await {
        Ok(Json(DeleteResponse::new(key)))
    } else {
        Err(CacheError::NotFound(key))
    }
}

/// Handler for PATCH /cache/:cache/config
///
/// Reconfigures capacity and/or ttl. Shrinking evicts LRU entries.
pub async fn config_handler(
    State(state): State<AppState>,
    Path(cache): Path<String>,
    Json(req): Json<ConfigUpdateRequest>,
) -> Result<Json<ConfigResponse>> {
    let name: CacheName = cache.parse()?;
    let target = state.caches.cache(name);

    target.update_config(req.into_update()).await?;

    let config = target.config().await;
    let total_entries = target.len().await;
    Ok(Json(ConfigResponse::new(name, config, total_entries)))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CacheSettings;
    use serde_json::json;

    fn state() -> AppState {
        AppState::new(CacheRegistry::new(&CacheSettings::default()).unwrap())
    }

    fn path(cache: &str, key: &str) -> Path<(String, String)> {
        Path((cache.to_string(), key.to_string()))
    }

    #[tokio::test]
    async fn test_set_and_get_handler() {
        let state = state();

        let result = set_handler(
            State(state.clone()),
            path("game", "game:1"),
            Json(json!({"turn": 4})),
        )
        .await;
        assert!(result.is_ok());

        let response = get_handler(State(state.clone()), path("game", "game:1"))
            .await
            .unwrap();
        assert_eq!(response.value, json!({"turn": 4}));
    }

    #[tokio::test]
    async fn test_get_nonexistent_key() {
        let result = get_handler(State(state()), path("player", "player:nobody")).await;
        assert!(matches!(result, Err(CacheError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_unknown_cache() {
        let result = get_handler(State(state()), path("scores", "x")).await;
        assert!(matches!(result, Err(CacheError::UnknownCache(_))));
    }

    #[tokio::test]
    async fn test_delete_handler() {
        let state = state();

        set_handler(State(state.clone()), path("stats", "k"), Json(json!(1)))
            .await
            .unwrap();

        assert!(delete_handler(State(state.clone()), path("stats", "k"))
            .await
            .is_ok());
        assert!(delete_handler(State(state), path("stats", "k")).await.is_err());
    }

    #[tokio::test]
    async fn test_set_key_too_long() {
        let long_key = "x".repeat(crate::models::requests::MAX_KEY_LENGTH + 1);
        let result = set_handler(State(state()), path("game", &long_key), Json(json!(1))).await;
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_action_handler_invalid() {
        let req = CacheActionRequest {
            action: "explode".to_string(),
        };
        let result = action_handler(State(state()), Json(req)).await;
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_action_handler_clear() {
        let state = state();
        state.caches.player().set("p", json!(1)).await;

        let req = CacheActionRequest {
            action: "clear".to_string(),
        };
        action_handler(State(state.clone()), Json(req)).await.unwrap();

        assert!(state.caches.player().is_empty().await);
    }

    #[tokio::test]
    async fn test_config_handler_shrinks() {
        let state = state();
        for i in 0..4 {
            state.caches.game().set(format!("game:{i}"), json!(i)).await;
        }

        let req = ConfigUpdateRequest {
            capacity: Some(2),
            ttl_secs: None,
        };
        let response = config_handler(State(state.clone()), Path("game".to_string()), Json(req))
            .await
            .unwrap();

        assert_eq!(response.capacity, 2);
        assert_eq!(response.total_entries, 2);
        assert_eq!(
            state.caches.game().keys().await,
            vec!["game:3".to_string(), "game:2".to_string()]
        );
    }

    #[tokio::test]
    async fn test_config_handler_rejects_zero() {
        let req = ConfigUpdateRequest {
            capacity: Some(0),
            ttl_secs: None,
        };
        let result = config_handler(State(state()), Path("game".to_string()), Json(req)).await;
        assert!(matches!(result, Err(CacheError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let response = stats_handler(State(state())).await;
        assert_eq!(response.game_cache.hits, 0);
        assert_eq!(response.player_cache.capacity, 200);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
