//! Response DTOs for the cache admin API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::Value;

use crate::config::CacheConfig;
use crate::registry::{CacheName, CleanupReport};

/// Response body for GET /cache/:cache/entries/:key
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested key
    pub key: String,
    /// The cached document
    pub value: Value,
}

impl GetResponse {
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Response body for PUT /cache/:cache/entries/:key
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    /// Success message
    pub message: String,
    /// The key that was set
    pub key: String,
}

impl SetResponse {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' set successfully", key),
            key,
        }
    }
}

/// Response body for DELETE /cache/:cache/entries/:key
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// The key that was deleted
    pub key: String,
}

impl DeleteResponse {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' deleted successfully", key),
            key,
        }
    }
}

/// Response body for GET /cache/:cache/keys
#[derive(Debug, Clone, Serialize)]
pub struct KeysResponse {
    pub cache: CacheName,
    /// Most recently used first
    pub keys: Vec<String>,
    pub count: usize,
}

impl KeysResponse {
    pub fn new(cache: CacheName, keys: Vec<String>) -> Self {
        Self {
            cache,
            count: keys.len(),
            keys,
        }
    }
}

/// Response body for PATCH /cache/:cache/config
#[derive(Debug, Clone, Serialize)]
pub struct ConfigResponse {
    pub cache: CacheName,
    pub capacity: usize,
    pub ttl_secs: u64,
    /// Entries left after any shrink
    pub total_entries: usize,
}

impl ConfigResponse {
    pub fn new(cache: CacheName, config: CacheConfig, total_entries: usize) -> Self {
        Self {
            cache,
            capacity: config.capacity,
            ttl_secs: config.ttl.as_secs(),
            total_entries,
        }
    }
}

/// Response body for POST /cache/stats
#[derive(Debug, Clone, Serialize)]
pub struct ActionResponse {
    pub message: String,
    /// Present only for the cleanup action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleaned: Option<CleanupReport>,
}

impl ActionResponse {
    pub fn cleared() -> Self {
        Self {
            message: "All caches cleared".to_string(),
            cleaned: None,
        }
    }

    pub fn cleaned(report: CleanupReport) -> Self {
        Self {
            message: "Cache cleanup completed".to_string(),
            cleaned: Some(report),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    #[test]
    fn test_get_response_serialize() {
        let resp = GetResponse::new("game:1", json!({"turn": 2}));
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["key"], "game:1");
        assert_eq!(json["value"]["turn"], 2);
    }

    #[test]
    fn test_set_response_serialize() {
        let resp = SetResponse::new("my_key");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("my_key"));
        assert!(json.contains("successfully"));
    }

    #[test]
    fn test_delete_response_serialize() {
        let resp = DeleteResponse::new("deleted_key");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("deleted_key"));
        assert!(json.contains("deleted"));
    }

    #[test]
    fn test_keys_response_count() {
        let resp = KeysResponse::new(CacheName::Player, vec!["a".into(), "b".into()]);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["cache"], "player");
        assert_eq!(json["count"], 2);
    }

    #[test]
    fn test_config_response() {
        let resp = ConfigResponse::new(
            CacheName::Game,
            CacheConfig::new(5, Duration::from_secs(90)),
            3,
        );
        assert_eq!(resp.capacity, 5);
        assert_eq!(resp.ttl_secs, 90);
    }

    #[test]
    fn test_action_response_shapes() {
        let cleared = serde_json::to_value(ActionResponse::cleared()).unwrap();
        assert!(cleared.get("cleaned").is_none());

        let report = CleanupReport {
            game: 1,
            player: 2,
            stats: 0,
        };
        let cleaned = serde_json::to_value(ActionResponse::cleaned(report)).unwrap();
        assert_eq!(cleaned["cleaned"]["player"], 2);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }
}
