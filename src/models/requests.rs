//! Request DTOs for the cache admin API
//!
//! Defines the structure of incoming HTTP request bodies.

use std::time::Duration;

use serde::Deserialize;

use crate::config::ConfigUpdate;

/// Maximum accepted key length in bytes at the HTTP boundary
pub const MAX_KEY_LENGTH: usize = 256;

/// Validates a key taken from the request path.
///
/// Returns an error message if validation fails, None if valid.
pub fn validate_key(key: &str) -> Option<String> {
    if key.is_empty() {
        return Some("Key cannot be empty".to_string());
    }
    if key.len() > MAX_KEY_LENGTH {
        return Some(format!(
            "Key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        ));
    }
    None
}

// == Admin Action ==
/// Request body for POST /cache/stats
#[derive(Debug, Clone, Deserialize)]
pub struct CacheActionRequest {
    /// `clear` or `cleanup`
    pub action: String,
}

/// Parsed admin action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheAction {
    Clear,
    Cleanup,
}

impl CacheActionRequest {
    /// Returns the action, or None when it is not recognised.
    pub fn action(&self) -> Option<CacheAction> {
        match self.action.as_str() {
            "clear" => Some(CacheAction::Clear),
            "cleanup" => Some(CacheAction::Cleanup),
            _ => None,
        }
    }
}

// == Reconfigure ==
/// Request body for PATCH /cache/:cache/config
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigUpdateRequest {
    /// New maximum number of entries
    #[serde(default)]
    pub capacity: Option<usize>,
    /// New TTL in seconds
    #[serde(default)]
    pub ttl_secs: Option<u64>,
}

impl ConfigUpdateRequest {
    pub fn into_update(self) -> ConfigUpdate {
        ConfigUpdate {
            capacity: self.capacity,
            ttl: self.ttl_secs.map(Duration::from_secs),
        }
    }
}
