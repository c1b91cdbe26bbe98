//! API Module
//!
//! HTTP handlers and routing for the cache admin API.
//!
//! # Endpoints
//! - `GET /cache/stats` - Combined statistics
//! - `POST /cache/stats` - Clear or sweep every cache
//! - `GET /cache/:cache/keys` - List keys
//! - `GET|PUT|DELETE /cache/:cache/entries/:key` - Entry access
//! - `PATCH /cache/:cache/config` - Reconfigure one cache
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
