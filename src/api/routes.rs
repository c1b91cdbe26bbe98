//! API Routes
//!
//! Configures the Axum router with all cache endpoints.

use axum::{
    routing::{get, patch},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    action_handler, config_handler, delete_handler, get_handler, health_handler, keys_handler,
    set_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /cache/stats` - Stats of every cache
/// - `POST /cache/stats` - `{"action": "clear" | "cleanup"}` across every cache
/// - `GET /cache/:cache/keys` - Key snapshot, most recently used first
/// - `GET|PUT|DELETE /cache/:cache/entries/:key` - Single entry access
/// - `PATCH /cache/:cache/config` - Change capacity and/or ttl
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/cache/stats", get(stats_handler).post(action_handler))
        .route("/cache/:cache/keys", get(keys_handler))
        .route(
            "/cache/:cache/entries/:key",
            get(get_handler).put(set_handler).delete(delete_handler),
        )
        .route("/cache/:cache/config", patch(config_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
