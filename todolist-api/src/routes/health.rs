/// Health check endpoint
///
/// Reports that the server is up and, when a pool is attached, whether the
/// database answers.
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "database": "connected",
///   "pool": { "active_connections": 0, "idle_connections": 1, "total_connections": 1 }
/// }
/// ```

use crate::{app::AppState, error::ApiResult};
use axum::{extract::State, Json};
use serde::Serialize;
use todolist_shared::db::pool::{self, PoolStats};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `healthy` or `degraded`
    pub status: String,

    /// Application version
    pub version: String,

    /// `connected`, `disconnected`, or `unconfigured`
    pub database: String,

    /// Pool usage, when a pool is attached
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool: Option<PoolStats>,
}

/// Health check handler
pub async fn health_check(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    let (database, stats) = match &state.db {
        Some(db) => {
            let database = match pool::health_check(db).await {
                Ok(()) => "connected",
                Err(e) => {
                    tracing::warn!(error = %e, "Database health check failed");
                    "disconnected"
                }
            };
            (database, Some(pool::get_pool_stats(db)))
        }
        None => ("unconfigured", None),
    };

    let status = if database == "disconnected" {
        "degraded"
    } else {
        "healthy"
    };

    Ok(Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
        pool: stats,
    }))
}
