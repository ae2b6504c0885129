use axum::extract::State;
use axum::{routing::get, Json, Router};
use chrono::Utc;
use prodqueue_core::types::Timestamp;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `healthy`, or `degraded` when the database is unreachable.
    pub status: &'static str,
    /// Server time of the check.
    pub timestamp: Timestamp,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
}

/// Service banner payload.
#[derive(Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
}

/// GET / -- service banner.
async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Production Queue Dashboard API",
    })
}

/// GET /api/health -- returns service and database health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = prodqueue_db::health_check(&state.pool).await.is_ok();

    let status = if db_healthy { "healthy" } else { "degraded" };

    Json(HealthResponse {
        status,
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Mount the banner and health check at root level.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/api/health", get(health_check))
}
