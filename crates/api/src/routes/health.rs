//! `GET /health`: whether the service can read the `players` table.
//!
//! A reachable database is not enough; the check goes through the same
//! repository the player endpoints use, so a missing table or revoked
//! grant shows up here too.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use leaderboard_db::repositories::PlayerRepo;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Degraded,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: HealthStatus,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Stored player records, or `null` when the table cannot be read.
    pub player_count: Option<i64>,
}

/// Answers `200` when the player table is readable and `503` otherwise.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (code, status, player_count) = match PlayerRepo::count(&state.pool).await {
        Ok(count) => (StatusCode::OK, HealthStatus::Ok, Some(count)),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not read players");
            (StatusCode::SERVICE_UNAVAILABLE, HealthStatus::Degraded, None)
        }
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            player_count,
        }),
    )
}

/// Mount health check routes (root level, not under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
