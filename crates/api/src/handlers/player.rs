//! Handlers for the `/players` resource.
//!
//! Each handler issues exactly one statement against the Store. Field
//! contents are stored as received; input rules are enforced by the client.

use axum::extract::{Query, State};
use axum::Json;
use leaderboard_db::models::player::{CreatePlayer, Player};
use leaderboard_db::repositories::PlayerRepo;

use crate::error::{AppError, AppResult};
use crate::query::NameSearchParams;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/players
///
/// List every player record, highest score first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Player>>> {
    let players = PlayerRepo::list_by_points(&state.pool)
        .await
        .map_err(AppError::store("Error fetching player data"))?;
    Ok(Json(players))
}

/// POST /api/players
///
/// Store a new player record and return it with its assigned identity.
/// Answers `200 OK` like the list and search endpoints.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePlayer>,
) -> AppResult<Json<Player>> {
    let player = PlayerRepo::create(&state.pool, &input)
        .await
        .map_err(AppError::store("Error saving player data"))?;

    tracing::info!(player_id = player.id, points = player.points, "Player record created");
    Ok(Json(player))
}

/// GET /api/players/names?name=prefix
///
/// List player names matching a case-insensitive prefix, or all names.
pub async fn names(
    State(state): State<AppState>,
    Query(params): Query<NameSearchParams>,
) -> AppResult<Json<Vec<String>>> {
    let names = PlayerRepo::search_names(&state.pool, params.name.as_deref())
        .await
        .map_err(AppError::store("Error fetching player names"))?;
    Ok(Json(names))
}
