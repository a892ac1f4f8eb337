pub mod health;
pub mod player;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /players                list, create
/// /players/names          name prefix search
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/players", player::router())
}
