//! Route definitions for player records.

use axum::routing::get;
use axum::Router;

use crate::handlers::player;
use crate::state::AppState;

/// Routes mounted at `/players`.
///
/// ```text
/// GET  /        -> list
/// POST /        -> create
/// GET  /names   -> names
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(player::list).post(player::create))
        .route("/names", get(player::names))
}
