//! Player record model and create DTO.
//!
//! Records are immutable once stored, so there is no update DTO.

use leaderboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `players` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: DbId,
    pub name: String,
    pub points: i32,
    pub color_tag: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new player record.
///
/// `rgb` is accepted as an alias for `colorTag`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayer {
    pub name: String,
    pub points: i32,
    #[serde(alias = "rgb")]
    pub color_tag: String,
}
