//! Wire types exchanged with the API service.

use leaderboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

/// A stored player record as returned by the API service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub id: DbId,
    pub name: String,
    pub points: i32,
    pub color_tag: String,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

/// Body of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayer {
    pub name: String,
    pub points: i32,
    pub color_tag: String,
}
