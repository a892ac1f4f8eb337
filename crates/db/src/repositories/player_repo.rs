//! Repository for the `players` table.

use leaderboard_core::search::escape_like;
use sqlx::PgPool;

use crate::models::player::{CreatePlayer, Player};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, points, color_tag, created_at";

/// Insert and read operations for player records. There is no update or delete.
pub struct PlayerRepo;

impl PlayerRepo {
    /// Insert a new player record, returning the stored row.
    pub async fn create(pool: &PgPool, input: &CreatePlayer) -> Result<Player, sqlx::Error> {
        let query = format!(
            "INSERT INTO players (name, points, color_tag) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Player>(&query)
            .bind(&input.name)
            .bind(input.points)
            .bind(&input.color_tag)
            .fetch_one(pool)
            .await
    }

    /// List every player, highest score first.
    ///
    /// Equal scores keep insertion order.
    pub async fn list_by_points(pool: &PgPool) -> Result<Vec<Player>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM players ORDER BY points DESC, id ASC");
        sqlx::query_as::<_, Player>(&query).fetch_all(pool).await
    }

    /// Number of stored player records.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM players")
            .fetch_one(pool)
            .await
    }

    /// List player names, optionally restricted to a case-insensitive prefix.
    ///
    /// A missing or empty prefix returns every name. Wildcards in the prefix
    /// match literally.
    pub async fn search_names(
        pool: &PgPool,
        prefix: Option<&str>,
    ) -> Result<Vec<String>, sqlx::Error> {
        match prefix.filter(|p| !p.is_empty()) {
            Some(prefix) => {
                sqlx::query_scalar::<_, String>(
                    "SELECT name FROM players WHERE name ILIKE $1 || '%' ORDER BY id",
                )
                .bind(escape_like(prefix))
                .fetch_all(pool)
                .await
            }
            None => {
                sqlx::query_scalar::<_, String>("SELECT name FROM players ORDER BY id")
                    .fetch_all(pool)
                    .await
            }
        }
    }
}
