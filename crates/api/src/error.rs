use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Application-level error type for HTTP handlers.
///
/// Every Store failure collapses to one generic `500` with a plain-text
/// message naming the operation. The sqlx error is logged, never returned.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A database error from sqlx, tagged with the operation that failed.
    #[error("{action}: {source}")]
    Store {
        action: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Build a `map_err` adapter that tags a sqlx error with `action`.
    ///
    /// ```ignore
    /// PlayerRepo::list_by_points(&state.pool)
    ///     .await
    ///     .map_err(AppError::store("Error fetching player data"))?;
    /// ```
    pub fn store(action: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| AppError::Store { action, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Store { action, source } => {
                tracing::error!(error = %source, action, "Store operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, action).into_response()
            }
        }
    }
}
