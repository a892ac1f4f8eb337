//! Player field rules applied at the input layer.
//!
//! The API service stores whatever it receives; these checks run in the
//! client before a create request is issued.

use crate::error::CoreError;

/// Minimum draft name length (in characters) before autocomplete lookups fire.
pub const MIN_SUGGESTION_PREFIX_LEN: usize = 2;

/// Validate that a player name is present.
///
/// Whitespace-only names count as empty.
pub fn validate_player_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Player name must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validate that a score is non-negative.
pub fn validate_points(points: i32) -> Result<(), CoreError> {
    if points < 0 {
        return Err(CoreError::Validation(format!(
            "Points must be non-negative, got {points}"
        )));
    }
    Ok(())
}

/// Parse points typed into a text field.
///
/// Surrounding whitespace is ignored. Empty, non-integer and negative input
/// is rejected.
pub fn parse_points(raw: &str) -> Result<i32, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Points must not be empty".to_string()));
    }

    let points: i32 = trimmed.parse().map_err(|_| {
        CoreError::Validation(format!("Points must be a whole number, got '{trimmed}'"))
    })?;

    validate_points(points)?;
    Ok(points)
}

/// Whether a draft name is long enough to trigger an autocomplete lookup.
pub fn wants_suggestions(draft: &str) -> bool {
    draft.chars().count() >= MIN_SUGGESTION_PREFIX_LEN
}
