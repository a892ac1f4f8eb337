//! Matching helpers for name search and dashboard filtering.
//!
//! Prefix search itself runs in the Store (`ILIKE`); these helpers prepare
//! its pattern and implement the client-side substring filter.

/// Escape `LIKE`/`ILIKE` metacharacters so user input matches literally.
///
/// Uses the PostgreSQL default escape character (`\`).
///
/// # Examples
///
/// ```
/// use leaderboard_core::search::escape_like;
/// assert_eq!(escape_like("al"), "al");
/// assert_eq!(escape_like("50%_off"), "50\\%\\_off");
/// ```
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Case-insensitive substring match. An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
