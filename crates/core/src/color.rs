//! Color tag helpers.
//!
//! A color tag is a `#RRGGBB` hex string. It doubles as a display swatch and
//! as free text the dashboard can search on. Stored tags are lowercase so
//! `#FF0000` and `#ff0000` render and search the same.

use crate::error::CoreError;

/// Color tag applied to a fresh form draft.
pub const DEFAULT_COLOR_TAG: &str = "#000000";

/// Parse user input into a stored color tag.
///
/// Accepts `#` followed by exactly six hex digits in either case and returns
/// the lowercase form.
///
/// ```
/// use leaderboard_core::color::normalize_color_tag;
///
/// assert_eq!(normalize_color_tag("#FF8000").unwrap(), "#ff8000");
/// assert!(normalize_color_tag("orange").is_err());
/// ```
pub fn normalize_color_tag(color: &str) -> Result<String, CoreError> {
    let digits = color
        .strip_prefix('#')
        .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
        .ok_or_else(|| {
            CoreError::Validation(format!("Invalid color '{color}'. Expected #RRGGBB"))
        })?;

    let mut tag = String::with_capacity(7);
    tag.push('#');
    tag.extend(digits.chars().map(|c| c.to_ascii_lowercase()));
    Ok(tag)
}

/// Check a tag without keeping the normalised form.
pub fn validate_color_tag(color: &str) -> Result<(), CoreError> {
    normalize_color_tag(color).map(drop)
}

/// Red, green and blue channels of a tag, or `None` if it is not `#RRGGBB`.
pub fn color_channels(color: &str) -> Option<(u8, u8, u8)> {
    let tag = normalize_color_tag(color).ok()?;
    let channel = |at: usize| u8::from_str_radix(&tag[at..at + 2], 16).ok();
    Some((channel(1)?, channel(3)?, channel(5)?))
}
