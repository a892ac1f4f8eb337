//! Submission form state with sequenced autocomplete.
//!
//! Every name edit bumps a lookup sequence number. A lookup response is only
//! applied if it carries the newest sequence number, so a slow response to
//! an earlier keystroke can never overwrite fresher suggestions.

use leaderboard_core::color::{normalize_color_tag, validate_color_tag, DEFAULT_COLOR_TAG};
use leaderboard_core::error::CoreError;
use leaderboard_core::player::{parse_points, validate_player_name, wants_suggestions};

use crate::model::NewPlayer;

/// A name lookup the caller should issue on the form's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    /// Sequence number to hand back to [`PlayerForm::apply_suggestions`].
    pub seq: u64,
    /// Draft name to search for.
    pub prefix: String,
}

#[derive(Debug, Clone)]
pub struct PlayerForm {
    name: String,
    points: String,
    color_tag: String,
    suggestions: Vec<String>,
    latest_lookup: u64,
}

impl Default for PlayerForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            points: String::new(),
            color_tag: DEFAULT_COLOR_TAG.to_string(),
            suggestions: Vec::new(),
            latest_lookup: 0,
        }
    }
}

impl PlayerForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> &str {
        &self.points
    }

    pub fn color_tag(&self) -> &str {
        &self.color_tag
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Replace the draft name.
    ///
    /// Returns a ticket when the draft is long enough to look up; otherwise
    /// clears the suggestions. Either way, any lookup still in flight is
    /// invalidated.
    pub fn set_name(&mut self, name: impl Into<String>) -> Option<LookupTicket> {
        self.name = name.into();
        self.latest_lookup += 1;

        if wants_suggestions(&self.name) {
            Some(LookupTicket {
                seq: self.latest_lookup,
                prefix: self.name.clone(),
            })
        } else {
            self.suggestions.clear();
            None
        }
    }

    /// Apply a lookup response. Returns `false` and leaves the suggestions
    /// untouched if a newer lookup has been issued since.
    pub fn apply_suggestions(&mut self, seq: u64, names: Vec<String>) -> bool {
        if seq != self.latest_lookup {
            tracing::debug!(seq, latest = self.latest_lookup, "Dropping stale suggestions");
            return false;
        }
        self.suggestions = names;
        true
    }

    /// Overwrite the draft name with the suggestion at `index`.
    ///
    /// The new draft triggers its own lookup, like any other edit.
    pub fn select_suggestion(&mut self, index: usize) -> Result<Option<LookupTicket>, CoreError> {
        let chosen = self.suggestions.get(index).cloned().ok_or_else(|| {
            CoreError::Validation(format!(
                "No suggestion at position {index} ({} available)",
                self.suggestions.len()
            ))
        })?;
        Ok(self.set_name(chosen))
    }

    /// Replace the points text. Parsed only on submit.
    pub fn set_points(&mut self, points: impl Into<String>) {
        self.points = points.into();
    }

    /// Replace the color tag. Rejects anything that is not `#RRGGBB`.
    pub fn set_color_tag(&mut self, color: &str) -> Result<(), CoreError> {
        self.color_tag = normalize_color_tag(color.trim())?;
        Ok(())
    }

    /// Validate the draft and turn it into a create request.
    ///
    /// On success the name and points are cleared and the color tag is kept
    /// for the next entry. On failure the draft is left as it was.
    pub fn submit(&mut self) -> Result<NewPlayer, CoreError> {
        validate_player_name(&self.name)?;
        let points = parse_points(&self.points)?;
        validate_color_tag(&self.color_tag)?;

        let player = NewPlayer {
            name: self.name.clone(),
            points,
            color_tag: self.color_tag.clone(),
        };

        self.set_name(String::new());
        self.points.clear();
        Ok(player)
    }
}
