//! Ranked, filterable view over the cached player list.
//!
//! The view is recomputed from the [`PlayerList`] on demand, so it always
//! reflects the latest load or append. Ranks follow the displayed (filtered)
//! order, not the unfiltered one.

use leaderboard_core::search::contains_ignore_case;

use crate::model::PlayerRecord;
use crate::roster::PlayerList;

/// Podium position of a displayed row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    First,
    Second,
    Third,
    Other,
}

impl Rank {
    /// Rank for a zero-based position in the displayed list.
    pub fn from_position(position: usize) -> Self {
        match position {
            0 => Rank::First,
            1 => Rank::Second,
            2 => Rank::Third,
            _ => Rank::Other,
        }
    }
}

/// One displayed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedPlayer<'a> {
    /// Zero-based position in the displayed list.
    pub position: usize,
    pub rank: Rank,
    pub player: &'a PlayerRecord,
}

/// What the dashboard shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardView<'a> {
    /// No players have been recorded; show the placeholder.
    Empty,
    /// Rows in display order. May be empty if the search matched nothing.
    Ranked(Vec<RankedPlayer<'a>>),
}

#[derive(Debug, Default, Clone)]
pub struct Dashboard {
    search: String,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Replace the search text. An empty string restores the full list.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Build the current view of `players`.
    pub fn view<'a>(&self, players: &'a PlayerList) -> DashboardView<'a> {
        if players.is_empty() {
            return DashboardView::Empty;
        }

        // One search box feeds both filters; see `filter_players`.
        let filtered = filter_players(players.as_slice(), &self.search, &self.search);
        let sorted = sort_by_points(filtered);

        DashboardView::Ranked(
            sorted
                .into_iter()
                .enumerate()
                .map(|(position, player)| RankedPlayer {
                    position,
                    rank: Rank::from_position(position),
                    player,
                })
                .collect(),
        )
    }
}

/// Select the players to display.
///
/// A non-empty name filter always wins. The color filter is only consulted
/// when the name filter is empty, so with both wired to the same search
/// text the color branch never runs. Exposing a second input would make it
/// reachable.
pub fn filter_players<'a>(
    players: &'a [PlayerRecord],
    color_filter: &str,
    name_filter: &str,
) -> Vec<&'a PlayerRecord> {
    if !name_filter.is_empty() {
        players
            .iter()
            .filter(|p| contains_ignore_case(&p.name, name_filter))
            .collect()
    } else if !color_filter.is_empty() {
        players
            .iter()
            .filter(|p| contains_ignore_case(&p.color_tag, color_filter))
            .collect()
    } else {
        players.iter().collect()
    }
}

/// Sort by points, highest first. Stable: equal scores keep input order.
pub fn sort_by_points(mut players: Vec<&PlayerRecord>) -> Vec<&PlayerRecord> {
    players.sort_by(|a, b| b.points.cmp(&a.points));
    players
}
