//! Plain-text rendering of the form and dashboard for the terminal client.

use leaderboard_core::color::color_channels;

use crate::dashboard::{DashboardView, Rank};
use crate::form::PlayerForm;

pub const EMPTY_PLACEHOLDER: &str =
    "No player data available. Add some players to see the dashboard!";

/// Marker printed in front of a row.
pub fn rank_marker(rank: Rank) -> &'static str {
    match rank {
        Rank::First => "🏆",
        Rank::Second => "🥈",
        Rank::Third => "🥉",
        Rank::Other => "⭐",
    }
}

/// A colored dot for a `#RRGGBB` tag, using 24-bit ANSI color.
///
/// Falls back to an uncolored dot if the tag is not valid hex.
pub fn swatch(color_tag: &str) -> String {
    match color_channels(color_tag) {
        Some((r, g, b)) => format!("\x1b[38;2;{r};{g};{b}m●\x1b[0m"),
        None => "●".to_string(),
    }
}

pub fn render_form(form: &PlayerForm) -> String {
    let mut lines = vec![
        "== Add Player Performance ==".to_string(),
        format!("  Player Name:        {}", form.name()),
    ];
    lines.extend(
        form.suggestions()
            .iter()
            .enumerate()
            .map(|(i, name)| format!("      [{i}] {name}")),
    );
    lines.push(format!("  Performance Points: {}", form.points()));
    lines.push(format!(
        "  Color:              {} {}",
        swatch(form.color_tag()),
        form.color_tag()
    ));
    join_lines(lines)
}

pub fn render_dashboard(view: &DashboardView<'_>, search: &str) -> String {
    let mut lines = vec!["== Performance Dashboard ==".to_string()];
    if !search.is_empty() {
        lines.push(format!("  Search: {search}"));
    }

    match view {
        DashboardView::Empty => lines.push(format!("  {EMPTY_PLACEHOLDER}")),
        DashboardView::Ranked(rows) => lines.extend(rows.iter().map(|row| {
            let player = row.player;
            format!(
                "  {} {:<20} {} {}  {:>6} points",
                rank_marker(row.rank),
                player.name,
                swatch(&player.color_tag),
                player.color_tag,
                player.points
            )
        })),
    }
    join_lines(lines)
}

/// Newline-terminate every line.
fn join_lines(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::Dashboard;
    use crate::model::PlayerRecord;
    use crate::roster::PlayerList;

    fn record(name: &str, points: i32) -> PlayerRecord {
        PlayerRecord {
            id: 1,
            name: name.to_string(),
            points,
            color_tag: "#ff8000".to_string(),
            created_at: None,
        }
    }

    #[test]
    fn empty_view_renders_placeholder_only() {
        let text = render_dashboard(&DashboardView::Empty, "");
        assert!(text.contains(EMPTY_PLACEHOLDER));
        assert!(!text.contains("points"));
    }

    #[test]
    fn rows_render_with_markers_in_order() {
        let mut players = PlayerList::new();
        players.replace_all(vec![record("Low", 1), record("High", 9)]);
        let view = Dashboard::new().view(&players);

        let text = render_dashboard(&view, "");
        let high = text.find("High").unwrap();
        let low = text.find("Low").unwrap();

        assert!(high < low);
        assert!(text.contains("🏆"));
        assert!(text.contains("🥈"));
        assert!(!text.contains(EMPTY_PLACEHOLDER));
    }

    #[test]
    fn swatch_uses_tag_channels() {
        assert_eq!(swatch("#ff8000"), "\x1b[38;2;255;128;0m●\x1b[0m");
        assert_eq!(swatch("orange"), "●");
    }

    #[test]
    fn every_line_is_newline_terminated() {
        let text = render_dashboard(&DashboardView::Empty, "al");
        assert_eq!(
            text,
            format!("== Performance Dashboard ==\n  Search: al\n  {EMPTY_PLACEHOLDER}\n")
        );

        let form = render_form(&PlayerForm::new());
        assert!(form.ends_with("#000000\n"));
        assert_eq!(form.lines().count(), 4);
    }

    #[test]
    fn form_lists_numbered_suggestions() {
        let mut form = PlayerForm::new();
        let ticket = form.set_name("Al").unwrap();
        form.apply_suggestions(ticket.seq, vec!["Alice".into(), "Alan".into()]);

        let text = render_form(&form);
        assert!(text.contains("[0] Alice"));
        assert!(text.contains("[1] Alan"));
        assert!(text.contains("#000000"));
    }
}
