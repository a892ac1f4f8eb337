//! The client's single owned copy of the player list.
//!
//! Two lifecycle events only: a full replace when the list is (re)loaded and
//! an append when a create succeeds. Records are never edited or removed
//! locally.

use crate::model::PlayerRecord;

#[derive(Debug, Default, Clone)]
pub struct PlayerList {
    players: Vec<PlayerRecord>,
}

impl PlayerList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached list with a fresh server snapshot.
    pub fn replace_all(&mut self, players: Vec<PlayerRecord>) {
        self.players = players;
    }

    /// Append a record returned by a successful create.
    pub fn append(&mut self, player: PlayerRecord) {
        self.players.push(player);
    }

    pub fn as_slice(&self) -> &[PlayerRecord] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, name: &str) -> PlayerRecord {
        PlayerRecord {
            id,
            name: name.to_string(),
            points: 0,
            color_tag: "#000000".to_string(),
            created_at: None,
        }
    }

    #[test]
    fn append_keeps_arrival_order() {
        let mut list = PlayerList::new();
        list.append(record(2, "Bob"));
        list.append(record(1, "Alice"));

        let names: Vec<&str> = list.as_slice().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Alice"]);
    }

    #[test]
    fn replace_discards_previous_contents() {
        let mut list = PlayerList::new();
        list.append(record(1, "Stale"));
        list.replace_all(vec![record(5, "Fresh")]);

        assert_eq!(list.len(), 1);
        assert_eq!(list.as_slice()[0].name, "Fresh");
    }
}
