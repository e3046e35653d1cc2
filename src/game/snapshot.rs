//! Owned, serializable view of a game.
//!
//! A renderer can hold a `GameSnapshot` without borrowing the engine. The
//! discard pile is an `im::Vector`, so taking a snapshot does not copy it.
//!
//! Snapshot equality compares every card field by field, flags included, so
//! two snapshots are equal only when the game state they show is identical.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::SetCard;

/// Read-only projection of a `SetGame`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Cards on the table, in table order.
    pub table: Vec<SetCard>,
    /// Retired matches, oldest first.
    pub discard_pile: Vector<SetCard>,
    pub match_count: u32,
    pub dealt_count: usize,
    pub deck_size: usize,
    pub initial_table_size: usize,
    pub deck_exhausted: bool,
}

impl GameSnapshot {
    /// Whether the host should still offer a "deal more" action.
    #[must_use]
    pub fn can_deal(&self) -> bool {
        !self.deck_exhausted
    }
}

fn same_cards<'a>(
    left: impl ExactSizeIterator<Item = &'a SetCard>,
    right: impl ExactSizeIterator<Item = &'a SetCard>,
) -> bool {
    left.len() == right.len() && left.zip(right).all(|(a, b)| a.same_state(b))
}

impl PartialEq for GameSnapshot {
    fn eq(&self, other: &Self) -> bool {
        self.match_count == other.match_count
            && self.dealt_count == other.dealt_count
            && self.deck_size == other.deck_size
            && self.initial_table_size == other.initial_table_size
            && self.deck_exhausted == other.deck_exhausted
            && same_cards(self.table.iter(), other.table.iter())
            && same_cards(self.discard_pile.iter(), other.discard_pile.iter())
    }
}

#[cfg(test)]
mod tests {
    use crate::game::SetGame;

    #[test]
    fn test_snapshot_matches_engine() {
        let game = SetGame::with_seed(5);
        let snapshot = game.snapshot();

        assert_eq!(snapshot.table.len(), 12);
        assert_eq!(snapshot.deck_size, 81);
        assert_eq!(snapshot.dealt_count, 12);
        assert_eq!(snapshot.initial_table_size, 12);
        assert!(snapshot.can_deal());
        assert!(snapshot.discard_pile.is_empty());
    }

    #[test]
    fn test_snapshot_sees_flag_changes() {
        let mut game = SetGame::with_seed(3);
        let before = game.snapshot();
        let id = game.cards_on_table()[0].id();

        game.choose(id);
        let selected = game.snapshot();
        assert!(!before.table[0].is_selected());
        assert!(selected.table[0].is_selected());
        assert_ne!(before, selected);

        game.choose(id);
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_snapshot_sees_match_result() {
        let mut game = SetGame::with_seed(4);
        let ids: Vec<_> = game.cards_on_table()[..2].iter().map(|c| c.id()).collect();
        for &id in &ids {
            game.choose(id);
        }
        let two_selected = game.snapshot();

        // Evaluating a third card changes only flags, never ids or counts.
        let third = game.cards_on_table()[2].id();
        game.choose(third);
        let evaluated = game.snapshot();
        assert_eq!(evaluated.table.len(), two_selected.table.len());
        assert_ne!(evaluated, two_selected);
    }

    #[test]
    fn test_snapshot_serialization() {
        let mut game = SetGame::with_seed(9);
        let id = game.cards_on_table()[0].id();
        game.choose(id);

        let snapshot = game.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: super::GameSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(snapshot, deserialized);
        assert!(deserialized.table[0].is_selected());
    }
}
