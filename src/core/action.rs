//! Intents and their outcomes.
//!
//! A host drives the engine with `Intent`s, one per user action, and gets back
//! an `IntentOutcome` saying what happened. Every intent either applies fully
//! or is a no-op; the outcome says which.
//!
//! ```
//! use set_game::core::{DealOutcome, Intent, IntentOutcome};
//! use set_game::SetGameBuilder;
//!
//! let mut game = SetGameBuilder::new().seed(7).build().unwrap();
//!
//! let outcome = game.apply(Intent::DealThree);
//! assert_eq!(outcome, IntentOutcome::Deal(DealOutcome::Appended));
//! assert_eq!(game.cards_on_table().len(), 15);
//! ```

use serde::{Deserialize, Serialize};

use super::entity::CardId;
use crate::rules::Triple;

/// A request from the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Toggle selection of a card on the table.
    Choose(CardId),
    /// Deal three cards, or replace/remove a pending match.
    DealThree,
    /// Move a confirmed match to the discard pile.
    DiscardMatched,
    /// Start over with a fresh shuffle.
    Restart,
    /// Look for any valid match on the table.
    FindMatchingSet,
}

/// What `choose` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChooseOutcome {
    /// The card is not on the table (possibly just retired as part of a match).
    NotOnTable,
    /// The card joined the selection (now 1 or 2 cards).
    Selected,
    /// The card left the selection.
    Deselected,
    /// The card completed a selection of three, which was evaluated.
    Evaluated {
        cards: Triple<CardId>,
        is_match: bool,
    },
}

/// What `deal_three` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealOutcome {
    /// A pending match was swapped in place for three new cards.
    ReplacedMatch,
    /// A pending match was taken off the table without replacement.
    RemovedMatch,
    /// Three new cards were added to the end of the table.
    Appended,
    /// Nothing to do: no pending match and fewer than three cards left.
    NoOp,
}

/// Result of applying an `Intent`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntentOutcome {
    Choose(ChooseOutcome),
    Deal(DealOutcome),
    /// Whether a match was discarded.
    Discard(bool),
    Restart,
    Found(Option<Triple<CardId>>),
}

impl IntentOutcome {
    /// Whether the intent changed game state.
    #[must_use]
    pub fn changed_state(&self) -> bool {
        match self {
            IntentOutcome::Choose(outcome) => *outcome != ChooseOutcome::NotOnTable,
            IntentOutcome::Deal(outcome) => *outcome != DealOutcome::NoOp,
            IntentOutcome::Discard(discarded) => *discarded,
            IntentOutcome::Restart => true,
            IntentOutcome::Found(_) => false,
        }
    }
}
