//! Cards - immutable attributes plus transient table flags.
//!
//! `SetCard` pairs a `CardId` with its `Features`. While a card sits on the
//! table it also carries two transient flags:
//! - `is_selected`: the player has picked it
//! - `match_result`: `None` until three cards are evaluated, then the verdict
//!
//! Flags are read-only outside the crate; only the engine changes them.
//! Equality and hashing use the id only; `same_state` compares everything.

use serde::{Deserialize, Serialize};

use super::attributes::Features;
use crate::core::entity::CardId;

/// A single card.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SetCard {
    id: CardId,
    features: Features,
    is_selected: bool,
    match_result: Option<bool>,
}

impl SetCard {
    /// Create a card with default transient flags.
    #[must_use]
    pub fn new(id: CardId, features: Features) -> Self {
        Self {
            id,
            features,
            is_selected: false,
            match_result: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn features(&self) -> Features {
        self.features
    }

    /// Selected by the player.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    /// Outcome of the last evaluation, if any.
    #[must_use]
    pub fn match_result(&self) -> Option<bool> {
        self.match_result
    }

    /// Flip selection. Returns the new state.
    pub(crate) fn toggle_selected(&mut self) -> bool {
        self.is_selected = !self.is_selected;
        self.is_selected
    }

    pub(crate) fn set_match_result(&mut self, result: Option<bool>) {
        self.match_result = result;
    }

    /// Compare everything, flags included, unlike `==` which compares ids.
    #[must_use]
    pub fn same_state(&self, other: &Self) -> bool {
        self.id == other.id
            && self.features == other.features
            && self.is_selected == other.is_selected
            && self.match_result == other.match_result
    }

    /// Part of a confirmed valid match.
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.match_result == Some(true)
    }

    /// Reset the transient flags to their defaults.
    pub(crate) fn reset(&mut self) {
        self.is_selected = false;
        self.match_result = None;
    }
}

impl PartialEq for SetCard {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SetCard {}

impl std::hash::Hash for SetCard {
    fn hash<H: std::hash::Hasher>(&self, hasher: &mut H) {
        self.id.hash(hasher);
    }
}
