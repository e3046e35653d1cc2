//! Card identity.
//!
//! Every card gets a `CardId` when the deck is built. The id is the card's
//! identity: two cards are the same card iff their ids match, regardless of
//! attribute values.
//!
//! ```
//! use set_game::core::CardId;
//!
//! let a = CardId(3);
//! let b = CardId::new(3);
//! assert_eq!(a, b);
//! assert_eq!(a.to_string(), "Card(3)");
//! ```

use serde::{Deserialize, Serialize};

/// Stable unique identity token for a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}
