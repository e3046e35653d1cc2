//! Card system: attributes, cards, and deck generation.
//!
//! ## Key Types
//!
//! - `Attribute`: One of the four card dimensions
//! - `Features`: Immutable attribute tuple (normalized on construction)
//! - `SetCard`: A card with identity and transient table flags
//! - `full_deck` / `stacked_deck`: The 81-card deck

pub mod attributes;
pub mod card;
pub mod deck;

pub use attributes::{Attribute, Features};
pub use card::SetCard;
pub use deck::{all_features, full_deck, stacked_deck, DECK_SIZE};
