//! Deck generation.

use rustc_hash::FxHashSet;

use super::attributes::{Attribute, Features};
use super::card::SetCard;
use crate::core::config::ConfigError;
use crate::core::entity::CardId;

/// Number of cards in a full deck (3^4).
pub const DECK_SIZE: usize = 81;

/// All 81 attribute combinations, in nested-range order.
#[must_use]
pub fn all_features() -> Vec<Features> {
    let mut out = Vec::with_capacity(DECK_SIZE);
    for symbol_count in Attribute::SymbolCount.range() {
        for shape in Attribute::Shape.range() {
            for shading in Attribute::Shading.range() {
                for color in Attribute::Color.range() {
                    out.push(Features::new(symbol_count, shape, shading, color));
                }
            }
        }
    }
    out
}

/// Build an unshuffled deck, ids assigned in generation order.
#[must_use]
pub fn full_deck() -> Vec<SetCard> {
    deck_from_features(all_features())
}

/// Build a deck in the given order after checking it is a full, duplicate-free deck.
pub fn stacked_deck(order: Vec<Features>) -> Result<Vec<SetCard>, ConfigError> {
    if order.len() != DECK_SIZE {
        return Err(ConfigError::InvalidDeckSize(order.len()));
    }

    let mut seen = FxHashSet::default();
    for features in &order {
        if !seen.insert(*features) {
            return Err(ConfigError::DuplicateCard(*features));
        }
    }

    Ok(deck_from_features(order))
}

fn deck_from_features(order: Vec<Features>) -> Vec<SetCard> {
    order
        .into_iter()
        .zip(0u32..)
        .map(|(features, id)| SetCard::new(CardId(id), features))
        .collect()
}
