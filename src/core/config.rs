//! Game configuration.
//!
//! `SetConfig` carries the few knobs the engine has:
//! - `initial_table_size`: how many cards are dealt at the start (12)
//! - `seed`: RNG seed, `None` to seed from entropy
//!
//! Validation happens once, when a game is built. After that every engine
//! operation is total.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::deck::DECK_SIZE;
use crate::cards::Features;

/// Number of cards in a match, and in every deal.
pub const DEAL_SIZE: usize = 3;

/// Standard number of cards on a fresh table.
pub const DEFAULT_TABLE_SIZE: usize = 12;

/// Errors raised while building a game.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Table size is zero, not a multiple of 3, or larger than the deck.
    #[error("initial table size {0} must be a positive multiple of 3 no larger than 81")]
    InvalidTableSize(usize),

    /// A stacked deck does not hold exactly one card per combination.
    #[error("stacked deck has {0} cards, expected 81")]
    InvalidDeckSize(usize),

    /// A stacked deck repeats an attribute combination.
    #[error("stacked deck contains {0:?} more than once")]
    DuplicateCard(Features),
}

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetConfig {
    /// Cards dealt to the table on start and restart.
    pub initial_table_size: usize,

    /// RNG seed. `None` draws one from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SetConfig {
    fn default() -> Self {
        Self {
            initial_table_size: DEFAULT_TABLE_SIZE,
            seed: None,
        }
    }
}

impl SetConfig {
    /// Use a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.initial_table_size;
        if size == 0 || size % DEAL_SIZE != 0 || size > DECK_SIZE {
            return Err(ConfigError::InvalidTableSize(size));
        }
        Ok(())
    }
}
