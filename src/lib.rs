//! # set-game
//!
//! Game-state engine for Set, the matching card game.
//!
//! ## Design Principles
//!
//! 1. **Engine Only**: No rendering, no I/O. Hosts read projections and
//!    issue intents.
//!
//! 2. **Total Operations**: Every intent either applies fully or is a no-op.
//!    Only building a game can fail.
//!
//! 3. **Forward Pipeline**: Cards move deck → table → discard pile and never
//!    come back until a restart.
//!
//! ## Modules
//!
//! - `core`: Card IDs, RNG, configuration, intents and outcomes
//! - `cards`: Attributes, cards, deck generation
//! - `rules`: The matching rule and set search
//! - `game`: The engine, its builder, and snapshots
//!
//! ## Example
//!
//! ```
//! use set_game::SetGame;
//!
//! let mut game = SetGame::with_seed(42);
//!
//! // Twelve cards may hold no set; any 21 always do.
//! while game.find_matching_set().is_none() {
//!     game.deal_three();
//! }
//!
//! let set = game.find_matching_set().unwrap();
//! for id in set {
//!     game.choose(id);
//! }
//! assert_eq!(game.matched_cards().len(), 3);
//! assert!(game.discard_matched());
//! assert_eq!(game.match_count(), 1);
//! ```

pub mod core;
pub mod cards;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    CardId, ChooseOutcome, ConfigError, DealOutcome, GameRng, GameRngState, Intent,
    IntentOutcome, SetConfig, DEAL_SIZE, DEFAULT_TABLE_SIZE,
};

pub use crate::cards::{Attribute, Features, SetCard, DECK_SIZE};

pub use crate::rules::{features_match, find_matching_set, is_valid_match, Triple};

pub use crate::game::{GameSnapshot, SetGame, SetGameBuilder};
