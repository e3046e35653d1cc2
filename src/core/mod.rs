//! Core engine types: identities, RNG, configuration, intents.
//!
//! These are the building blocks shared by the card model and the game
//! engine. Nothing here knows about the table or the deck.

pub mod entity;
pub mod rng;
pub mod config;
pub mod action;

pub use entity::CardId;
pub use rng::{GameRng, GameRngState};
pub use config::{ConfigError, SetConfig, DEAL_SIZE, DEFAULT_TABLE_SIZE};
pub use action::{ChooseOutcome, DealOutcome, Intent, IntentOutcome};
