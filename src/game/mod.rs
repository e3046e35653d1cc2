//! The game engine.
//!
//! `SetGame` owns the deck, table, and discard pile and applies intents.
//! `SetGameBuilder` validates configuration and builds games.
//! `GameSnapshot` is an owned projection for presentation layers.

mod builder;
mod engine;
mod snapshot;

pub use builder::SetGameBuilder;
pub use engine::SetGame;
pub use snapshot::GameSnapshot;
