//! Game rules: the matching rule and set search.
//!
//! Pure functions over cards. The engine calls into these but they never
//! touch game state.

pub mod matching;
pub mod triple;

pub use matching::{features_match, find_matching_set, is_valid_match};
pub use triple::Triple;
