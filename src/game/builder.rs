//! Builder for configured games.

use super::engine::SetGame;
use crate::cards::{full_deck, stacked_deck, Features};
use crate::core::{ConfigError, GameRng, SetConfig};

/// Builder for creating a `SetGame`.
///
/// ```
/// use set_game::SetGameBuilder;
///
/// let game = SetGameBuilder::new()
///     .seed(42)
///     .initial_table_size(15)
///     .build()
///     .unwrap();
///
/// assert_eq!(game.cards_on_table().len(), 15);
/// assert_eq!(game.seed(), 42);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SetGameBuilder {
    config: SetConfig,
    stacked: Option<Vec<Features>>,
}

impl SetGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn config(mut self, config: SetConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn initial_table_size(mut self, size: usize) -> Self {
        self.config.initial_table_size = size;
        self
    }

    /// Deal the first game from this exact order instead of shuffling.
    ///
    /// Must list all 81 attribute combinations once. Restarts still shuffle.
    pub fn stacked_deck(mut self, order: Vec<Features>) -> Self {
        self.stacked = Some(order);
        self
    }

    /// Validate and build the game.
    pub fn build(self) -> Result<SetGame, ConfigError> {
        self.config.validate()?;

        let rng = match self.config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        let game = match self.stacked {
            Some(order) => SetGame::stacked(self.config, rng, stacked_deck(order)?),
            None => SetGame::shuffled(self.config, rng, full_deck()),
        };
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::all_features;

    #[test]
    fn test_default_build() {
        let game = SetGameBuilder::new().build().unwrap();
        assert_eq!(game.cards_on_table().len(), 12);
        assert_eq!(game.initial_table_size(), 12);
    }

    #[test]
    fn test_same_seed_same_deal() {
        let a = SetGameBuilder::new().seed(77).build().unwrap();
        let b = SetGameBuilder::new().seed(77).build().unwrap();
        assert_eq!(a.snapshot(), b.snapshot());

        let order = |g: &SetGame| g.deck().iter().map(|c| c.features()).collect::<Vec<_>>();
        assert_eq!(order(&a), order(&b));
    }

    #[test]
    fn test_invalid_table_size() {
        let result = SetGameBuilder::new().initial_table_size(10).build();
        assert_eq!(result.unwrap_err(), ConfigError::InvalidTableSize(10));
    }

    #[test]
    fn test_stacked_deck_is_not_shuffled() {
        let order = all_features();
        let game = SetGameBuilder::new()
            .seed(1)
            .stacked_deck(order.clone())
            .build()
            .unwrap();

        let dealt: Vec<_> = game.deck().iter().map(|c| c.features()).collect();
        assert_eq!(dealt, order);
    }

    #[test]
    fn test_bad_stacked_deck() {
        let result = SetGameBuilder::new()
            .stacked_deck(all_features()[..12].to_vec())
            .build();
        assert_eq!(result.unwrap_err(), ConfigError::InvalidDeckSize(12));
    }
}
