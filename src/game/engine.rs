//! The Set game engine.

use im::Vector;
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::snapshot::GameSnapshot;
use crate::cards::{full_deck, SetCard};
use crate::core::{
    CardId, ChooseOutcome, DealOutcome, GameRng, GameRngState, Intent, IntentOutcome, SetConfig,
    DEAL_SIZE,
};
use crate::rules::{find_matching_set, is_valid_match, Triple};

/// Table positions of a selection or a match. Never more than three.
type Positions = SmallVec<[usize; 3]>;

/// One game of Set.
///
/// Owns the deck, the table, and the discard pile. Cards move strictly
/// forward: deck → table → discard pile. The deck itself is never shrunk;
/// `dealt_count` marks how much of it has been dealt.
#[derive(Clone, Debug)]
pub struct SetGame {
    config: SetConfig,
    rng: GameRng,
    /// All 81 cards in dealing order. Flags here are always defaults.
    deck: Vec<SetCard>,
    table: Vec<SetCard>,
    discard_pile: Vector<SetCard>,
    dealt_count: usize,
    match_count: u32,
}

impl Default for SetGame {
    fn default() -> Self {
        Self::new()
    }
}

impl SetGame {
    /// New game with the standard 12-card table, seeded from entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::shuffled(SetConfig::default(), GameRng::from_entropy(), full_deck())
    }

    /// New game with the standard 12-card table and a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::shuffled(SetConfig::default().with_seed(seed), GameRng::new(seed), full_deck())
    }

    /// Shuffle `deck`, then deal. `config` must already be validated.
    pub(crate) fn shuffled(config: SetConfig, mut rng: GameRng, mut deck: Vec<SetCard>) -> Self {
        rng.shuffle(&mut deck);
        Self::stacked(config, rng, deck)
    }

    /// Deal from `deck` in the order given. `config` must already be validated.
    pub(crate) fn stacked(config: SetConfig, rng: GameRng, deck: Vec<SetCard>) -> Self {
        let mut game = Self {
            config,
            rng,
            deck,
            table: Vec::new(),
            discard_pile: Vector::new(),
            dealt_count: 0,
            match_count: 0,
        };
        game.deal_initial();
        game
    }

    fn deal_initial(&mut self) {
        let count = self.config.initial_table_size.min(self.deck.len());
        self.table = self.deck[..count].to_vec();
        self.dealt_count = count;
        self.discard_pile = Vector::new();
        self.match_count = 0;
        debug!(
            seed = self.rng.seed(),
            table_size = self.table.len(),
            "dealt initial table"
        );
    }

    // === Queries ===

    /// The whole deck in dealing order, dealt cards included.
    #[must_use]
    pub fn deck(&self) -> &[SetCard] {
        &self.deck
    }

    /// Cards not yet dealt.
    #[must_use]
    pub fn undealt(&self) -> &[SetCard] {
        &self.deck[self.dealt_count..]
    }

    #[must_use]
    pub fn cards_on_table(&self) -> &[SetCard] {
        &self.table
    }

    /// Retired matches, oldest first, flags reset.
    #[must_use]
    pub fn discard_pile(&self) -> &Vector<SetCard> {
        &self.discard_pile
    }

    /// Confirmed matches since the last restart.
    #[must_use]
    pub fn match_count(&self) -> u32 {
        self.match_count
    }

    /// How many deck cards have gone to the table.
    #[must_use]
    pub fn dealt_count(&self) -> usize {
        self.dealt_count
    }

    #[must_use]
    pub fn remaining_in_deck(&self) -> usize {
        self.deck.len() - self.dealt_count
    }

    #[must_use]
    pub fn initial_table_size(&self) -> usize {
        self.config.initial_table_size
    }

    /// True once every deck card has been dealt.
    #[must_use]
    pub fn is_deck_exhausted(&self) -> bool {
        self.dealt_count >= self.deck.len()
    }

    /// Seed driving the shuffles of this game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Position of the shuffle stream; the next restart draws from here.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn config(&self) -> &SetConfig {
        &self.config
    }

    /// Look up a card on the table.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&SetCard> {
        self.table.iter().find(|card| card.id() == id)
    }

    #[must_use]
    pub fn is_on_table(&self, id: CardId) -> bool {
        self.card(id).is_some()
    }

    /// Selected cards, in table order.
    #[must_use]
    pub fn selected_cards(&self) -> SmallVec<[SetCard; 3]> {
        self.table.iter().filter(|card| card.is_selected()).copied().collect()
    }

    /// Cards flagged as a confirmed valid match, in table order.
    #[must_use]
    pub fn matched_cards(&self) -> SmallVec<[SetCard; 3]> {
        self.table.iter().filter(|card| card.is_matched()).copied().collect()
    }

    /// Owned projection for hosts.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            table: self.table.clone(),
            discard_pile: self.discard_pile.clone(),
            match_count: self.match_count,
            dealt_count: self.dealt_count,
            deck_size: self.deck.len(),
            initial_table_size: self.config.initial_table_size,
            deck_exhausted: self.is_deck_exhausted(),
        }
    }

    // === Intents ===

    /// Dispatch an intent.
    pub fn apply(&mut self, intent: Intent) -> IntentOutcome {
        match intent {
            Intent::Choose(id) => IntentOutcome::Choose(self.choose(id)),
            Intent::DealThree => IntentOutcome::Deal(self.deal_three()),
            Intent::DiscardMatched => IntentOutcome::Discard(self.discard_matched()),
            Intent::Restart => {
                self.restart();
                IntentOutcome::Restart
            }
            Intent::FindMatchingSet => IntentOutcome::Found(self.find_matching_set()),
        }
    }

    /// Toggle selection of a card.
    ///
    /// A full selection of three is resolved first: a confirmed match is
    /// retired (as in [`deal_three`](Self::deal_three)), anything else is
    /// cleared. The toggle applies afterwards, so choosing a card that was
    /// just retired does nothing more. Completing a selection of three
    /// evaluates it and stamps the verdict on all three cards.
    pub fn choose(&mut self, id: CardId) -> ChooseOutcome {
        if self.selected_positions().len() == DEAL_SIZE {
            if self.matched_positions().len() == DEAL_SIZE {
                self.replace_or_remove_match();
            } else {
                self.clear_selection();
            }
        }

        let Some(index) = self.position(id) else {
            trace!(%id, "chosen card is not on the table");
            return ChooseOutcome::NotOnTable;
        };

        if !self.table[index].toggle_selected() {
            return ChooseOutcome::Deselected;
        }

        let selected = self.selected_positions();
        if selected.len() < DEAL_SIZE {
            return ChooseOutcome::Selected;
        }

        let is_match = is_valid_match(selected.iter().map(|&i| &self.table[i]));
        for &i in &selected {
            self.table[i].set_match_result(Some(is_match));
        }
        let cards = Triple::new(
            self.table[selected[0]].id(),
            self.table[selected[1]].id(),
            self.table[selected[2]].id(),
        );
        debug!(?cards, is_match, "selection evaluated");

        ChooseOutcome::Evaluated { cards, is_match }
    }

    /// Deal three cards.
    ///
    /// With a confirmed match on the table, the match is retired instead:
    /// replaced in place while the table is at its initial size and the deck
    /// can cover it, removed otherwise. Without one, three cards are appended
    /// if the deck has them.
    pub fn deal_three(&mut self) -> DealOutcome {
        if self.matched_positions().len() == DEAL_SIZE {
            return self.replace_or_remove_match();
        }

        if self.remaining_in_deck() < DEAL_SIZE {
            trace!(remaining = self.remaining_in_deck(), "deck cannot cover a deal");
            return DealOutcome::NoOp;
        }

        let start = self.dealt_count;
        self.table.extend_from_slice(&self.deck[start..start + DEAL_SIZE]);
        self.dealt_count += DEAL_SIZE;
        debug!(
            dealt = self.dealt_count,
            table_size = self.table.len(),
            "dealt three cards"
        );

        DealOutcome::Appended
    }

    /// Remove a confirmed match from the table.
    ///
    /// Returns `false`, changing nothing, unless exactly three cards are
    /// flagged as a valid match.
    pub fn discard_matched(&mut self) -> bool {
        if self.take_match().is_none() {
            trace!("no confirmed match to discard");
            return false;
        }

        self.table.retain(|card| !card.is_matched());
        debug!(
            match_count = self.match_count,
            table_size = self.table.len(),
            "discarded match"
        );
        true
    }

    /// Reshuffle and deal a fresh table. Clears the discard pile and counter.
    pub fn restart(&mut self) {
        self.rng.shuffle(&mut self.deck);
        self.deal_initial();
    }

    /// First valid triple on the table, in scan order.
    #[must_use]
    pub fn find_matching_set(&self) -> Option<Triple<CardId>> {
        find_matching_set(&self.table)
    }

    // === Internals ===

    fn position(&self, id: CardId) -> Option<usize> {
        self.table.iter().position(|card| card.id() == id)
    }

    fn selected_positions(&self) -> Positions {
        (0..self.table.len())
            .filter(|&i| self.table[i].is_selected())
            .collect()
    }

    fn matched_positions(&self) -> Positions {
        (0..self.table.len())
            .filter(|&i| self.table[i].is_matched())
            .collect()
    }

    fn clear_selection(&mut self) {
        for card in self.table.iter_mut().filter(|card| card.is_selected()) {
            card.reset();
        }
    }

    /// Copy a confirmed match to the discard pile and count it.
    ///
    /// Leaves the cards on the table; returns their positions.
    fn take_match(&mut self) -> Option<Positions> {
        let matched = self.matched_positions();
        if matched.len() != DEAL_SIZE {
            return None;
        }

        for &i in &matched {
            let mut card = self.table[i];
            card.reset();
            self.discard_pile.push_back(card);
        }
        self.match_count += 1;

        Some(matched)
    }

    fn replace_or_remove_match(&mut self) -> DealOutcome {
        let in_place = self.table.len() == self.config.initial_table_size
            && self.remaining_in_deck() >= DEAL_SIZE;

        let Some(matched) = self.take_match() else {
            return DealOutcome::NoOp;
        };

        if in_place {
            let start = self.dealt_count;
            let fresh = &self.deck[start..start + DEAL_SIZE];
            for (&i, card) in matched.iter().zip(fresh) {
                self.table[i] = *card;
            }
            self.dealt_count += DEAL_SIZE;
            debug!(
                match_count = self.match_count,
                dealt = self.dealt_count,
                "replaced match in place"
            );
            DealOutcome::ReplacedMatch
        } else {
            self.table.retain(|card| !card.is_matched());
            debug!(
                match_count = self.match_count,
                table_size = self.table.len(),
                "removed match from table"
            );
            DealOutcome::RemovedMatch
        }
    }
}
