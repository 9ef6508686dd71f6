//! Game configuration.
//!
//! `GameConfig` fixes how a round is dealt: how many players sit at the
//! table, how many cards each hand receives, how many open the table, and
//! the seed that drives shuffling and cutting.

use serde::{Deserialize, Serialize};

use crate::cards::DECK_SIZE;
use crate::error::{Result, TablicError};

/// Dealing parameters for a round.
///
/// ```
/// use tablic::core::GameConfig;
///
/// let config = GameConfig::new().with_players(4).with_seed(7);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.hand_size, 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of players at the table.
    pub player_count: usize,

    /// Cards dealt to each hand per deal.
    pub hand_size: usize,

    /// Cards placed face-up on the table before the first turn.
    pub table_cards: usize,

    /// Seed for the round's shuffle and cut.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            hand_size: 6,
            table_cards: 4,
            seed: 0,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_players(mut self, player_count: usize) -> Self {
        self.player_count = player_count;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    #[must_use]
    pub fn with_table_cards(mut self, table_cards: usize) -> Self {
        self.table_cards = table_cards;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Cards needed for the opening table plus one deal of every hand.
    #[must_use]
    pub fn opening_deal_size(&self) -> usize {
        self.table_cards + self.player_count * self.hand_size
    }

    /// Reject configurations no 52-card deck can deal.
    pub fn validate(&self) -> Result<()> {
        if self.player_count == 0 {
            return Err(TablicError::InvalidConfig("at least one player is required".into()));
        }
        if self.hand_size == 0 {
            return Err(TablicError::InvalidConfig("hand size must be at least 1".into()));
        }
        if self.opening_deal_size() > DECK_SIZE as usize {
            return Err(TablicError::InvalidConfig(format!(
                "dealing {} cards needs more than one deck of {}",
                self.opening_deal_size(),
                DECK_SIZE
            )));
        }
        Ok(())
    }
}
