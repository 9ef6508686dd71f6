use tracing::{debug, info};

use crate::cards::Deck;
use crate::core::{GameConfig, GameRng};
use crate::error::{Result, StateViolation, TablicError};
use crate::players::{PlayOutcome, Player, Strategy};
use crate::table::Table;

/// One round of Tablić: a deck, a table, and the players around it.
#[derive(Debug)]
pub struct Round<S> {
    config: GameConfig,
    rng: GameRng,
    number: u64,
    deck: Deck,
    table: Table,
    players: Vec<Player<S>>,
    active: usize,
}

impl<S: Strategy> Round<S> {
    /// Seat one player per strategy and deal the opening hand.
    ///
    /// The number of strategies must match `config.player_count`.
    pub fn new(config: GameConfig, strategies: impl IntoIterator<Item = S>) -> Result<Self> {
        config.validate()?;

        let players: Vec<Player<S>> = strategies.into_iter().map(Player::new).collect();
        if players.len() != config.player_count {
            return Err(TablicError::InvalidConfig(format!(
                "expected {} strategies, got {}",
                config.player_count,
                players.len()
            )));
        }

        let mut round = Self {
            rng: GameRng::new(config.seed),
            config,
            number: 0,
            deck: Deck::new(),
            table: Table::new(),
            players,
            active: 0,
        };
        round.deal()?;
        Ok(round)
    }

    /// Start over: fresh deck, empty table, empty players, new shuffle.
    ///
    /// Each deal draws from its own RNG stream, so the n-th deal of a given
    /// seed is always the same.
    pub fn deal(&mut self) -> Result<()> {
        self.number += 1;
        let mut rng = self.rng.for_round(self.number);

        self.deck.reset();
        self.table.reset();
        for player in &mut self.players {
            player.reset();
        }
        self.active = 0;

        self.deck.shuffle(&mut rng);
        if self.config.table_cards > 0 {
            for card in self.deck.cut_and_draw(self.config.table_cards, &mut rng)? {
                self.table.place(card)?;
            }
        }
        self.deal_hands()?;

        info!(
            round = self.number,
            players = self.players.len(),
            table = %self.table,
            "dealt round"
        );
        Ok(())
    }

    fn deal_hands(&mut self) -> Result<()> {
        for player in &mut self.players {
            let n = self.config.hand_size.min(self.deck.len());
            if n == 0 {
                break;
            }
            player.receive_cards(self.deck.draw(n)?);
        }
        debug!(remaining = self.deck.len(), "dealt hands");
        Ok(())
    }

    /// Let the active player make one play, then pass the turn.
    ///
    /// Hands are re-dealt from the deck once every hand is empty. Players
    /// left without cards by a short final deal are skipped. Errors from the
    /// player or table come back unchanged and the turn does not advance.
    pub fn play_turn(&mut self) -> Result<PlayOutcome> {
        if self.players.iter().all(|p| p.hand().is_empty()) {
            if self.deck.is_empty() {
                return Err(StateViolation::RoundOver.into());
            }
            self.deal_hands()?;
        }

        while self.players[self.active].hand().is_empty() {
            self.active = (self.active + 1) % self.players.len();
        }

        let outcome = self.players[self.active].play(&mut self.table)?;
        self.active = (self.active + 1) % self.players.len();
        Ok(outcome)
    }

    /// True once the deck and every hand are exhausted.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.deck.is_empty() && self.players.iter().all(|p| p.hand().is_empty())
    }

    /// Index of the player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn players(&self) -> &[Player<S>] {
        &self.players
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Each player's score so far this round.
    #[must_use]
    pub fn scores(&self) -> Vec<u32> {
        self.players.iter().map(Player::score).collect()
    }
}
