//! A seat at the table: hand, captured pile, clear count, and strategy.

use tracing::warn;

use super::strategy::Strategy;
use crate::cards::Card;
use crate::error::{Result, StrategyViolation};
use crate::table::{Capture, Table};

/// What a successful play did to the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The card was laid on the table; nothing was captured.
    Placed(Card),
    /// The card captured cards from the table.
    Captured(Capture),
}

/// A player driven by a `Strategy`.
///
/// Score is the sum of captured card scores plus one per clear.
#[derive(Clone, Debug)]
pub struct Player<S> {
    strategy: S,
    hand: Vec<Card>,
    collection: Vec<Card>,
    clears: u32,
}

impl<S: Strategy> Player<S> {
    #[must_use]
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            hand: Vec::new(),
            collection: Vec::new(),
            clears: 0,
        }
    }

    /// Ask the strategy for a play and apply it to `table`.
    ///
    /// Fails with `IllegalStrategy` when the chosen card is not in hand,
    /// and passes table errors through unchanged. Nothing about the player
    /// changes unless the table accepted the move.
    pub fn play(&mut self, table: &mut Table) -> Result<PlayOutcome> {
        let decision = self.strategy.decide(&self.hand, table);
        let card = decision.card;

        let Some(index) = self.hand.iter().position(|&c| c == card) else {
            warn!(%card, "strategy played a card not in hand");
            return Err(StrategyViolation::NotInHand { card }.into());
        };

        let outcome = if decision.takes_nothing() {
            table.place(card)?;
            PlayOutcome::Placed(card)
        } else {
            let capture = table.take(card, &decision.taken)?;
            self.clears += u32::from(capture.cleared);
            self.collection.extend_from_slice(&capture.cards);
            PlayOutcome::Captured(capture)
        };

        self.hand.remove(index);
        Ok(outcome)
    }

    pub fn receive_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
    }

    /// Empty the hand and captured pile and zero the clear count.
    pub fn reset(&mut self) {
        self.hand.clear();
        self.collection.clear();
        self.clears = 0;
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.clears + self.collection.iter().map(|c| c.score()).sum::<u32>()
    }

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Cards captured so far, played cards included.
    #[must_use]
    pub fn collection(&self) -> &[Card] {
        &self.collection
    }

    /// How many times this player emptied the table.
    #[must_use]
    pub fn clears(&self) -> u32 {
        self.clears
    }

    #[must_use]
    pub fn strategy(&self) -> &S {
        &self.strategy
    }
}
