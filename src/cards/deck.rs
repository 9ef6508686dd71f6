//! The 52-card French deck.
//!
//! Index 0 is the bottom of the deck and the last index is the top.
//! `draw` takes from the top; `cut_and_draw` rotates the deck at a random
//! point and takes from the bottom of the cut half.

use super::card::{Card, CardRun};
use crate::core::rng::GameRng;
use crate::error::{Result, TablicError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A full deck in identity order.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: Card::all().collect(),
        }
    }

    /// Restore every card, in identity order.
    pub fn reset(&mut self) {
        self.cards.clear();
        self.cards.extend(Card::all());
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn check_draw(&self, n: usize) -> Result<()> {
        if n == 0 || n > self.cards.len() {
            return Err(TablicError::InvalidDraw {
                requested: n,
                available: self.cards.len(),
            });
        }
        Ok(())
    }

    /// Draw `n` cards from the top of the deck.
    ///
    /// The first card returned is the one that was on top.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>> {
        self.check_draw(n)?;
        let split = self.cards.len() - n;
        let mut drawn = self.cards.split_off(split);
        drawn.reverse();
        Ok(drawn)
    }

    /// Cut the deck at a random point and draw `n` cards from the bottom of
    /// the cut half.
    ///
    /// The cut half moves beneath the rest, and the top of the remaining
    /// half becomes the top of the deck.
    pub fn cut_and_draw(&mut self, n: usize, rng: &mut GameRng) -> Result<Vec<Card>> {
        self.check_draw(n)?;
        let cut = rng.cut_point(self.cards.len());
        self.cards.rotate_right(cut);
        Ok(self.cards.drain(..n).collect())
    }

    /// Shuffle the remaining cards.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", CardRun(&self.cards))
    }
}
