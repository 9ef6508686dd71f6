//! The table: shared play area and sole authority on move legality.
//!
//! `place` and `take` are atomic. Every rule is checked before anything is
//! mutated, so a rejected call leaves `cards`, `history` and `last` exactly
//! as they were.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::Serialize;
use tracing::debug;

use super::capture::{flatten, sums_to, Capture, FlatTaken};
use crate::cards::Card;
use crate::error::{MoveViolation, Result, StateViolation};

/// Cards face-up on the table plus the ledger of every card ever played.
///
/// `history` is never shortened by a capture: a card that has left the
/// table can never be placed or taken again until `reset`.
///
/// Backed by persistent vectors, so cloning is O(1). Strategies can try a
/// capture on a scratch copy without touching the real table.
///
/// ```
/// use tablic::cards::Card;
/// use tablic::table::Table;
///
/// let card = |id| Card::new(id).unwrap();
///
/// let mut table = Table::new();
/// table.place(card(9)).unwrap();  // 10♠
/// table.place(card(13)).unwrap(); // A♥
///
/// // A♠ as 11 takes 10 + 1
/// let capture = table.take(card(0), &[vec![card(9), card(13)]]).unwrap();
/// assert!(capture.cleared);
/// assert_eq!(capture.cards, vec![card(0), card(9), card(13)]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    cards: Vector<Card>,
    history: Vector<Card>,
    last: Option<Card>,
}

impl Table {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards currently on the table, in the order they were placed.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Every card placed or played since the last reset.
    #[must_use]
    pub fn history(&self) -> &Vector<Card> {
        &self.history
    }

    /// The most recently played card.
    #[must_use]
    pub fn last(&self) -> Option<Card> {
        self.last
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Is `card` lying on the table right now?
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.iter().any(|&c| c == card)
    }

    /// Has `card` been placed or played since the last reset?
    #[must_use]
    pub fn was_played(&self, card: Card) -> bool {
        self.history.iter().any(|&c| c == card)
    }

    fn check_unused(&self, card: Card) -> Result<()> {
        if self.contains(card) {
            return Err(StateViolation::AlreadyOnTable {
                card,
                table: self.cards.iter().copied().collect(),
            }
            .into());
        }
        if self.was_played(card) {
            return Err(StateViolation::AlreadyPlayed { card }.into());
        }
        Ok(())
    }

    /// Lay `card` face-up on the table without taking anything.
    ///
    /// Fails with `IllegalState` if the card is already on the table or has
    /// been played before.
    pub fn place(&mut self, card: Card) -> Result<()> {
        self.check_unused(card)?;

        self.cards.push_back(card);
        self.history.push_back(card);
        self.last = Some(card);

        debug!(%card, on_table = self.cards.len(), "placed card");
        Ok(())
    }

    /// Run every capture rule in order and return the flattened taken cards.
    fn validate_take(&self, played: Card, taken: &[Vec<Card>]) -> Result<FlatTaken> {
        self.check_unused(played)?;

        let flat = flatten(taken);

        if flat.is_empty() {
            return Err(MoveViolation::NothingTaken { played }.into());
        }

        if flat.contains(&played) {
            return Err(MoveViolation::PlayedAndTaken { played }.into());
        }

        if flat.len() > self.cards.len() {
            return Err(MoveViolation::TooManyTaken {
                requested: flat.len(),
                on_table: self.cards.len(),
            }
            .into());
        }

        if let Some(&card) = flat.iter().find(|&&c| !self.contains(c)) {
            return Err(MoveViolation::NotOnTable {
                card,
                table: self.cards.iter().copied().collect(),
            }
            .into());
        }

        let mut seen = FxHashSet::default();
        if let Some(&card) = flat.iter().find(|&&c| !seen.insert(c)) {
            return Err(MoveViolation::TakenTwice { card }.into());
        }

        let targets = played.capture_values();
        if let Some(group) = taken.iter().find(|group| !sums_to(group, targets)) {
            return Err(MoveViolation::SumMismatch {
                played,
                group: group.clone(),
            }
            .into());
        }

        Ok(flat)
    }

    /// Check a capture against every rule without applying it.
    ///
    /// Returns exactly the error `take` would.
    pub fn can_take(&self, played: Card, taken: &[Vec<Card>]) -> Result<()> {
        self.validate_take(played, taken).map(|_| ())
    }

    /// Play `played` and capture the cards in `taken`.
    ///
    /// Rules, checked in order (first violation wins):
    ///
    /// 1. `played` is neither on the table nor in the history (`IllegalState`).
    /// 2. At least one card is taken.
    /// 3. `played` is not among the taken cards.
    /// 4. No more cards are taken than lie on the table.
    /// 5. Every taken card is on the table.
    /// 6. No card is taken twice, even across groups.
    /// 7. Every group can sum to a capture value of `played`.
    ///
    /// Rules 2-7 fail with `IllegalMove`. On success `played` joins the
    /// history (never the table) and every taken card leaves the table.
    pub fn take(&mut self, played: Card, taken: &[Vec<Card>]) -> Result<Capture> {
        let flat = match self.validate_take(played, taken) {
            Ok(flat) => flat,
            Err(err) => {
                debug!(%played, %err, "rejected capture");
                return Err(err);
            }
        };

        self.history.push_back(played);
        for card in &flat {
            if let Some(index) = self.cards.iter().position(|c| c == card) {
                self.cards.remove(index);
            }
        }
        self.last = Some(played);

        let cleared = self.cards.is_empty();
        debug!(%played, taken = flat.len(), cleared, "captured");

        let mut cards = Vec::with_capacity(flat.len() + 1);
        cards.push(played);
        cards.extend(flat);
        Ok(Capture { cards, cleared })
    }

    /// Empty the table and forget its history.
    pub fn reset(&mut self) {
        self.cards.clear();
        self.history.clear();
        self.last = None;
    }
}
