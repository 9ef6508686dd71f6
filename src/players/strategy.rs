//! The decision-making seam between players and the table.

use crate::cards::Card;
use crate::table::{Table, TakenCards};

/// One play: the card to lay down and the groups of table cards it takes.
///
/// An empty `taken`, or one holding only empty groups, places the card
/// without capturing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decision {
    pub card: Card,
    pub taken: TakenCards,
}

impl Decision {
    /// Lay `card` on the table and take nothing.
    #[must_use]
    pub fn place(card: Card) -> Self {
        Self {
            card,
            taken: Vec::new(),
        }
    }

    /// Play `card` and capture `taken`.
    #[must_use]
    pub fn take(card: Card, taken: TakenCards) -> Self {
        Self { card, taken }
    }

    /// True when this decision captures nothing.
    #[must_use]
    pub fn takes_nothing(&self) -> bool {
        self.taken.iter().all(Vec::is_empty)
    }
}

/// Chooses a play from a hand, given the current table.
///
/// Implementations must always return some card. They should return a
/// legal move, but nothing trusts them to: the player checks the card is in
/// hand and the table enforces every capture rule.
///
/// `table` is read-only. Clone it (O(1)) to try captures on a scratch copy.
pub trait Strategy {
    fn decide(&mut self, hand: &[Card], table: &Table) -> Decision;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn decide(&mut self, hand: &[Card], table: &Table) -> Decision {
        (**self).decide(hand, table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FirstCard;

    impl Strategy for FirstCard {
        fn decide(&mut self, hand: &[Card], _table: &Table) -> Decision {
            Decision::place(hand[0])
        }
    }

    #[test]
    fn test_takes_nothing() {
        let card = Card::new(0).unwrap();
        let other = Card::new(13).unwrap();

        assert!(Decision::place(card).takes_nothing());
        assert!(Decision::take(card, vec![vec![], vec![]]).takes_nothing());
        assert!(!Decision::take(card, vec![vec![], vec![other]]).takes_nothing());
    }

    #[test]
    fn test_boxed_strategy_delegates() {
        let hand = [Card::new(5).unwrap(), Card::new(6).unwrap()];
        let mut boxed: Box<dyn Strategy> = Box::new(FirstCard);

        assert_eq!(boxed.decide(&hand, &Table::new()), Decision::place(hand[0]));
    }
}
