//! Error types.
//!
//! The kinds never overlap:
//! - `InvalidCard`: a malformed card identity.
//! - `IllegalState`: the caller drove the engine into an impossible
//!   transition (a card played twice). This is an orchestration bug.
//! - `IllegalMove`: a player's capture broke a table rule.
//! - `IllegalStrategy`: a strategy returned a decision that never reached
//!   the table (card not in hand).

use thiserror::Error;

use crate::cards::{Card, CardRun};

pub type Result<T> = std::result::Result<T, TablicError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TablicError {
    #[error("invalid card '{0}'")]
    InvalidCard(i32),
    #[error("illegal state: {0}")]
    IllegalState(#[from] StateViolation),
    #[error("illegal move: {0}")]
    IllegalMove(#[from] MoveViolation),
    #[error("illegal strategy: {0}")]
    IllegalStrategy(#[from] StrategyViolation),
    #[error("requested {requested} cards, only {available} available")]
    InvalidDraw { requested: usize, available: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl TablicError {
    #[must_use]
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, TablicError::IllegalMove(_))
    }

    #[must_use]
    pub fn is_illegal_state(&self) -> bool {
        matches!(self, TablicError::IllegalState(_))
    }
}

/// Impossible transitions detected by the table or the round driver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateViolation {
    #[error("{card} already on table - {}", CardRun(.table))]
    AlreadyOnTable { card: Card, table: Vec<Card> },
    #[error("{card} already played")]
    AlreadyPlayed { card: Card },
    #[error("round is over, no cards left to play")]
    RoundOver,
}

/// Table rules a requested capture can break, in the order they are checked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveViolation {
    #[error("{played} must take at least one card")]
    NothingTaken { played: Card },
    #[error("card {played} played and taken")]
    PlayedAndTaken { played: Card },
    #[error("cannot take {requested} cards, only {on_table} on the table")]
    TooManyTaken { requested: usize, on_table: usize },
    #[error("{card} not on table - {}", CardRun(.table))]
    NotOnTable { card: Card, table: Vec<Card> },
    #[error("took card {card} more than once")]
    TakenTwice { card: Card },
    #[error("cannot take {} with {played}", CardRun(.group))]
    SumMismatch { played: Card, group: Vec<Card> },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrategyViolation {
    #[error("cannot play {card}: not in hand")]
    NotInHand { card: Card },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: i32) -> Card {
        Card::new(id).unwrap()
    }

    #[test]
    fn test_messages_render_cards() {
        let err: TablicError = MoveViolation::SumMismatch {
            played: card(0),
            group: vec![card(1), card(2)],
        }
        .into();
        assert_eq!(err.to_string(), "illegal move: cannot take [2♠][3♠] with [A♠]");

        let err: TablicError = StateViolation::AlreadyOnTable {
            card: card(1),
            table: vec![card(1), card(2)],
        }
        .into();
        assert_eq!(err.to_string(), "illegal state: [2♠] already on table - [2♠][3♠]");
    }

    #[test]
    fn test_kinds_are_disjoint() {
        let state: TablicError = StateViolation::AlreadyPlayed { card: card(0) }.into();
        let mv: TablicError = MoveViolation::TakenTwice { card: card(0) }.into();
        let strategy: TablicError = StrategyViolation::NotInHand { card: card(0) }.into();

        assert!(state.is_illegal_state() && !state.is_illegal_move());
        assert!(mv.is_illegal_move() && !mv.is_illegal_state());
        assert!(!strategy.is_illegal_move() && !strategy.is_illegal_state());
        assert_eq!(strategy.to_string(), "illegal strategy: cannot play [A♠]: not in hand");
    }
}
