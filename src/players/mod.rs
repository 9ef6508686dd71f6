//! Player-table protocol.
//!
//! A `Strategy` turns a hand and a read-only table into a `Decision`.
//! `Player::play` checks the decision against the hand, then hands it to
//! the table as a `place` (nothing taken) or a `take`.

pub mod player;
pub mod strategy;

pub use player::{PlayOutcome, Player};
pub use strategy::{Decision, Strategy};
