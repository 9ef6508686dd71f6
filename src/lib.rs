//! # tablic
//!
//! Rule-enforcement engine for Tablić, a capture card game played with a
//! 52-card French deck.
//!
//! A player lays one card from hand on the table and may capture groups of
//! table cards whose values sum to the played card's value. Aces count as
//! 1 or 11, so each group is checked against every way of valuing its cards.
//!
//! ## Modules
//!
//! - `cards`: card value model and the deck
//! - `table`: the table engine, sole authority on legal placements and captures
//! - `players`: the `Strategy` seam and the player-table protocol
//! - `round`: dealing and turn order for one round
//! - `core`: seeded RNG and game configuration
//! - `error`: the crate error type
//!
//! ## Example
//!
//! ```
//! use tablic::cards::Card;
//! use tablic::players::{Decision, Player, PlayOutcome, Strategy};
//! use tablic::table::Table;
//!
//! struct Greedy;
//!
//! impl Strategy for Greedy {
//!     fn decide(&mut self, hand: &[Card], table: &Table) -> Decision {
//!         // Take a single matching card if one is on the table.
//!         for &card in hand {
//!             for &target in table.cards() {
//!                 let taken = vec![vec![target]];
//!                 if table.can_take(card, &taken).is_ok() {
//!                     return Decision::take(card, taken);
//!                 }
//!             }
//!         }
//!         Decision::place(hand[0])
//!     }
//! }
//!
//! let card = |id| Card::new(id).unwrap();
//!
//! let mut table = Table::new();
//! table.place(card(9)).unwrap(); // 10♠
//!
//! let mut player = Player::new(Greedy);
//! player.receive_cards([card(22)]); // 10♣
//!
//! let outcome = player.play(&mut table).unwrap();
//! assert!(matches!(outcome, PlayOutcome::Captured(ref c) if c.cleared));
//! assert_eq!(player.score(), 3);
//! ```

pub mod cards;
pub mod core;
pub mod error;
pub mod players;
pub mod round;
pub mod table;

pub use crate::cards::{Card, Deck, Rank, Suit};
pub use crate::core::{GameConfig, GameRng};
pub use crate::error::{MoveViolation, Result, StateViolation, StrategyViolation, TablicError};
pub use crate::players::{Decision, PlayOutcome, Player, Strategy};
pub use crate::round::Round;
pub use crate::table::{Capture, Table, TakenCards};
