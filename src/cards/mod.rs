//! Cards and the deck they come from.
//!
//! ## Key Types
//!
//! - `Card`: identity plus derived rank, suit, score and capture values
//! - `Rank`, `Suit`: the face of a card
//! - `Deck`: ordered 52-card container with seeded shuffle and cut
//! - `CardRun`: back-to-back display of a slice of cards

pub mod card;
pub mod deck;

pub use card::{Card, CardRun, Rank, Suit, DECK_SIZE};
pub use deck::Deck;
