//! Round driver.
//!
//! Deals a seeded deck onto the table and into the players' hands, then
//! runs one turn at a time, re-dealing hands whenever they all run dry:
//! - Opening table: `table_cards` cards cut from the shuffled deck
//! - Hands: `hand_size` cards each, drawn from the top
//! - The round ends when the deck and every hand are empty
//!
//! Scoring across rounds is left to the caller.

pub mod driver;

pub use driver::Round;
