//! The table engine.
//!
//! `Table` owns the shared play area and enforces every placement and
//! capture rule. Captures are requested as groups of table cards
//! (`TakenCards`), each of which must sum to a capture value of the played
//! card. Accepted captures come back as a `Capture`.

pub mod capture;
pub mod engine;
pub mod render;

pub use capture::{sums_to, Capture, TakenCards};
pub use engine::Table;
