//! Game-wide plumbing: deterministic randomness and dealing configuration.

pub mod config;
pub mod rng;

pub use config::GameConfig;
pub use rng::GameRng;
