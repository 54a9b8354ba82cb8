//! Core engine types: difficulty tiers, word table, RNG.
//!
//! Games are configured with a `WordBank` rather than a global table,
//! so hosts and tests can inject their own word lists.

pub mod difficulty;
pub mod rng;
pub mod word_bank;

pub use difficulty::Difficulty;
pub use rng::{GameRng, GameRngState};
pub use word_bank::WordBank;
