//! Host-facing game trait.
//!
//! The host application registers mini-games by `Game::game_id` and
//! drives them through the `Game` capability set. It never interprets
//! game-specific concepts directly.

pub mod game;

pub use game::{Game, GameResult, PuzzleStatus};
