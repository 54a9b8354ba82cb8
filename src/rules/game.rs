//! Host game trait.
//!
//! Every mini-game the host application runs implements `Game`:
//! - Identify itself by a stable id for the host's registry
//! - Report and change its difficulty
//! - Answer undo and high-score queries
//!
//! The host renders state by polling; there is no callback interface.

use serde::{Deserialize, Serialize};

use crate::core::Difficulty;

/// Result of a finished puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Won,
    Lost,
}

/// Progress of the current puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzleStatus {
    InProgress,
    Won,
    Lost,
}

impl PuzzleStatus {
    /// The final result, or `None` while the puzzle continues.
    #[must_use]
    pub fn result(self) -> Option<GameResult> {
        match self {
            PuzzleStatus::InProgress => None,
            PuzzleStatus::Won => Some(GameResult::Won),
            PuzzleStatus::Lost => Some(GameResult::Lost),
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != PuzzleStatus::InProgress
    }
}

/// Capability set shared by the host's mini-games.
///
/// Object safe, so hosts can keep `Box<dyn Game>` registries.
pub trait Game {
    /// Current difficulty.
    fn difficulty(&self) -> Difficulty;

    /// Change difficulty. Implementations restart the current round.
    fn set_difficulty(&mut self, difficulty: Difficulty);

    /// Stable registry id.
    fn game_id(&self) -> &'static str;

    /// Whether the current score beats the stored top score.
    fn high_top_score(&self) -> bool;

    /// Undo the last move. Returns `false` if nothing was undone.
    fn undo(&mut self) -> bool;
}
