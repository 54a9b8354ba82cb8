//! Error types for the hangman engine.

use thiserror::Error;

use crate::core::Difficulty;

/// Errors raised while configuring or restoring a game.
///
/// Guess validation never produces an error; see
/// [`HangmanGame::is_valid_guess`](crate::games::hangman::HangmanGame::is_valid_guess).
#[derive(Debug, Error)]
pub enum HangmanError {
    /// A tier has no candidate words.
    #[error("word list for difficulty '{0}' is empty")]
    EmptyWordList(Difficulty),

    /// A tier cannot avoid repeating the active word.
    #[error("word list for difficulty '{difficulty}' needs at least 2 distinct words, found {distinct}")]
    TooFewWords { difficulty: Difficulty, distinct: usize },

    /// A secret or candidate word is empty or not purely alphabetic.
    #[error("invalid word '{0}': words must be non-empty and alphabetic")]
    InvalidWord(String),

    /// A saved puzzle is not one any sequence of guesses could produce.
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// Snapshot bytes could not be encoded or decoded.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),
}

/// Result alias for hangman operations.
pub type Result<T> = std::result::Result<T, HangmanError>;
