//! Hangman: guess the secret word one letter at a time.
//!
//! - The word is drawn from the current difficulty's pool
//! - Each wrong letter costs one of 6 guesses
//! - Revealing every letter wins; the sixth miss loses
//! - Score is the tier multiplier times the guesses left

mod game;
mod reveal;

pub use game::{HangmanGame, HangmanGameBuilder, HangmanSnapshot, DEFAULT_UNDOS, GAME_ID};
pub use reveal::{GuessOutcome, WordRevealState, MAX_INCORRECT_GUESSES, PLACEHOLDER};
