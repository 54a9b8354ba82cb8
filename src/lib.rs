//! # hangman-engine
//!
//! Rules engine for a single-player hangman mini-game, hosted by an
//! application that runs several mini-games.
//!
//! ## Design Principles
//!
//! 1. **Injected Configuration**: Word lists live in a `WordBank` passed in
//!    at construction, validated once, then shared read-only.
//!
//! 2. **Single Mutation Point**: The reveal state changes only through
//!    `HangmanGame::apply_guess`; callers get read-only views.
//!
//! 3. **Deterministic**: Word selection uses a seeded ChaCha RNG whose
//!    state is part of the snapshot, so a restored game draws the same
//!    next word.
//!
//! ## Example
//!
//! ```
//! use hangman_engine::{Difficulty, Game, GuessOutcome, HangmanGameBuilder};
//!
//! let mut game = HangmanGameBuilder::new()
//!     .difficulty(Difficulty::Hard)
//!     .word("banjo")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(game.game_id(), "hangman");
//! assert_eq!(game.apply_guess('n'), GuessOutcome::Hit { revealed: 1 });
//! assert_eq!(game.word_state().revealed(), "__N__");
//! assert_eq!(game.compute_score(), 54);
//! ```
//!
//! ## Modules
//!
//! - `core`: Difficulty tiers, word bank, RNG
//! - `rules`: `Game` trait shared with the host
//! - `games`: The hangman implementation
//! - `error`: Error type

pub mod core;
pub mod error;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Difficulty, GameRng, GameRngState, WordBank};

pub use crate::error::{HangmanError, Result};

pub use crate::games::hangman::{
    GuessOutcome, HangmanGame, HangmanGameBuilder, HangmanSnapshot, WordRevealState,
    DEFAULT_UNDOS, GAME_ID, MAX_INCORRECT_GUESSES, PLACEHOLDER,
};

pub use crate::rules::{Game, GameResult, PuzzleStatus};
