//! Reveal state of a single puzzle.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::word_bank::is_valid_word;
use crate::error::{HangmanError, Result};

/// Number of incorrect guesses that loses a puzzle.
pub const MAX_INCORRECT_GUESSES: u8 = 6;

/// Shown in the revealed view for letters not yet guessed.
pub const PLACEHOLDER: char = '_';

/// Result of applying one guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// The letter occurs in the word; `revealed` positions were uncovered.
    Hit { revealed: usize },
    /// The letter does not occur; `remaining` incorrect guesses are left.
    Miss { remaining: u8 },
    /// The letter was guessed before. No penalty.
    AlreadyGuessed,
    /// Not a letter.
    Invalid,
    /// The puzzle is already won or lost.
    PuzzleOver,
}

/// Which letters of the secret word have been revealed, and how many
/// incorrect guesses have been made.
///
/// Deserialization runs the same checks as a live puzzle, so a saved
/// state cannot hold a state no sequence of guesses could reach.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SavedRevealState")]
pub struct WordRevealState {
    word: String,
    correct: FxHashSet<char>,
    missed: SmallVec<[char; 6]>,
}

/// Unchecked wire form of [`WordRevealState`].
#[derive(Deserialize)]
struct SavedRevealState {
    word: String,
    correct: FxHashSet<char>,
    missed: SmallVec<[char; 6]>,
}

impl TryFrom<SavedRevealState> for WordRevealState {
    type Error = HangmanError;

    fn try_from(saved: SavedRevealState) -> Result<Self> {
        let SavedRevealState { word, correct, missed } = saved;

        if !is_valid_word(&word) || word.bytes().any(|b| b.is_ascii_lowercase()) {
            return Err(HangmanError::InvalidWord(word));
        }
        if missed.len() > usize::from(MAX_INCORRECT_GUESSES) {
            return Err(HangmanError::InvalidSnapshot(format!(
                "{} incorrect guesses, limit is {}",
                missed.len(),
                MAX_INCORRECT_GUESSES
            )));
        }
        if let Some(c) = correct.iter().chain(&missed).find(|c| !c.is_ascii_uppercase()) {
            return Err(HangmanError::InvalidSnapshot(format!(
                "guessed letter {:?} is not an uppercase letter",
                c
            )));
        }
        if let Some(c) = correct.iter().find(|&&c| !word.contains(c)) {
            return Err(HangmanError::InvalidSnapshot(format!(
                "letter {:?} marked correct but not in {}",
                c, word
            )));
        }
        if let Some(c) = missed.iter().find(|&&c| word.contains(c)) {
            return Err(HangmanError::InvalidSnapshot(format!(
                "letter {:?} marked missed but in {}",
                c, word
            )));
        }
        let distinct_misses = missed.iter().collect::<FxHashSet<_>>().len();
        if distinct_misses != missed.len() {
            return Err(HangmanError::InvalidSnapshot(
                "missed letters repeat".to_string(),
            ));
        }

        Ok(Self { word, correct, missed })
    }
}

impl WordRevealState {
    /// Start a puzzle for `word`. The word is uppercased.
    pub fn new(word: impl Into<String>) -> Result<Self> {
        let word = word.into().to_ascii_uppercase();
        if !is_valid_word(&word) {
            return Err(HangmanError::InvalidWord(word));
        }
        Ok(Self {
            word,
            correct: FxHashSet::default(),
            missed: SmallVec::new(),
        })
    }

    /// Start a puzzle for a word from a validated [`WordBank`](crate::core::WordBank).
    pub(crate) fn from_bank_word(word: String) -> Self {
        debug_assert!(is_valid_word(&word));
        Self {
            word,
            correct: FxHashSet::default(),
            missed: SmallVec::new(),
        }
    }

    /// The secret word.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn incorrect_guesses(&self) -> u8 {
        // Bounded by MAX_INCORRECT_GUESSES for every reachable state.
        u8::try_from(self.missed.len()).unwrap_or(u8::MAX)
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> u8 {
        MAX_INCORRECT_GUESSES.saturating_sub(self.incorrect_guesses())
    }

    /// Incorrect letters, in the order they were guessed.
    #[must_use]
    pub fn missed_letters(&self) -> &[char] {
        &self.missed
    }

    /// Whether `letter` has been guessed, correctly or not. Case-insensitive.
    #[must_use]
    pub fn is_guessed(&self, letter: char) -> bool {
        let letter = letter.to_ascii_uppercase();
        self.correct.contains(&letter) || self.missed.contains(&letter)
    }

    /// The word with unguessed letters replaced by [`PLACEHOLDER`].
    #[must_use]
    pub fn revealed(&self) -> String {
        self.word
            .chars()
            .map(|c| if self.correct.contains(&c) { c } else { PLACEHOLDER })
            .collect()
    }

    #[must_use]
    pub fn is_fully_revealed(&self) -> bool {
        self.revealed() == self.word
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.incorrect_guesses() >= MAX_INCORRECT_GUESSES
    }

    /// Apply a single-letter guess.
    pub(crate) fn guess(&mut self, letter: char) -> GuessOutcome {
        if !letter.is_ascii_alphabetic() {
            return GuessOutcome::Invalid;
        }
        if self.is_exhausted() || self.is_fully_revealed() {
            return GuessOutcome::PuzzleOver;
        }

        let letter = letter.to_ascii_uppercase();
        if self.is_guessed(letter) {
            return GuessOutcome::AlreadyGuessed;
        }

        let revealed = self.word.chars().filter(|&c| c == letter).count();
        if revealed > 0 {
            self.correct.insert(letter);
            GuessOutcome::Hit { revealed }
        } else {
            self.missed.push(letter);
            GuessOutcome::Miss {
                remaining: self.remaining_guesses(),
            }
        }
    }
}
