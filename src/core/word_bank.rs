//! Candidate word table.
//!
//! A `WordBank` maps each difficulty tier to the words a puzzle may be
//! drawn from. It is built once at startup, validated, and then shared
//! read-only by every game that uses it.
//!
//! ## Example
//!
//! ```
//! use hangman_engine::core::{Difficulty, WordBank};
//!
//! let bank = WordBank::new()
//!     .with_words(Difficulty::Easy, ["CAT", "DOG"])
//!     .with_words(Difficulty::Medium, ["PYTHON", "BADGER"])
//!     .with_words(Difficulty::Hard, ["SPHINX", "QUARTZ"]);
//!
//! assert!(bank.validate().is_ok());
//! assert_eq!(bank.words(Difficulty::Easy).len(), 2);
//! ```

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::Difficulty;
use crate::error::{HangmanError, Result};

const EASY_WORDS: &[&str] = &["CHARGER", "TABLET", "SYSTEM", "INTERNET"];
const MEDIUM_WORDS: &[&str] = &["AGGRESSIVE", "FUTURISTIC", "ANACONDA", "EINSTEIN"];
const HARD_WORDS: &[&str] = &["CROQUET", "BAGPIPES", "BANJO", "GAZEBO"];

/// Returns true if `word` can be a secret word: non-empty, ASCII letters only.
pub(crate) fn is_valid_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic())
}

/// Table of candidate words per difficulty tier.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordBank {
    tiers: FxHashMap<Difficulty, Vec<String>>,
}

impl WordBank {
    /// Create an empty word bank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in word table.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .with_words(Difficulty::Easy, EASY_WORDS.iter().copied())
            .with_words(Difficulty::Medium, MEDIUM_WORDS.iter().copied())
            .with_words(Difficulty::Hard, HARD_WORDS.iter().copied())
    }

    /// Set the candidate words for a tier, replacing any previous list.
    ///
    /// Words are uppercased. `Unrecognized` is stored under the medium pool,
    /// since that is where it draws from.
    #[must_use]
    pub fn with_words<I, S>(mut self, difficulty: Difficulty, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words
            .into_iter()
            .map(|w| w.into().to_ascii_uppercase())
            .collect();
        self.tiers.insert(difficulty.word_pool(), words);
        self
    }

    /// Candidate words for a tier. Empty if the tier was never populated.
    #[must_use]
    pub fn words(&self, difficulty: Difficulty) -> &[String] {
        self.tiers
            .get(&difficulty.word_pool())
            .map_or(&[], Vec::as_slice)
    }

    /// Check whether `word` is a candidate for `difficulty`.
    #[must_use]
    pub fn contains(&self, difficulty: Difficulty, word: &str) -> bool {
        self.words(difficulty).iter().any(|w| w == word)
    }

    /// Verify every known tier can supply a puzzle.
    ///
    /// Each tier needs at least two distinct alphabetic words, otherwise
    /// drawing a word different from the active one could never succeed.
    pub fn validate(&self) -> Result<()> {
        for difficulty in Difficulty::ALL {
            let words = self.words(difficulty);
            if words.is_empty() {
                return Err(HangmanError::EmptyWordList(difficulty));
            }

            if let Some(bad) = words.iter().find(|w| !is_valid_word(w)) {
                return Err(HangmanError::InvalidWord(bad.clone()));
            }

            let distinct = words.iter().collect::<FxHashSet<_>>().len();
            if distinct < 2 {
                return Err(HangmanError::TooFewWords { difficulty, distinct });
            }
        }
        Ok(())
    }
}
