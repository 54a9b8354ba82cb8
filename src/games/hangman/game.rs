//! Hangman game implementation.

use std::sync::Arc;

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use super::reveal::{GuessOutcome, WordRevealState, MAX_INCORRECT_GUESSES};
use crate::core::{Difficulty, GameRng, GameRngState, WordBank};
use crate::error::Result;
use crate::rules::{Game, GameResult, PuzzleStatus};

/// Registry id of the hangman game.
pub const GAME_ID: &str = "hangman";

/// Undos granted to a new game.
pub const DEFAULT_UNDOS: i32 = 3;

/// A hangman game: one active puzzle plus difficulty, undo count and scoring.
///
/// Built with [`HangmanGameBuilder`]. The reveal state is only changed
/// through [`HangmanGame::apply_guess`].
#[derive(Clone, Debug)]
pub struct HangmanGame {
    words: Arc<WordBank>,
    rng: GameRng,
    state: WordRevealState,
    difficulty: Difficulty,
    num_undos: i32,
}

impl HangmanGame {
    /// Whether `input` is exactly one letter, either case.
    #[must_use]
    pub fn is_valid_guess(input: &str) -> bool {
        let mut chars = input.chars();
        matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_alphabetic())
    }

    /// The active puzzle.
    #[must_use]
    pub fn word_state(&self) -> &WordRevealState {
        &self.state
    }

    /// The word bank this game draws from.
    #[must_use]
    pub fn word_bank(&self) -> &WordBank {
        &self.words
    }

    /// Undos remaining. May be any value the host has set.
    #[must_use]
    pub fn num_undos(&self) -> i32 {
        self.num_undos
    }

    /// Set the undo count. No validation is performed.
    pub fn set_num_undos(&mut self, num_undos: i32) {
        self.num_undos = num_undos;
    }

    /// Apply a letter guess to the active puzzle.
    pub fn apply_guess(&mut self, letter: char) -> GuessOutcome {
        let was_over = self.status().is_terminal();
        let outcome = self.state.guess(letter);
        trace!("hangman guess {:?} -> {:?}", letter, outcome);

        let status = self.status();
        if !was_over && status.is_terminal() {
            debug!(
                "hangman puzzle {:?} ({}), score {}",
                status,
                self.state.word(),
                self.compute_score()
            );
        }
        outcome
    }

    /// Draw a random word for the current difficulty, different from the
    /// active word.
    pub fn select_new_word(&mut self) -> String {
        let candidates = self.words.words(self.difficulty);
        // The bank was validated at build time, so every pool holds at
        // least two distinct words and this loop terminates.
        loop {
            let idx = self.rng.gen_range_usize(0..candidates.len());
            let word = &candidates[idx];
            if word != self.state.word() {
                return word.clone();
            }
        }
    }

    /// Replace the active puzzle with a freshly drawn word.
    pub fn new_puzzle(&mut self) {
        let word = self.select_new_word();
        debug!("hangman new puzzle ({}), {} letters", self.difficulty, word.len());
        self.state = WordRevealState::from_bank_word(word);
    }

    /// Whether every letter of the word has been revealed.
    #[must_use]
    pub fn is_puzzle_solved(&self) -> bool {
        self.state.is_fully_revealed()
    }

    /// Whether the incorrect-guess limit has been reached.
    #[must_use]
    pub fn is_puzzle_lost(&self) -> bool {
        self.state.is_exhausted()
    }

    #[must_use]
    pub fn status(&self) -> PuzzleStatus {
        if self.is_puzzle_lost() {
            PuzzleStatus::Lost
        } else if self.is_puzzle_solved() {
            PuzzleStatus::Won
        } else {
            PuzzleStatus::InProgress
        }
    }

    /// The final result, or `None` while the puzzle continues.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.status().result()
    }

    /// Score for the current puzzle: tier multiplier times guesses left.
    ///
    /// Recomputed on every call.
    #[must_use]
    pub fn compute_score(&self) -> i32 {
        let remaining = i32::from(MAX_INCORRECT_GUESSES) - i32::from(self.state.incorrect_guesses());
        self.difficulty.multiplier() * remaining
    }

    /// Capture the game for the host's save mechanism.
    #[must_use]
    pub fn snapshot(&self) -> HangmanSnapshot {
        HangmanSnapshot {
            state: self.state.clone(),
            difficulty: self.difficulty,
            num_undos: self.num_undos,
            rng: self.rng.state(),
        }
    }

    /// Rebuild a game from a snapshot and the word bank it was played with.
    pub fn restore(snapshot: HangmanSnapshot, words: Arc<WordBank>) -> Result<Self> {
        if let Err(e) = words.validate() {
            warn!("rejecting word bank on restore: {}", e);
            return Err(e);
        }
        Ok(Self {
            words,
            rng: GameRng::from_state(&snapshot.rng),
            state: snapshot.state,
            difficulty: snapshot.difficulty,
            num_undos: snapshot.num_undos,
        })
    }

    /// Encode the game snapshot with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(&self.snapshot())?)
    }

    /// Decode a bincode snapshot and restore it against `words`.
    pub fn from_bytes(bytes: &[u8], words: Arc<WordBank>) -> Result<Self> {
        let snapshot: HangmanSnapshot = bincode::deserialize(bytes)?;
        Self::restore(snapshot, words)
    }
}

impl Game for HangmanGame {
    fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Changing difficulty always starts a new puzzle.
    fn set_difficulty(&mut self, difficulty: Difficulty) {
        debug!("hangman difficulty {} -> {}", self.difficulty, difficulty);
        self.difficulty = difficulty;
        self.new_puzzle();
    }

    fn game_id(&self) -> &'static str {
        GAME_ID
    }

    /// Top scores are not tracked for hangman.
    fn high_top_score(&self) -> bool {
        false
    }

    /// Undo is not supported; nothing changes.
    fn undo(&mut self) -> bool {
        false
    }
}

/// Serializable capture of a [`HangmanGame`].
///
/// The word bank is configuration and is supplied again on restore.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HangmanSnapshot {
    pub state: WordRevealState,
    pub difficulty: Difficulty,
    pub num_undos: i32,
    pub rng: GameRngState,
}

/// Builder for creating a HangmanGame.
#[derive(Clone, Debug)]
pub struct HangmanGameBuilder {
    words: Option<Arc<WordBank>>,
    difficulty: Difficulty,
    num_undos: i32,
    word: Option<String>,
    seed: Option<u64>,
}

impl Default for HangmanGameBuilder {
    fn default() -> Self {
        Self {
            words: None,
            difficulty: Difficulty::default(),
            num_undos: DEFAULT_UNDOS,
            word: None,
            seed: None,
        }
    }
}

impl HangmanGameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Word bank to draw from. Defaults to [`WordBank::standard`].
    pub fn word_bank(mut self, words: impl Into<Arc<WordBank>>) -> Self {
        self.words = Some(words.into());
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn num_undos(mut self, num_undos: i32) -> Self {
        self.num_undos = num_undos;
        self
    }

    /// Start with this word instead of a random draw.
    pub fn word(mut self, word: impl Into<String>) -> Self {
        self.word = Some(word.into());
        self
    }

    /// Seed for word selection. Defaults to an entropy seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the word bank and start the first puzzle.
    pub fn build(self) -> Result<HangmanGame> {
        let words = self.words.unwrap_or_else(|| Arc::new(WordBank::standard()));
        if let Err(e) = words.validate() {
            warn!("rejecting hangman word bank: {}", e);
            return Err(e);
        }

        let mut rng = self.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let state = match self.word {
            Some(word) => WordRevealState::new(word)?,
            None => {
                let candidates = words.words(self.difficulty);
                let idx = rng.gen_range_usize(0..candidates.len());
                WordRevealState::from_bank_word(candidates[idx].clone())
            }
        };

        let game = HangmanGame {
            words,
            rng,
            state,
            difficulty: self.difficulty,
            num_undos: self.num_undos,
        };

        debug!(
            "hangman game built ({}, seed {}), {} letters",
            game.difficulty,
            game.rng.seed(),
            game.state.word().len()
        );
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_bank() -> WordBank {
        WordBank::new()
            .with_words(Difficulty::Easy, ["CAT", "DOG"])
            .with_words(Difficulty::Medium, ["PYTHON", "BADGER"])
            .with_words(Difficulty::Hard, ["SPHINX", "QUARTZ"])
    }

    fn game_with_word(word: &str, difficulty: Difficulty) -> HangmanGame {
        HangmanGameBuilder::new()
            .difficulty(difficulty)
            .word(word)
            .seed(7)
            .build()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let game = HangmanGameBuilder::new().seed(1).build().unwrap();
        assert_eq!(game.difficulty(), Difficulty::Medium);
        assert_eq!(game.num_undos(), DEFAULT_UNDOS);
        assert_eq!(game.game_id(), "hangman");
        assert!(!game.high_top_score());
        assert!(game.word_bank().contains(Difficulty::Medium, game.word_state().word()));
    }

    #[test]
    fn test_entropy_seed_draws_from_tier() {
        for tier in Difficulty::ALL {
            let game = HangmanGameBuilder::new().difficulty(tier).build().unwrap();
            assert!(game.word_bank().contains(tier, game.word_state().word()));
            assert_eq!(game.status(), PuzzleStatus::InProgress);
        }
    }

    #[test]
    fn test_builder_debug() {
        let builder = HangmanGameBuilder::new().seed(5).word("BANJO");
        let text = format!("{:?}", builder);
        assert!(text.contains("BANJO"));
    }

    #[test]
    fn test_explicit_word_bypasses_draw() {
        let game = game_with_word("croquet", Difficulty::Hard);
        assert_eq!(game.word_state().word(), "CROQUET");
        assert_eq!(game.status(), PuzzleStatus::InProgress);
    }

    #[test]
    fn test_random_draw_uses_requested_tier() {
        for seed in 0..20 {
            let game = HangmanGameBuilder::new()
                .difficulty(Difficulty::Easy)
                .seed(seed)
                .build()
                .unwrap();
            assert!(game.word_bank().contains(Difficulty::Easy, game.word_state().word()));
        }
    }

    #[test]
    fn test_build_rejects_bad_bank() {
        let bank = small_bank().with_words(Difficulty::Easy, ["CAT"]);
        let result = HangmanGameBuilder::new().word_bank(bank).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_build_rejects_bad_explicit_word() {
        let result = HangmanGameBuilder::new().word("NOT A WORD").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_select_new_word_avoids_active() {
        let mut game = HangmanGameBuilder::new()
            .word_bank(small_bank())
            .difficulty(Difficulty::Easy)
            .word("CAT")
            .seed(3)
            .build()
            .unwrap();

        for _ in 0..20 {
            assert_eq!(game.select_new_word(), "DOG");
        }
    }

    #[test]
    fn test_valid_guess_predicate() {
        assert!(HangmanGame::is_valid_guess("a"));
        assert!(HangmanGame::is_valid_guess("A"));
        assert!(!HangmanGame::is_valid_guess("ab"));
        assert!(!HangmanGame::is_valid_guess("1"));
        assert!(!HangmanGame::is_valid_guess(""));
        assert!(!HangmanGame::is_valid_guess(" "));
        assert!(!HangmanGame::is_valid_guess("é"));
    }

    #[test]
    fn test_score_table() {
        let easy = game_with_word("TABLET", Difficulty::Easy);
        assert_eq!(easy.compute_score(), 18);

        let mut medium = game_with_word("ANACONDA", Difficulty::Medium);
        medium.apply_guess('Z');
        medium.apply_guess('X');
        assert_eq!(medium.compute_score(), 24);

        let mut hard = game_with_word("BANJO", Difficulty::Hard);
        for letter in ['C', 'D', 'E', 'F', 'G', 'H'] {
            hard.apply_guess(letter);
        }
        assert!(hard.is_puzzle_lost());
        assert_eq!(hard.compute_score(), 0);
    }

    #[test]
    fn test_unrecognized_difficulty_scores_as_easy() {
        let game = game_with_word("BANJO", Difficulty::Unrecognized);
        assert_eq!(game.compute_score(), 18);
    }

    #[test]
    fn test_win_flow() {
        let mut game = game_with_word("BANJO", Difficulty::Medium);
        for letter in ['b', 'a', 'n', 'j'] {
            game.apply_guess(letter);
            assert_eq!(game.result(), None);
        }
        assert_eq!(game.apply_guess('o'), GuessOutcome::Hit { revealed: 1 });
        assert!(game.is_puzzle_solved());
        assert_eq!(game.result(), Some(GameResult::Won));
        assert_eq!(game.apply_guess('z'), GuessOutcome::PuzzleOver);
    }

    #[test]
    fn test_undo_is_noop() {
        let mut game = game_with_word("BANJO", Difficulty::Medium);
        game.apply_guess('B');
        let before = game.snapshot();

        assert!(!game.undo());
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_set_num_undos_accepts_anything() {
        let mut game = game_with_word("BANJO", Difficulty::Medium);
        game.set_num_undos(-5);
        assert_eq!(game.num_undos(), -5);
        game.set_num_undos(i32::MAX);
        assert_eq!(game.num_undos(), i32::MAX);
    }

    #[test]
    fn test_set_difficulty_resets_puzzle() {
        let mut game = HangmanGameBuilder::new()
            .word_bank(small_bank())
            .word("CAT")
            .seed(11)
            .build()
            .unwrap();
        game.apply_guess('Z');

        game.set_difficulty(Difficulty::Hard);
        assert_eq!(game.difficulty(), Difficulty::Hard);
        assert!(game.word_bank().contains(Difficulty::Hard, game.word_state().word()));
        assert_eq!(game.word_state().incorrect_guesses(), 0);
    }

    #[test]
    fn test_bytes_roundtrip() {
        let mut game = game_with_word("GAZEBO", Difficulty::Hard);
        game.apply_guess('G');
        game.apply_guess('Q');
        game.set_num_undos(1);

        let bytes = game.to_bytes().unwrap();
        let restored = HangmanGame::from_bytes(&bytes, Arc::new(WordBank::standard())).unwrap();

        assert_eq!(restored.snapshot(), game.snapshot());
        assert_eq!(restored.word_state().revealed(), "G_____");
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        let result = HangmanGame::from_bytes(&[1, 2, 3], Arc::new(WordBank::standard()));
        assert!(result.is_err());
    }
}
