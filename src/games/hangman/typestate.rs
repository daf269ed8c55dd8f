//! Phase-specific typestate structs for a hangman round.
//!
//! Each phase is its own type. A `RoundFinished` ALWAYS has an outcome, and
//! only a `RoundInProgress` can accept a guess.

use std::collections::BTreeSet;

use rand::Rng;
use tracing::{debug, info, instrument};

use super::action::{Guess, GuessError, GuessFeedback};
use super::contracts::{Contract, GuessContract};
use super::phases::Outcome;
use super::{Letter, MAX_ATTEMPTS, Pattern, RoundStatus, rules};

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Round in progress - can accept guesses.
///
/// Invariants enforced by construction:
/// - the pattern has the word's length and at least one blank
/// - `wrong_attempts < max_attempts`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundInProgress {
    pub(super) theme_id: i32,
    pub(super) word: String,
    pub(super) pattern: Pattern,
    pub(super) used: BTreeSet<Letter>,
    pub(super) wrong_attempts: u8,
    pub(super) max_attempts: u8,
}

impl RoundInProgress {
    /// Starts a round with a word picked uniformly at random from `pool`.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::EmptyPool`] if the pool holds no playable word.
    #[instrument(skip(pool), fields(pool_size = pool.len()))]
    pub fn start<S: AsRef<str>>(theme_id: i32, pool: &[S]) -> Result<Self, GuessError> {
        Self::start_with_rng(theme_id, pool, &mut rand::rng())
    }

    /// Like [`RoundInProgress::start`] but with a caller-supplied random source.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::EmptyPool`] if the pool holds no playable word.
    #[instrument(skip(pool, rng), fields(pool_size = pool.len()))]
    pub fn start_with_rng<S, R>(theme_id: i32, pool: &[S], rng: &mut R) -> Result<Self, GuessError>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let word = rules::pick_word(pool, rng).ok_or(GuessError::EmptyPool { theme_id })?;
        Ok(Self::fresh(theme_id, word))
    }

    /// Starts a round on a known word.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::EmptyPool`] if the word has no letter to guess.
    #[instrument]
    pub fn with_word(theme_id: i32, word: &str) -> Result<Self, GuessError> {
        let word = rules::playable(word).ok_or(GuessError::EmptyPool { theme_id })?;
        Ok(Self::fresh(theme_id, word))
    }

    fn fresh(theme_id: i32, word: String) -> Self {
        info!(theme_id, length = word.chars().count(), "Round started");
        Self {
            theme_id,
            pattern: Pattern::hidden(&word),
            word,
            used: BTreeSet::new(),
            wrong_attempts: 0,
            max_attempts: MAX_ATTEMPTS,
        }
    }

    /// Applies a guess, consuming self and transitioning to the next state.
    ///
    /// A letter that was already used leaves the round untouched and reports
    /// [`GuessFeedback::Repeated`].
    ///
    /// Contract enforcement:
    /// - Preconditions checked always
    /// - Postconditions checked in debug builds only
    #[instrument(skip(self), fields(theme_id = self.theme_id, wrong = self.wrong_attempts))]
    pub fn guess(self, action: Guess) -> Result<(GuessResult, GuessFeedback), GuessError> {
        GuessContract::pre(&self, &action)?;

        let letter = action.letter();
        if self.used.contains(&letter) {
            debug!(%letter, "Letter already used");
            return Ok((GuessResult::InProgress(self), GuessFeedback::Repeated));
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut round = self;
        round.used.insert(letter);
        let revealed = round.pattern.reveal(&round.word, letter);

        let feedback = if revealed > 0 {
            debug!(%letter, revealed, "Hit");
            if rules::is_won(&round.pattern) {
                return Ok((
                    GuessResult::Finished(round.finish(Outcome::Won)),
                    GuessFeedback::Hit { revealed },
                ));
            }
            GuessFeedback::Hit { revealed }
        } else {
            round.wrong_attempts += 1;
            debug!(%letter, wrong = round.wrong_attempts, "Miss");
            if rules::is_exhausted(round.wrong_attempts, round.max_attempts) {
                return Ok((
                    GuessResult::Finished(round.finish(Outcome::Lost)),
                    GuessFeedback::Miss,
                ));
            }
            GuessFeedback::Miss
        };

        #[cfg(debug_assertions)]
        GuessContract::post(&before, &round)?;

        Ok((GuessResult::InProgress(round), feedback))
    }

    fn finish(self, outcome: Outcome) -> RoundFinished {
        debug_assert_eq!(
            outcome == Outcome::Won,
            self.pattern.is_complete(),
            "Won iff no blank remains"
        );
        info!(
            theme_id = self.theme_id,
            %outcome,
            wrong = self.wrong_attempts,
            "Round finished"
        );
        RoundFinished {
            theme_id: self.theme_id,
            word: self.word,
            pattern: self.pattern,
            used: self.used,
            wrong_attempts: self.wrong_attempts,
            max_attempts: self.max_attempts,
            outcome,
        }
    }

    /// Replays guesses on a known word.
    #[instrument(skip(letters))]
    pub fn replay(theme_id: i32, word: &str, letters: &[Letter]) -> Result<GuessResult, GuessError> {
        let mut round = Self::with_word(theme_id, word)?;
        for letter in letters {
            match round.guess(Guess::new(*letter))? {
                (GuessResult::InProgress(r), _) => round = r,
                (GuessResult::Finished(r), _) => return Ok(GuessResult::Finished(r)),
            }
        }
        Ok(GuessResult::InProgress(round))
    }

    /// Returns the theme the word was drawn from.
    pub fn theme_id(&self) -> i32 {
        self.theme_id
    }

    /// Returns the selected word (uppercase).
    pub fn selected_word(&self) -> &str {
        &self.word
    }

    /// Returns the revealed pattern.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Returns the letters guessed so far.
    pub fn used_letters(&self) -> &BTreeSet<Letter> {
        &self.used
    }

    /// Returns the number of wrong guesses.
    pub fn wrong_attempts(&self) -> u8 {
        self.wrong_attempts
    }

    /// Returns the wrong-guess limit.
    pub fn max_attempts(&self) -> u8 {
        self.max_attempts
    }

    /// Wrong guesses left before the round is lost.
    pub fn remaining_attempts(&self) -> u8 {
        self.max_attempts - self.wrong_attempts
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Round finished - outcome determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundFinished {
    theme_id: i32,
    word: String,
    pattern: Pattern,
    used: BTreeSet<Letter>,
    wrong_attempts: u8,
    max_attempts: u8,
    outcome: Outcome,
}

impl RoundFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the terminal status (`Won` or `Lost`).
    pub fn status(&self) -> RoundStatus {
        self.outcome.status()
    }

    /// Returns the theme the word was drawn from.
    pub fn theme_id(&self) -> i32 {
        self.theme_id
    }

    /// Returns the selected word.
    pub fn selected_word(&self) -> &str {
        &self.word
    }

    /// Returns the final pattern.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Returns every letter guessed during the round.
    pub fn used_letters(&self) -> &BTreeSet<Letter> {
        &self.used
    }

    /// Returns the number of wrong guesses.
    pub fn wrong_attempts(&self) -> u8 {
        self.wrong_attempts
    }

    /// Returns the wrong-guess limit.
    pub fn max_attempts(&self) -> u8 {
        self.max_attempts
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of applying a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessResult {
    /// Round continues.
    InProgress(RoundInProgress),
    /// Round finished.
    Finished(RoundFinished),
}

impl GuessResult {
    /// Returns the status of the round after the guess.
    pub fn status(&self) -> RoundStatus {
        match self {
            GuessResult::InProgress(_) => RoundStatus::InProgress,
            GuessResult::Finished(round) => round.status(),
        }
    }
}
