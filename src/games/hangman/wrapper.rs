//! Single mutable session holding a round in either phase.

use std::collections::BTreeSet;

use derive_getters::Getters;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use super::action::{Guess, GuessError, GuessOutcome};
use super::typestate::{GuessResult, RoundFinished, RoundInProgress};
use super::{Cell, Letter, Pattern, RoundStatus};

/// One round of hangman, in progress or finished.
///
/// Typestate phases consume themselves on every guess; this wrapper lets an
/// owner keep a single value and mutate it in place. A rejected guess leaves
/// the session exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameSession {
    /// Round accepting guesses.
    InProgress(RoundInProgress),
    /// Round over, outcome known.
    Finished(RoundFinished),
}

impl From<RoundInProgress> for GameSession {
    fn from(round: RoundInProgress) -> Self {
        GameSession::InProgress(round)
    }
}

impl From<RoundFinished> for GameSession {
    fn from(round: RoundFinished) -> Self {
        GameSession::Finished(round)
    }
}

impl From<GuessResult> for GameSession {
    fn from(result: GuessResult) -> Self {
        match result {
            GuessResult::InProgress(r) => r.into(),
            GuessResult::Finished(r) => r.into(),
        }
    }
}

impl GameSession {
    /// Starts a session on a word picked uniformly at random from `pool`.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::EmptyPool`] if the pool holds no playable word.
    #[instrument(skip(pool), fields(pool_size = pool.len()))]
    pub fn start<S: AsRef<str>>(theme_id: i32, pool: &[S]) -> Result<Self, GuessError> {
        RoundInProgress::start(theme_id, pool).map(Into::into)
    }

    /// Like [`GameSession::start`] with a caller-supplied random source.
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
        RoundInProgress::start_with_rng(theme_id, pool, rng).map(Into::into)
    }

    /// Guesses one letter, case-insensitively.
    ///
    /// # Errors
    ///
    /// - [`GuessError::InvalidGuess`] if `c` is not a letter.
    /// - [`GuessError::RoundOver`] if the round is already won or lost.
    #[instrument(skip(self), fields(status = %self.status()))]
    pub fn guess(&mut self, c: char) -> Result<GuessOutcome, GuessError> {
        let letter = Letter::new(c)?;
        let round = match self {
            GameSession::InProgress(round) => round,
            GameSession::Finished(round) => {
                warn!(%letter, status = %round.status(), "Guess after round ended");
                return Err(GuessError::RoundOver(round.status()));
            }
        };

        let (next, feedback) = round.clone().guess(Guess::new(letter))?;
        let status = next.status();
        *self = next.into();

        debug!(%letter, ?feedback, %status, "Guess applied");
        Ok(GuessOutcome { status, feedback })
    }

    /// Returns the current status.
    pub fn status(&self) -> RoundStatus {
        match self {
            GameSession::InProgress(_) => RoundStatus::InProgress,
            GameSession::Finished(round) => round.status(),
        }
    }

    /// Returns the theme the word was drawn from.
    pub fn theme_id(&self) -> i32 {
        match self {
            GameSession::InProgress(round) => round.theme_id(),
            GameSession::Finished(round) => round.theme_id(),
        }
    }

    /// Returns the selected word.
    pub fn selected_word(&self) -> &str {
        match self {
            GameSession::InProgress(round) => round.selected_word(),
            GameSession::Finished(round) => round.selected_word(),
        }
    }

    /// Returns the revealed pattern.
    pub fn pattern(&self) -> &Pattern {
        match self {
            GameSession::InProgress(round) => round.pattern(),
            GameSession::Finished(round) => round.pattern(),
        }
    }

    /// Returns the revealed cells, one per character of the word.
    pub fn revealed(&self) -> &[Cell] {
        self.pattern().cells()
    }

    /// Returns the letters guessed so far.
    pub fn used_letters(&self) -> &BTreeSet<Letter> {
        match self {
            GameSession::InProgress(round) => round.used_letters(),
            GameSession::Finished(round) => round.used_letters(),
        }
    }

    /// Returns the number of wrong guesses.
    pub fn wrong_attempts(&self) -> u8 {
        match self {
            GameSession::InProgress(round) => round.wrong_attempts(),
            GameSession::Finished(round) => round.wrong_attempts(),
        }
    }

    /// Returns the wrong-guess limit.
    pub fn max_attempts(&self) -> u8 {
        match self {
            GameSession::InProgress(round) => round.max_attempts(),
            GameSession::Finished(round) => round.max_attempts(),
        }
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> RoundView {
        let status = self.status();
        RoundView {
            theme_id: self.theme_id(),
            revealed: self.revealed().to_vec(),
            wrong_attempts: self.wrong_attempts(),
            max_attempts: self.max_attempts(),
            used_letters: self.used_letters().clone(),
            status,
            word: status
                .is_terminal()
                .then(|| self.selected_word().to_string()),
        }
    }
}

/// Everything a renderer needs to draw a round.
///
/// `word` is only disclosed once the round is over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct RoundView {
    theme_id: i32,
    revealed: Vec<Cell>,
    wrong_attempts: u8,
    max_attempts: u8,
    used_letters: BTreeSet<Letter>,
    status: RoundStatus,
    word: Option<String>,
}

impl RoundView {
    /// Formats the revealed cells as `P _ _ _ _ _`.
    pub fn pattern_text(&self) -> String {
        self.revealed
            .iter()
            .map(|cell| match cell {
                Cell::Blank => "_".to_string(),
                Cell::Shown(c) => c.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
