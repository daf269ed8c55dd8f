//! Crate-level error type and its taxonomy.

use derive_more::Display;

use crate::db::StoreError;
use crate::games::hangman::GuessError;

/// Coarse classification of every failure the engine reports.
///
/// All kinds are recoverable: the caller picks a different action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum ErrorKind {
    /// A referenced word or theme does not exist.
    NotFound,
    /// A theme has no words to play.
    EmptyPool,
    /// A guess, word or theme name was rejected, or the round is over.
    InvalidInput,
    /// The backing database failed.
    Storage,
}

/// Error returned by the round controller.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum HangmanError {
    /// Word store failure.
    #[display("{}", _0)]
    Store(StoreError),

    /// Round failure.
    #[display("{}", _0)]
    Game(GuessError),

    /// A guess arrived before any round was started.
    #[display("No round in progress")]
    NoRound,
}

impl HangmanError {
    /// Returns the taxonomy bucket of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            HangmanError::Store(StoreError::NotFound(_)) => ErrorKind::NotFound,
            HangmanError::Store(StoreError::InvalidInput(_)) => ErrorKind::InvalidInput,
            HangmanError::Store(StoreError::Database(_)) => ErrorKind::Storage,
            HangmanError::Game(GuessError::EmptyPool { .. }) => ErrorKind::EmptyPool,
            HangmanError::Game(GuessError::InvalidGuess(_))
            | HangmanError::Game(GuessError::RoundOver(_))
            | HangmanError::Game(GuessError::InvariantViolation(_))
            | HangmanError::NoRound => ErrorKind::InvalidInput,
        }
    }
}

impl std::error::Error for HangmanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HangmanError::Store(err) => Some(err),
            HangmanError::Game(err) => Some(err),
            HangmanError::NoRound => None,
        }
    }
}

impl From<StoreError> for HangmanError {
    fn from(err: StoreError) -> Self {
        HangmanError::Store(err)
    }
}

impl From<GuessError> for HangmanError {
    fn from(err: GuessError) -> Self {
        HangmanError::Game(err)
    }
}
