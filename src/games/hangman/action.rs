//! Guess actions, their feedback and errors.
//!
//! A guess is a domain event: it is validated into a [`Letter`] before it
//! ever reaches a round.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{Letter, RoundStatus};

/// A player guessing one letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Guess {
    /// The guessed letter.
    pub letter: Letter,
}

impl Guess {
    /// Creates a new guess.
    #[instrument]
    pub fn new(letter: Letter) -> Self {
        Self { letter }
    }

    /// Returns the guessed letter.
    pub fn letter(&self) -> Letter {
        self.letter
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "guess {}", self.letter)
    }
}

/// What a single guess did to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessFeedback {
    /// The letter is in the word; `revealed` positions were uncovered.
    Hit {
        /// Number of cells uncovered by this guess.
        revealed: usize,
    },
    /// The letter is not in the word; one wrong attempt was spent.
    Miss,
    /// The letter had already been guessed; nothing changed.
    Repeated,
}

/// Result of a guess as reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessOutcome {
    /// Round status after the guess.
    pub status: RoundStatus,
    /// Effect of the guess.
    pub feedback: GuessFeedback,
}

impl GuessOutcome {
    /// Returns true if the letter occurs in the selected word.
    ///
    /// A repeated guess reports false since it had no effect.
    pub fn correct(&self) -> bool {
        matches!(self.feedback, GuessFeedback::Hit { .. })
    }

    /// Returns true if the letter had already been used.
    pub fn repeated(&self) -> bool {
        matches!(self.feedback, GuessFeedback::Repeated)
    }
}

/// Error that can occur when starting a round or applying a guess.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GuessError {
    /// The theme has no usable word to pick from.
    #[display("No words available for theme {}", theme_id)]
    EmptyPool {
        /// Theme whose pool was empty.
        theme_id: i32,
    },

    /// The guess is not a single alphabetic character.
    #[display("'{}' is not a single letter", _0)]
    InvalidGuess(String),

    /// The round already ended.
    #[display("Round is already over ({})", _0)]
    RoundOver(RoundStatus),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GuessError {}
