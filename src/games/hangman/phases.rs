//! Outcome of a finished round.

use serde::{Deserialize, Serialize};

use super::RoundStatus;

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Every letter of the word was revealed.
    Won,
    /// The wrong-guess limit was reached with letters still hidden.
    Lost,
}

impl Outcome {
    /// Returns the terminal status matching this outcome.
    pub fn status(self) -> RoundStatus {
        match self {
            Outcome::Won => RoundStatus::Won,
            Outcome::Lost => RoundStatus::Lost,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won => write!(f, "Word found"),
            Outcome::Lost => write!(f, "Out of attempts"),
        }
    }
}
