//! Core domain types for hangman.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

use super::action::GuessError;

/// Wrong guesses allowed before a round is lost.
pub const MAX_ATTEMPTS: u8 = 10;

/// A guessable letter, always stored uppercase (A-Z).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Letter(char);

impl Letter {
    /// Validates a character as a letter, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::InvalidGuess`] for anything outside `a-z`/`A-Z`.
    #[instrument]
    pub fn new(c: char) -> Result<Self, GuessError> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_uppercase()))
        } else {
            Err(GuessError::InvalidGuess(c.to_string()))
        }
    }

    /// Returns the uppercase character.
    pub fn as_char(self) -> char {
        self.0
    }

    /// All 26 letters in alphabetical order.
    pub fn alphabet() -> impl Iterator<Item = Letter> {
        ('A'..='Z').map(Letter)
    }
}

impl TryFrom<char> for Letter {
    type Error = GuessError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c)
    }
}

impl FromStr for Letter {
    type Err = GuessError;

    /// Parses exactly one letter, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            _ => Err(GuessError::InvalidGuess(s.to_string())),
        }
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One position of the revealed pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Not guessed yet.
    Blank,
    /// Visible character.
    Shown(char),
}

impl Cell {
    /// Returns true if the cell is still hidden.
    pub fn is_blank(self) -> bool {
        matches!(self, Cell::Blank)
    }
}

/// The in-progress display of the selected word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    cells: Vec<Cell>,
}

impl Pattern {
    /// Creates an all-blank pattern for `word`.
    ///
    /// Characters that are not letters cannot be guessed, so they start out
    /// shown.
    pub fn hidden(word: &str) -> Self {
        let cells = word
            .chars()
            .map(|c| {
                if c.is_ascii_alphabetic() {
                    Cell::Blank
                } else {
                    Cell::Shown(c)
                }
            })
            .collect();
        Self { cells }
    }

    /// Shows every position of `word` holding `letter`, returning how many
    /// cells changed.
    pub(super) fn reveal(&mut self, word: &str, letter: Letter) -> usize {
        let mut revealed = 0;
        for idx in super::rules::occurrences(word, letter) {
            match self.cells.get_mut(idx) {
                Some(cell) if cell.is_blank() => {
                    *cell = Cell::Shown(letter.as_char());
                    revealed += 1;
                }
                _ => {}
            }
        }
        revealed
    }

    /// Returns the cells in word order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of positions still hidden.
    pub fn blanks(&self) -> usize {
        self.cells.iter().filter(|c| c.is_blank()).count()
    }

    /// Returns true once no blank remains.
    pub fn is_complete(&self) -> bool {
        self.blanks() == 0
    }

    #[cfg(test)]
    pub(super) fn cells_mut(&mut self) -> &mut Vec<Cell> {
        &mut self.cells
    }
}

impl std::fmt::Display for Pattern {
    /// Space-separated cells with `_` for blanks, e.g. `P _ _ _ _ _`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, cell) in self.cells.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            match cell {
                Cell::Blank => write!(f, "_")?,
                Cell::Shown(c) => write!(f, "{}", c)?,
            }
        }
        Ok(())
    }
}

/// Current status of a round.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum RoundStatus {
    /// Guesses are still accepted.
    #[strum(to_string = "in progress")]
    InProgress,
    /// Every letter was found.
    #[strum(to_string = "won")]
    Won,
    /// The wrong-guess limit was reached.
    #[strum(to_string = "lost")]
    Lost,
}

impl RoundStatus {
    /// Returns true for `Won` and `Lost`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, RoundStatus::InProgress)
    }
}
