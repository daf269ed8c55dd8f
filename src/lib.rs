//! Hangman library - type-safe rounds over a themed word store
//!
//! # Architecture
//!
//! - **Word store**: SQLite catalog of themes, words and theme membership
//! - **Game**: typestate round machine guarded by contracts and invariants
//! - **Controller**: owns the store and one round, drives a renderer
//!
//! # Example
//!
//! ```no_run
//! use hangman::{NoopRenderer, RoundController, WordStore};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = WordStore::open("hangman.db")?;
//! let mut controller = RoundController::new(store, "Developpeur", NoopRenderer)?;
//! controller.new_round()?;
//! let outcome = controller.guess('e')?;
//! println!("correct: {}", outcome.correct());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod controller;
mod db;
mod error;
mod games;
mod render;

pub mod cli;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH};

// Crate-level exports - Controller
pub use controller::{NoopRenderer, RoundController, RoundRenderer};

// Crate-level exports - Word store
pub use db::{
    DbError, NewTheme, NewWord, SEED_THEMES, StoreError, Theme, ThemeWord, Word, WordStore,
    normalize_theme_name, normalize_word,
};

// Crate-level exports - Errors
pub use error::{ErrorKind, HangmanError};

// Crate-level exports - Game types
pub use games::hangman::{
    Cell, Contract, GameSession, Guess, GuessContract, GuessError, GuessFeedback, GuessOutcome,
    GuessResult, HangmanInvariants, Invariant, InvariantSet, InvariantViolation, Letter,
    MAX_ATTEMPTS, Outcome, Pattern, RoundFinished, RoundInProgress, RoundStatus, RoundView,
};

// Crate-level exports - Rendering
pub use render::{TextRenderer, gallows, keyboard};
