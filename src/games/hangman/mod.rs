//! Hangman rounds: letters, patterns and the guess state machine.

mod action;
mod contracts;
mod invariants;
mod phases;
mod rules;
mod types;
mod typestate;
mod wrapper;

pub use action::{Guess, GuessError, GuessFeedback, GuessOutcome};
pub use contracts::{Contract, GuessContract};
pub use invariants::{HangmanInvariants, Invariant, InvariantSet, InvariantViolation};
pub use phases::Outcome;
pub use types::{Cell, Letter, MAX_ATTEMPTS, Pattern, RoundStatus};
pub use typestate::{GuessResult, RoundFinished, RoundInProgress};
pub use wrapper::{GameSession, RoundView};
