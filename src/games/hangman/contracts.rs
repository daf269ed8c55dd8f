//! Contract-based validation for hangman guesses.
//!
//! Contracts formalize Hoare-style reasoning: {P} guess {Q}

use super::action::{Guess, GuessError};
use super::invariants::{HangmanInvariants, InvariantSet};
use super::typestate::RoundInProgress;
use super::{RoundStatus, rules};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GuessError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GuessError>;
}

/// Precondition: the round still has attempts left.
pub struct AttemptsRemain;

impl AttemptsRemain {
    /// Rejects guesses on a round whose attempts are spent.
    #[instrument(skip(round))]
    pub fn check(round: &RoundInProgress) -> Result<(), GuessError> {
        if rules::is_exhausted(round.wrong_attempts(), round.max_attempts()) {
            warn!(wrong = round.wrong_attempts(), "Guess on exhausted round");
            Err(GuessError::RoundOver(RoundStatus::Lost))
        } else {
            Ok(())
        }
    }
}

/// Postcondition: one guess records at most one letter and never refunds an
/// attempt.
pub struct MonotonicProgress;

impl MonotonicProgress {
    /// Compares the round before and after a guess.
    #[instrument(skip(before, after))]
    pub fn holds(before: &RoundInProgress, after: &RoundInProgress) -> bool {
        let grew_by = after
            .used_letters()
            .len()
            .saturating_sub(before.used_letters().len());
        let valid = before.used_letters().is_subset(after.used_letters())
            && grew_by <= 1
            && after.wrong_attempts() >= before.wrong_attempts()
            && after.wrong_attempts() - before.wrong_attempts() <= 1
            && after.pattern().blanks() <= before.pattern().blanks();
        if !valid {
            warn!(grew_by, "Monotonic progress violated");
        }
        valid
    }
}

/// Contract for guess actions.
///
/// Preconditions:
/// - Attempts remain
///
/// Postconditions:
/// - Progress is monotonic
/// - Every round invariant holds
pub struct GuessContract;

impl Contract<RoundInProgress, Guess> for GuessContract {
    fn pre(round: &RoundInProgress, _action: &Guess) -> Result<(), GuessError> {
        AttemptsRemain::check(round)
    }

    fn post(before: &RoundInProgress, after: &RoundInProgress) -> Result<(), GuessError> {
        if !MonotonicProgress::holds(before, after) {
            return Err(GuessError::InvariantViolation(
                "Postcondition failed: guess was not monotonic".to_string(),
            ));
        }
        HangmanInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            GuessError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
