//! Attempt accounting: wrong attempts match the missed letters.

use super::super::{RoundInProgress, rules};
use super::Invariant;

/// Invariant: `wrong_attempts` equals the number of used letters absent from
/// the word, and stays below the limit while the round is in progress.
pub struct AttemptsAccountedInvariant;

impl Invariant<RoundInProgress> for AttemptsAccountedInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        let misses = round
            .used_letters()
            .iter()
            .filter(|l| !rules::contains(round.selected_word(), **l))
            .count();

        misses == usize::from(round.wrong_attempts())
            && !rules::is_exhausted(round.wrong_attempts(), round.max_attempts())
    }

    fn description() -> &'static str {
        "Wrong attempts equal missed letters and stay below the limit"
    }
}
