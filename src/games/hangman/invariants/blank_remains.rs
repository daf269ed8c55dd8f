//! A round still in progress has something left to guess.

use super::super::RoundInProgress;
use super::Invariant;

/// Invariant: an in-progress round has at least one blank.
///
/// A complete pattern must have been turned into a won round already.
pub struct BlankRemainsInvariant;

impl Invariant<RoundInProgress> for BlankRemainsInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        !round.pattern().is_complete()
    }

    fn description() -> &'static str {
        "Round in progress has at least one blank"
    }
}
