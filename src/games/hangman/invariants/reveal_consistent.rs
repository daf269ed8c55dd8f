//! Reveal consistency: the pattern shows exactly the guessed letters.

use super::super::{Cell, Letter, RoundInProgress};
use super::Invariant;

/// Invariant: every shown letter was guessed and every blank was not.
///
/// A shown cell must match the selected word at the same index. A partial
/// reveal (one occurrence shown, another left blank) breaks the blank rule.
pub struct RevealConsistentInvariant;

impl Invariant<RoundInProgress> for RevealConsistentInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        let word: Vec<char> = round.selected_word().chars().collect();
        if word.len() != round.pattern().cells().len() {
            return false;
        }

        round
            .pattern()
            .cells()
            .iter()
            .zip(word)
            .all(|(cell, expected)| {
                let guessed = Letter::new(expected)
                    .map(|l| round.used_letters().contains(&l))
                    .unwrap_or(true);
                match cell {
                    Cell::Shown(c) => *c == expected && guessed,
                    Cell::Blank => !guessed,
                }
            })
    }

    fn description() -> &'static str {
        "Pattern shows exactly the positions of guessed letters"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hangman::{Guess, GuessResult};

    #[test]
    fn test_fresh_round_holds() {
        let round = RoundInProgress::with_word(1, "MOCKUP").unwrap();
        assert!(RevealConsistentInvariant::holds(&round));
    }

    #[test]
    fn test_partial_reveal_violates() {
        let round = RoundInProgress::with_word(1, "DATABASE").unwrap();
        let guess = Guess::new(Letter::new('A').unwrap());
        if let Ok((GuessResult::InProgress(mut round), _)) = round.guess(guess) {
            assert!(RevealConsistentInvariant::holds(&round));
            // Hide one of the three A's again.
            round.pattern.cells_mut()[3] = Cell::Blank;
            assert!(!RevealConsistentInvariant::holds(&round));
        } else {
            panic!("Expected in-progress round");
        }
    }

    #[test]
    fn test_wrong_character_violates() {
        let mut round = RoundInProgress::with_word(1, "CSS").unwrap();
        round.used.insert(Letter::new('C').unwrap());
        round.pattern.cells_mut()[0] = Cell::Shown('K');
        assert!(!RevealConsistentInvariant::holds(&round));
    }
}
