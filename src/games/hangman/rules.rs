//! Game rules for hangman.
//!
//! Pure functions over words, patterns and attempt counters. The typestate
//! machine calls into these; nothing here mutates a round.

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

use super::{Letter, Pattern};

/// Indices of `word` holding `letter`.
pub fn occurrences(word: &str, letter: Letter) -> Vec<usize> {
    word.chars()
        .enumerate()
        .filter(|(_, c)| *c == letter.as_char())
        .map(|(idx, _)| idx)
        .collect()
}

/// Returns true if `letter` appears anywhere in `word`.
pub fn contains(word: &str, letter: Letter) -> bool {
    word.chars().any(|c| c == letter.as_char())
}

/// A round is won once its pattern has no blank left.
pub fn is_won(pattern: &Pattern) -> bool {
    pattern.is_complete()
}

/// A round is lost once the wrong attempts reach the limit.
pub fn is_exhausted(wrong_attempts: u8, max_attempts: u8) -> bool {
    wrong_attempts >= max_attempts
}

/// Canonical form of a pool entry, or `None` if it cannot be played.
///
/// Entries are trimmed and uppercased; an entry without a single letter to
/// guess is unusable.
pub fn playable(entry: &str) -> Option<String> {
    let word = entry.trim().to_uppercase();
    if word.chars().any(|c| c.is_ascii_alphabetic()) {
        Some(word)
    } else {
        None
    }
}

/// Picks one playable word uniformly at random.
///
/// Returns `None` when the pool holds no playable entry.
#[instrument(skip(pool, rng), fields(pool_size = pool.len()))]
pub fn pick_word<S, R>(pool: &[S], rng: &mut R) -> Option<String>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let candidates: Vec<String> = pool.iter().filter_map(|w| playable(w.as_ref())).collect();
    debug!(candidates = candidates.len(), "Playable words in pool");
    candidates.choose(rng).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn test_occurrences_finds_every_index() {
        assert_eq!(occurrences("WIREFRAME", letter('R')), vec![2, 5]);
        assert_eq!(occurrences("WIREFRAME", letter('E')), vec![3, 8]);
        assert!(occurrences("WIREFRAME", letter('Z')).is_empty());
    }

    #[test]
    fn test_contains() {
        assert!(contains("CODE", letter('d')));
        assert!(!contains("CODE", letter('x')));
    }

    #[test]
    fn test_is_exhausted_at_limit() {
        assert!(!is_exhausted(9, 10));
        assert!(is_exhausted(10, 10));
    }

    #[test]
    fn test_playable_normalizes() {
        assert_eq!(playable("  figma "), Some("FIGMA".to_string()));
        assert_eq!(playable(""), None);
        assert_eq!(playable("   "), None);
        assert_eq!(playable("42"), None);
    }

    #[test]
    fn test_pick_word_skips_blank_entries() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = ["", "  ", "css"];
        for _ in 0..10 {
            assert_eq!(pick_word(&pool, &mut rng), Some("CSS".to_string()));
        }
    }

    #[test]
    fn test_pick_word_empty_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool: [&str; 0] = [];
        assert_eq!(pick_word(&pool, &mut rng), None);
        assert_eq!(pick_word(&["", " "], &mut rng), None);
    }

    #[test]
    fn test_pick_word_reaches_every_word() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = ["UX", "UI", "ADOBE"];
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(pick_word(&pool, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), 3);
    }
}
