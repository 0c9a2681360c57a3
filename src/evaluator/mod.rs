//! Spelling evaluation
//!
//! Compares the placed tiles with a target word position by position:
//! - A tile is correct only if the target has the same letter at the same index
//! - Tiles past the end of the target are always incorrect
//! - A letter in the wrong slot counts as wrong even if the target uses it elsewhere
//!
//! All functions here are pure, so they can run on every keystroke for live
//! feedback without touching round state.

use crate::placement::PlacementSequence;
use std::collections::BTreeSet;

/// Indices of placed tiles that do not match the target
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncorrectPositions(BTreeSet<usize>);

impl IncorrectPositions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<usize> for IncorrectPositions {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Outcome of checking a spelling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub incorrect: IncorrectPositions,
    pub complete: bool,
}

/// Mark every placed tile that does not match `target` at its position
///
/// # Examples
/// ```
/// use phonics_tiles::evaluator::evaluate;
/// use phonics_tiles::placement::PlacementSequence;
///
/// let mut row = PlacementSequence::new();
/// row.replace_all("cot");
/// let wrong: Vec<usize> = evaluate(&row, "cat").iter().collect();
/// assert_eq!(wrong, [1]);
/// ```
#[must_use]
pub fn evaluate(sequence: &PlacementSequence, target: &str) -> IncorrectPositions {
    let target = target.as_bytes();

    sequence
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(i, tile)| {
            target
                .get(i)
                .is_none_or(|&expected| tile.letter.as_byte() != expected.to_ascii_lowercase())
        })
        .map(|(i, _)| i)
        .collect()
}

/// True when the row spells exactly `target`: same letters, same order, same length
#[must_use]
pub fn is_complete(sequence: &PlacementSequence, target: &str) -> bool {
    sequence.len() == target.len() && evaluate(sequence, target).is_empty()
}

/// Evaluate and test completeness in one call
#[must_use]
pub fn judge(sequence: &PlacementSequence, target: &str) -> Verdict {
    let incorrect = evaluate(sequence, target);
    let complete = incorrect.is_empty() && sequence.len() == target.len();
    Verdict {
        incorrect,
        complete,
    }
}

/// Number of blank hint slots still to fill after the placed tiles
///
/// Only the count is exposed; hints never reveal which letters are missing.
#[must_use]
pub fn ghost_slots(sequence: &PlacementSequence, target: &str) -> usize {
    target.len().saturating_sub(sequence.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(text: &str) -> PlacementSequence {
        let mut seq = PlacementSequence::new();
        seq.replace_all(text);
        seq
    }

    fn wrong(seq: &PlacementSequence, target: &str) -> Vec<usize> {
        evaluate(seq, target).iter().collect()
    }

    #[test]
    fn exact_match_has_no_incorrect_positions() {
        let seq = row("cat");
        assert!(evaluate(&seq, "cat").is_empty());
        assert!(is_complete(&seq, "cat"));
    }

    #[test]
    fn single_wrong_letter() {
        let seq = row("cot");
        assert_eq!(wrong(&seq, "cat"), [1]);
        assert!(!is_complete(&seq, "cat"));
    }

    #[test]
    fn anagram_is_not_correct() {
        // Letters exist in the target but in other slots
        let seq = row("tac");
        assert_eq!(wrong(&seq, "cat"), [0, 2]);
    }

    #[test]
    fn overflow_tiles_always_flagged() {
        let seq = row("cats");
        assert_eq!(wrong(&seq, "cat"), [3]);
        assert!(!is_complete(&seq, "cat"));
    }

    #[test]
    fn prefix_is_correct_but_incomplete() {
        let seq = row("ca");
        assert!(evaluate(&seq, "cat").is_empty());
        assert!(!is_complete(&seq, "cat"));
        assert_eq!(ghost_slots(&seq, "cat"), 1);
    }

    #[test]
    fn empty_sequence() {
        let seq = PlacementSequence::new();
        assert!(evaluate(&seq, "dog").is_empty());
        assert!(!is_complete(&seq, "dog"));
        assert_eq!(ghost_slots(&seq, "dog"), 3);
    }

    #[test]
    fn repeated_letters_judged_per_position() {
        let seq = row("bae");
        assert_eq!(wrong(&seq, "bee"), [1]);
    }

    #[test]
    fn judge_matches_parts() {
        let seq = row("cot");
        let verdict = judge(&seq, "cat");
        assert_eq!(verdict.incorrect, evaluate(&seq, "cat"));
        assert!(!verdict.complete);

        let verdict = judge(&row("cat"), "cat");
        assert!(verdict.complete);
        assert!(verdict.incorrect.is_empty());
    }

    #[test]
    fn ghost_slots_never_negative() {
        assert_eq!(ghost_slots(&row("elephant"), "cat"), 0);
    }

    #[test]
    fn evaluation_is_repeatable() {
        let seq = row("dgo");
        let first = evaluate(&seq, "dog");
        let second = evaluate(&seq, "dog");
        assert_eq!(first, second);
        assert_eq!(seq.to_word(), "dgo");
    }
}
