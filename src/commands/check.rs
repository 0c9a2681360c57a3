//! One-shot spelling check
//!
//! Judges a typed attempt against any valid target word, catalog or not.

use crate::catalog::WordCatalog;
use crate::core::{Word, WordError};
use crate::evaluator::{self, IncorrectPositions};
use crate::placement::PlacementSequence;

/// Result of checking one attempt
pub struct CheckResult {
    pub target: String,
    /// Attempt as placed: letters only, lowercase, capped at the text capacity
    pub attempt: String,
    pub pictogram: Option<&'static str>,
    pub incorrect: IncorrectPositions,
    pub complete: bool,
    /// Letters still missing at the end
    pub missing: usize,
}

/// Check `attempt` against `target`
///
/// # Errors
/// Returns `WordError` if `target` is not a 2 to 10 letter word.
///
/// # Examples
/// ```
/// use phonics_tiles::catalog::WordCatalog;
/// use phonics_tiles::commands::check_spelling;
///
/// let result = check_spelling(WordCatalog::builtin(), "cat", "cot").unwrap();
/// assert!(!result.complete);
/// assert!(result.incorrect.contains(1));
/// ```
pub fn check_spelling(
    catalog: &WordCatalog,
    target: &str,
    attempt: &str,
) -> Result<CheckResult, WordError> {
    let target = Word::new(target)?;

    let mut sequence = PlacementSequence::new();
    sequence.replace_all(attempt);
    let verdict = evaluator::judge(&sequence, target.text());

    Ok(CheckResult {
        pictogram: catalog.lookup(target.text()).map(|entry| entry.pictogram),
        attempt: sequence.to_word(),
        missing: evaluator::ghost_slots(&sequence, target.text()),
        incorrect: verdict.incorrect,
        complete: verdict.complete,
        target: target.text().to_string(),
    })
}
