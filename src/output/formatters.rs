//! Formatting utilities for terminal output

use crate::evaluator::IncorrectPositions;
use crate::session::{SessionView, TileView};

/// Format a tile as `[C]`, or `(C)` when it is marked incorrect
#[must_use]
pub fn tile_label(tile: &TileView) -> String {
    let letter = tile.letter.as_char().to_ascii_uppercase();
    if tile.incorrect {
        format!("({letter})")
    } else {
        format!("[{letter}]")
    }
}

/// Format the placed tiles followed by any blank hint slots
///
/// Hint slots are always blank (`[_]`); they show how many letters are
/// missing, never which ones.
#[must_use]
pub fn tile_row(view: &SessionView<'_>) -> String {
    let mut parts: Vec<String> = view.tiles.iter().map(tile_label).collect();
    parts.extend(std::iter::repeat_n("[_]".to_string(), view.ghost_slots.unwrap_or(0)));
    parts.join(" ")
}

/// Per-position check marks, e.g. "🟩🟥🟩"
#[must_use]
pub fn check_marks(len: usize, incorrect: &IncorrectPositions) -> String {
    (0..len)
        .map(|i| if incorrect.contains(i) { '🟥' } else { '🟩' })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value * width / max).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Number of letters in a word as a child-friendly phrase
#[must_use]
pub fn letter_count(len: usize) -> String {
    if len == 1 {
        "1 letter".to_string()
    } else {
        format!("{len} letters")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, WordCatalog, WordEntry};
    use crate::core::{Difficulty, DifficultyFilter, Letter};
    use crate::session::{GameSession, Input, Mode, SessionConfig};
    use std::time::Instant;

    #[test]
    fn check_marks_flags_positions() {
        let incorrect: IncorrectPositions = [1].into_iter().collect();
        assert_eq!(check_marks(3, &incorrect), "🟩🟥🟩");
        assert_eq!(check_marks(0, &incorrect), "");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 9, 9), "░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(9, 9, 9), "█████████");
    }

    #[test]
    fn progress_bar_overfull_and_zero_max() {
        assert_eq!(create_progress_bar(12, 9, 3), "███");
        assert_eq!(create_progress_bar(5, 0, 3), "░░░");
    }

    #[test]
    fn letter_count_plural() {
        assert_eq!(letter_count(1), "1 letter");
        assert_eq!(letter_count(3), "3 letters");
    }

    #[test]
    fn tile_row_marks_incorrect_and_ghosts() {
        let catalog = WordCatalog::new([WordEntry::new(
            "frog",
            "🐸",
            Difficulty::Medium,
            Category::Animals,
        )])
        .unwrap();
        let mut session = GameSession::new(
            &catalog,
            SessionConfig {
                seed: Some(3),
                start_mode: Mode::Guess,
                difficulty: DifficultyFilter::All,
                ..SessionConfig::default()
            },
        );
        let now = Instant::now();
        for ch in ['f', 'l'] {
            session.handle(Input::Tap(Letter::new(ch).unwrap()), now);
        }
        session.check_spelling();
        session.toggle_hint();

        assert_eq!(tile_row(&session.view(now)), "[F] (L) [_] [_]");
    }
}
