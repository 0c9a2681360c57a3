//! Read-only projection of a session for presentation
//!
//! While a round is active the view carries the target's length, pictogram
//! and tier, never its letters. The word itself only shows up once solved.

use super::{Highlight, Mode, SessionPhase};
use crate::catalog::{Category, WordEntry};
use crate::core::{Difficulty, DifficultyFilter, InstanceId, Letter};
use crate::evaluator::IncorrectPositions;

/// One placed tile as presentation sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileView {
    pub letter: Letter,
    pub id: InstanceId,
    pub incorrect: bool,
    pub highlight: Option<Highlight>,
}

/// What may be shown about the current target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetHint {
    pub len: usize,
    pub pictogram: &'static str,
    pub difficulty: Difficulty,
    pub category: Category,
}

impl From<&WordEntry> for TargetHint {
    fn from(entry: &WordEntry) -> Self {
        Self {
            len: entry.len(),
            pictogram: entry.pictogram,
            difficulty: entry.difficulty,
            category: entry.category,
        }
    }
}

/// Per-session counters
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub rounds_started: usize,
    pub rounds_completed: usize,
    pub checks: usize,
    pub incorrect_checks: usize,
    pub words_recognized: usize,
}

#[derive(Debug, Clone)]
pub struct SessionView<'s> {
    pub mode: Mode,
    pub phase: SessionPhase,
    pub difficulty: DifficultyFilter,
    pub tiles: Vec<TileView>,
    pub incorrect: &'s IncorrectPositions,
    pub target: Option<TargetHint>,
    /// Blank slots still to fill; `Some` only while the hint is shown in an active round
    pub ghost_slots: Option<usize>,
    pub hint_visible: bool,
    /// The target word, once the round is solved
    pub solved_word: Option<&'s str>,
    /// Catalog word the free-form spelling currently matches
    pub recognized: Option<&'s WordEntry>,
    pub tap_capacity: usize,
    pub stats: Statistics,
}

impl SessionView<'_> {
    /// The current spelling as shown on the tiles
    #[must_use]
    pub fn spelling(&self) -> String {
        self.tiles.iter().map(|tile| tile.letter.as_char()).collect()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.tiles.len() >= self.tap_capacity
    }
}
