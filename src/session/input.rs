//! Input events a front end feeds into a session

use crate::core::{DifficultyFilter, Letter};

/// Where a dropped tile lands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropSlot {
    /// Before the tile currently at this index
    Index(usize),
    End,
}

/// One discrete user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Letter tapped on the keyboard/tile grid, placed at the end
    Tap(Letter),
    /// Letter dragged into the row at a slot
    DropAt { letter: Letter, slot: DropSlot },
    /// Placed tile dragged to another position
    Reorder { from: usize, to: usize },
    /// Free text typed into the text box; replaces the whole row
    TypedText(String),
    RemoveAt(usize),
    Clear,
    ToggleMode,
    CheckSpelling,
    /// Move on after a solved round
    Acknowledge,
    ChangeDifficulty(DifficultyFilter),
    ToggleHint,
    /// Say the sound of a placed tile again
    SpeakTile(usize),
    /// Say the current spelling
    SpeakWord,
}
