//! Catalog entry and category types

use crate::core::Difficulty;
use std::fmt;

/// Theme a catalog word belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Animals,
    Body,
    Transport,
    Objects,
    Nature,
    Food,
    Places,
    Colors,
    Clothing,
    Weather,
    Emotions,
    Fun,
}

impl Category {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Animals => "animals",
            Self::Body => "body",
            Self::Transport => "transport",
            Self::Objects => "objects",
            Self::Nature => "nature",
            Self::Food => "food",
            Self::Places => "places",
            Self::Colors => "colors",
            Self::Clothing => "clothing",
            Self::Weather => "weather",
            Self::Emotions => "emotions",
            Self::Fun => "fun",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One spellable word with its picture and difficulty
///
/// Entries are immutable and live for the whole process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordEntry {
    pub word: &'static str,
    pub pictogram: &'static str,
    pub difficulty: Difficulty,
    pub category: Category,
}

impl WordEntry {
    #[must_use]
    pub const fn new(
        word: &'static str,
        pictogram: &'static str,
        difficulty: Difficulty,
        category: Category,
    ) -> Self {
        Self {
            word,
            pictogram,
            difficulty,
            category,
        }
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.word.len()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}
