//! Difficulty tiers and the difficulty filter used to pick targets

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Difficulty tier of a catalog word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Which tier a new target may be drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DifficultyFilter {
    #[default]
    All,
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown difficulty '{0}' (expected all, easy, medium or hard)")]
pub struct ParseDifficultyError(String);

impl Difficulty {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl DifficultyFilter {
    /// Every filter value, in the order the UI cycles through them
    pub const CYCLE: [Self; 4] = [Self::All, Self::Easy, Self::Medium, Self::Hard];

    /// Whether a word of the given tier passes this filter
    #[must_use]
    pub const fn matches(self, difficulty: Difficulty) -> bool {
        matches!(
            (self, difficulty),
            (Self::All, _)
                | (Self::Easy, Difficulty::Easy)
                | (Self::Medium, Difficulty::Medium)
                | (Self::Hard, Difficulty::Hard)
        )
    }

    /// The next filter in [`DifficultyFilter::CYCLE`], wrapping around
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Easy,
            Self::Easy => Self::Medium,
            Self::Medium => Self::Hard,
            Self::Hard => Self::All,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl From<Difficulty> for DifficultyFilter {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self::Easy,
            Difficulty::Medium => Self::Medium,
            Difficulty::Hard => Self::Hard,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for DifficultyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

impl FromStr for DifficultyFilter {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<Difficulty>().map(Self::from)
    }
}
