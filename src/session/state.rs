//! Session modes and round states

use crate::catalog::WordEntry;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Whether the learner is building freely or guessing a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Freeform,
    Guess,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown mode '{0}' (expected freeform or guess)")]
pub struct ParseModeError(String);

impl Mode {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Freeform => "freeform",
            Self::Guess => "guess",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "freeform" | "free" => Ok(Self::Freeform),
            "guess" => Ok(Self::Guess),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// An in-progress or just-finished guessing round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round<'a> {
    pub target: &'a WordEntry,
    /// Spelling checks made this round
    pub checks: u32,
}

impl<'a> Round<'a> {
    pub(crate) const fn new(target: &'a WordEntry) -> Self {
        Self { target, checks: 0 }
    }
}

/// The session state machine
///
/// A round only exists in guess mode, so a "complete" round in free-form mode
/// cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState<'a> {
    Freeform,
    GuessRoundActive(Round<'a>),
    GuessRoundComplete(Round<'a>),
}

/// State without the round payload, safe to hand to presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    Freeform,
    GuessRoundActive,
    GuessRoundComplete,
}

impl SessionState<'_> {
    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        match self {
            Self::Freeform => SessionPhase::Freeform,
            Self::GuessRoundActive(_) => SessionPhase::GuessRoundActive,
            Self::GuessRoundComplete(_) => SessionPhase::GuessRoundComplete,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        match self {
            Self::Freeform => Mode::Freeform,
            Self::GuessRoundActive(_) | Self::GuessRoundComplete(_) => Mode::Guess,
        }
    }
}
