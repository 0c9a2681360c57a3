//! Core domain types for the tile game
//!
//! Letters, placed letter instances, validated words and difficulty tiers.
//! Everything here is plain data with no I/O.

mod difficulty;
mod letter;
mod word;

pub use difficulty::{Difficulty, DifficultyFilter, ParseDifficultyError};
pub use letter::{InstanceId, Letter, LetterInstance};
pub use word::{MAX_WORD_LEN, MIN_WORD_LEN, Word, WordError};
