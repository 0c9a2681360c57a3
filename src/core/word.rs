//! Validated spelling words
//!
//! A `Word` is what the catalog stores and what a round asks the learner to
//! spell: 2 to 10 lowercase ASCII letters.

use super::Letter;
use std::fmt;
use thiserror::Error;

/// Shortest word the game accepts
pub const MIN_WORD_LEN: usize = 2;

/// Longest word the game accepts
pub const MAX_WORD_LEN: usize = 10;

/// A lowercase alphabetic word of 2 to 10 letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be {MIN_WORD_LEN} to {MAX_WORD_LEN} letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is outside 2..=10
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use phonics_tiles::core::Word;
    ///
    /// let word = Word::new("Cat").unwrap();
    /// assert_eq!(word.text(), "cat");
    ///
    /// assert!(Word::new("a").is_err());
    /// assert!(Word::new("c4t").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_ascii_lowercase();

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        // Length checked after the ASCII check so it counts letters, not bytes
        if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&text.len()) {
            return Err(WordError::InvalidLength(text.len()));
        }

        Ok(Self { text })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Letter at a position, or `None` past the end
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<Letter> {
        self.text
            .as_bytes()
            .get(position)
            .copied()
            .and_then(Letter::from_byte)
    }

    /// Iterate over the letters in order
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.text.bytes().filter_map(Letter::from_byte)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("giraffe").unwrap();
        assert_eq!(word.text(), "giraffe");
        assert_eq!(word.len(), 7);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("CAT").unwrap().text(), "cat");
        assert_eq!(Word::new("CaT").unwrap(), Word::new("cat").unwrap());
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("a"), Err(WordError::InvalidLength(1)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
        assert_eq!(Word::new("strawberries"), Err(WordError::InvalidLength(12)));
        assert!(Word::new("strawberry").is_ok()); // Exactly 10
        assert!(Word::new("ox").is_ok()); // Exactly 2
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("c4t"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("ca t"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("café"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("dog").unwrap();
        assert_eq!(word.letter_at(0), Letter::new('d'));
        assert_eq!(word.letter_at(2), Letter::new('g'));
        assert_eq!(word.letter_at(3), None);
    }

    #[test]
    fn word_letters_in_order() {
        let word = Word::new("bee").unwrap();
        let letters: String = word.letters().map(Letter::as_char).collect();
        assert_eq!(letters, "bee");
    }

    #[test]
    fn word_error_messages() {
        assert_eq!(
            WordError::InvalidLength(1).to_string(),
            "Word must be 2 to 10 letters, got 1"
        );
    }
}
