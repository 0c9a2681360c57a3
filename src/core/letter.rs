//! Letters and placed letter instances

use std::fmt;

/// A single lowercase ASCII letter (`a..=z`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Create a letter from a character
    ///
    /// Uppercase input is normalized to lowercase. Returns `None` for anything
    /// that is not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use phonics_tiles::core::Letter;
    ///
    /// assert_eq!(Letter::new('C').unwrap().as_char(), 'c');
    /// assert!(Letter::new('4').is_none());
    /// ```
    #[must_use]
    pub const fn new(ch: char) -> Option<Self> {
        if ch.is_ascii_alphabetic() {
            Some(Self(ch.to_ascii_lowercase() as u8))
        } else {
            None
        }
    }

    /// Create a letter from a raw byte, with the same rules as [`Letter::new`]
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        if byte.is_ascii_alphabetic() {
            Some(Self(byte.to_ascii_lowercase()))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    #[inline]
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self.0
    }

    /// Zero-based position in the alphabet (`a` = 0)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'a') as usize
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Opaque identity of one placed tile
///
/// Two placements of the same letter always get different ids, so each one can
/// be removed, moved or highlighted on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);

impl InstanceId {
    #[inline]
    #[must_use]
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A letter tile that has been placed into the word row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterInstance {
    pub letter: Letter,
    pub id: InstanceId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_normalizes_case() {
        assert_eq!(Letter::new('A'), Letter::new('a'));
        assert_eq!(Letter::new('Z').unwrap().as_char(), 'z');
    }

    #[test]
    fn letter_rejects_non_alphabetic() {
        for ch in ['1', ' ', '!', 'é', '_'] {
            assert!(Letter::new(ch).is_none(), "{ch:?} should be rejected");
        }
    }

    #[test]
    fn letter_index() {
        assert_eq!(Letter::new('a').unwrap().index(), 0);
        assert_eq!(Letter::new('z').unwrap().index(), 25);
    }

    #[test]
    fn letter_from_byte() {
        assert_eq!(Letter::from_byte(b'Q').unwrap().as_char(), 'q');
        assert!(Letter::from_byte(b'9').is_none());
    }

    #[test]
    fn instance_id_display() {
        assert_eq!(InstanceId::new(7).to_string(), "#7");
    }
}
