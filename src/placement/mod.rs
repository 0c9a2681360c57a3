//! Placed letter tiles
//!
//! `PlacementSequence` is the ordered row of tiles the learner is building a
//! word in. It is bounded: taps and drops stop at the tap capacity, typed text
//! may fill up to the larger text capacity.
//!
//! Every operation is total. Capacity limits and stale indices are normal
//! interactive conditions, so they are reported through the return value
//! instead of an error.

use crate::core::{InstanceId, Letter, LetterInstance};
use tracing::debug;

/// Most tiles a tap or drop can fill the row to
pub const TAP_CAPACITY: usize = 9;

/// Most tiles typed text can fill the row to
pub const TEXT_CAPACITY: usize = 12;

/// Ordered, bounded row of placed letters
///
/// # Examples
/// ```
/// use phonics_tiles::core::Letter;
/// use phonics_tiles::placement::PlacementSequence;
///
/// let mut row = PlacementSequence::new();
/// for ch in ['c', 'a', 't'] {
///     row.append(Letter::new(ch).unwrap());
/// }
/// row.move_to(2, 0);
/// assert_eq!(row.to_word(), "tca");
/// ```
#[derive(Debug, Clone)]
pub struct PlacementSequence {
    tiles: Vec<LetterInstance>,
    next_id: u64,
    tap_capacity: usize,
    text_capacity: usize,
}

impl Default for PlacementSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl PlacementSequence {
    /// Create an empty row with the default capacities (9 tapped, 12 typed)
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacities(TAP_CAPACITY, TEXT_CAPACITY)
    }

    /// Create an empty row with custom capacities
    ///
    /// The text capacity is raised to the tap capacity if it is smaller.
    #[must_use]
    pub fn with_capacities(tap_capacity: usize, text_capacity: usize) -> Self {
        Self {
            tiles: Vec::with_capacity(text_capacity.max(tap_capacity)),
            next_id: 0,
            tap_capacity,
            text_capacity: text_capacity.max(tap_capacity),
        }
    }

    fn mint(&mut self, letter: Letter) -> LetterInstance {
        let id = InstanceId::new(self.next_id);
        self.next_id += 1;
        LetterInstance { letter, id }
    }

    fn at_tap_capacity(&self) -> bool {
        self.tiles.len() >= self.tap_capacity
    }

    /// Place a letter at the end of the row
    ///
    /// Returns the new tile, or `None` when the row is already full.
    pub fn append(&mut self, letter: Letter) -> Option<LetterInstance> {
        if self.at_tap_capacity() {
            debug!(%letter, len = self.tiles.len(), "append rejected, row full");
            return None;
        }
        let tile = self.mint(letter);
        self.tiles.push(tile);
        Some(tile)
    }

    /// Place a letter before the tile currently at `index`
    ///
    /// `index == len()` places it at the end. Returns `None` when the row is
    /// full or the index is past the end.
    pub fn insert_at(&mut self, index: usize, letter: Letter) -> Option<LetterInstance> {
        if self.at_tap_capacity() {
            debug!(%letter, index, "insert rejected, row full");
            return None;
        }
        if index > self.tiles.len() {
            debug!(%letter, index, len = self.tiles.len(), "insert rejected, index out of range");
            return None;
        }
        let tile = self.mint(letter);
        self.tiles.insert(index, tile);
        Some(tile)
    }

    /// Remove the tile at `index`; out-of-range indices are ignored
    pub fn remove_at(&mut self, index: usize) -> Option<LetterInstance> {
        if index < self.tiles.len() {
            Some(self.tiles.remove(index))
        } else {
            debug!(index, len = self.tiles.len(), "remove ignored, index out of range");
            None
        }
    }

    /// Move the tile at `from` so it ends up at `to`
    ///
    /// Tiles in between shift by one. Returns false (and changes nothing) when
    /// the indices are equal or either one is out of range.
    pub fn move_to(&mut self, from: usize, to: usize) -> bool {
        let len = self.tiles.len();
        if from == to || from >= len || to >= len {
            return false;
        }
        let tile = self.tiles.remove(from);
        self.tiles.insert(to, tile);
        true
    }

    /// Replace the whole row with the letters of `text`
    ///
    /// Non-letters are dropped, the rest lowercased and cut to the text
    /// capacity. Every surviving letter becomes a fresh tile. Returns the
    /// number of tiles placed.
    pub fn replace_all(&mut self, text: &str) -> usize {
        let letters: Vec<Letter> = text
            .chars()
            .filter_map(Letter::new)
            .take(self.text_capacity)
            .collect();

        self.tiles.clear();
        for letter in letters {
            let tile = self.mint(letter);
            self.tiles.push(tile);
        }
        self.tiles.len()
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    /// The current spelling, lowercase
    #[must_use]
    pub fn to_word(&self) -> String {
        self.tiles.iter().map(|tile| tile.letter.as_char()).collect()
    }

    #[must_use]
    pub fn tiles(&self) -> &[LetterInstance] {
        &self.tiles
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&LetterInstance> {
        self.tiles.get(index)
    }

    /// Index of the tile with this id, if it is still placed
    #[must_use]
    pub fn position_of(&self, id: InstanceId) -> Option<usize> {
        self.tiles.iter().position(|tile| tile.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether a tap or drop would currently be rejected
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.at_tap_capacity()
    }

    #[must_use]
    pub const fn tap_capacity(&self) -> usize {
        self.tap_capacity
    }

    #[must_use]
    pub const fn text_capacity(&self) -> usize {
        self.text_capacity
    }
}
