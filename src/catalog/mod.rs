//! Word catalog
//!
//! The immutable set of spellable words. The built-in catalog is created once
//! on first use and shared read-only for the life of the process.

mod embedded;
mod entry;

pub use embedded::{WORDS, WORDS_COUNT};
pub use entry::{Category, WordEntry};

use crate::core::{DifficultyFilter, Word, WordError};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::warn;

static BUILTIN: LazyLock<WordCatalog> = LazyLock::new(|| {
    // The embedded list is checked by `builtin_catalog_is_valid` below
    WordCatalog::new(WORDS.iter().copied()).expect("built-in word catalog is valid")
});

/// Errors raised while building a catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Catalog must contain at least one word")]
    Empty,
    #[error("Invalid catalog word '{word}': {source}")]
    InvalidWord {
        word: &'static str,
        #[source]
        source: WordError,
    },
}

/// Lookup table of words with difficulty filtering and random picks
///
/// Never empty, so [`WordCatalog::pick_random`] always has something to
/// return.
#[derive(Debug, Clone)]
pub struct WordCatalog {
    entries: Vec<WordEntry>,
    index: FxHashMap<&'static str, usize>,
}

impl WordCatalog {
    /// Build a catalog from entries in declaration order
    ///
    /// A word declared twice keeps its first position and takes the data of
    /// its last declaration.
    ///
    /// # Errors
    /// Returns `CatalogError` if there are no entries or a word is not a valid
    /// 2 to 10 letter lowercase word.
    pub fn new(entries: impl IntoIterator<Item = WordEntry>) -> Result<Self, CatalogError> {
        let mut catalog = Self {
            entries: Vec::new(),
            index: FxHashMap::default(),
        };

        for entry in entries {
            let word = Word::new(entry.word).map_err(|source| CatalogError::InvalidWord {
                word: entry.word,
                source,
            })?;
            if word.text() != entry.word {
                return Err(CatalogError::InvalidWord {
                    word: entry.word,
                    source: WordError::InvalidCharacters,
                });
            }

            if let Some(&existing) = catalog.index.get(entry.word) {
                warn!(word = entry.word, "duplicate catalog word, keeping last definition");
                catalog.entries[existing] = entry;
            } else {
                catalog.index.insert(entry.word, catalog.entries.len());
                catalog.entries.push(entry);
            }
        }

        if catalog.entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(catalog)
    }

    /// The shared built-in catalog
    ///
    /// # Examples
    /// ```
    /// use phonics_tiles::catalog::WordCatalog;
    ///
    /// let cat = WordCatalog::builtin().lookup("cat").unwrap();
    /// assert_eq!(cat.pictogram, "🐱");
    /// ```
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Find the entry for an exact lowercase word
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<&WordEntry> {
        self.index.get(word).map(|&i| &self.entries[i])
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Entries passing the filter, in declaration order
    #[must_use]
    pub fn filter_by_difficulty(&self, filter: DifficultyFilter) -> Vec<&WordEntry> {
        self.entries
            .iter()
            .filter(|entry| filter.matches(entry.difficulty))
            .collect()
    }

    /// Entries of one theme, in declaration order
    #[must_use]
    pub fn filter_by_category(&self, category: Category) -> Vec<&WordEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.category == category)
            .collect()
    }

    /// Pick a uniformly random entry passing the filter
    ///
    /// When no entry passes, the pick falls back to the whole catalog so the
    /// game never runs out of targets.
    pub fn pick_random<R: Rng + ?Sized>(
        &self,
        filter: DifficultyFilter,
        rng: &mut R,
    ) -> &WordEntry {
        if let Some(entry) = self.filter_by_difficulty(filter).choose(rng).copied() {
            return entry;
        }

        warn!(%filter, "no words match difficulty filter, picking from full catalog");
        &self.entries[rng.random_range(0..self.entries.len())]
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; catalogs cannot be built empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Difficulty, MAX_WORD_LEN, MIN_WORD_LEN};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small_catalog() -> WordCatalog {
        WordCatalog::new([
            WordEntry::new("cat", "🐱", Difficulty::Easy, Category::Animals),
            WordEntry::new("frog", "🐸", Difficulty::Medium, Category::Animals),
            WordEntry::new("sun", "☀️", Difficulty::Easy, Category::Nature),
        ])
        .unwrap()
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = WordCatalog::new(WORDS.iter().copied()).unwrap();
        assert_eq!(catalog.len(), WORDS_COUNT);
        for entry in WORDS {
            assert!(
                (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&entry.len()),
                "'{}' has bad length",
                entry.word
            );
        }
    }

    #[test]
    fn builtin_has_every_tier() {
        let catalog = WordCatalog::builtin();
        for filter in [
            DifficultyFilter::Easy,
            DifficultyFilter::Medium,
            DifficultyFilter::Hard,
        ] {
            assert!(!catalog.filter_by_difficulty(filter).is_empty());
        }
    }

    #[test]
    fn lookup_known_and_unknown() {
        let catalog = small_catalog();
        assert_eq!(catalog.lookup("frog").unwrap().pictogram, "🐸");
        assert!(catalog.lookup("dog").is_none());
        assert!(catalog.contains("sun"));
    }

    #[test]
    fn filter_all_keeps_declaration_order() {
        let catalog = small_catalog();
        let words: Vec<&str> = catalog
            .filter_by_difficulty(DifficultyFilter::All)
            .iter()
            .map(|e| e.word)
            .collect();
        assert_eq!(words, ["cat", "frog", "sun"]);
    }

    #[test]
    fn filter_single_tier() {
        let catalog = small_catalog();
        let easy: Vec<&str> = catalog
            .filter_by_difficulty(DifficultyFilter::Easy)
            .iter()
            .map(|e| e.word)
            .collect();
        assert_eq!(easy, ["cat", "sun"]);
        assert!(catalog.filter_by_difficulty(DifficultyFilter::Hard).is_empty());
    }

    #[test]
    fn filter_by_category() {
        let catalog = small_catalog();
        assert_eq!(catalog.filter_by_category(Category::Animals).len(), 2);
        assert!(catalog.filter_by_category(Category::Food).is_empty());
    }

    #[test]
    fn pick_random_respects_filter() {
        let catalog = small_catalog();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let entry = catalog.pick_random(DifficultyFilter::Easy, &mut rng);
            assert_eq!(entry.difficulty, Difficulty::Easy);
        }
    }

    #[test]
    fn pick_random_falls_back_when_tier_empty() {
        let catalog = small_catalog();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let entry = catalog.pick_random(DifficultyFilter::Hard, &mut rng);
            assert!(catalog.contains(entry.word));
        }
    }

    #[test]
    fn duplicate_word_keeps_position_takes_last_data() {
        let catalog = WordCatalog::new([
            WordEntry::new("orange", "🍊", Difficulty::Hard, Category::Food),
            WordEntry::new("pear", "🍐", Difficulty::Easy, Category::Food),
            WordEntry::new("orange", "🟧", Difficulty::Medium, Category::Colors),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 2);
        let all = catalog.filter_by_difficulty(DifficultyFilter::All);
        assert_eq!(all[0].word, "orange");
        assert_eq!(all[0].pictogram, "🟧");
        assert_eq!(all[0].difficulty, Difficulty::Medium);
    }

    #[test]
    fn builtin_orange_sits_with_food_as_a_color() {
        let words: Vec<&str> = WordCatalog::builtin()
            .filter_by_difficulty(DifficultyFilter::All)
            .iter()
            .map(|e| e.word)
            .collect();
        let orange = words.iter().position(|&w| w == "orange").unwrap();
        assert_eq!(words[orange - 1], "apple");
        assert_eq!(words[orange + 1], "pear");
        assert_eq!(words.iter().filter(|&&w| w == "orange").count(), 1);

        let entry = WordCatalog::builtin().lookup("orange").unwrap();
        assert_eq!(entry.pictogram, "🟧");
        assert_eq!(entry.category, Category::Colors);
    }

    #[test]
    fn empty_catalog_rejected() {
        assert_eq!(WordCatalog::new(Vec::new()).unwrap_err(), CatalogError::Empty);
    }

    #[test]
    fn invalid_word_rejected() {
        let err = WordCatalog::new([WordEntry::new(
            "Cat",
            "🐱",
            Difficulty::Easy,
            Category::Animals,
        )])
        .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidWord { word: "Cat", .. }));

        let err = WordCatalog::new([WordEntry::new(
            "x",
            "❌",
            Difficulty::Easy,
            Category::Fun,
        )])
        .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidWord { word: "x", .. }));
    }
}
