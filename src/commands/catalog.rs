//! Catalog listing command
//!
//! Lists the built-in words, optionally for one difficulty tier.

use crate::catalog::{WordCatalog, WordEntry};
use crate::core::{Difficulty, DifficultyFilter};

/// Entries passing a filter plus per-tier counts
pub struct CatalogListing<'a> {
    pub filter: DifficultyFilter,
    pub entries: Vec<&'a WordEntry>,
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
}

/// Collect the catalog entries passing `filter`
#[must_use]
pub fn list_catalog(catalog: &WordCatalog, filter: DifficultyFilter) -> CatalogListing<'_> {
    let entries = catalog.filter_by_difficulty(filter);
    let count = |tier: Difficulty| entries.iter().filter(|e| e.difficulty == tier).count();

    CatalogListing {
        filter,
        easy: count(Difficulty::Easy),
        medium: count(Difficulty::Medium),
        hard: count(Difficulty::Hard),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_all_counts_every_tier() {
        let catalog = WordCatalog::builtin();
        let listing = list_catalog(catalog, DifficultyFilter::All);

        assert_eq!(listing.entries.len(), catalog.len());
        assert_eq!(
            listing.easy + listing.medium + listing.hard,
            listing.entries.len()
        );
    }

    #[test]
    fn listing_single_tier() {
        let listing = list_catalog(WordCatalog::builtin(), DifficultyFilter::Hard);

        assert!(listing.entries.iter().all(|e| e.difficulty == Difficulty::Hard));
        assert_eq!(listing.easy, 0);
        assert_eq!(listing.medium, 0);
        assert_eq!(listing.hard, listing.entries.len());
    }
}
