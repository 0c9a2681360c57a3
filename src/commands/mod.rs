//! Command implementations

pub mod catalog;
pub mod check;
pub mod simple;

pub use catalog::{CatalogListing, list_catalog};
pub use check::{CheckResult, check_spelling};
pub use simple::{ReplCommand, parse_command, run_simple};
