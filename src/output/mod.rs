//! Terminal output formatting
//!
//! Display utilities for CLI results and the line-mode game.

pub mod display;
pub mod formatters;

pub use display::{ConsoleFeedback, print_catalog, print_check_result, print_view};
