//! Phonics Tiles
//!
//! A letter-tile word building game: place letters into a row, hear their
//! sounds, and spell picture words in a guessing game with per-letter feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use std::time::Instant;
//! use phonics_tiles::catalog::WordCatalog;
//! use phonics_tiles::core::Letter;
//! use phonics_tiles::feedback::RecordingFeedback;
//! use phonics_tiles::session::{GameSession, Input, SessionConfig};
//!
//! let mut session = GameSession::new(WordCatalog::builtin(), SessionConfig::default());
//! let now = Instant::now();
//! for ch in ['d', 'o', 'g'] {
//!     session.handle(Input::Tap(Letter::new(ch).unwrap()), now);
//! }
//!
//! let mut sink = RecordingFeedback::default();
//! session.pump(&mut sink);
//! assert_eq!(session.view(now).recognized.unwrap().pictogram, "🐶");
//! ```

// Core domain types
pub mod core;

// Built-in word list and lookups
pub mod catalog;

// Placed tile row
pub mod placement;

// Spelling checks
pub mod evaluator;

// Speech/tone effects and collaborator traits
pub mod feedback;

// Game state machine
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
