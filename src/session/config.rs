//! Session configuration

use super::Mode;
use crate::core::DifficultyFilter;
use crate::placement::{TAP_CAPACITY, TEXT_CAPACITY};
use std::time::Duration;

/// Knobs for one game session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Tier new targets are drawn from
    pub difficulty: DifficultyFilter,
    /// Mode the session opens in
    pub start_mode: Mode,
    /// Speech rate handed to the speaker (1.0 = normal)
    pub speech_rate: f32,
    /// Seed for target picks; `None` seeds from the OS
    pub seed: Option<u64>,
    pub tap_capacity: usize,
    pub text_capacity: usize,
    /// How long a freshly placed tile stays highlighted
    pub fresh_highlight: Duration,
    /// How long a tile stays highlighted while its sound is spoken
    pub speaking_highlight: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            difficulty: DifficultyFilter::All,
            start_mode: Mode::Freeform,
            speech_rate: 0.8,
            seed: None,
            tap_capacity: TAP_CAPACITY,
            text_capacity: TEXT_CAPACITY,
            fresh_highlight: Duration::from_millis(600),
            speaking_highlight: Duration::from_millis(900),
        }
    }
}
