//! Speech request numbering and sequencing
//!
//! Most speech is fire-and-forget. A round prompt is the exception: the
//! target word must not start until the instruction before it has finished,
//! so it is parked here until the speaker reports that completion.

use crate::feedback::{Utterance, UtteranceId};

#[derive(Debug, Default)]
pub(crate) struct SpeechQueue {
    next_id: u64,
    /// Utterance waiting for another one to finish: (waits for, then speak)
    follow_up: Option<(UtteranceId, Utterance)>,
}

impl SpeechQueue {
    pub(crate) fn utterance(&mut self, text: impl Into<String>, rate: f32) -> Utterance {
        let id = UtteranceId::new(self.next_id);
        self.next_id += 1;
        Utterance {
            id,
            text: text.into(),
            rate,
        }
    }

    /// Build `first` now and park `then` until `first` finishes
    ///
    /// Replaces any follow-up still parked from an earlier pair.
    pub(crate) fn chain(&mut self, first: Utterance, then: Utterance) -> Utterance {
        self.follow_up = Some((first.id, then));
        first
    }

    /// Report a finished utterance, releasing whatever waited on it
    pub(crate) fn finished(&mut self, id: UtteranceId) -> Option<Utterance> {
        match self.follow_up.take() {
            Some((waits_for, then)) if waits_for == id => Some(then),
            other => {
                self.follow_up = other;
                None
            }
        }
    }

    pub(crate) fn cancel_follow_up(&mut self) {
        self.follow_up = None;
    }

    #[cfg(test)]
    pub(crate) fn has_follow_up(&self) -> bool {
        self.follow_up.is_some()
    }
}
