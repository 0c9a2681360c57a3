//! Transient tile highlights
//!
//! A highlight is a deadline attached to one placed tile. Deadlines are
//! checked against the `now` the caller passes in, and a tile's highlight is
//! cancelled as soon as the tile leaves the row so no timer outlives its tile.

use crate::core::InstanceId;
use rustc_hash::FxHashMap;
use std::time::Instant;

/// Kind of transient highlight on a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Highlight {
    /// Just placed
    Fresh,
    /// Its sound is being spoken
    Speaking,
}

#[derive(Debug, Default)]
pub(crate) struct HighlightTimers {
    active: FxHashMap<InstanceId, (Highlight, Instant)>,
}

impl HighlightTimers {
    /// Start (or restart) a highlight on a tile until `until`
    pub(crate) fn start(&mut self, id: InstanceId, kind: Highlight, until: Instant) {
        self.active.insert(id, (kind, until));
    }

    pub(crate) fn cancel(&mut self, id: InstanceId) {
        self.active.remove(&id);
    }

    pub(crate) fn cancel_all(&mut self) {
        self.active.clear();
    }

    /// Drop every highlight whose deadline has passed, returning their tiles
    pub(crate) fn expire(&mut self, now: Instant) -> Vec<InstanceId> {
        let expired: Vec<InstanceId> = self
            .active
            .iter()
            .filter(|&(_, &(_, until))| until <= now)
            .map(|(&id, _)| id)
            .collect();
        for id in &expired {
            self.active.remove(id);
        }
        expired
    }

    /// The highlight on a tile, if it has one that is still running at `now`
    pub(crate) fn get(&self, id: InstanceId, now: Instant) -> Option<Highlight> {
        self.active
            .get(&id)
            .filter(|&&(_, until)| until > now)
            .map(|&(kind, _)| kind)
    }

    /// Earliest pending deadline, for scheduling the next redraw
    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        self.active.values().map(|&(_, until)| until).min()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.active.len()
    }
}
