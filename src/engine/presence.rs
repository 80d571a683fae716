//! Subject-presence tracking for inferred word boundaries
//!
//! When the classifiable subject (the hand) has been out of frame longer
//! than the absence threshold, the engine infers a word boundary and
//! appends a space. Marking the inserted space as a fresh sighting makes a
//! continuous absence produce exactly one space.

use std::time::{Duration, Instant};

/// Tracks elapsed time since a classifiable subject was last observed
#[derive(Debug)]
pub struct PresenceTracker {
    last_seen: Instant,
    absence_threshold: Duration,
}

impl PresenceTracker {
    /// Create a tracker that treats `now` as the last sighting
    #[must_use]
    pub const fn new(absence_threshold: Duration, now: Instant) -> Self {
        Self {
            last_seen: now,
            absence_threshold,
        }
    }

    /// Record that the subject was observed this frame
    pub const fn mark_present(&mut self, now: Instant) {
        self.last_seen = now;
    }

    /// Whether the subject has been absent for longer than the threshold
    ///
    /// The caller must `mark_present` immediately after acting on a `true`
    /// result so the same absence does not trigger again every frame.
    #[must_use]
    pub fn is_absent(&self, now: Instant) -> bool {
        now.duration_since(self.last_seen) > self.absence_threshold
    }
}
