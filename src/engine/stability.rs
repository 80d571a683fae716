//! Temporal stabilization of the majority symbol
//!
//! A symbol becomes a committed letter only after holding the vote-window
//! majority continuously for a configured duration. A cooldown window
//! suppresses re-commits of the same letter caused by residual stable time
//! after a commit, while a *different* letter may commit as soon as it
//! stabilizes.
//!
//! Time is passed in explicitly as `now` so callers (and tests) own the
//! clock.

use std::time::{Duration, Instant};

/// Record of the most recent commit, used to enforce the cooldown window
#[derive(Debug, Clone, Copy)]
struct CommitRecord {
    last_symbol: Option<char>,
    last_commit: Option<Instant>,
}

impl CommitRecord {
    const fn empty() -> Self {
        Self {
            last_symbol: None,
            last_commit: None,
        }
    }

    /// Whether committing `symbol` at `now` is suppressed by cooldown
    fn on_cooldown(&self, symbol: char, now: Instant, window: Duration) -> bool {
        self.last_symbol == Some(symbol)
            && self
                .last_commit
                .is_some_and(|at| now.duration_since(at) < window)
    }
}

/// Decides when the current majority symbol is stable enough to commit
#[derive(Debug)]
pub struct StabilityGate {
    candidate: Option<char>,
    since: Instant,
    commit_record: CommitRecord,
    stable_threshold: Duration,
    cooldown_window: Duration,
}

impl StabilityGate {
    /// Create a gate with the given thresholds, starting with no candidate
    #[must_use]
    pub const fn new(stable_threshold: Duration, cooldown_window: Duration, now: Instant) -> Self {
        Self {
            candidate: None,
            since: now,
            commit_record: CommitRecord::empty(),
            stable_threshold,
            cooldown_window,
        }
    }

    /// Feed this frame's majority; returns the symbol to commit, if any
    ///
    /// A change of majority (including to or from `None`) resets the
    /// stability timer and is never eligible to commit. An unchanged
    /// non-empty majority commits once it has held for the stable
    /// threshold, unless the cooldown record suppresses it. A returned
    /// symbol has already been recorded as committed; the caller appends
    /// it to the sentence and clears the vote window.
    pub fn observe(&mut self, majority: Option<char>, now: Instant) -> Option<char> {
        if majority != self.candidate {
            self.candidate = majority;
            self.since = now;
            return None;
        }

        let symbol = self.candidate?;
        if now.duration_since(self.since) < self.stable_threshold {
            return None;
        }

        if self
            .commit_record
            .on_cooldown(symbol, now, self.cooldown_window)
        {
            return None;
        }

        self.commit_record.last_symbol = Some(symbol);
        self.commit_record.last_commit = Some(now);
        tracing::debug!(letter = %symbol, "letter stabilized");
        Some(symbol)
    }

    /// Current candidate symbol, if any
    #[must_use]
    pub const fn candidate(&self) -> Option<char> {
        self.candidate
    }

    /// Drop the current candidate, restarting stability measurement
    ///
    /// Called when the subject leaves the frame long enough to infer a
    /// word boundary; the commit record survives so cooldown still holds
    /// across the gap.
    pub const fn drop_candidate(&mut self, now: Instant) {
        self.candidate = None;
        self.since = now;
    }

    /// Restore the initial no-candidate state, forgetting past commits
    pub const fn reset(&mut self, now: Instant) {
        self.candidate = None;
        self.since = now;
        self.commit_record = CommitRecord::empty();
    }
}
