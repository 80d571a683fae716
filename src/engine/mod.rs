//! The stabilization and sentence-assembly engine
//!
//! One `Engine` value owns every piece of mutable session state: the vote
//! window, the stability gate, the presence tracker, the sentence buffer
//! and the current recommendation list. The daemon's frame loop and the
//! API handlers share it behind a single lock, so a frame-loop commit and
//! a concurrent edit can never interleave.
//!
//! Recommendations are recomputed at the end of every mutating operation,
//! before control returns; a reader never sees a stale list.

pub mod presence;
pub mod sentence;
pub mod stability;
pub mod vote;

use std::time::Instant;

use crate::classify::Observation;
use crate::config::EngineConfig;
use crate::recommend::Recommender;

use presence::PresenceTracker;
use sentence::SentenceBuffer;
use stability::StabilityGate;
use vote::VoteWindow;

/// Read-only view of the current session state
#[derive(Debug, Clone)]
pub struct EngineSnapshot {
    /// The assembled sentence so far
    pub sentence: String,
    /// Live majority of the vote window (not the last committed letter)
    pub letter: Option<char>,
    /// Completions for the trailing word, in dictionary order
    pub recommendations: Vec<String>,
}

/// Temporal stabilization engine for one transcription session
#[derive(Debug)]
pub struct Engine {
    votes: VoteWindow,
    stability: StabilityGate,
    presence: PresenceTracker,
    sentence: SentenceBuffer,
    recommender: Recommender,
    recommendations: Vec<String>,
    recommend_limit: usize,
}

impl Engine {
    /// Create an engine with the given thresholds and completion dictionary
    #[must_use]
    pub fn new(config: &EngineConfig, recommender: Recommender, now: Instant) -> Self {
        Self {
            votes: VoteWindow::new(config.vote_window),
            stability: StabilityGate::new(config.stable_threshold, config.cooldown_window, now),
            presence: PresenceTracker::new(config.absence_threshold, now),
            sentence: SentenceBuffer::new(),
            recommender,
            recommendations: Vec::new(),
            recommend_limit: config.recommend_limit,
        }
    }

    /// Ingest one frame's classification result
    ///
    /// A present subject refreshes the presence clock; a classified symbol
    /// joins the vote window. The stability gate then sees the current
    /// majority and may commit a letter, which is appended to the sentence
    /// with the vote window cleared. Returns the committed letter, if any.
    pub fn observe_frame(&mut self, observation: Observation, now: Instant) -> Option<char> {
        if !observation.present {
            return None;
        }

        self.presence.mark_present(now);

        if let Some(symbol) = observation.symbol {
            self.votes.push(symbol);
        }

        let committed = self.stability.observe(self.votes.majority(), now)?;
        self.sentence.append_char(committed);
        self.votes.clear();
        self.recompute_recommendations();
        tracing::info!(letter = %committed, sentence = %self.sentence.as_str(), "letter committed");
        Some(committed)
    }

    /// Evaluate absence-based word boundaries
    ///
    /// Called periodically (not only per frame) so a space lands even when
    /// the collaborator stops sending frames entirely. A continuous
    /// absence inserts exactly one space: the insertion counts as a fresh
    /// sighting. Returns whether a space was inserted.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.presence.is_absent(now) {
            return false;
        }
        if !self.sentence.append_space_if_needed() {
            return false;
        }

        self.presence.mark_present(now);
        self.stability.drop_candidate(now);
        self.recompute_recommendations();
        tracing::debug!(sentence = %self.sentence.as_str(), "word boundary inferred");
        true
    }

    /// Sentence, live letter and recommendations in one consistent view
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            sentence: self.sentence.as_str().to_string(),
            letter: self.votes.majority(),
            recommendations: self.recommendations.clone(),
        }
    }

    /// Replace the trailing word with a chosen completion
    ///
    /// An empty word is absorbed as a no-op.
    pub fn apply_suggestion(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        self.sentence.replace_trailing_word(word);
        self.recompute_recommendations();
    }

    /// Remove the final character; no-op on an empty sentence
    pub fn delete_last(&mut self) {
        self.sentence.delete_last();
        self.recompute_recommendations();
    }

    /// Append a word boundary on explicit request
    ///
    /// Independent of the presence tracker; idempotent against trailing
    /// spaces.
    pub fn add_space(&mut self) {
        self.sentence.append_space_if_needed();
        self.recompute_recommendations();
    }

    /// Restore every state record to its initial value
    ///
    /// Callers hold the engine lock across this call, so the reset is
    /// indivisible with respect to concurrent reads.
    pub fn reset(&mut self, now: Instant) {
        self.votes.clear();
        self.stability.reset(now);
        self.presence.mark_present(now);
        self.sentence.clear();
        self.recommendations.clear();
    }

    /// Current sentence text
    #[must_use]
    pub fn sentence(&self) -> &str {
        self.sentence.as_str()
    }

    fn recompute_recommendations(&mut self) {
        self.recommendations = self
            .recommender
            .recommend(self.sentence.trailing_word(), self.recommend_limit);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn engine(now: Instant) -> Engine {
        Engine::new(&EngineConfig::default(), Recommender::default(), now)
    }

    fn present(symbol: char) -> Observation {
        Observation {
            symbol: Some(symbol),
            present: true,
        }
    }

    #[test]
    fn commit_appends_and_clears_window() {
        let t0 = Instant::now();
        let mut eng = engine(t0);

        eng.observe_frame(present('H'), t0);
        let committed = eng.observe_frame(present('H'), t0 + Duration::from_secs(2));
        assert_eq!(committed, Some('H'));
        assert_eq!(eng.sentence(), "H");
        // Window cleared on commit: no live letter until new votes arrive
        assert_eq!(eng.snapshot().letter, None);
    }

    #[test]
    fn recommendations_follow_commits() {
        let t0 = Instant::now();
        let mut eng = engine(t0);

        eng.observe_frame(present('H'), t0);
        eng.observe_frame(present('H'), t0 + Duration::from_secs(2));
        let recs = eng.snapshot().recommendations;
        assert!(recs.iter().all(|w| w.starts_with('H')));
        assert!(!recs.is_empty());
    }

    #[test]
    fn absent_frames_do_not_refresh_presence() {
        let t0 = Instant::now();
        let mut eng = engine(t0);

        eng.observe_frame(present('A'), t0);
        eng.observe_frame(present('A'), t0 + Duration::from_secs(2));
        assert_eq!(eng.sentence(), "A");

        eng.observe_frame(
            Observation {
                symbol: None,
                present: false,
            },
            t0 + Duration::from_secs(5),
        );
        // Last sighting was at t0+2s; absent for >4s by t0+7s
        assert!(eng.tick(t0 + Duration::from_secs(7)));
        assert_eq!(eng.sentence(), "A ");
    }

    #[test]
    fn continuous_absence_inserts_exactly_one_space() {
        let t0 = Instant::now();
        let mut eng = engine(t0);

        eng.observe_frame(present('A'), t0);
        eng.observe_frame(present('A'), t0 + Duration::from_secs(2));

        assert!(eng.tick(t0 + Duration::from_secs(7)));
        for secs in 8..100 {
            assert!(!eng.tick(t0 + Duration::from_secs(secs)));
        }
        assert_eq!(eng.sentence(), "A ");
    }

    #[test]
    fn no_space_on_empty_sentence() {
        let t0 = Instant::now();
        let mut eng = engine(t0);
        assert!(!eng.tick(t0 + Duration::from_secs(100)));
        assert_eq!(eng.sentence(), "");
    }

    #[test]
    fn reset_restores_initial_state() {
        let t0 = Instant::now();
        let mut eng = engine(t0);

        eng.observe_frame(present('H'), t0);
        eng.observe_frame(present('H'), t0 + Duration::from_secs(2));
        eng.reset(t0 + Duration::from_secs(3));

        let snap = eng.snapshot();
        assert_eq!(snap.sentence, "");
        assert_eq!(snap.letter, None);
        assert!(snap.recommendations.is_empty());
    }

    #[test]
    fn edits_recompute_recommendations() {
        let t0 = Instant::now();
        let mut eng = engine(t0);

        eng.apply_suggestion("HELLO");
        assert_eq!(eng.sentence(), "HELLO");
        // HELLO itself is excluded from its own completions
        assert!(!eng.snapshot().recommendations.contains(&"HELLO".to_string()));

        eng.delete_last();
        assert_eq!(eng.sentence(), "HELL");
        assert!(eng
            .snapshot()
            .recommendations
            .contains(&"HELLO".to_string()));
    }
}
