//! Glyph Gateway - sign-to-text stabilization gateway
//!
//! This library turns a noisy per-frame stream of classified symbols into a
//! stable, editable sentence:
//! - Majority voting over a bounded window of recent classifications
//! - Temporal stabilization (a symbol must hold the majority before commit)
//! - Cooldown against duplicate commits, inferred spaces on absence
//! - Prefix completions for the word currently being typed
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │            Classification collaborator               │
//! │   camera  │  landmarks  │  CNN  │  heuristic rules  │
//! └────────────────────┬────────────────────────────────┘
//!                      │  (symbol-or-none, present)
//! ┌────────────────────▼────────────────────────────────┐
//! │                  Glyph Gateway                       │
//! │  Vote window │ Stability gate │ Sentence │ Recs     │
//! └────────────────────┬────────────────────────────────┘
//!                      │
//! ┌────────────────────▼────────────────────────────────┐
//! │                  Serving layer                       │
//! │  GET /api/text │ clear │ suggestion │ delete │ ...  │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod api;
pub mod classify;
pub mod config;
pub mod daemon;
pub mod engine;
pub mod error;
pub mod recommend;

pub use classify::{Classifier, HandFrame, HeuristicClassifier, Observation};
pub use config::{Config, EngineConfig};
pub use daemon::Daemon;
pub use engine::{Engine, EngineSnapshot};
pub use error::{Error, Result};
pub use recommend::Recommender;
