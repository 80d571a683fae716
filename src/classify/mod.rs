//! Classification collaborator contract
//!
//! Everything upstream of "a symbol was classified this frame" lives
//! outside this crate. Collaborators push [`Observation`]s; when they ship
//! raw hand landmarks instead of a finished symbol, a [`Classifier`]
//! implementation turns the frame into one.

pub mod heuristic;

pub use heuristic::HeuristicClassifier;

use serde::Deserialize;

/// One frame's classification result, as produced by the collaborator
///
/// `present` is sampled every frame while `symbol` may be throttled to
/// every Kth frame, so a present subject with no symbol is normal.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Observation {
    /// Classified symbol, if the collaborator produced one this frame
    pub symbol: Option<char>,
    /// Whether a classifiable subject was detected this frame
    pub present: bool,
}

/// Raw hand frame: landmark positions plus the model's ranked classes
#[derive(Debug, Clone, Deserialize)]
pub struct HandFrame {
    /// 21 hand landmarks as `[x, y]` pixel coordinates
    pub landmarks: Vec<[f32; 2]>,
    /// Class indices ranked by model confidence, best first
    pub classes: Vec<u8>,
}

/// Number of hand landmarks a well-formed frame carries
pub const LANDMARK_COUNT: usize = 21;

/// Turns a raw hand frame into a symbol, or nothing
///
/// Implementations must be total: malformed frames yield `None`, never an
/// error.
pub trait Classifier: Send + Sync {
    /// Classify one frame
    fn classify(&self, frame: &HandFrame) -> Option<char>;
}
