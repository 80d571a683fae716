//! Configuration management for the glyph gateway
//!
//! Defaults ← optional TOML file ← `GLYPH_*` environment variables, in
//! that order of precedence.

pub mod file;

use std::time::Duration;

use crate::{Error, Result};

/// Default API server port
pub const DEFAULT_PORT: u16 = 7860;

/// Default frame ingest queue depth
pub const DEFAULT_FRAME_QUEUE: usize = 64;

/// Gateway configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Stabilization engine thresholds
    pub engine: EngineConfig,

    /// API server port
    pub port: u16,

    /// Frame ingest queue depth
    pub frame_queue: usize,

    /// Completion dictionary override; `None` uses the built-in list
    pub dictionary: Option<Vec<String>>,
}

/// Stabilization engine thresholds
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Vote window capacity (frames)
    pub vote_window: usize,

    /// How long a majority must hold before a letter commits
    pub stable_threshold: Duration,

    /// Minimum gap before the same letter may commit twice in a row
    pub cooldown_window: Duration,

    /// Absence duration that infers a word boundary
    pub absence_threshold: Duration,

    /// Maximum completions returned per query
    pub recommend_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            vote_window: 6,
            stable_threshold: Duration::from_secs_f64(2.0),
            cooldown_window: Duration::from_secs_f64(1.2),
            absence_threshold: Duration::from_secs_f64(4.0),
            recommend_limit: 5,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            port: DEFAULT_PORT,
            frame_queue: DEFAULT_FRAME_QUEUE,
            dictionary: None,
        }
    }
}

impl Config {
    /// Load configuration from file and environment
    ///
    /// # Errors
    ///
    /// Returns error if a threshold fails validation.
    pub fn load() -> Result<Self> {
        let file = file::load_config_file();

        let mut config = Self::default();

        if let Some(n) = file.engine.vote_window {
            config.engine.vote_window = n;
        }
        if let Some(secs) = file.engine.stable_secs {
            config.engine.stable_threshold = duration_secs(secs, "engine.stable_secs")?;
        }
        if let Some(secs) = file.engine.cooldown_secs {
            config.engine.cooldown_window = duration_secs(secs, "engine.cooldown_secs")?;
        }
        if let Some(secs) = file.engine.absence_secs {
            config.engine.absence_threshold = duration_secs(secs, "engine.absence_secs")?;
        }
        if let Some(n) = file.engine.recommend_limit {
            config.engine.recommend_limit = n;
        }
        if let Some(port) = file.server.port {
            config.port = port;
        }
        if let Some(depth) = file.server.frame_queue {
            config.frame_queue = depth;
        }
        config.dictionary = file.dictionary.words;

        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay `GLYPH_*` environment variables
    fn apply_env(&mut self) -> Result<()> {
        if let Some(n) = env_parse::<usize>("GLYPH_VOTE_WINDOW")? {
            self.engine.vote_window = n;
        }
        if let Some(secs) = env_parse::<f64>("GLYPH_STABLE_SECS")? {
            self.engine.stable_threshold = duration_secs(secs, "GLYPH_STABLE_SECS")?;
        }
        if let Some(secs) = env_parse::<f64>("GLYPH_COOLDOWN_SECS")? {
            self.engine.cooldown_window = duration_secs(secs, "GLYPH_COOLDOWN_SECS")?;
        }
        if let Some(secs) = env_parse::<f64>("GLYPH_ABSENCE_SECS")? {
            self.engine.absence_threshold = duration_secs(secs, "GLYPH_ABSENCE_SECS")?;
        }
        if let Some(n) = env_parse::<usize>("GLYPH_RECOMMEND_LIMIT")? {
            self.engine.recommend_limit = n;
        }
        Ok(())
    }

    /// Validate threshold sanity
    ///
    /// A cooldown longer than the stable threshold is legal but unusual
    /// (cooldown never bites once re-stabilization takes longer), so it
    /// only warns.
    ///
    /// # Errors
    ///
    /// Returns error for a zero vote window or a zero-duration threshold.
    pub fn validate(&self) -> Result<()> {
        if self.engine.vote_window == 0 {
            return Err(Error::Config("vote window must be at least 1".to_string()));
        }
        if self.engine.stable_threshold.is_zero() {
            return Err(Error::Config("stable threshold must be positive".to_string()));
        }
        if self.engine.absence_threshold.is_zero() {
            return Err(Error::Config(
                "absence threshold must be positive".to_string(),
            ));
        }
        if self.frame_queue == 0 {
            return Err(Error::Config("frame queue must be at least 1".to_string()));
        }
        if self.engine.cooldown_window > self.engine.stable_threshold {
            tracing::warn!(
                cooldown = ?self.engine.cooldown_window,
                stable = ?self.engine.stable_threshold,
                "cooldown exceeds stable threshold; repeat letters are gated by stabilization alone"
            );
        }
        Ok(())
    }
}

/// Parse an environment variable if set
fn env_parse<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .map(Some)
            .map_err(|_| Error::Config(format!("invalid {name}: {value}"))),
        Err(_) => Ok(None),
    }
}

/// Convert seconds to a `Duration`, rejecting non-finite or negative input
fn duration_secs(secs: f64, field: &str) -> Result<Duration> {
    if !secs.is_finite() || secs < 0.0 {
        return Err(Error::Config(format!("invalid {field}: {secs}")));
    }
    Ok(Duration::from_secs_f64(secs))
}
