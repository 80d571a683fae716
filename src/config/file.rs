//! TOML configuration file loading
//!
//! Supports `~/.config/glyph/config.toml` as a persistent config source.
//! All fields are optional — the file is a partial overlay on top of
//! defaults.

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level TOML configuration file schema
#[derive(Debug, Default, Deserialize)]
pub struct GlyphConfigFile {
    /// Stabilization engine tuning
    #[serde(default)]
    pub engine: EngineFileConfig,

    /// Server/runtime configuration
    #[serde(default)]
    pub server: ServerFileConfig,

    /// Completion dictionary override
    #[serde(default)]
    pub dictionary: DictionaryFileConfig,
}

/// Stabilization engine tuning
#[derive(Debug, Default, Deserialize)]
pub struct EngineFileConfig {
    /// Vote window capacity (frames)
    pub vote_window: Option<usize>,

    /// Seconds a majority must hold before a letter commits
    pub stable_secs: Option<f64>,

    /// Seconds before the same letter may commit twice in a row
    pub cooldown_secs: Option<f64>,

    /// Seconds of absence before a space is inferred
    pub absence_secs: Option<f64>,

    /// Maximum completions returned per query
    pub recommend_limit: Option<usize>,
}

/// Server/runtime configuration
#[derive(Debug, Default, Deserialize)]
pub struct ServerFileConfig {
    /// API server port
    pub port: Option<u16>,

    /// Frame ingest queue depth
    pub frame_queue: Option<usize>,
}

/// Completion dictionary override
#[derive(Debug, Default, Deserialize)]
pub struct DictionaryFileConfig {
    /// Replaces the built-in word list; order is rank
    pub words: Option<Vec<String>>,
}

/// Load the TOML config file from the standard path
///
/// Returns `GlyphConfigFile::default()` if the file doesn't exist or
/// can't be parsed.
pub fn load_config_file() -> GlyphConfigFile {
    let Some(path) = config_file_path() else {
        return GlyphConfigFile::default();
    };

    if !path.exists() {
        return GlyphConfigFile::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded config file");
                config
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to parse config file, using defaults"
                );
                GlyphConfigFile::default()
            }
        },
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "failed to read config file"
            );
            GlyphConfigFile::default()
        }
    }
}

/// Return the config file path: `~/.config/glyph/config.toml`
pub fn config_file_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|d| d.config_dir().join("glyph").join("config.toml"))
}
