//! Runtime configuration for the host loop.
//!
//! Only host concerns live here (frame pacing, key-hold detection, RNG seed,
//! log destination).  Gameplay tuning is fixed in `compute`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV: &str = "SPACE_DODGER_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "space_dodger.toml";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Target frame duration in milliseconds (16 ≈ 60 FPS).
    pub frame_ms: u64,
    /// A key counts as held if seen within this many frames.  Covers
    /// terminals that never send key-release events.
    pub hold_window: u64,
    /// Fixed RNG seed for reproducible runs; entropy when absent.
    pub seed: Option<u64>,
    /// Where log output goes.  The terminal belongs to the renderer.
    pub log_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            frame_ms: 16,
            hold_window: 4,
            seed: None,
            log_file: None,
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a `.toml` file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if path.extension().and_then(|e| e.to_str()) != Some("toml") {
            return Err(ConfigError::UnsupportedFormat(path.display().to_string()));
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Load from `$SPACE_DODGER_CONFIG`, else `space_dodger.toml` in the
    /// working directory.  A missing file is not an error: defaults apply.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load_or_default(&path)
    }

    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}
