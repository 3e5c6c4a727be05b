use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fretwise_core::{Orientation, RenderMode};
use serde::{Deserialize, Serialize};

/// Settings for new practice sessions.
///
/// Loaded from `~/.config/fretwise/config.toml` when present, with the
/// following priority:
/// 1. CLI arguments (highest priority)
/// 2. Config file
/// 3. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Highest fret shown on diagrams.
    pub max_fret: u8,
    /// Diagram layout.
    pub orientation: Orientation,
    /// Note disclosure mode.
    pub mode: RenderMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_fret: 12,
            orientation: Orientation::Vertical,
            mode: RenderMode::Show,
        }
    }
}

/// Location of the config file.
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fretwise")
        .join("config.toml")
}

impl Config {
    /// Load configuration from the default file path; missing files fall
    /// back to the defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Apply CLI flag overrides on top of the loaded values.
    #[must_use]
    pub fn resolve(
        self,
        frets: Option<u8>,
        orientation: Option<Orientation>,
        mode: Option<RenderMode>,
    ) -> Self {
        Self {
            max_fret: frets.unwrap_or(self.max_fret),
            orientation: orientation.unwrap_or(self.orientation),
            mode: mode.unwrap_or(self.mode),
        }
    }
}
