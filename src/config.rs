use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;

use crate::error::GateError;

/// Embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

/// User overlay location, relative to `$HOME`.
const OVERLAY_PATH: &str = ".config/gitgate/config.toml";

// ── Final (merged) config types ──

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub wrapper: WrapperConfig,
}

#[derive(Debug, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub log_decisions: bool,
    #[serde(default)]
    pub log_level: String,
}

/// The project wrapper that git commands must be routed through.
#[derive(Debug, Deserialize, Default)]
pub struct WrapperConfig {
    /// Path probed relative to the working directory, e.g. `./runner`.
    #[serde(default)]
    pub entry_point: String,
    /// Check each compound segment instead of the whole command string.
    #[serde(default)]
    pub strict: bool,
}

impl Settings {
    /// Parsed log level. Empty means `info`.
    pub fn level(&self) -> Result<LevelFilter, GateError> {
        if self.log_level.trim().is_empty() {
            return Ok(LevelFilter::Info);
        }
        LevelFilter::from_str(self.log_level.trim())
            .map_err(|_| GateError::Config(format!("unknown log level: {}", self.log_level)))
    }
}

impl WrapperConfig {
    /// The entry point as a path.
    pub fn path(&self) -> PathBuf {
        PathBuf::from(&self.entry_point)
    }

    /// The word the wrapper is invoked by: `./runner` → `runner`.
    ///
    /// `None` when the entry point has no file name, e.g. `.` or `./`.
    pub fn name(&self) -> Option<&str> {
        Path::new(&self.entry_point)
            .file_name()
            .and_then(|n| n.to_str())
    }
}

// ── Overlay types (user config that merges with defaults) ──

#[derive(Debug, Deserialize, Default)]
struct ConfigOverlay {
    #[serde(default)]
    settings: SettingsOverlay,
    #[serde(default)]
    wrapper: WrapperOverlay,
}

#[derive(Debug, Deserialize, Default)]
struct SettingsOverlay {
    log_decisions: Option<bool>,
    log_level: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct WrapperOverlay {
    entry_point: Option<String>,
    strict: Option<bool>,
}

impl Config {
    /// Load the default embedded configuration.
    pub fn default_config() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config must parse")
    }

    /// Load configuration with resolution order:
    /// 1. Start with embedded defaults
    /// 2. Merge user overlay from ~/.config/gitgate/config.toml (if exists)
    ///
    /// A missing overlay is not an error. An unreadable or malformed one is,
    /// so the caller can log it before falling back to the defaults.
    pub fn load() -> Result<Self, GateError> {
        let mut config = Self::default_config();
        if let Some(overlay) = Self::load_overlay()? {
            config.apply_overlay(overlay);
        }
        Ok(config)
    }

    fn load_overlay() -> Result<Option<ConfigOverlay>, GateError> {
        let Some(home) = std::env::var_os("HOME") else {
            return Ok(None);
        };
        let path = Path::new(&home).join(OVERLAY_PATH);
        if !path.is_file() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)
            .map_err(|e| GateError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::parse_overlay(&content).map(Some)
    }

    fn parse_overlay(content: &str) -> Result<ConfigOverlay, GateError> {
        toml::from_str(content).map_err(|e| GateError::Config(e.to_string()))
    }

    /// Apply an overlay on top of this config. Scalars override.
    fn apply_overlay(&mut self, overlay: ConfigOverlay) {
        let s = overlay.settings;
        if let Some(v) = s.log_decisions {
            self.settings.log_decisions = v;
        }
        if let Some(v) = s.log_level {
            self.settings.log_level = v;
        }

        let w = overlay.wrapper;
        if let Some(v) = w.entry_point {
            self.wrapper.entry_point = v;
        }
        if let Some(v) = w.strict {
            self.wrapper.strict = v;
        }
    }

    /// Apply an overlay from a TOML string.
    pub fn apply_overlay_str(&mut self, toml_str: &str) -> Result<(), GateError> {
        let overlay = Self::parse_overlay(toml_str)?;
        self.apply_overlay(overlay);
        Ok(())
    }
}
