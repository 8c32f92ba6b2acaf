//! Configuration module for Region Tracker
//!
//! The tracker runs fine without any configuration. An optional TOML file can
//! override the window and plot settings; it is only ever read.
//!
//! # Config Location
//!
//! - **Linux**: `~/.config/dev.region-tracker/config.toml`
//! - **macOS**: `~/Library/Application Support/dev.region-tracker/config.toml`
//! - **Windows**: `%APPDATA%\dev.region-tracker\config.toml`
//!
//! # Example
//!
//! ```toml
//! [window]
//! dark_mode = false
//!
//! [plot]
//! samples = 101
//! highlight_color = [255, 160, 122, 255]
//! ```

pub mod settings;

pub use settings::*;

use crate::error::{RegionTrackerError, Result, ResultExt};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application identifier for config directories
pub const APP_ID: &str = "dev.region-tracker";

/// Config filename
pub const CONFIG_FILE: &str = "config.toml";

/// Get the application config directory path
pub fn app_config_dir() -> Option<PathBuf> {
    dirs_next::config_dir().map(|p| p.join(APP_ID))
}

/// Get the path to the config file
pub fn config_path() -> Option<PathBuf> {
    app_config_dir().map(|p| p.join(CONFIG_FILE))
}

/// Complete tracker configuration
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TrackerConfig {
    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub plot: PlotConfig,
}

impl TrackerConfig {
    /// Parse and validate a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config = toml::from_str::<Self>(content).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file; a missing file yields the defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;

        Self::from_toml_str(&content).with_context(|| format!("Invalid config file {:?}", path))
    }

    /// Load the config from the default location, returning defaults on any error
    pub fn load_or_default() -> Self {
        let Some(path) = config_path() else {
            tracing::warn!("Could not determine config directory, using defaults");
            return Self::default();
        };

        Self::load(&path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            Self::default()
        })
    }

    /// Check that all values are usable
    pub fn validate(&self) -> Result<()> {
        if self.plot.samples < 2 {
            return Err(RegionTrackerError::Config(format!(
                "plot.samples must be at least 2, got {}",
                self.plot.samples
            )));
        }
        if !self.plot.line_width.is_finite() || self.plot.line_width <= 0.0 {
            return Err(RegionTrackerError::Config(format!(
                "plot.line_width must be positive, got {}",
                self.plot.line_width
            )));
        }
        if !self.window.size.is_finite() || self.window.size <= 0.0 {
            return Err(RegionTrackerError::Config(format!(
                "window.size must be positive, got {}",
                self.window.size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TrackerConfig::default();
        assert_eq!(config.window.title, "Region Tracker");
        assert_eq!(config.plot.samples, DEFAULT_SAMPLES);
        assert_eq!(config.plot.highlight_color, [255, 182, 193, 255]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = TrackerConfig::from_toml_str("").unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = TrackerConfig::from_toml_str(
            r#"
            [plot]
            samples = 101
            "#,
        )
        .unwrap();
        assert_eq!(config.plot.samples, 101);
        assert_eq!(config.plot.line_width, 1.5);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_invalid_samples() {
        let err = TrackerConfig::from_toml_str("[plot]\nsamples = 1\n").unwrap_err();
        assert!(err.to_string().contains("plot.samples"));
    }

    #[test]
    fn test_invalid_window_size() {
        let err = TrackerConfig::from_toml_str("[window]\nsize = 0.0\n").unwrap_err();
        assert!(err.to_string().contains("window.size"));
    }

    #[test]
    fn test_malformed_toml() {
        let err = TrackerConfig::from_toml_str("[plot\nsamples = ").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config"));
    }
}
