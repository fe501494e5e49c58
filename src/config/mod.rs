//! Configuration file support for shapecanvas.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/shapecanvas/config.toml`. Settings cover the canvas size and
//! background, and the outline style used for every shape.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, StrokeConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 800
/// height = 600
/// background = "white"
/// axis_color = [204, 204, 204]
///
/// [stroke]
/// color = "blue"
/// line_join = "round"
/// line_width = 2.0
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas size, background and legend
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Shape outline style
    #[serde(default)]
    pub stroke: StrokeConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width`, `canvas.height`: 50 - 8192
    /// - `canvas.legend_font_size`: 6.0 - 72.0
    /// - `stroke.line_width`: 0.1 - 20.0
    pub fn validate_and_clamp(&mut self) {
        if !(50..=8192).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 50-8192 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(50, 8192);
        }

        if !(50..=8192).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 50-8192 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(50, 8192);
        }

        // Also catches NaN, which clamp passes through
        if !(6.0..=72.0).contains(&self.canvas.legend_font_size) {
            log::warn!(
                "Invalid legend_font_size {:.1}, clamping to 6.0-72.0 range",
                self.canvas.legend_font_size
            );
            self.canvas.legend_font_size = if self.canvas.legend_font_size.is_nan() {
                16.0
            } else {
                self.canvas.legend_font_size.clamp(6.0, 72.0)
            };
        }

        if !(0.1..=20.0).contains(&self.stroke.line_width) {
            log::warn!(
                "Invalid line_width {:.1}, clamping to 0.1-20.0 range",
                self.stroke.line_width
            );
            self.stroke.line_width = if self.stroke.line_width.is_nan() {
                1.0
            } else {
                self.stroke.line_width.clamp(0.1, 20.0)
            };
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/shapecanvas/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("shapecanvas");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or the file
    /// exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit file, which must exist.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
