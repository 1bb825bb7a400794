//! Configuration file support for linescribe.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/linescribe/config.toml`. Settings include the startup tool,
//! line style, and the colors of the editing widgets.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{ColorsConfig, StyleConfig, ToolConfig};

use crate::draw::{LineStyle, Palette};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::{JsonSchema, Schema};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [tool]
/// default_tool = "line"
///
/// [style]
/// line_width = 2.0
/// point_radius = 5.0
///
/// [colors]
/// midpoint = "red"
/// selected = [255, 255, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Startup tool selection
    #[serde(default)]
    pub tool: ToolConfig,

    /// Line geometry (stroke width, point radius)
    #[serde(default)]
    pub style: StyleConfig,

    /// Line and widget colors
    #[serde(default)]
    pub colors: ColorsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `line_width`: 1.0 - 20.0
    /// - `point_radius`: 1.0 - 30.0
    fn validate_and_clamp(&mut self) {
        // NaN fails every range check and would survive clamp()
        if !(1.0..=20.0).contains(&self.style.line_width) {
            log::warn!(
                "Invalid line_width {:.1}, clamping to 1.0-20.0 range",
                self.style.line_width
            );
            self.style.line_width = if self.style.line_width.is_nan() {
                1.0
            } else {
                self.style.line_width.clamp(1.0, 20.0)
            };
        }

        if !(1.0..=30.0).contains(&self.style.point_radius) {
            log::warn!(
                "Invalid point_radius {:.1}, clamping to 1.0-30.0 range",
                self.style.point_radius
            );
            self.style.point_radius = if self.style.point_radius.is_nan() {
                1.0
            } else {
                self.style.point_radius.clamp(1.0, 30.0)
            };
        }

        if crate::input::ToolKind::from_name(&self.tool.default_tool).is_none() {
            log::warn!(
                "Unknown default_tool '{}', falling back to 'line'",
                self.tool.default_tool
            );
            self.tool.default_tool = "line".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/linescribe/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("linescribe");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or the file
    /// exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path, or returns defaults if it does not exist.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or contains invalid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses configuration from TOML text and validates it.
    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(config_str)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Writes the documented example config to the user's config directory.
    ///
    /// # Errors
    /// Returns an error if a config file already exists at the target path or it
    /// cannot be written.
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> Schema {
        schemars::schema_for!(Config)
    }

    /// Resolved line geometry.
    pub fn line_style(&self) -> LineStyle {
        LineStyle {
            line_width: self.style.line_width,
            point_radius: self.style.point_radius,
        }
    }

    /// Resolved widget colors; unknown names fall back to the built-in palette.
    pub fn palette(&self) -> Palette {
        let defaults = Palette::default();
        Palette {
            line: self.colors.line.to_color_or(defaults.line),
            vertex: self.colors.vertex.to_color_or(defaults.vertex),
            midpoint: self.colors.midpoint.to_color_or(defaults.midpoint),
            selected: self.colors.selected.to_color_or(defaults.selected),
            preview: self.colors.preview.to_color_or(defaults.preview),
        }
    }
}
