//! Configuration settings for taskline.
//!
//! Settings are loaded from `~/.taskline/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::config::Paths;
use crate::error::TasklineError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Response frame settings.
    pub frame: FrameConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Response frame settings: the indentation prefix and banner rule that wrap
/// every session response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FrameConfig {
    /// Number of spaces every response line is indented by.
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
    /// Width of the horizontal-rule banner.
    #[serde(default = "default_banner_width")]
    pub banner_width: usize,
}

// Default value functions for serde
const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_indent_width() -> usize {
    4
}

const fn default_banner_width() -> usize {
    60
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            indent_width: default_indent_width(),
            banner_width: default_banner_width(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, TasklineError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, TasklineError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            TasklineError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            TasklineError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self) -> Result<(), TasklineError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.config_file)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), TasklineError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| TasklineError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            TasklineError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}
