//! Configuration module for hashi
//!
//! Manages the finder's appearance and behavior. Configuration is read from
//! `config.toml` in the user's config directory, with `HASHI_*` environment
//! variables taking precedence over the file.

use crate::ui::{EscapeAction, FinderConfig, ThemeName};
use clap::ValueEnum;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// What is printed after a selection
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// The zero-based index of the selected line
    #[default]
    Index,
    /// The selected line itself
    Line,
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct HashiConfig {
    /// Text shown before the query
    pub prompt: String,

    /// Glyph marking the selected row
    pub marker: char,

    /// What the escape key does
    pub escape: EscapeAction,

    /// Color preset
    pub theme: ThemeName,

    /// What to print after a selection
    pub output: OutputMode,

    /// Skip the finder when there is exactly one candidate
    pub select_one: bool,
}

impl Default for HashiConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            marker: '>',
            escape: EscapeAction::default(),
            theme: ThemeName::default(),
            output: OutputMode::default(),
            select_one: false,
        }
    }
}

impl HashiConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("hashi").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// A missing file yields the defaults; nothing is written.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be determined or
    /// the file or environment holds invalid values.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, then apply `HASHI_*` overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be parsed or a value has the
    /// wrong type.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::build(path, Environment::with_prefix("HASHI").try_parsing(true))
    }

    fn build(path: &Path, env: Environment) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(env)
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to `path`, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be
    /// written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Finder configuration for `items` with these settings
    #[must_use]
    pub fn to_finder_config(&self, items: Vec<String>) -> FinderConfig {
        FinderConfig::new(items, self.prompt.clone())
            .with_marker(self.marker)
            .with_escape(self.escape)
            .with_theme(self.theme)
    }
}
