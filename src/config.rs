//! Configuration module for siftr
//!
//! Manages controller configuration: the selectors that locate page elements,
//! the query parameter the search term is persisted under, and the debounce
//! delay. Configuration is stored in the user's config directory; every field
//! has a default matching the stock listing page markup.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Debounce delay applied to typed input, in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u64 = 150;

/// Controller configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Selector for the search input element
    #[serde(default = "defaults::search_input")]
    pub search_input: String,

    /// Selector for the button that clears the search
    #[serde(default = "defaults::clear_button")]
    pub clear_button: String,

    /// Selector matching the filterable listing items
    #[serde(default = "defaults::item")]
    pub item: String,

    /// Selector matching clickable tag triggers
    #[serde(default = "defaults::tag_trigger")]
    pub tag_trigger: String,

    /// Selector for the container whose links carry the term across loads
    #[serde(default = "defaults::link_container")]
    pub link_container: String,

    /// Query parameter name the search term is persisted under
    #[serde(default = "defaults::param")]
    pub param: String,

    /// How long typed input settles before the filter runs, in milliseconds
    #[serde(default = "defaults::debounce_ms")]
    pub debounce_ms: u64,
}

mod defaults {
    pub(super) fn search_input() -> String {
        "#search".to_string()
    }

    pub(super) fn clear_button() -> String {
        "#search_clear".to_string()
    }

    pub(super) fn item() -> String {
        ".plugin".to_string()
    }

    pub(super) fn tag_trigger() -> String {
        ".tag".to_string()
    }

    pub(super) fn link_container() -> String {
        "#sort_links".to_string()
    }

    pub(super) fn param() -> String {
        "search".to_string()
    }

    pub(super) const fn debounce_ms() -> u64 {
        super::DEFAULT_DEBOUNCE_MS
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            search_input: defaults::search_input(),
            clear_button: defaults::clear_button(),
            item: defaults::item(),
            tag_trigger: defaults::tag_trigger(),
            link_container: defaults::link_container(),
            param: defaults::param(),
            debounce_ms: defaults::debounce_ms(),
        }
    }
}

impl ControllerConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("siftr").join("config.toml"))
    }

    /// Load configuration from the user's config file
    ///
    /// A missing file yields the defaults; nothing is written.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit file path
    ///
    /// Keys absent from the file keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.to_path_buf()).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the user's config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit file path
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// The debounce delay as a [`Duration`]
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
