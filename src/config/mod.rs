//! Configuration module for bookmarks-page
//!
//! Reads the TOML settings document naming the browser profile, the root
//! bookmarks folder to render, and an optional page title.
//!
//! ```toml
//! profile = "$HOME/.mozilla/firefox/abc.default"
//! bookmarks = "Toolbar"
//! title = "My Links"
//! ```

mod expand;

pub use expand::{expand_path, expand_vars, expand_vars_with};

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default location of the settings document, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Name of the bookmark database inside a browser profile directory
pub const PLACES_FILE: &str = "places.sqlite";

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PageConfig {
    /// Browser profile directory; may reference environment variables
    pub profile: String,

    /// Title of the root bookmarks folder whose sub-folders are rendered
    pub bookmarks: String,

    /// Page title handed to the template
    #[serde(default)]
    pub title: Option<String>,
}

impl PageConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file does not exist, cannot be parsed,
    /// lacks `profile` or `bookmarks`, or either of them is blank.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` under the same conditions as [`PageConfig::load`],
    /// minus the missing-file case.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.profile.trim().is_empty() {
            return Err(ConfigError::Message("`profile` must not be empty".to_string()));
        }
        if self.bookmarks.trim().is_empty() {
            return Err(ConfigError::Message("`bookmarks` must not be empty".to_string()));
        }
        Ok(())
    }

    /// Profile directory with environment variables expanded
    #[must_use]
    pub fn profile_dir(&self) -> PathBuf {
        expand_path(&self.profile)
    }

    /// Path of the bookmark database inside the profile directory
    #[must_use]
    pub fn places_path(&self) -> PathBuf {
        self.profile_dir().join(PLACES_FILE)
    }

    /// Page title, if one is configured
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}
