//! Settings loading.
//!
//! Settings come from an optional TOML file with kebab-case keys. Anything
//! the file leaves out keeps the default for the godeltaprof check.

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{default_commit_url, default_label, default_upstream_url, Settings};

use std::path::Path;
use tracing::{debug, info};
use url::Url;

impl Settings {
    /// Loads and validates settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, is not valid TOML,
    /// or fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading settings");

        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let settings: Settings =
            toml::from_str(&contents).map_err(|e| ConfigError::TomlError {
                path: path.display().to_string(),
                source: e,
            })?;

        settings.validate(path)?;
        Ok(settings)
    }

    /// Loads settings from `path` if it exists, otherwise returns defaults.
    ///
    /// Used for the implicit settings file; an explicitly requested file
    /// goes through [`Settings::load`] so that a typo is reported.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!(path = %path.display(), "No settings file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Validates the settings values.
    pub fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::ValidationError {
            path: path.display().to_string(),
            message,
        };

        if self.upstream_url.trim().is_empty() {
            return Err(invalid("upstream-url cannot be empty".to_string()));
        }

        if Url::parse(&self.commit_url).is_err() {
            return Err(invalid(format!(
                "commit-url must be a valid URL, got '{}'",
                self.commit_url
            )));
        }

        let repo_is_valid = matches!(
            self.downstream_repo.split_once('/'),
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/')
        );
        if !repo_is_valid {
            return Err(invalid(format!(
                "downstream-repo must be in 'owner/name' form, got '{}'",
                self.downstream_repo
            )));
        }

        if self.label.trim().is_empty() {
            return Err(invalid("label cannot be empty".to_string()));
        }

        if self.state_file.file_name().is_none() {
            return Err(invalid(format!(
                "state-file must name a file, got '{}'",
                self.state_file.display()
            )));
        }

        Ok(())
    }
}
