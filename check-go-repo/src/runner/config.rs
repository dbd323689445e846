//! Runner configuration.

use crate::config::Settings;
use std::path::{Path, PathBuf};

/// Resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Settings from the file, with command line overrides applied.
    settings: Settings,
    /// Whether to preview the PR without touching state or GitHub.
    dry_run: bool,
}

impl RunnerConfig {
    /// Creates a configuration from loaded settings.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            dry_run: false,
        }
    }

    /// Enables or disables dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Overrides the upstream clone directory.
    pub fn with_repo_dir(mut self, repo_dir: PathBuf) -> Self {
        self.settings.repo_dir = repo_dir;
        self
    }

    /// Overrides the state file path.
    pub fn with_state_file(mut self, state_file: PathBuf) -> Self {
        self.settings.state_file = state_file;
        self
    }

    /// Forces the upstream log into the PR body.
    pub fn with_include_log(mut self, include_log: bool) -> Self {
        self.settings.include_log |= include_log;
        self
    }

    /// Returns the underlying settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns the upstream clone directory.
    pub fn repo_dir(&self) -> &Path {
        &self.settings.repo_dir
    }

    /// Returns the state file path.
    pub fn state_file(&self) -> &Path {
        &self.settings.state_file
    }

    /// Returns the correlation label.
    pub fn label(&self) -> &str {
        &self.settings.label
    }

    /// Returns whether the upstream log goes into the PR body.
    pub fn include_log(&self) -> bool {
        self.settings.include_log
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_on_top_of_settings() {
        let config = RunnerConfig::new(Settings::default())
            .with_repo_dir(PathBuf::from("/tmp/go"))
            .with_state_file(PathBuf::from("compat/state.json"))
            .with_dry_run(true);

        assert_eq!(config.repo_dir(), Path::new("/tmp/go"));
        assert_eq!(config.state_file(), Path::new("compat/state.json"));
        assert!(config.dry_run());
        assert_eq!(config.label(), "godeltaprof: check_go_repo");
    }

    #[test]
    fn include_log_flag_cannot_disable_settings() {
        let settings = Settings {
            include_log: true,
            ..Settings::default()
        };
        assert!(RunnerConfig::new(settings).with_include_log(false).include_log());
        assert!(RunnerConfig::new(Settings::default())
            .with_include_log(true)
            .include_log());
    }
}
