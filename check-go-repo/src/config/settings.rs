//! Settings file deserialization.

use serde::Deserialize;
use std::path::PathBuf;

/// Parsed contents of a `check-go-repo.toml` file.
///
/// Every key is optional; missing keys fall back to the values used for the
/// godeltaprof compatibility check.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Settings {
    /// Clone URL of the upstream Go repository.
    pub upstream_url: String,

    /// Branch of the upstream repository to follow.
    pub upstream_branch: String,

    /// Local directory holding the upstream clone.
    pub repo_dir: PathBuf,

    /// JSON file recording the last known commits.
    pub state_file: PathBuf,

    /// Prefix that turns a commit hash into a browsable link.
    pub commit_url: String,

    /// Downstream repository (`owner/name`) receiving the pull requests.
    pub downstream_repo: String,

    /// Base branch of the downstream pull requests.
    pub base_branch: String,

    /// Git remote the update branch is pushed to.
    pub push_remote: String,

    /// Fork owner for the head branch, if pushing to a fork.
    pub head_owner: Option<String>,

    /// Label correlating runs with an already opened pull request.
    pub label: String,

    /// Whether to include the intervening upstream log in the PR body.
    pub include_log: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            upstream_url: default_upstream_url(),
            upstream_branch: "master".to_string(),
            repo_dir: PathBuf::from("go_repo"),
            state_file: PathBuf::from("last_known_go_commits.json"),
            commit_url: default_commit_url(),
            downstream_repo: "grafana/pyroscope-go".to_string(),
            base_branch: "main".to_string(),
            push_remote: "origin".to_string(),
            head_owner: None,
            label: default_label(),
            include_log: false,
        }
    }
}

/// Upstream Go repository.
pub fn default_upstream_url() -> String {
    "https://github.com/golang/go.git".to_string()
}

/// Link prefix for upstream commits.
pub fn default_commit_url() -> String {
    "https://github.com/golang/go/commit/".to_string()
}

/// Correlation label for the update pull request.
pub fn default_label() -> String {
    "godeltaprof: check_go_repo".to_string()
}
