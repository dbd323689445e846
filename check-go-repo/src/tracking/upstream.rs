//! The local clone of the Go repository.

use super::{extract_commit_hash, CommitHash, TrackedPath, TrackingError, Upstream};
use crate::git::{GitError, GitRepository};
use std::path::PathBuf;
use tracing::info;

/// Upstream history backed by a local clone of the Go repository.
#[derive(Debug, Clone)]
pub struct GoRepository {
    repo: GitRepository,
    url: String,
    branch: String,
}

impl GoRepository {
    /// Creates a handle for a clone of `url` at `dir` following `branch`.
    pub fn new(url: impl Into<String>, branch: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            repo: GitRepository::new(dir),
            url: url.into(),
            branch: branch.into(),
        }
    }
}

impl Upstream for GoRepository {
    async fn sync(&self) -> Result<(), GitError> {
        self.repo.sync(&self.url, &self.branch).await
    }

    async fn latest_commit(&self, path: TrackedPath) -> Result<CommitHash, TrackingError> {
        let output = self.repo.log(&["-n", "1"], path.path()).await?;
        let commit = extract_commit_hash(&output).ok_or_else(|| TrackingError::NoCommit {
            path: path.path().to_string(),
            output: output.clone(),
        })?;
        info!(path = %path, commit = %commit, "Latest commit");
        Ok(commit)
    }

    async fn log_between(
        &self,
        path: TrackedPath,
        from: &CommitHash,
        to: &CommitHash,
    ) -> Result<String, TrackingError> {
        let range = format!("{from}..{to}");
        let output = self
            .repo
            .log(&["--oneline", "--no-decorate", &range], path.path())
            .await?;
        Ok(output.trim().to_string())
    }
}
