//! Finding the latest upstream commit for each tracked path.

mod commits;
mod error;
mod upstream;

pub use commits::{CommitHash, PathChange, TrackedCommits, TrackedPath, COMMIT_HASH_LEN};
pub use error::TrackingError;
pub use upstream::GoRepository;

use crate::git::GitError;
use regex::Regex;
use std::sync::LazyLock;
use tracing::info;

static COMMIT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(?:commit\s+)?([0-9a-f]{40})\b").expect("commit pattern is valid")
});

/// Source of upstream history.
///
/// Implemented by [`GoRepository`] over a local clone; tests substitute an
/// in-memory history.
#[allow(async_fn_in_trait)]
pub trait Upstream {
    /// Brings the local view of upstream up to date.
    async fn sync(&self) -> Result<(), GitError>;

    /// Returns the most recent commit touching `path`.
    async fn latest_commit(&self, path: TrackedPath) -> Result<CommitHash, TrackingError>;

    /// Returns the one-line log of commits touching `path` in `from..to`.
    async fn log_between(
        &self,
        path: TrackedPath,
        from: &CommitHash,
        to: &CommitHash,
    ) -> Result<String, TrackingError>;
}

/// Extracts the first commit id from `git log` output.
///
/// Accepts both `commit <hash>` header lines and bare hashes. Returns `None`
/// when no line carries a full 40 character lowercase hex id.
#[must_use]
pub fn extract_commit_hash(output: &str) -> Option<CommitHash> {
    COMMIT_LINE
        .captures(output)
        .and_then(|caps| caps.get(1))
        .and_then(|m| CommitHash::parse(m.as_str()).ok())
}

impl TrackedCommits {
    /// Resolves the latest commit of every tracked path.
    pub async fn fetch<U: Upstream>(upstream: &U) -> Result<Self, TrackingError> {
        let commits = Self {
            mprof: upstream.latest_commit(TrackedPath::Mprof).await?,
            pprof: upstream.latest_commit(TrackedPath::Pprof).await?,
        };
        info!(mprof = %commits.mprof, pprof = %commits.pprof, "Current commits");
        Ok(commits)
    }
}

/// Fills in the upstream log for each change.
pub async fn attach_logs<U: Upstream>(
    upstream: &U,
    changes: &mut [PathChange],
) -> Result<(), TrackingError> {
    for change in changes.iter_mut() {
        let log = upstream
            .log_between(change.path, &change.known, &change.current)
            .await?;
        change.log = (!log.is_empty()).then_some(log);
    }
    Ok(())
}
