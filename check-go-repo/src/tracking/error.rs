//! Commit tracking error types.

use crate::git::GitError;
use thiserror::Error;

/// Errors that can occur while resolving tracked commits.
#[derive(Debug, Error)]
pub enum TrackingError {
    /// Querying the upstream clone failed.
    #[error(transparent)]
    Git(#[from] GitError),

    /// `git log` produced no commit for a tracked path.
    #[error("No commit found for '{path}' in output: {output:?}")]
    NoCommit { path: String, output: String },

    /// A string is not a full commit hash.
    #[error("Invalid commit hash '{value}': expected 40 lowercase hex characters")]
    InvalidHash { value: String },
}
