//! Git error types.

use crate::process::CommandError;
use thiserror::Error;

/// Errors that can occur while driving `git`.
#[derive(Debug, Error)]
pub enum GitError {
    /// Cloning the upstream repository failed.
    #[error("Failed to clone '{url}': {source}")]
    CloneFailed {
        url: String,
        #[source]
        source: CommandError,
    },

    /// Updating the local clone failed.
    #[error("Failed to update '{path}': {source}")]
    PullFailed {
        path: String,
        #[source]
        source: CommandError,
    },

    /// Pushing a branch failed.
    #[error("Failed to push '{branch}' to '{remote}': {source}")]
    PushFailed {
        remote: String,
        branch: String,
        #[source]
        source: CommandError,
    },

    /// Any other git invocation failed.
    #[error(transparent)]
    Command(#[from] CommandError),

    /// The clone path exists but cannot be inspected.
    #[error("Cannot access repository directory '{path}': {source}")]
    Inaccessible {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A branch name is not a valid git reference.
    #[error("Invalid branch name '{name}': {message}")]
    InvalidBranch { name: String, message: String },
}
