//! Pull request error types.

use crate::git::GitError;
use crate::process::CommandError;
use thiserror::Error;

/// Errors that can occur during PR operations.
#[derive(Debug, Error)]
pub enum PrError {
    /// The `gh` CLI failed.
    #[error("GitHub CLI error: {0}")]
    Cli(#[from] CommandError),

    /// Preparing the update branch failed.
    #[error(transparent)]
    Git(#[from] GitError),

    /// `gh pr list` returned something other than the requested JSON.
    #[error("Failed to parse pull request list: {0}")]
    Json(#[from] serde_json::Error),

    /// `gh pr create` did not print a pull request URL.
    #[error("Unexpected output from gh pr create: {output:?}")]
    UnexpectedOutput { output: String },
}
