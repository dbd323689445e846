//! Runner error types.

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Settings loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Upstream clone errors.
    #[error(transparent)]
    Git(#[from] crate::git::GitError),

    /// Commit lookup errors.
    #[error(transparent)]
    Tracking(#[from] crate::tracking::TrackingError),

    /// State file errors.
    #[error(transparent)]
    State(#[from] crate::state::StateError),

    /// Pull request errors.
    #[error(transparent)]
    PullRequest(#[from] crate::pull_requests::PrError),

    /// PR body rendering errors.
    #[error(transparent)]
    Template(#[from] crate::templates::TemplateError),
}
