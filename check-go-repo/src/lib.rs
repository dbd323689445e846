#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod git;
pub mod process;
pub mod pull_requests;
pub mod runner;
pub mod state;
pub mod summary;
pub mod templates;
pub mod tracking;

pub use config::{ConfigError, Settings};
pub use git::{GitError, GitRepository};
pub use process::CommandError;
pub use pull_requests::{
    find_labeled, GhCli, PrError, PrStatus, PullRequest, PullRequestDraft, PullRequestHost,
};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use state::{StateError, StateStore};
pub use summary::{RunOutcome, RunSummary};
pub use templates::{
    generate_branch_name, generate_commit_title, generate_pr_title, TemplateError,
    TemplateRenderer,
};
pub use tracking::{
    extract_commit_hash, CommitHash, GoRepository, PathChange, TrackedCommits, TrackedPath,
    TrackingError, Upstream,
};
