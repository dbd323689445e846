//! Pull request text.
//!
//! The body is rendered with Handlebars; titles, branch names and commit
//! messages are plain formats.

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, TemplateRenderer, BODY_TEMPLATE};

use crate::tracking::PathChange;
use std::path::Path;

/// Generates the branch name for an update PR.
///
/// Format: "check_go_repo_{unix_seconds}"
#[must_use]
pub fn generate_branch_name(timestamp: i64) -> String {
    format!("check_go_repo_{timestamp}")
}

/// Generates the commit title for the state file update.
///
/// Format: "chore(check_go_repo): update {state_file_name}"
#[must_use]
pub fn generate_commit_title(state_file: &Path) -> String {
    let name = state_file
        .file_name()
        .map_or_else(|| state_file.to_string_lossy(), |n| n.to_string_lossy());
    format!("chore(check_go_repo): update {name}")
}

/// Generates the PR title from the changed paths.
///
/// Format: "godeltaprof: upstream changes in {path}, {path}"
#[must_use]
pub fn generate_pr_title(changes: &[PathChange]) -> String {
    let paths: Vec<&str> = changes.iter().map(|c| c.path.path()).collect();
    format!("godeltaprof: upstream changes in {}", paths.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::{CommitHash, TrackedPath};

    fn change(path: TrackedPath) -> PathChange {
        PathChange {
            path,
            known: CommitHash::parse(&"a".repeat(40)).unwrap(),
            current: CommitHash::parse(&"b".repeat(40)).unwrap(),
            log: None,
        }
    }

    #[test]
    fn generates_branch_name() {
        assert_eq!(generate_branch_name(1_700_000_000), "check_go_repo_1700000000");
    }

    #[test]
    fn generates_commit_title() {
        assert_eq!(
            generate_commit_title(Path::new("last_known_go_commits.json")),
            "chore(check_go_repo): update last_known_go_commits.json"
        );
        assert_eq!(
            generate_commit_title(Path::new("godeltaprof/compat/last_known_go_commits.json")),
            "chore(check_go_repo): update last_known_go_commits.json"
        );
    }

    #[test]
    fn generates_pr_title() {
        assert_eq!(
            generate_pr_title(&[change(TrackedPath::Pprof)]),
            "godeltaprof: upstream changes in src/runtime/pprof"
        );
        assert_eq!(
            generate_pr_title(&[change(TrackedPath::Mprof), change(TrackedPath::Pprof)]),
            "godeltaprof: upstream changes in src/runtime/mprof.go, src/runtime/pprof"
        );
    }
}
