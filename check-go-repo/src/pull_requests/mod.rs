//! Pull requests in the downstream repository.
//!
//! Listing and creation go through the `gh` CLI; the update branch is
//! prepared with plain `git` in the downstream working copy.

mod error;
mod pull_request;
mod status;

pub use error::PrError;
pub use pull_request::{PullRequest, PullRequestDraft};
pub use status::PrStatus;

use crate::git::GitRepository;
use crate::process::run_command;
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span, warn, Instrument};

const LIST_FIELDS: &str = "id,number,url,labels,baseRefName,headRefName";
const LIST_LIMIT: &str = "100";

/// Hosting platform holding the downstream repository.
#[allow(async_fn_in_trait)]
pub trait PullRequestHost {
    /// Lists open pull requests carrying `label`.
    async fn list_open(&self, label: &str) -> Result<Vec<PullRequest>, PrError>;

    /// Commits the draft's files on a new branch, pushes it and opens a PR.
    ///
    /// The branch is cut from the base branch, and the base branch is checked
    /// out again afterwards. On failure the new branch is deleted, so a later
    /// attempt starts from the same place.
    ///
    /// Returns the PR number and URL.
    async fn publish(&self, draft: &PullRequestDraft) -> Result<(u64, String), PrError>;
}

/// Returns the first PR carrying `label`.
#[must_use]
pub fn find_labeled<'a>(prs: &'a [PullRequest], label: &str) -> Option<&'a PullRequest> {
    prs.iter().find(|pr| pr.has_label(label))
}

/// [`PullRequestHost`] backed by the `gh` CLI.
#[derive(Debug, Clone)]
pub struct GhCli {
    workdir: GitRepository,
    repo: String,
    base_branch: String,
    push_remote: String,
    head_owner: Option<String>,
    program: String,
}

impl GhCli {
    /// Creates a host for `repo` (`owner/name`), committing in `workdir`.
    pub fn new(
        workdir: impl Into<PathBuf>,
        repo: impl Into<String>,
        base_branch: impl Into<String>,
        push_remote: impl Into<String>,
    ) -> Self {
        Self {
            workdir: GitRepository::new(workdir),
            repo: repo.into(),
            base_branch: base_branch.into(),
            push_remote: push_remote.into(),
            head_owner: None,
            program: "gh".to_string(),
        }
    }

    /// Runs `program` instead of the `gh` found on `PATH`.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Pushes to a fork owned by `owner`; the PR head becomes `owner:branch`.
    pub fn with_head_owner(mut self, owner: Option<String>) -> Self {
        self.head_owner = owner;
        self
    }

    fn head_ref(&self, branch: &str) -> String {
        match &self.head_owner {
            Some(owner) => format!("{owner}:{branch}"),
            None => branch.to_string(),
        }
    }

    async fn gh(&self, args: &[&str]) -> Result<String, PrError> {
        Ok(run_command(&self.program, args, Some(self.workdir.path())).await?)
    }

    /// Commits and pushes the update branch, then opens the PR for it.
    async fn commit_and_open(&self, draft: &PullRequestDraft) -> Result<(u64, String), PrError> {
        let files: Vec<&Path> = draft.files.iter().map(PathBuf::as_path).collect();
        self.workdir
            .commit_files(&files, &draft.commit_message)
            .await?;
        self.workdir.push(&self.push_remote, &draft.branch).await?;

        let head = self.head_ref(&draft.branch);
        let output = self
            .gh(&[
                "pr",
                "create",
                "-R",
                &self.repo,
                "--base",
                &self.base_branch,
                "--head",
                &head,
                "--title",
                &draft.title,
                "--body",
                &draft.body,
                "--label",
                &draft.label,
            ])
            .await?;

        let url = created_pr_url(&output).ok_or_else(|| PrError::UnexpectedOutput {
            output: output.clone(),
        })?;
        let number = parse_pr_number(url).ok_or_else(|| PrError::UnexpectedOutput {
            output: output.clone(),
        })?;
        Ok((number, url.to_string()))
    }
}

impl PullRequestHost for GhCli {
    async fn list_open(&self, label: &str) -> Result<Vec<PullRequest>, PrError> {
        let output = self
            .gh(&[
                "pr", "list", "-R", &self.repo, "--state", "open", "--label", label,
                "--limit", LIST_LIMIT, "--json", LIST_FIELDS,
            ])
            .await?;
        let prs: Vec<PullRequest> = serde_json::from_str(&output)?;
        debug!(count = prs.len(), repo = %self.repo, "Listed open pull requests");
        Ok(prs)
    }

    async fn publish(&self, draft: &PullRequestDraft) -> Result<(u64, String), PrError> {
        let span = info_span!("publish_pr", repo = %self.repo, branch = %draft.branch);

        async {
            info!("Creating update PR");

            self.workdir.checkout(&self.base_branch).await?;
            self.workdir.create_branch(&draft.branch).await?;

            let opened = self.commit_and_open(draft).await;
            match self.workdir.checkout(&self.base_branch).await {
                Ok(()) => {
                    if opened.is_err() {
                        if let Err(e) = self.workdir.delete_branch(&draft.branch).await {
                            warn!(error = %e, "Failed to delete update branch");
                        }
                    }
                }
                Err(e) => warn!(
                    error = %e,
                    base = %self.base_branch,
                    "Failed to return to base branch"
                ),
            }

            let (number, url) = opened?;
            info!(pr_number = number, url = %url, "PR created successfully");
            Ok((number, url))
        }
        .instrument(span)
        .await
    }
}

/// Picks the PR URL out of `gh pr create` stdout (its last non-empty line).
fn created_pr_url(output: &str) -> Option<&str> {
    output
        .lines()
        .map(str::trim)
        .rfind(|line| !line.is_empty())
        .filter(|line| line.starts_with("https://"))
}

/// Parses the number from a `.../pull/<number>` URL.
fn parse_pr_number(url: &str) -> Option<u64> {
    let (_, tail) = url.rsplit_once("/pull/")?;
    tail.trim_end_matches('/').parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pr(number: u64, labels: &[&str]) -> PullRequest {
        PullRequest {
            id: format!("PR_{number}"),
            number,
            url: format!("https://github.com/grafana/pyroscope-go/pull/{number}"),
            base_ref_name: "main".to_string(),
            head_ref_name: format!("branch-{number}"),
            labels: labels.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn finds_pr_by_label() {
        let prs = vec![
            pr(1, &["dependencies"]),
            pr(2, &["bug", "godeltaprof: check_go_repo"]),
            pr(3, &["godeltaprof: check_go_repo"]),
        ];
        let found = find_labeled(&prs, "godeltaprof: check_go_repo").unwrap();
        assert_eq!(found.number, 2);
    }

    #[test]
    fn finds_nothing_without_label() {
        let prs = vec![pr(1, &[]), pr(2, &["dependencies"])];
        assert!(find_labeled(&prs, "godeltaprof: check_go_repo").is_none());
        assert!(find_labeled(&[], "godeltaprof: check_go_repo").is_none());
    }

    #[test]
    fn head_ref_includes_fork_owner() {
        let host = GhCli::new(".", "grafana/pyroscope-go", "main", "origin");
        assert_eq!(host.head_ref("check_go_repo_1"), "check_go_repo_1");

        let host = host.with_head_owner(Some("korniltsev".to_string()));
        assert_eq!(host.head_ref("check_go_repo_1"), "korniltsev:check_go_repo_1");
    }

    #[test]
    fn reads_created_pr_url() {
        let output = "\nCreating pull request for check_go_repo_1 into main in grafana/pyroscope-go\n\nhttps://github.com/grafana/pyroscope-go/pull/123\n";
        let url = created_pr_url(output).unwrap();
        assert_eq!(url, "https://github.com/grafana/pyroscope-go/pull/123");
        assert_eq!(parse_pr_number(url), Some(123));
    }

    #[test]
    fn rejects_output_without_url() {
        assert_eq!(created_pr_url(""), None);
        assert_eq!(created_pr_url("something went sideways\n"), None);
        assert_eq!(parse_pr_number("https://github.com/grafana/pyroscope-go"), None);
        assert_eq!(
            parse_pr_number("https://github.com/grafana/pyroscope-go/pull/abc"),
            None
        );
    }
}
