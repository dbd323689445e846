//! Orchestrates one check of the Go repository.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::pull_requests::{find_labeled, GhCli, PrStatus, PullRequestDraft, PullRequestHost};
use crate::state::StateStore;
use crate::summary::{RunOutcome, RunSummary};
use crate::templates::{
    generate_branch_name, generate_commit_title, generate_pr_title, TemplateRenderer,
};
use crate::tracking::{attach_logs, GoRepository, PathChange, TrackedCommits, Upstream};
use tracing::{error, info, info_span, warn, Instrument};

/// Runs the check: sync, compare, notify.
pub struct Runner<U, H> {
    config: RunnerConfig,
    upstream: U,
    host: H,
    store: StateStore,
    renderer: TemplateRenderer,
    clock: fn() -> i64,
}

impl Runner<GoRepository, GhCli> {
    /// Builds a runner over a local clone of the Go repository and the `gh`
    /// CLI, working in the current directory.
    pub fn from_config(config: RunnerConfig) -> Result<Self, RunnerError> {
        let settings = config.settings();
        let upstream = GoRepository::new(
            settings.upstream_url.clone(),
            settings.upstream_branch.clone(),
            settings.repo_dir.clone(),
        );
        let host = GhCli::new(
            ".",
            settings.downstream_repo.clone(),
            settings.base_branch.clone(),
            settings.push_remote.clone(),
        )
        .with_head_owner(settings.head_owner.clone());
        Self::new(config, upstream, host)
    }
}

impl<U: Upstream, H: PullRequestHost> Runner<U, H> {
    /// Builds a runner from explicit upstream and host implementations.
    pub fn new(config: RunnerConfig, upstream: U, host: H) -> Result<Self, RunnerError> {
        let store = StateStore::new(config.state_file());
        let renderer = TemplateRenderer::new(config.settings().commit_url.clone())?;
        Ok(Self {
            config,
            upstream,
            host,
            store,
            renderer,
            clock: unix_now,
        })
    }

    /// Replaces the clock used to name update branches.
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    /// Executes the full check.
    ///
    /// The state file is only left updated once the change has been
    /// reported: either a labeled PR already exists or a new one was opened.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        info!(path = %self.config.repo_dir().display(), "Syncing upstream repository");
        self.upstream.sync().await?;

        let known = self.store.load()?;
        let current = TrackedCommits::fetch(&self.upstream).await?;

        if known == current {
            info!("No new commits");
            return Ok(RunSummary::unchanged(current));
        }

        let mut changes = known.changes_to(&current);
        let changed = changes.iter().map(|c| c.path).collect();
        for change in &changes {
            info!(
                path = %change.path,
                known = %change.known,
                current = %change.current,
                "Tracked path changed"
            );
        }

        if self.config.include_log() {
            attach_logs(&self.upstream, &mut changes).await?;
        }

        let body = self.renderer.render_body(&changes)?;
        info!("Update message:\n{body}");

        let outcome = if self.config.dry_run() {
            RunOutcome::DryRun { body }
        } else {
            let pr = self.notify(&known, &current, &changes, body).await?;
            RunOutcome::Notified { pr }
        };

        Ok(RunSummary {
            known,
            current,
            changed,
            outcome,
        })
    }

    /// Opens the update PR unless a labeled one is already open, then
    /// persists `current`.
    async fn notify(
        &self,
        known: &TrackedCommits,
        current: &TrackedCommits,
        changes: &[PathChange],
        body: String,
    ) -> Result<PrStatus, RunnerError> {
        let label = self.config.label();
        let span = info_span!("notify", label = %label);

        async {
            let prs = self.host.list_open(label).await?;
            info!(count = prs.len(), "Open pull requests");

            if let Some(existing) = find_labeled(&prs, label) {
                info!(
                    pr_number = existing.number,
                    head = %existing.head_ref_name,
                    "Found existing PR, leaving it untouched"
                );
                self.store.save(current)?;
                return Ok(PrStatus::Existing {
                    number: existing.number,
                    url: existing.url.clone(),
                });
            }

            info!("Existing PR not found, creating a new one");
            let draft = PullRequestDraft {
                branch: generate_branch_name((self.clock)()),
                files: vec![self.store.path().to_path_buf()],
                commit_message: generate_commit_title(self.store.path()),
                title: generate_pr_title(changes),
                body,
                label: label.to_string(),
            };

            // The commit carries the state file, so it is written first and
            // rolled back if the PR does not get opened. Publishing returns to
            // the base branch, which reverts the file, so it is written again.
            self.store.save(current)?;
            match self.host.publish(&draft).await {
                Ok((number, url)) => {
                    self.store.save(current)?;
                    Ok(PrStatus::Created { number, url })
                }
                Err(e) => {
                    warn!(error = %e, "Failed to open PR, restoring previous state");
                    if let Err(restore) = self.store.save(known) {
                        error!(error = %restore, "Failed to restore state file");
                    }
                    Err(e.into())
                }
            }
        }
        .instrument(span)
        .await
    }
}

fn unix_now() -> i64 {
    chrono::Utc::now().timestamp()
}
