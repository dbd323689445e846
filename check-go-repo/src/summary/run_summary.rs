//! Run summary types.

use super::outcome::RunOutcome;
use crate::pull_requests::PrStatus;
use crate::tracking::{TrackedCommits, TrackedPath};

/// Summary of a complete run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Commits recorded by the previous run.
    pub known: TrackedCommits,

    /// Commits found in this run.
    pub current: TrackedCommits,

    /// Paths whose commit moved.
    pub changed: Vec<TrackedPath>,

    /// Final outcome.
    pub outcome: RunOutcome,
}

impl RunSummary {
    /// Creates the summary of a run that found nothing new.
    #[must_use]
    pub fn unchanged(commits: TrackedCommits) -> Self {
        Self {
            known: commits.clone(),
            current: commits,
            changed: Vec::new(),
            outcome: RunOutcome::Unchanged,
        }
    }

    /// Returns true if any tracked path moved.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.changed.is_empty()
    }

    /// Returns true if this run only previewed the PR.
    #[must_use]
    pub fn dry_run(&self) -> bool {
        matches!(self.outcome, RunOutcome::DryRun { .. })
    }

    /// Returns the PR status, if a PR was looked at.
    #[must_use]
    pub fn pr(&self) -> Option<&PrStatus> {
        match &self.outcome {
            RunOutcome::Notified { pr } => Some(pr),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::CommitHash;

    fn commits(mprof: char, pprof: char) -> TrackedCommits {
        TrackedCommits {
            mprof: CommitHash::parse(&mprof.to_string().repeat(40)).unwrap(),
            pprof: CommitHash::parse(&pprof.to_string().repeat(40)).unwrap(),
        }
    }

    #[test]
    fn unchanged_summary_has_no_pr() {
        let summary = RunSummary::unchanged(commits('a', 'b'));
        assert!(!summary.has_changes());
        assert!(!summary.dry_run());
        assert_eq!(summary.pr(), None);
        assert_eq!(summary.known, summary.current);
    }

    #[test]
    fn notified_summary_exposes_pr() {
        let pr = PrStatus::Created {
            number: 5,
            url: "https://github.com/grafana/pyroscope-go/pull/5".to_string(),
        };
        let summary = RunSummary {
            known: commits('a', 'b'),
            current: commits('c', 'b'),
            changed: vec![TrackedPath::Mprof],
            outcome: RunOutcome::Notified { pr: pr.clone() },
        };
        assert!(summary.has_changes());
        assert_eq!(summary.pr(), Some(&pr));
    }
}
