//! Run outcome types.

use crate::pull_requests::PrStatus;

/// What a run ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Nothing moved upstream; no side effects.
    Unchanged,

    /// Changes were found but only previewed.
    DryRun {
        /// Rendered PR body.
        body: String,
    },

    /// Changes were found and reported through a pull request.
    Notified {
        /// What happened to the update PR.
        pr: PrStatus,
    },
}
