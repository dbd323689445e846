//! Pull request status types.

/// What the run did about the update pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrStatus {
    /// A new PR was opened.
    Created {
        /// GitHub PR number.
        number: u64,
        /// GitHub PR URL.
        url: String,
    },

    /// A PR carrying the correlation label was already open; left untouched.
    Existing {
        /// GitHub PR number.
        number: u64,
        /// GitHub PR URL.
        url: String,
    },
}

impl PrStatus {
    /// Returns the PR number.
    #[must_use]
    pub fn number(&self) -> u64 {
        match self {
            Self::Created { number, .. } | Self::Existing { number, .. } => *number,
        }
    }

    /// Returns the PR URL.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Created { url, .. } | Self::Existing { url, .. } => url,
        }
    }
}
