//! Tracked paths and the commits recorded for them.

use super::TrackingError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of a full SHA-1 commit id in hex.
pub const COMMIT_HASH_LEN: usize = 40;

/// A full, lowercase hex commit id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommitHash(String);

impl CommitHash {
    /// Parses a commit hash, rejecting anything but 40 lowercase hex digits.
    pub fn parse(value: &str) -> Result<Self, TrackingError> {
        let valid = value.len() == COMMIT_HASH_LEN
            && value
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        if !valid {
            return Err(TrackingError::InvalidHash {
                value: value.to_string(),
            });
        }
        Ok(Self(value.to_string()))
    }

    /// Returns the hash as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CommitHash {
    type Error = TrackingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CommitHash> for String {
    fn from(hash: CommitHash) -> Self {
        hash.0
    }
}

impl fmt::Display for CommitHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An upstream path whose history is watched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackedPath {
    /// `src/runtime/mprof.go`, the memory profiler.
    Mprof,
    /// `src/runtime/pprof`, the profile encoder package.
    Pprof,
}

impl TrackedPath {
    /// Every tracked path, in reporting order.
    pub const ALL: [TrackedPath; 2] = [TrackedPath::Mprof, TrackedPath::Pprof];

    /// Path inside the Go repository.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Mprof => "src/runtime/mprof.go",
            Self::Pprof => "src/runtime/pprof",
        }
    }
}

impl fmt::Display for TrackedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Latest commit per tracked path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrackedCommits {
    /// Latest commit touching `src/runtime/mprof.go`.
    pub mprof: CommitHash,
    /// Latest commit touching `src/runtime/pprof`.
    pub pprof: CommitHash,
}

impl TrackedCommits {
    /// Returns the commit recorded for `path`.
    #[must_use]
    pub fn get(&self, path: TrackedPath) -> &CommitHash {
        match path {
            TrackedPath::Mprof => &self.mprof,
            TrackedPath::Pprof => &self.pprof,
        }
    }

    /// Lists the paths whose commit differs between `self` (last known) and
    /// `current`, without logs.
    #[must_use]
    pub fn changes_to(&self, current: &TrackedCommits) -> Vec<PathChange> {
        TrackedPath::ALL
            .into_iter()
            .filter(|&path| self.get(path) != current.get(path))
            .map(|path| PathChange {
                path,
                known: self.get(path).clone(),
                current: current.get(path).clone(),
                log: None,
            })
            .collect()
    }
}

/// A tracked path that moved upstream since the last run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathChange {
    /// The path that changed.
    pub path: TrackedPath,
    /// Commit recorded by the previous run.
    pub known: CommitHash,
    /// Commit found in this run.
    pub current: CommitHash,
    /// Upstream log between the two commits, when requested.
    pub log: Option<String>,
}
