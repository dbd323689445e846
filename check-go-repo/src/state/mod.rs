//! Persisted record of the last known commits.
//!
//! The state file is the only source of truth for what the previous run saw.
//! It is committed to the downstream repository as part of the update PR.

mod error;

pub use error::StateError;

use crate::tracking::TrackedCommits;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Reads and writes the JSON state file.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Creates a store for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the state file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the last known commits.
    ///
    /// # Errors
    ///
    /// A missing, unreadable or malformed file is an error; there is no
    /// empty default.
    pub fn load(&self) -> Result<TrackedCommits, StateError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StateError::Missing {
                    path: self.path.display().to_string(),
                }
            } else {
                StateError::Io {
                    path: self.path.display().to_string(),
                    source: e,
                }
            }
        })?;

        let commits: TrackedCommits =
            serde_json::from_str(&contents).map_err(|e| StateError::Json {
                path: self.path.display().to_string(),
                source: e,
            })?;

        info!(mprof = %commits.mprof, pprof = %commits.pprof, "Known commits");
        Ok(commits)
    }

    /// Writes `commits` as indented JSON.
    ///
    /// The file is replaced atomically so an interrupted run never leaves a
    /// truncated record behind.
    pub fn save(&self, commits: &TrackedCommits) -> Result<(), StateError> {
        debug!(path = %self.path.display(), "Writing state file");

        let mut json = serde_json::to_string_pretty(commits).map_err(|e| StateError::Json {
            path: self.path.display().to_string(),
            source: e,
        })?;
        json.push('\n');

        let io_error = |e: std::io::Error| StateError::Io {
            path: self.path.display().to_string(),
            source: e,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir).map_err(io_error)?;
        file.write_all(json.as_bytes()).map_err(io_error)?;
        file.persist(&self.path).map_err(|e| io_error(e.error))?;

        info!(mprof = %commits.mprof, pprof = %commits.pprof, "Saved commits");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::CommitHash;
    use std::fs;
    use tempfile::TempDir;

    fn commits(mprof: char, pprof: char) -> TrackedCommits {
        TrackedCommits {
            mprof: CommitHash::parse(&mprof.to_string().repeat(40)).unwrap(),
            pprof: CommitHash::parse(&pprof.to_string().repeat(40)).unwrap(),
        }
    }

    #[test]
    fn save_then_load_returns_same_commits() {
        let temp = TempDir::new().unwrap();
        let store = StateStore::new(temp.path().join("last_known_go_commits.json"));

        store.save(&commits('a', 'b')).unwrap();
        assert_eq!(store.load().unwrap(), commits('a', 'b'));

        store.save(&commits('c', 'b')).unwrap();
        assert_eq!(store.load().unwrap(), commits('c', 'b'));
    }

    #[test]
    fn writes_indented_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("state.json");
        let store = StateStore::new(&path);

        store.save(&commits('a', 'b')).unwrap();

        let expected = format!(
            "{{\n  \"mprof\": \"{}\",\n  \"pprof\": \"{}\"\n}}\n",
            "a".repeat(40),
            "b".repeat(40)
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), expected);
    }

    #[test]
    fn missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let store = StateStore::new(temp.path().join("absent.json"));
        assert!(matches!(store.load(), Err(StateError::Missing { .. })));
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("state.json");
        let store = StateStore::new(&path);

        for contents in [
            "",
            "not json",
            r#"{"mprof": "abc"}"#,
            r#"{"mprof": "zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz", "pprof": "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb"}"#,
        ] {
            fs::write(&path, contents).unwrap();
            assert!(
                matches!(store.load(), Err(StateError::Json { .. })),
                "accepted {contents:?}"
            );
        }
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let store = StateStore::new(temp.path().join("nested/state.json"));
        assert!(matches!(
            store.save(&commits('a', 'b')),
            Err(StateError::Io { .. })
        ));
    }
}
