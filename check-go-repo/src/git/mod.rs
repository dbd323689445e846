//! Local git working copies.
//!
//! Thin wrappers over the `git` command line. Output is returned as text and
//! failures carry the command line and stderr.

mod error;

pub use error::GitError;

use crate::process::run_command;
use bstr::ByteSlice;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A git working copy on disk.
#[derive(Debug, Clone)]
pub struct GitRepository {
    path: PathBuf,
}

impl GitRepository {
    /// Wraps an existing (or soon to exist) working copy.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the working copy path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Makes sure a clone of `url` exists at this path and is at the tip of
    /// `branch`.
    ///
    /// Clones when the directory is missing, then checks out `branch` and
    /// fast-forwards it.
    pub async fn sync(&self, url: &str, branch: &str) -> Result<(), GitError> {
        let exists = tokio::fs::try_exists(&self.path)
            .await
            .map_err(|e| GitError::Inaccessible {
                path: self.path.display().to_string(),
                source: e,
            })?;

        if exists {
            info!(path = %self.path.display(), "Repository exists");
        } else {
            info!(url, path = %self.path.display(), "Cloning repository");
            let target = self.path.to_string_lossy();
            run_command("git", &["clone", url, &target], None)
                .await
                .map_err(|e| GitError::CloneFailed {
                    url: url.to_string(),
                    source: e,
                })?;
            info!("git clone done");
        }

        self.checkout(branch).await?;
        self.git(&["pull", "--ff-only"])
            .await
            .map_err(|e| match e {
                GitError::Command(source) => GitError::PullFailed {
                    path: self.path.display().to_string(),
                    source,
                },
                other => other,
            })?;
        info!(branch, "git pull done");
        Ok(())
    }

    /// Returns the output of `git log` with `args`, limited to `pathspec`.
    pub async fn log(&self, args: &[&str], pathspec: &str) -> Result<String, GitError> {
        let mut full = vec!["log"];
        full.extend_from_slice(args);
        full.extend_from_slice(&["--", pathspec]);
        self.git(&full).await
    }

    /// Switches to an existing `branch`. Uncommitted changes are carried over.
    pub async fn checkout(&self, branch: &str) -> Result<(), GitError> {
        debug!(branch, "Checking out branch");
        self.git(&["checkout", branch]).await?;
        Ok(())
    }

    /// Force-deletes the local `branch`. It must not be checked out.
    pub async fn delete_branch(&self, branch: &str) -> Result<(), GitError> {
        debug!(branch, "Deleting branch");
        self.git(&["branch", "-D", branch]).await?;
        Ok(())
    }

    /// Creates `branch` from the current HEAD and switches to it.
    pub async fn create_branch(&self, branch: &str) -> Result<(), GitError> {
        validate_branch_name(branch)?;
        debug!(branch, "Creating branch");
        self.git(&["checkout", "-b", branch]).await?;
        Ok(())
    }

    /// Stages `files` and commits them with `message`.
    pub async fn commit_files(&self, files: &[&Path], message: &str) -> Result<(), GitError> {
        let names: Vec<String> = files.iter().map(|f| f.to_string_lossy().into_owned()).collect();
        let mut add = vec!["add", "--"];
        add.extend(names.iter().map(String::as_str));
        self.git(&add).await?;
        self.git(&["commit", "-m", message]).await?;
        Ok(())
    }

    /// Pushes `branch` to `remote`, setting the upstream.
    pub async fn push(&self, remote: &str, branch: &str) -> Result<(), GitError> {
        debug!(remote, branch, "Pushing branch");
        self.git(&["push", "-u", remote, branch])
            .await
            .map_err(|e| match e {
                GitError::Command(source) => GitError::PushFailed {
                    remote: remote.to_string(),
                    branch: branch.to_string(),
                    source,
                },
                other => other,
            })?;
        Ok(())
    }

    /// Runs a git command inside the working copy.
    async fn git(&self, args: &[&str]) -> Result<String, GitError> {
        Ok(run_command("git", args, Some(&self.path)).await?)
    }
}

/// Checks that `name` is usable as a branch name.
pub fn validate_branch_name(name: &str) -> Result<(), GitError> {
    gix_validate::reference::name_partial(name.as_bytes().as_bstr())
        .map(|_| ())
        .map_err(|e| GitError::InvalidBranch {
            name: name.to_string(),
            message: e.to_string(),
        })
}
