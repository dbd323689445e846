//! Git helpers shared by the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(["-c", "commit.gpgsign=false", "-c", "init.defaultBranch=master"])
        .args(args)
        .current_dir(dir)
        .env("GIT_AUTHOR_NAME", "Gopher")
        .env("GIT_AUTHOR_EMAIL", "gopher@example.com")
        .env("GIT_COMMITTER_NAME", "Gopher")
        .env("GIT_COMMITTER_EMAIL", "gopher@example.com")
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Creates an empty repository on `master` at `dir`.
pub fn init_repo(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    git(dir, &["init", "-q"]);
    git(dir, &["symbolic-ref", "HEAD", "refs/heads/master"]);
}

/// Lets the library commit in `dir` without relying on global git config.
pub fn configure_identity(dir: &Path) {
    git(dir, &["config", "user.name", "Gopher"]);
    git(dir, &["config", "user.email", "gopher@example.com"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
}

pub fn commit_file(repo: &Path, file: &str, contents: &str, message: &str) -> String {
    let path = repo.join(file);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, contents).unwrap();
    git(repo, &["add", "--", file]);
    git(repo, &["commit", "-q", "-m", message]);
    git(repo, &["rev-parse", "HEAD"]).trim().to_string()
}

/// Creates an upstream repository with one commit per tracked path.
///
/// Returns the repository path and the mprof and pprof commits.
pub fn seed_upstream(root: &Path) -> (PathBuf, String, String) {
    let upstream = root.join("upstream");
    init_repo(&upstream);

    let mprof = commit_file(
        &upstream,
        "src/runtime/mprof.go",
        "package runtime\n",
        "runtime: add mprof",
    );
    let pprof = commit_file(
        &upstream,
        "src/runtime/pprof/pprof.go",
        "package pprof\n",
        "runtime/pprof: add package",
    );
    commit_file(&upstream, "README.md", "go\n", "doc: readme");

    (upstream, mprof, pprof)
}

pub fn current_branch(repo: &Path) -> String {
    git(repo, &["rev-parse", "--abbrev-ref", "HEAD"]).trim().to_string()
}

pub fn has_branch(repo: &Path, branch: &str) -> bool {
    !git(repo, &["branch", "--list", branch]).trim().is_empty()
}
