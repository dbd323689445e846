//! Running `git` and `gh` as subprocesses.

mod error;

pub use error::CommandError;

use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Runs `program` with `args` and returns its stdout.
///
/// The working directory is `dir` when given, otherwise the current
/// directory. A non-zero exit status becomes [`CommandError::Failed`]
/// carrying the trimmed stderr.
pub async fn run_command(
    program: &str,
    args: &[&str],
    dir: Option<&Path>,
) -> Result<String, CommandError> {
    let command = describe(program, args);
    debug!(command = %command, "Running command");

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(dir) = dir {
        cmd.current_dir(dir);
    }

    let output = cmd.output().await.map_err(|e| CommandError::Spawn {
        command: command.clone(),
        source: e,
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CommandError::Failed {
            command,
            status: output.status.to_string(),
            stderr: stderr.trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Renders a command line for logs and errors.
///
/// Long arguments (PR bodies) are elided.
fn describe(program: &str, args: &[&str]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        if arg.len() > 80 || arg.contains('\n') {
            line.push_str("<...>");
        } else {
            line.push_str(arg);
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_command_line() {
        assert_eq!(
            describe("git", &["log", "-n", "1", "--", "src/runtime/pprof"]),
            "git log -n 1 -- src/runtime/pprof"
        );
    }

    #[test]
    fn elides_multiline_arguments() {
        assert_eq!(
            describe("gh", &["pr", "create", "--body", "line one\nline two"]),
            "gh pr create --body <...>"
        );
    }

    #[tokio::test]
    async fn reports_missing_program() {
        let result = run_command("check-go-repo-no-such-tool", &[], None).await;
        assert!(matches!(result, Err(CommandError::Spawn { .. })));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn captures_stdout_and_failures() {
        let out = run_command("sh", &["-c", "echo hello"], None).await.unwrap();
        assert_eq!(out, "hello\n");

        let err = run_command("sh", &["-c", "echo broken >&2; exit 3"], None)
            .await
            .unwrap_err();
        match err {
            CommandError::Failed { stderr, .. } => assert_eq!(stderr, "broken"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
