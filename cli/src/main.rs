//! CLI for check-go-repo.
//!
//! Checks whether the Go runtime profiler sources changed upstream and opens a
//! godeltaprof update pull request when they did.

use check_go_repo::{
    PrStatus, RunOutcome, RunSummary, Runner, RunnerConfig, RunnerError, Settings,
};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_SETTINGS_FILE: &str = "check-go-repo.toml";

/// check-go-repo - Open a PR when src/runtime/mprof.go or src/runtime/pprof change upstream.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the settings file (defaults to ./check-go-repo.toml if present).
    #[arg(long, env = "CHECK_GO_REPO_CONFIG")]
    config: Option<PathBuf>,

    /// Directory holding the Go repository clone.
    #[arg(long)]
    repo_dir: Option<PathBuf>,

    /// Path to the last known commits file.
    #[arg(long)]
    state_file: Option<PathBuf>,

    /// Include the upstream commit log in the PR body.
    #[arg(long)]
    include_log: bool,

    /// Print the PR body without saving state or touching GitHub.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::FAILURE
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::load_or_default(Path::new(DEFAULT_SETTINGS_FILE))?,
    };

    let mut config = RunnerConfig::new(settings)
        .with_dry_run(args.dry_run)
        .with_include_log(args.include_log);
    if let Some(repo_dir) = args.repo_dir {
        config = config.with_repo_dir(repo_dir);
    }
    if let Some(state_file) = args.state_file {
        config = config.with_state_file(state_file);
    }

    let runner = Runner::from_config(config)?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run() { "Dry Run" } else { "Live" }
    );
    println!("  mprof: {}", summary.current.mprof);
    println!("  pprof: {}", summary.current.pprof);

    if !summary.has_changes() {
        println!("  No new commits");
        return;
    }

    let changed: Vec<String> = summary.changed.iter().map(ToString::to_string).collect();
    println!("  Changed: {}", changed.join(", "));

    match &summary.outcome {
        RunOutcome::Unchanged => {}
        RunOutcome::DryRun { body } => {
            println!("\n  PR body:");
            for line in body.lines() {
                println!("    {line}");
            }
        }
        RunOutcome::Notified { pr } => {
            let action = match pr {
                PrStatus::Created { .. } => "PR created",
                PrStatus::Existing { .. } => "PR already open",
            };
            println!("  {action}: #{} {}", pr.number(), pr.url());
        }
    }
}
