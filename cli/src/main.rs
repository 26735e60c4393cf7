//! Batch driver for secret recovery case files.
//!
//! Each argument names a JSON case file. Cases are processed in order and a
//! failure in one file never aborts the rest of the batch; the exit code
//! reports whether every file succeeded.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use shamir_core::RecoveryCase;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "shamir-recover",
    about = "Recover secrets from Shamir share case files"
)]
struct Cli {
    /// JSON case files to process, in order.
    #[arg(required = true)]
    cases: Vec<PathBuf>,

    /// Cross-check every surplus share against the recovered polynomial.
    #[arg(long)]
    verify: bool,
}

fn run_case(path: &Path, verify: bool) -> anyhow::Result<()> {
    let case = RecoveryCase::load(path)
        .with_context(|| format!("failed to load case file {}", path.display()))?;

    let secret = if verify {
        case.recover_checked()
    } else {
        case.recover()
    }
    .with_context(|| format!("failed to recover secret from {}", path.display()))?;

    println!("Recovered Secret: {secret}");
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time()
        .compact()
        .init();

    let cli = Cli::parse();
    info!(
        cases = cli.cases.len(),
        verify = cli.verify,
        "processing case files"
    );

    let mut failures = 0usize;
    for path in &cli.cases {
        if let Err(err) = run_case(path, cli.verify) {
            eprintln!("Error: {err:#}");
            failures += 1;
        }
    }

    if failures > 0 {
        eprintln!("{failures} of {} case files failed", cli.cases.len());
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
