//! Main entry point for the dirzip CLI app

use clap::Parser;
use dirzip::cli::Args;
use dirzip::config::RunConfig;
use dirzip::logging;
use dirzip::pool::{self, RunSummary};
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match run_app(&args) {
        Ok(summary) if summary.is_clean() => ExitCode::SUCCESS,
        Ok(summary) => {
            error!(
                failed = summary.failed,
                archived = summary.archived,
                "Some directories could not be compressed"
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_app(args: &Args) -> dirzip::Result<RunSummary> {
    let config = RunConfig::from_args(args)?;
    pool::run(&config)
}
