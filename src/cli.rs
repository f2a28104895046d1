//! Command-line interface for the dirzip binary

use clap::Parser;
use std::path::PathBuf;

/// Compress each configured directory into its own zip archive, in parallel.
#[derive(Parser, Debug, Clone)]
#[command(name = "dirzip", version, about, long_about = None)]
pub struct Args {
    /// Path to the run configuration file (key=value lines: dirList, threadNum, outputPath).
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Override the configured worker count. [0 = auto-detect based on CPU cores]
    #[arg(short = 't', long, value_name = "NUM")]
    pub threads: Option<usize>,

    /// Verbose output (adds per-entry debug records).
    #[arg(short = 'v', long)]
    pub verbose: bool,
}
