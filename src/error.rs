//! Error types for dirzip
//!
//! The hierarchy mirrors the failure policy of the engine:
//! - Configuration and partitioning errors are fatal and stop the run
//!   before any worker launches.
//! - Archive errors belong to a single directory; the owning worker logs
//!   them and moves on to its next assignment.
//! - Worker errors (spawn failure, panic) are surfaced by the pool
//!   controller after the run.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for the dirzip application
#[derive(Error, Debug)]
pub enum DirzipError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Workload partitioning errors
    #[error("Partitioning error: {0}")]
    Partition(#[from] PartitionError),

    /// Worker/concurrency errors
    #[error("Worker error: {0}")]
    Worker(#[from] WorkerError),
}

/// Convenience alias for results with [`DirzipError`]
pub type Result<T> = std::result::Result<T, DirzipError>;

/// Configuration and CLI errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config file '{}': {source}", path.display())]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A non-comment line without a `key=value` shape
    #[error("Malformed line {line} in '{}': expected key=value", path.display())]
    MalformedLine { path: PathBuf, line: usize },

    /// A required key is absent
    #[error("Missing required key '{key}' in '{}'", path.display())]
    MissingKey { key: &'static str, path: PathBuf },

    /// `threadNum` did not parse as a positive integer
    #[error("Invalid thread count '{value}': must be a positive integer")]
    InvalidThreadCount { value: String },

    /// `dirList` named no directories at all
    #[error("Directory list is empty: 'dirList' must name at least one directory")]
    EmptyDirList,
}

/// Workload partitioning errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PartitionError {
    /// More workers than directories: at least one worker would idle
    #[error("Cannot split {dirs} directories across {workers} workers: every worker needs at least one directory")]
    InsufficientWork { dirs: usize, workers: usize },
}

/// Errors while archiving a single directory
///
/// Always scoped to one directory task. Never escalated past the owning
/// worker; the controller only ever sees the aggregated count.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// An I/O error, with the path where it happened
    #[error("I/O error on path '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The zip writer rejected an entry or could not finish the archive
    #[error("Zip error on '{}': {source}", path.display())]
    Zip {
        path: PathBuf,
        source: zip::result::ZipError,
    },

    /// An entry fell outside the archive root
    #[error("Could not strip prefix '{}' from path '{}'", prefix.display(), path.display())]
    StripPrefix { prefix: PathBuf, path: PathBuf },

    /// The source has no final path segment to name the archive after
    #[error("Directory '{}' has no base name to derive an archive name from", path.display())]
    NoArchiveName { path: PathBuf },

    /// Beside-source placement with a parentless source
    #[error("Directory '{}' has no parent directory to place the archive in", path.display())]
    NoParent { path: PathBuf },
}

/// Worker thread errors
#[derive(Error, Debug)]
pub enum WorkerError {
    /// Worker thread could not be spawned
    #[error("Failed to spawn worker {id}: {source}")]
    Spawn { id: usize, source: std::io::Error },

    /// Worker panicked
    #[error("Worker {id} panicked")]
    Panicked { id: usize },
}
