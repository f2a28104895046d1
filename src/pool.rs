//! Worker pool control
//!
//! The controller partitions the directory list, launches every worker,
//! then acts as the single consumer of the outcome stream. The run is
//! over only when every worker has dropped its sender and every thread
//! has been joined, so a returned summary always covers finished
//! workers, never abandoned ones.

use crate::config::RunConfig;
use crate::error::{Result, WorkerError};
use crate::partition::partition;
use crate::worker::{ArchiveOutcome, Worker};
use crossbeam_channel::unbounded;
use tracing::{error, info};

/// Aggregated per-directory outcomes for one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Directories successfully archived
    pub archived: usize,

    /// Directories that failed to compress
    pub failed: usize,
}

impl RunSummary {
    /// Total directories processed
    pub fn total(&self) -> usize {
        self.archived + self.failed
    }

    /// True when every directory was archived
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// Partition the configured directories, run one worker per slice to
/// completion, and report the aggregated outcome.
///
/// Partitioning failures return before any thread exists. Once workers
/// are running, per-directory failures only ever show up as counts in
/// the summary; a worker panic is the sole hard error after launch.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let assignments = partition(&config.dirs, config.workers)?;

    info!(
        dirs = config.dirs.len(),
        workers = assignments.len(),
        "Starting compression run"
    );

    let (outcome_tx, outcome_rx) = unbounded();
    let mut workers = Vec::with_capacity(assignments.len());
    for assignment in assignments {
        let mut worker = Worker::new(assignment, config.output.clone(), outcome_tx.clone());
        worker.start()?;
        workers.push(worker);
    }
    // The controller keeps no sender of its own; the stream closes when
    // the last worker finishes.
    drop(outcome_tx);

    let mut summary = RunSummary::default();
    for outcome in outcome_rx {
        match outcome {
            ArchiveOutcome::Archived { .. } => summary.archived += 1,
            ArchiveOutcome::Failed { .. } => summary.failed += 1,
        }
    }

    let mut panicked: Option<WorkerError> = None;
    for worker in workers {
        let id = worker.id();
        if let Err(e) = worker.join() {
            error!(worker = id, error = %e, "Worker did not shut down cleanly");
            panicked.get_or_insert(e);
        }
    }
    if let Some(e) = panicked {
        return Err(e.into());
    }

    info!(
        archived = summary.archived,
        failed = summary.failed,
        "Compression run complete"
    );
    Ok(summary)
}
