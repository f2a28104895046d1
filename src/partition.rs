//! Static workload partitioning
//!
//! The directory list is divided exactly once, before any worker starts.
//! Partitioning is the only synchronization the pool ever needs: each
//! worker owns a contiguous slice outright, so the parallel phase runs
//! with no shared mutable state at all.

use crate::error::PartitionError;
use std::path::PathBuf;

/// A contiguous slice of the directory list owned by one worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Ordinal worker id; also the slice position in the original list
    pub worker_id: usize,

    /// Directories to compress, in original list order
    pub dirs: Vec<PathBuf>,
}

/// Split `dirs` into `workers` contiguous, disjoint assignments.
///
/// Each of the first `workers - 1` assignments holds exactly
/// `dirs.len() / workers` directories; the last one also absorbs the
/// remainder of the division, so it can carry up to `workers - 1` extra.
/// Fails when the division would leave any worker with nothing to do.
pub fn partition(dirs: &[PathBuf], workers: usize) -> Result<Vec<Assignment>, PartitionError> {
    let base = if workers == 0 { 0 } else { dirs.len() / workers };
    if base == 0 {
        return Err(PartitionError::InsufficientWork {
            dirs: dirs.len(),
            workers,
        });
    }

    let mut assignments = Vec::with_capacity(workers);
    let mut start = 0;
    for worker_id in 0..workers {
        let end = if worker_id + 1 == workers {
            dirs.len()
        } else {
            start + base
        };
        assignments.push(Assignment {
            worker_id,
            dirs: dirs[start..end].to_vec(),
        });
        start = end;
    }
    Ok(assignments)
}
