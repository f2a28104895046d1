//! Compression worker threads
//!
//! Each worker owns one contiguous assignment and processes it strictly
//! in order on its own OS thread. A directory that fails to compress is
//! logged and reported, and the worker moves on; nothing a worker does
//! can stall a sibling. Every record a worker emits carries its id
//! through a tracing span.

use crate::archive;
use crate::config::OutputSpec;
use crate::error::{ArchiveError, WorkerError};
use crate::partition::Assignment;
use crossbeam_channel::Sender;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};
use tracing::{debug, error, info, info_span};

/// Outcome of compressing one assigned directory.
#[derive(Debug)]
pub enum ArchiveOutcome {
    /// The directory was fully archived
    Archived { dir: PathBuf, archive: PathBuf },

    /// The directory could not be archived; the worker moved on
    Failed { dir: PathBuf, error: ArchiveError },
}

impl ArchiveOutcome {
    /// The source directory this outcome is about
    pub fn dir(&self) -> &Path {
        match self {
            ArchiveOutcome::Archived { dir, .. } | ArchiveOutcome::Failed { dir, .. } => dir,
        }
    }

    /// True for a successful archive
    pub fn is_archived(&self) -> bool {
        matches!(self, ArchiveOutcome::Archived { .. })
    }
}

/// Everything the worker thread will own once it runs.
struct Staged {
    assignment: Assignment,
    output: OutputSpec,
    outcomes: Sender<ArchiveOutcome>,
}

/// A worker thread compressing its assigned directories sequentially.
pub struct Worker {
    /// Worker ID
    id: usize,

    /// Assignment and channel, held until the thread takes them
    staged: Option<Staged>,

    /// Thread handle
    handle: Option<JoinHandle<()>>,
}

impl Worker {
    /// Stage a worker for its assignment. No thread runs until
    /// [`Worker::start`].
    pub fn new(
        assignment: Assignment,
        output: OutputSpec,
        outcomes: Sender<ArchiveOutcome>,
    ) -> Self {
        let id = assignment.worker_id;
        debug!(worker = id, dirs = assignment.dirs.len(), "Worker created");
        Self {
            id,
            staged: Some(Staged {
                assignment,
                output,
                outcomes,
            }),
            handle: None,
        }
    }

    /// Get worker ID
    pub fn id(&self) -> usize {
        self.id
    }

    /// Launch the worker thread.
    ///
    /// Starting an already-started worker is a logged no-op, so a stray
    /// duplicate call cannot double-process the assignment.
    pub fn start(&mut self) -> Result<(), WorkerError> {
        let Some(staged) = self.staged.take() else {
            debug!(worker = self.id, "Start called twice; ignoring");
            return Ok(());
        };

        let id = self.id;
        let handle = thread::Builder::new()
            .name(format!("zip-worker-{}", id))
            .spawn(move || worker_loop(id, staged))
            .map_err(|source| WorkerError::Spawn { id, source })?;
        self.handle = Some(handle);
        Ok(())
    }

    /// Wait for the worker to finish
    pub fn join(mut self) -> Result<(), WorkerError> {
        if let Some(handle) = self.handle.take() {
            handle
                .join()
                .map_err(|_| WorkerError::Panicked { id: self.id })
        } else {
            Ok(())
        }
    }
}

/// Main worker loop: one archive attempt per assigned directory, in order.
fn worker_loop(id: usize, staged: Staged) {
    let _span = info_span!("worker", id).entered();
    let Staged {
        assignment,
        output,
        outcomes,
    } = staged;

    info!(dirs = assignment.dirs.len(), "Worker starting");
    let mut archived = 0usize;
    let mut failed = 0usize;

    for dir in &assignment.dirs {
        let outcome = match archive::compress_dir(dir, &output) {
            Ok(archive_path) => {
                archived += 1;
                info!(
                    dir = %dir.display(),
                    archive = %archive_path.display(),
                    "Directory compressed"
                );
                ArchiveOutcome::Archived {
                    dir: dir.clone(),
                    archive: archive_path,
                }
            }
            Err(e) => {
                failed += 1;
                error!(
                    dir = %dir.display(),
                    error = %e,
                    "Directory could not be compressed"
                );
                ArchiveOutcome::Failed {
                    dir: dir.clone(),
                    error: e,
                }
            }
        };
        if outcomes.send(outcome).is_err() {
            // Controller went away; nothing left to report to.
            break;
        }
    }

    info!(archived, failed, "Worker finished");
}
