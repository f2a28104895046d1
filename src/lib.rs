//! # dirzip Core Library
//!
//! This crate provides the engine behind the `dirzip` command-line tool:
//! it splits a configured list of directories into contiguous per-worker
//! slices and compresses each directory into its own zip archive on a
//! fixed pool of worker threads.
//!
//! ## Key Modules
//!
//! - [`partition`]: Splits the ordered directory list into worker assignments.
//! - [`archive`]: Compresses one directory tree into one zip archive.
//! - [`worker`]: The worker thread that archives its assignment in order.
//! - [`pool`]: Launches workers, collects outcomes, and joins everything.
//! - [`config`]: The key=value run configuration file and its validation.

pub mod archive;
pub mod cli;
pub mod config;

pub mod error;
pub use error::{DirzipError, Result};

pub mod logging;
pub mod partition;
pub mod pool;
pub mod worker;
