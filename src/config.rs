//! Run configuration for dirzip
//!
//! A run is driven by a Java-properties-style key=value file:
//!
//! ```text
//! # directories to compress, one archive each
//! dirList=/srv/exports/alpha;/srv/exports/beta
//! threadNum=4
//! outputPath=NULL
//! ```
//!
//! `dirList` is a `;`-separated ordered list, `threadNum` the worker
//! count, and `outputPath` either a directory for all archives or the
//! sentinel `NULL` (any case) to drop each archive beside its source.
//! Unknown keys are ignored so older config files keep loading.

use crate::cli::Args;
use crate::error::ConfigError;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

const KEY_DIR_LIST: &str = "dirList";
const KEY_THREAD_NUM: &str = "threadNum";
const KEY_OUTPUT_PATH: &str = "outputPath";

/// `outputPath` value selecting beside-source placement.
const OUTPUT_SENTINEL: &str = "NULL";

/// Where produced archives are placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSpec {
    /// Each archive lands in its source directory's parent.
    BesideSource,
    /// All archives land in one fixed directory.
    Dir(PathBuf),
}

impl OutputSpec {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case(OUTPUT_SENTINEL) {
            OutputSpec::BesideSource
        } else {
            OutputSpec::Dir(PathBuf::from(value))
        }
    }
}

/// Validated run configuration; immutable once constructed.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Ordered directories to compress, one archive each
    pub dirs: Vec<PathBuf>,

    /// Number of worker threads to launch
    pub workers: usize,

    /// Shared archive placement policy
    pub output: OutputSpec,
}

impl RunConfig {
    /// Load and validate the config file named by the CLI arguments, then
    /// apply CLI overrides.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let raw = read_properties(&args.config)?;
        let missing = |key| ConfigError::MissingKey {
            key,
            path: args.config.clone(),
        };

        let dir_list = raw.get(KEY_DIR_LIST).ok_or_else(|| missing(KEY_DIR_LIST))?;
        let dirs: Vec<PathBuf> = dir_list
            .split(';')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(PathBuf::from)
            .collect();
        if dirs.is_empty() {
            return Err(ConfigError::EmptyDirList);
        }

        let workers = raw
            .get(KEY_THREAD_NUM)
            .ok_or_else(|| missing(KEY_THREAD_NUM))?;
        let workers = parse_thread_count(workers)?;

        let output = raw
            .get(KEY_OUTPUT_PATH)
            .map(|value| OutputSpec::parse(value))
            .ok_or_else(|| missing(KEY_OUTPUT_PATH))?;

        // --threads replaces the file value; 0 asks for one worker per core.
        let workers = match args.threads {
            Some(0) => num_cpus::get(),
            Some(n) => n,
            None => workers,
        };

        Ok(Self {
            dirs,
            workers,
            output,
        })
    }
}

fn parse_thread_count(value: &str) -> Result<usize, ConfigError> {
    match value.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(ConfigError::InvalidThreadCount {
            value: value.to_string(),
        }),
    }
}

/// Minimal properties reader: `key=value` per line, blank lines and `#`/`!`
/// comments skipped, later duplicates win. Keys the caller never asks for
/// are simply left in the map.
fn read_properties(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut map = HashMap::new();
    for (idx, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            return Err(ConfigError::MalformedLine {
                path: path.to_path_buf(),
                line: idx + 1,
            });
        };
        map.insert(key.trim().to_string(), value.trim().to_string());
    }
    Ok(map)
}
