//! Single-directory zip archiving
//!
//! One call compresses one source directory into one `<name>.zip`. The
//! tree is walked depth-first and every regular file below the root
//! becomes an entry whose path is relative to that root, with
//! forward-slash separators on every platform. An empty tree still
//! yields a valid, zero-entry archive.

use crate::config::OutputSpec;
use crate::error::ArchiveError;
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Compress `source` into a single zip archive and return the archive path.
///
/// The archive is named `<base name of source>.zip` and placed according
/// to `output`. Only regular files are written; directories and symlinks
/// never become entries. Errors are scoped to this one directory, so the
/// caller is free to move on to its next task.
pub fn compress_dir(source: &Path, output: &OutputSpec) -> Result<PathBuf, ArchiveError> {
    let root = fs::canonicalize(source).map_err(|e| ArchiveError::Io {
        path: source.to_path_buf(),
        source: e,
    })?;

    let entries = collect_entries(&root)?;
    let archive_path = resolve_archive_path(&root, output)?;
    write_archive(&root, &entries, &archive_path)?;
    Ok(archive_path)
}

/// Walk the tree depth-first and collect everything below the root, in
/// visitation order. Directories ride along in the list; the write phase
/// filters them out.
fn collect_entries(root: &Path) -> Result<Vec<DirEntry>, ArchiveError> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf());
            ArchiveError::Io {
                path,
                source: e.into(),
            }
        })?;
        entries.push(entry);
    }
    Ok(entries)
}

/// Derive the archive file path: `<output dir>/<source base name>.zip`.
fn resolve_archive_path(root: &Path, output: &OutputSpec) -> Result<PathBuf, ArchiveError> {
    let name = root.file_name().ok_or_else(|| ArchiveError::NoArchiveName {
        path: root.to_path_buf(),
    })?;

    let dir = match output {
        OutputSpec::BesideSource => root.parent().ok_or_else(|| ArchiveError::NoParent {
            path: root.to_path_buf(),
        })?,
        OutputSpec::Dir(dir) => dir.as_path(),
    };

    let mut file_name = name.to_os_string();
    file_name.push(".zip");
    Ok(dir.join(file_name))
}

/// Join the components of a root-relative path with forward slashes, the
/// entry separator zip readers expect regardless of platform.
fn entry_name(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn write_archive(
    root: &Path,
    entries: &[DirEntry],
    archive_path: &Path,
) -> Result<(), ArchiveError> {
    let file = File::create(archive_path).map_err(|e| ArchiveError::Io {
        path: archive_path.to_path_buf(),
        source: e,
    })?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in entries {
        if !entry.file_type().is_file() {
            continue;
        }
        let relative =
            entry
                .path()
                .strip_prefix(root)
                .map_err(|_| ArchiveError::StripPrefix {
                    prefix: root.to_path_buf(),
                    path: entry.path().to_path_buf(),
                })?;
        let name = entry_name(relative);
        debug!(entry = %name, archive = %archive_path.display(), "Writing entry");

        zip.start_file(name, options).map_err(|e| ArchiveError::Zip {
            path: entry.path().to_path_buf(),
            source: e,
        })?;
        let mut reader = File::open(entry.path()).map_err(|e| ArchiveError::Io {
            path: entry.path().to_path_buf(),
            source: e,
        })?;
        io::copy(&mut reader, &mut zip).map_err(|e| ArchiveError::Io {
            path: entry.path().to_path_buf(),
            source: e,
        })?;
    }

    let writer = zip.finish().map_err(|e| ArchiveError::Zip {
        path: archive_path.to_path_buf(),
        source: e,
    })?;
    writer.into_inner().map_err(|e| ArchiveError::Io {
        path: archive_path.to_path_buf(),
        source: e.into_error(),
    })?;
    Ok(())
}
