//! Locate trace files in a profiler output directory.

use crate::utils::config::TRACE_FILE_PREFIX;
use crate::utils::error::DiscoveryError;
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// List the trace files (`cachegrind.out.*`) in `dir`, sorted by path
///
/// A directory that does not exist simply has no trace files.
///
/// # Errors
/// * `DiscoveryError::ReadDir` - Directory exists but cannot be listed
pub fn find_trace_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, DiscoveryError> {
    let dir = dir.as_ref();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("Trace directory {} does not exist", dir.display());
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(DiscoveryError::ReadDir {
                path: dir.to_path_buf(),
                source,
            })
        }
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| DiscoveryError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        if is_trace_file_name(&path) && path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    debug!("Found {} trace files in {}", files.len(), dir.display());

    Ok(files)
}

/// The lexicographically greatest path is the most recent trace
pub fn latest_trace_file(files: &[PathBuf]) -> Option<&PathBuf> {
    files.iter().max()
}

fn is_trace_file_name(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(TRACE_FILE_PREFIX))
}
