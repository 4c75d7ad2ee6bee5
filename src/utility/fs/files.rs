// principium: Application Storage & Environment Settings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::time::SystemTime;

use tracing::trace;

use crate::error::FsError;

/// Result of a filesystem helper.
pub type FsResult<T> = std::result::Result<T, FsError>;

/// Reads the whole file as UTF-8 text.
///
/// # Errors
///
/// Returns an [`FsError`] classified from the underlying I/O error.
pub fn read_text(path: &Path) -> FsResult<String> {
    trace!(path = %path.display(), "reading file");
    std::fs::read_to_string(path).map_err(|e| FsError::from_io(path, e))
}

/// Creates or truncates the file and writes `contents` verbatim.
///
/// # Errors
///
/// Returns an [`FsError`] if the file cannot be opened or written.
pub fn write_text(path: &Path, contents: &str) -> FsResult<()> {
    trace!(path = %path.display(), bytes = contents.len(), "writing file");
    std::fs::write(path, contents).map_err(|e| FsError::from_io(path, e))
}

/// Appends `text` to the end of the file, creating it if absent.
///
/// # Errors
///
/// Returns an [`FsError`] if the file cannot be opened or written.
pub fn append_text(path: &Path, text: &str) -> FsResult<()> {
    trace!(path = %path.display(), bytes = text.len(), "appending to file");
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| FsError::from_io(path, e))?;
    file.write_all(text.as_bytes())
        .map_err(|e| FsError::from_io(path, e))
}

/// Appends `line` followed by a newline.
///
/// # Errors
///
/// Returns an [`FsError`] if the file cannot be opened or written.
pub fn append_line(path: &Path, line: &str) -> FsResult<()> {
    append_text(path, &format!("{line}\n"))
}

/// Deletes the file. A file that is already gone is not an error.
///
/// Returns whether a file was actually removed.
///
/// # Errors
///
/// Returns an [`FsError`] for any failure other than "not found".
pub fn remove_file_if_exists(path: &Path) -> FsResult<bool> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            trace!(path = %path.display(), "removed file");
            Ok(true)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(FsError::from_io(path, e)),
    }
}

/// Creates the directory and any missing parents.
///
/// # Errors
///
/// Returns an [`FsError`] if the directory cannot be created.
pub fn ensure_dir(path: &Path) -> FsResult<()> {
    if path.is_dir() {
        return Ok(());
    }
    trace!(path = %path.display(), "creating directory");
    std::fs::create_dir_all(path).map_err(|e| FsError::from_io(path, e))
}

/// Lists the names of the regular files directly inside `dir`, sorted.
///
/// Subdirectories and names that are not valid UTF-8 are skipped.
///
/// # Errors
///
/// Returns an [`FsError`] if the directory cannot be read.
pub fn list_files(dir: &Path) -> FsResult<Vec<String>> {
    let entries = std::fs::read_dir(dir).map_err(|e| FsError::from_io(dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| FsError::from_io(dir, e))?;
        let is_file = entry
            .file_type()
            .map_err(|e| FsError::from_io(&entry.path(), e))?
            .is_file();
        if !is_file {
            continue;
        }
        if let Ok(name) = entry.file_name().into_string() {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Returns the last write time of the file.
///
/// # Errors
///
/// Returns an [`FsError`] if the metadata cannot be read.
pub fn modified_time(path: &Path) -> FsResult<SystemTime> {
    std::fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map_err(|e| FsError::from_io(path, e))
}

/// Whether a regular file exists at `path`.
#[must_use]
pub fn file_exists(path: &Path) -> bool {
    path.is_file()
}
