// principium: Application Storage & Environment Settings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! File-backed variable storage.
//!
//! ```text
//! prefix/
//!   <key>        raw value, no framing
//!   <key>        append(): one trimmed line per call
//!   sub/         sub_store("sub"): independent store
//! ```
//!
//! - Keys and prefixes are validated before any I/O.
//! - `get`/`last_modified` never fail: any read error yields the default.
//!   `try_get`/`try_last_modified` expose the cause as [`ReadError`].
//! - The prefix directory is created lazily by `set`/`append` only.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::{debug, warn};

use crate::error::{FsError, PrincipiumResult, ReadError};
use crate::utility::fs::files;
use crate::validation::{ensure_relative_path, ensure_valid_file_name, ensure_valid_path};

/// Directory created under the working directory by [`VariableStore::with_default_prefix`].
pub const DEFAULT_STORAGE_DIR: &str = "Storage";

const KEY_SUBJECT: &str = "variable name";
const PREFIX_SUBJECT: &str = "storage prefix";

/// A directory of variables, one file per key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableStore {
    prefix: PathBuf,
}

impl VariableStore {
    /// Creates a store rooted at `prefix`.
    ///
    /// # Errors
    ///
    /// Returns an error if the prefix contains characters invalid in a path.
    pub fn new(prefix: impl Into<PathBuf>) -> PrincipiumResult<Self> {
        let prefix = prefix.into();
        ensure_valid_path(PREFIX_SUBJECT, &prefix.to_string_lossy())?;
        Ok(Self { prefix })
    }

    /// Creates a store rooted at `<current dir>/Storage`.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn with_default_prefix() -> PrincipiumResult<Self> {
        let cwd = std::env::current_dir().map_err(|e| FsError::from_io(Path::new("."), e))?;
        Self::new(cwd.join(DEFAULT_STORAGE_DIR))
    }

    /// The directory variables are stored in.
    #[must_use]
    pub fn prefix(&self) -> &Path {
        &self.prefix
    }

    /// Creates an independent store rooted at `prefix/relative`.
    ///
    /// # Errors
    ///
    /// Returns an error if `relative` contains characters invalid in a path,
    /// or is absolute.
    pub fn sub_store(&self, relative: impl AsRef<Path>) -> PrincipiumResult<Self> {
        let relative = relative.as_ref();
        ensure_relative_path(PREFIX_SUBJECT, relative)?;
        Self::new(self.prefix.join(relative))
    }

    fn variable_path(&self, key: &str) -> Result<PathBuf, ReadError> {
        ensure_valid_file_name(KEY_SUBJECT, key)?;
        Ok(self.prefix.join(key))
    }

    /// Reads a variable, distinguishing why it could not be read.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::InvalidName`] for a bad key, or [`ReadError::Fs`]
    /// when the file is missing, unreadable or not UTF-8.
    pub fn try_get(&self, key: &str) -> Result<String, ReadError> {
        let path = self.variable_path(key)?;
        Ok(files::read_text(&path)?)
    }

    /// Reads a variable, returning `default` on any failure.
    #[must_use]
    pub fn get(&self, key: &str, default: Option<&str>) -> Option<String> {
        match self.try_get(key) {
            Ok(value) => Some(value),
            Err(e) => {
                log_soft_failure(key, &e);
                default.map(str::to_string)
            }
        }
    }

    /// Last write time of a variable, distinguishing why it is unavailable.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError`] if the key is invalid or the metadata cannot be read.
    pub fn try_last_modified(&self, key: &str) -> Result<SystemTime, ReadError> {
        let path = self.variable_path(key)?;
        Ok(files::modified_time(&path)?)
    }

    /// Last write time of a variable, or `None` if it cannot be determined.
    #[must_use]
    pub fn last_modified(&self, key: &str) -> Option<SystemTime> {
        self.try_last_modified(key)
            .inspect_err(|e| log_soft_failure(key, e))
            .ok()
    }

    /// Names of the variables currently stored, sorted.
    ///
    /// A prefix that does not exist yet holds no variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the prefix exists but cannot be listed.
    pub fn list_keys(&self) -> PrincipiumResult<Vec<String>> {
        match files::list_files(&self.prefix) {
            Ok(keys) => Ok(keys),
            Err(FsError::NotFound(_)) => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Stores `value` under `key`, or deletes the variable when `value` is `None`.
    ///
    /// The value is written exactly as given.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the file cannot be written or deleted.
    pub fn set(&self, key: &str, value: Option<&str>) -> PrincipiumResult<()> {
        ensure_valid_file_name(KEY_SUBJECT, key)?;
        let path = self.prefix.join(key);

        let Some(value) = value else {
            let removed = files::remove_file_if_exists(&path)?;
            debug!(key, removed, prefix = %self.prefix.display(), "deleted variable");
            return Ok(());
        };

        files::ensure_dir(&self.prefix)?;
        files::write_text(&path, value)?;
        debug!(key, bytes = value.len(), prefix = %self.prefix.display(), "set variable");
        Ok(())
    }

    /// Deletes a variable. Deleting a missing variable is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the file cannot be deleted.
    pub fn remove(&self, key: &str) -> PrincipiumResult<()> {
        self.set(key, None)
    }

    /// Appends `value` (trimmed) as one line, creating the variable if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the file cannot be written.
    pub fn append(&self, key: &str, value: &str) -> PrincipiumResult<()> {
        ensure_valid_file_name(KEY_SUBJECT, key)?;
        files::ensure_dir(&self.prefix)?;
        files::append_line(&self.prefix.join(key), value.trim())?;
        debug!(key, prefix = %self.prefix.display(), "appended to variable");
        Ok(())
    }
}

fn log_soft_failure(key: &str, error: &ReadError) {
    if error.is_not_found() {
        debug!(key, "variable not found");
    } else {
        warn!(key, error = %error, "variable read failed, using default");
    }
}

#[cfg(test)]
mod tests;
