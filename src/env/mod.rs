// principium: Application Storage & Environment Settings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment settings backed by one INI file.
//!
//! # State
//!
//! ```text
//!            load()                 load() / set()
//! Unloaded ---------> Loaded(doc) <----------------+
//!    |                    |                        |
//!  get() -> NotInitialized +------------------------+
//! ```
//!
//! - Lookups fold case: `Foo=bar` answers `get("foo")` and `get("FOO")`.
//! - `set()` appends keys that are not in the file yet and never rewrites
//!   existing lines (see [`IniDocument::apply`]).
//! - `set_path()` only affects the next `load()`; the cache keeps pointing
//!   at the file it was loaded from.
//! - [`LoadedEnvironment`] can only be obtained from the loaded state, so
//!   code holding one reads without error handling.

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use bon::Builder;
use tracing::debug;

use crate::error::{EnvError, FsError};
use crate::ini::{Entry, IniDocument};
use crate::utility::fs::files;
use crate::validation::ensure_valid_path;

/// File name looked up next to the running executable.
pub const DEFAULT_ENVIRONMENT_FILE: &str = "Environment.ini";

const PATH_SUBJECT: &str = "environment file";

/// `<directory of the running executable>/Environment.ini`.
///
/// Falls back to `Environment.ini` in the working directory when the
/// executable location is unknown.
#[must_use]
pub fn default_environment_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_ENVIRONMENT_FILE)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ENVIRONMENT_FILE))
}

/// Options for [`EnvironmentConfig::load`].
#[derive(Debug, Clone, Copy, Builder)]
pub struct LoadOptions {
    /// Create an empty file (and its directory) if none exists.
    #[builder(setters(name = with_create_if_missing), default = false)]
    create_if_missing: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LoadOptions {
    /// Shorthand for `create_if_missing = true`.
    #[must_use]
    pub fn create_if_missing() -> Self {
        Self::builder().with_create_if_missing(true).build()
    }
}

/// Whether the settings have been read from disk.
#[derive(Debug, Clone, Default)]
enum EnvState {
    #[default]
    Unloaded,
    Loaded {
        /// File the cache was read from.
        source: PathBuf,
        document: IniDocument,
    },
}

/// Cached settings from one INI file.
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    path: PathBuf,
    state: EnvState,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentConfig {
    /// Unloaded settings pointing at [`default_environment_path`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: default_environment_path(),
            state: EnvState::Unloaded,
        }
    }

    /// Unloaded settings pointing at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path contains characters invalid on the host.
    pub fn with_path(path: impl Into<PathBuf>) -> Result<Self, EnvError> {
        let mut config = Self::new();
        config.set_path(path)?;
        Ok(config)
    }

    /// The file the next `load()` reads.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Points the next `load()` at another file.
    ///
    /// # Errors
    ///
    /// Returns an error if the path contains characters invalid on the host.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) -> Result<(), EnvError> {
        let path = path.into();
        ensure_valid_path(PATH_SUBJECT, &path.to_string_lossy())?;
        self.path = path;
        Ok(())
    }

    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self.state, EnvState::Loaded { .. })
    }

    /// Reads the configured file, replacing any previous cache.
    ///
    /// A missing file loads as empty settings, or is created empty first
    /// when `options` ask for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created, read or parsed. The
    /// previous cache is kept in that case.
    pub fn load(&mut self, options: LoadOptions) -> Result<LoadedEnvironment<'_>, EnvError> {
        if options.create_if_missing && !files::file_exists(&self.path) {
            self.create_empty_file()?;
        }

        let document = IniDocument::load(&self.path)?;
        debug!(path = %self.path.display(), entries = document.len(), "loaded environment settings");

        self.state = EnvState::Loaded {
            source: self.path.clone(),
            document,
        };
        self.view()
    }

    fn create_empty_file(&self) -> Result<(), EnvError> {
        let create = |path: &Path| -> Result<(), FsError> {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                files::ensure_dir(parent)?;
            }
            files::append_text(path, "")
        };
        create(&self.path).map_err(|source| EnvError::Create {
            path: self.path.display().to_string(),
            source,
        })?;
        debug!(path = %self.path.display(), "created empty environment file");
        Ok(())
    }

    /// The loaded settings.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::NotInitialized`] before the first successful `load()`.
    pub fn view(&self) -> Result<LoadedEnvironment<'_>, EnvError> {
        match &self.state {
            EnvState::Loaded { source, document } => Ok(LoadedEnvironment { source, document }),
            EnvState::Unloaded => Err(self.not_initialized()),
        }
    }

    /// Case-insensitive lookup.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::NotInitialized`] before the first successful `load()`.
    pub fn get(&self, name: &str) -> Result<Option<&str>, EnvError> {
        let EnvState::Loaded { document, .. } = &self.state else {
            return Err(self.not_initialized());
        };
        Ok(document.get_ignore_case(name))
    }

    /// Case-insensitive lookup with a fallback.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::NotInitialized`] before the first successful `load()`.
    pub fn get_or(&self, name: &str, default: &str) -> Result<String, EnvError> {
        Ok(self.get(name)?.unwrap_or(default).to_string())
    }

    /// Case-insensitive lookup parsed into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::NotInitialized`] before the first successful `load()`,
    /// or [`EnvError::InvalidValue`] if the stored text does not parse as `T`.
    pub fn get_as<T>(&self, name: &str) -> Result<Option<T>, EnvError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.get(name)?
            .map(|value| parse_value(name, value))
            .transpose()
    }

    /// Adds `name=value` to the file unless the key is already there, then
    /// replaces the cache with the file's full contents.
    ///
    /// The key is written exactly as given; an existing key keeps its value.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::NotInitialized`] before the first successful `load()`,
    /// or an INI error if the entry cannot be written or the file no longer parses.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), EnvError> {
        let EnvState::Loaded { source, .. } = &self.state else {
            return Err(self.not_initialized());
        };
        let source = source.clone();

        let document = IniDocument::apply(&source, [(name, value)])?;
        debug!(path = %source.display(), name, "stored environment setting");

        self.state = EnvState::Loaded { source, document };
        Ok(())
    }

    fn not_initialized(&self) -> EnvError {
        EnvError::NotInitialized {
            path: self.path.display().to_string(),
        }
    }
}

/// Borrowed view of loaded settings.
#[derive(Debug, Clone, Copy)]
pub struct LoadedEnvironment<'a> {
    source: &'a Path,
    document: &'a IniDocument,
}

impl<'a> LoadedEnvironment<'a> {
    /// File the settings were read from.
    #[must_use]
    pub const fn source(&self) -> &'a Path {
        self.source
    }

    /// Case-insensitive lookup.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.document.get_ignore_case(name)
    }

    #[must_use]
    pub fn get_or(&self, name: &str, default: &'a str) -> &'a str {
        self.get(name).unwrap_or(default)
    }

    /// Case-insensitive lookup parsed into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidValue`] if the stored text does not parse as `T`.
    pub fn get_as<T>(&self, name: &str) -> Result<Option<T>, EnvError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.get(name)
            .map(|value| parse_value(name, value))
            .transpose()
    }

    /// Entries in file order, keys as written.
    #[must_use]
    pub fn entries(&self) -> &'a [Entry] {
        self.document.entries()
    }

    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.document.to_map()
    }
}

fn parse_value<T>(name: &str, value: &str) -> Result<T, EnvError>
where
    T: FromStr,
    T::Err: Display,
{
    value.parse::<T>().map_err(|e| EnvError::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
        message: e.to_string(),
    })
}
