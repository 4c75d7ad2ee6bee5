// principium: Application Storage & Environment Settings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          PrincipiumError (~24 bytes)
//!                     |
//!   +--------+--------+-------+------+
//!   |        |        |       |      |
//!   v        v        v       v      v
//! Bail  Validation   Ini     Env     Fs
//!          Box       Box     Box    Box
//!
//! Sub-errors (unboxed internally):
//!   Validation  Empty, InvalidCharacter, NotRelative
//!   Ini         DuplicateKey, UnterminatedQuote, MalformedLine,
//!               InvalidEntry, Read, Write
//!   Env         NotInitialized, InvalidValue, Ini, Validation, Create
//!   Fs          NotFound, PermissionDenied, IoError
//!   Read        InvalidName, Fs  (VariableStore soft-fail cause)
//! ```

use std::path::Path;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`PrincipiumError`].
pub type PrincipiumResult<T> = std::result::Result<T, PrincipiumError>;

/// Top-level library error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum PrincipiumError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// A name or path was rejected before any I/O.
    #[error("validation error: {0}")]
    Validation(#[from] Box<ValidationError>),

    /// INI parse or update error.
    #[error("ini error: {0}")]
    Ini(#[from] Box<IniError>),

    /// Environment settings error.
    #[error("environment error: {0}")]
    Env(#[from] Box<EnvError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),
}

/// Create a fatal [`PrincipiumError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> PrincipiumError {
    PrincipiumError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for PrincipiumError {
                fn from(err: $error) -> Self {
                    PrincipiumError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ValidationError => Validation,
    IniError => Ini,
    EnvError => Env,
    FsError => Fs,
}

// --- Validation Errors ---

/// A key, file name or path segment the host would not accept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The name is empty.
    #[error("{subject} cannot be empty")]
    Empty { subject: &'static str },

    /// The name contains a character the host disallows.
    #[error("{subject} '{value}' contains invalid character {character:?}")]
    InvalidCharacter {
        subject: &'static str,
        value: String,
        character: char,
    },

    /// The path would escape its parent instead of nesting under it.
    #[error("{subject} '{value}' must be a relative path")]
    NotRelative { subject: &'static str, value: String },
}

// --- INI Errors ---

/// Errors raised while parsing or updating an INI document.
///
/// `origin` is the file path, or `<string>` for in-memory text.
#[derive(Debug, Error)]
pub enum IniError {
    /// The same key appears twice in one document.
    #[error("{origin}:{line}: duplicate key '{key}'")]
    DuplicateKey {
        origin: String,
        line: usize,
        key: String,
    },

    /// A value opens a double quote but never closes it.
    #[error("{origin}:{line}: quoted value for '{key}' must end with a quote")]
    UnterminatedQuote {
        origin: String,
        line: usize,
        key: String,
    },

    /// A line that is neither a comment, a section header nor `key=value`.
    #[error("{origin}:{line}: expected 'key=value', found '{content}'")]
    MalformedLine {
        origin: String,
        line: usize,
        content: String,
    },

    /// An update that cannot be written as a single entry line.
    #[error("cannot write entry '{key}': {message}")]
    InvalidEntry { key: String, message: String },

    /// Failed to read the INI file.
    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: FsError,
    },

    /// Failed to append to the INI file.
    #[error("failed to write '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: FsError,
    },
}

impl IniError {
    /// Line number the error refers to, if it came from parsing.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::DuplicateKey { line, .. }
            | Self::UnterminatedQuote { line, .. }
            | Self::MalformedLine { line, .. } => Some(*line),
            Self::InvalidEntry { .. } | Self::Read { .. } | Self::Write { .. } => None,
        }
    }
}

// --- Environment Errors ---

/// Errors raised by [`crate::env::EnvironmentConfig`].
#[derive(Debug, Error)]
pub enum EnvError {
    /// A read happened before the first successful `load()`.
    #[error("environment settings '{path}' not loaded; call load() first")]
    NotInitialized { path: String },

    /// A stored value could not be converted to the requested type.
    #[error("invalid value for '{name}': '{value}' ({message})")]
    InvalidValue {
        name: String,
        value: String,
        message: String,
    },

    /// The environment file could not be created.
    #[error("failed to create environment file '{path}': {source}")]
    Create {
        path: String,
        #[source]
        source: FsError,
    },

    /// The environment file path was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The environment file could not be parsed or updated.
    #[error(transparent)]
    Ini(#[from] IniError),
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// Permission denied.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Classify an I/O error raised while touching `path`.
    #[must_use]
    pub fn from_io(path: &Path, source: std::io::Error) -> Self {
        let display = path.display().to_string();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(display),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(display),
            _ => Self::IoError {
                path: display,
                source,
            },
        }
    }

    /// Whether the error means the path does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

// --- Variable Read Errors ---

/// Why a [`crate::storage::VariableStore`] read produced no value.
///
/// The soft-fail accessors collapse every variant into "use the default";
/// the `try_*` accessors hand it to the caller.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The variable name failed validation.
    #[error(transparent)]
    InvalidName(#[from] ValidationError),

    /// The backing file could not be read.
    #[error(transparent)]
    Fs(#[from] FsError),
}

impl ReadError {
    /// Whether the variable simply does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Fs(fs) if fs.is_not_found())
    }
}
