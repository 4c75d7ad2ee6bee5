// principium: Application Storage & Environment Settings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Host name validation for variable keys and storage paths.
//!
//! ```text
//!                 path chars            file-name chars
//! Unix            NUL                   NUL /
//! Windows         " < > | NUL 1..=31    path chars + : * ? \ /
//! ```
//!
//! Names are rejected, never sanitized.

use std::path::{Component, Path};

use crate::error::ValidationError;

#[cfg(windows)]
const INVALID_PATH_CHARS: &[char] = &['"', '<', '>', '|', '\0'];

#[cfg(not(windows))]
const INVALID_PATH_CHARS: &[char] = &['\0'];

#[cfg(windows)]
const INVALID_FILE_NAME_CHARS: &[char] = &['"', '<', '>', '|', '\0', ':', '*', '?', '\\', '/'];

#[cfg(not(windows))]
const INVALID_FILE_NAME_CHARS: &[char] = &['\0', '/'];

/// Control characters are invalid in any Windows name.
const fn is_host_control(c: char) -> bool {
    cfg!(windows) && matches!(c, '\u{1}'..='\u{1f}')
}

fn invalid_path_char(value: &str) -> Option<char> {
    value
        .chars()
        .find(|c| INVALID_PATH_CHARS.contains(c) || is_host_control(*c))
}

fn invalid_file_name_char(value: &str) -> Option<char> {
    value
        .chars()
        .find(|c| INVALID_FILE_NAME_CHARS.contains(c) || is_host_control(*c))
}

/// Whether `value` contains only characters the host accepts in a path.
///
/// Directory separators are allowed.
#[must_use]
pub fn is_valid_path_segment(value: &str) -> bool {
    invalid_path_char(value).is_none()
}

/// Whether `value` contains only characters the host accepts in a file name.
#[must_use]
pub fn is_valid_file_name(value: &str) -> bool {
    invalid_file_name_char(value).is_none()
}

/// Validates a path, naming the offending character on failure.
///
/// # Errors
///
/// Returns [`ValidationError`] if the path is empty or contains an invalid character.
pub fn ensure_valid_path(subject: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty { subject });
    }
    match invalid_path_char(value) {
        Some(character) => Err(ValidationError::InvalidCharacter {
            subject,
            value: value.to_string(),
            character,
        }),
        None => Ok(()),
    }
}

/// Validates a file name, naming the offending character on failure.
///
/// # Errors
///
/// Returns [`ValidationError`] if the name is empty or contains an invalid character.
pub fn ensure_valid_file_name(subject: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty { subject });
    }
    match invalid_file_name_char(value) {
        Some(character) => Err(ValidationError::InvalidCharacter {
            subject,
            value: value.to_string(),
            character,
        }),
        None => Ok(()),
    }
}

/// Validates a path that must nest under another directory.
///
/// Rejects anything carrying a root or drive prefix, since `Path::join`
/// replaces the base with such a path.
///
/// # Errors
///
/// Returns [`ValidationError`] if the path is empty, contains an invalid
/// character, or is not relative.
pub fn ensure_relative_path(subject: &'static str, path: &Path) -> Result<(), ValidationError> {
    let value = path.to_string_lossy();
    ensure_valid_path(subject, &value)?;
    if path
        .components()
        .any(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
    {
        return Err(ValidationError::NotRelative {
            subject,
            value: value.into_owned(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests;
