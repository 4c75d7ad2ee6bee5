// principium: Application Storage & Environment Settings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! INI-like documents: parsing and append-only updates.
//!
//! # Format
//!
//! ```text
//! <BOM>                stripped from the start of the text
//! (blank)              skipped, not malformed
//! # comment            skipped
//! ; comment            skipped
//! [section]            skipped (no nesting)
//! key = value          split on first '=', both sides trimmed
//! key = "a=b"          one pair of quotes stripped -> a=b
//! key = "open          UnterminatedQuote
//! key twice            DuplicateKey
//! no equals sign       MalformedLine
//! ```
//!
//! # Update
//!
//! ```text
//! apply(path, updates)
//!   parse current file
//!   key present?  yes -> line left untouched
//!                 no  -> append "key=value"
//!   return current + appended
//! ```

mod parser;


use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::{FsError, IniError};
use crate::utility::fs::files;

/// Origin reported in errors for documents parsed from a string.
const STRING_ORIGIN: &str = "<string>";

/// One `key=value` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    key: String,
    value: String,
    /// 1-based source line.
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
}

impl Entry {
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The value with enclosing quotes already stripped.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        self.line
    }
}

/// An ordered key/value view of an INI file plus its raw lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    lines: Vec<String>,
    entries: Vec<Entry>,
}

impl IniDocument {
    /// Parses INI text.
    ///
    /// # Errors
    ///
    /// Returns an [`IniError`] for a duplicate key, an unterminated quoted
    /// value or a line that is not an entry, comment or section header.
    pub fn parse(text: &str) -> Result<Self, IniError> {
        parser::parse_document(text, STRING_ORIGIN)
    }

    /// Loads and parses a file. A missing file is an empty document.
    ///
    /// # Errors
    ///
    /// Returns an [`IniError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, IniError> {
        let text = read_source(path)?;
        let document = parser::parse_document(&text, &path.display().to_string())?;
        debug!(path = %path.display(), entries = document.len(), "loaded ini document");
        Ok(document)
    }

    /// Appends every update whose key is not in the file yet.
    ///
    /// Existing lines are never rewritten, so updating a key that is already
    /// present has no effect. Keys and values are trimmed and written raw.
    /// The file is created if it does not exist.
    ///
    /// Returns the file's entries followed by the appended ones.
    ///
    /// # Errors
    ///
    /// Returns an [`IniError`] if an update cannot be written as a single
    /// entry line, or if the file cannot be read, parsed or appended to.
    /// Nothing is written when validation or parsing fails.
    pub fn apply<I, K, V>(path: &Path, updates: I) -> Result<Self, IniError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let updates = updates
            .into_iter()
            .map(|(key, value)| {
                let (key, value) = (key.as_ref().trim(), value.as_ref().trim());
                parser::validate_update(key, value)?;
                Ok((key.to_string(), value.to_string()))
            })
            .collect::<Result<Vec<_>, IniError>>()?;

        let text = read_source(path)?;
        let mut document = parser::parse_document(&text, &path.display().to_string())?;

        let mut pending = String::new();
        for (key, value) in updates {
            if document.contains_key(&key) {
                continue;
            }
            let line = format!("{key}={value}");
            pending.push_str(&line);
            pending.push('\n');
            document.push_appended(line, key, value);
        }

        if pending.is_empty() {
            return Ok(document);
        }
        if !text.is_empty() && !text.ends_with('\n') {
            pending.insert(0, '\n');
        }
        files::append_text(path, &pending).map_err(|source| IniError::Write {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), entries = document.len(), "appended ini entries");

        Ok(document)
    }

    fn push_appended(&mut self, line: String, key: String, value: String) {
        self.lines.push(line);
        let line = Some(self.lines.len());
        let value = parser::unquote(&value).unwrap_or(&value).to_string();
        self.entries.push(Entry { key, value, line });
    }

    /// Case-sensitive lookup.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(Entry::value)
    }

    /// Case-insensitive lookup; the first matching entry wins.
    #[must_use]
    pub fn get_ignore_case(&self, key: &str) -> Option<&str> {
        let wanted = key.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.key.to_lowercase() == wanted)
            .map(Entry::value)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    /// Entries in file order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Entry::key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw source lines, comments and section headers included.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|e| (e.key.clone(), e.value.clone()))
            .collect()
    }
}

impl fmt::Display for IniDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

fn read_source(path: &Path) -> Result<String, IniError> {
    match files::read_text(path) {
        Ok(text) => Ok(text),
        Err(FsError::NotFound(_)) => Ok(String::new()),
        Err(source) => Err(IniError::Read {
            path: path.display().to_string(),
            source,
        }),
    }
}
