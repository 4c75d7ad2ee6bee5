// principium: Application Storage & Environment Settings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Line classification and the single-pass document parser.

use std::collections::HashSet;

use super::{Entry, IniDocument};
use crate::error::IniError;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// What a single source line holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Line<'a> {
    Blank,
    Comment,
    Section,
    Entry { key: &'a str, raw_value: &'a str },
    Malformed,
}

pub(super) fn classify(line: &str) -> Line<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Line::Blank;
    }
    if trimmed.starts_with(['#', ';']) {
        return Line::Comment;
    }
    if trimmed.starts_with('[') {
        return Line::Section;
    }
    match trimmed.split_once('=') {
        Some((key, raw_value)) if !key.trim().is_empty() => Line::Entry {
            key: key.trim(),
            raw_value: raw_value.trim(),
        },
        _ => Line::Malformed,
    }
}

/// Strips one pair of enclosing double quotes.
///
/// Returns `None` when the value opens a quote it never closes.
pub(super) fn unquote(raw_value: &str) -> Option<&str> {
    if !raw_value.starts_with('"') {
        return Some(raw_value);
    }
    if raw_value.len() >= 2 && raw_value.ends_with('"') {
        Some(&raw_value[1..raw_value.len() - 1])
    } else {
        None
    }
}

/// Parses `text` top to bottom. Any malformed line aborts the whole parse.
///
/// A leading UTF-8 byte order mark is ignored.
pub(super) fn parse_document(text: &str, origin: &str) -> Result<IniDocument, IniError> {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    let mut document = IniDocument::default();
    let mut seen = HashSet::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;

        match classify(raw) {
            Line::Blank | Line::Comment | Line::Section => {}
            Line::Malformed => {
                return Err(IniError::MalformedLine {
                    origin: origin.to_string(),
                    line,
                    content: raw.trim().to_string(),
                });
            }
            Line::Entry { key, raw_value } => {
                let value = unquote(raw_value).ok_or_else(|| IniError::UnterminatedQuote {
                    origin: origin.to_string(),
                    line,
                    key: key.to_string(),
                })?;

                if !seen.insert(key) {
                    return Err(IniError::DuplicateKey {
                        origin: origin.to_string(),
                        line,
                        key: key.to_string(),
                    });
                }

                document.entries.push(Entry {
                    key: key.to_string(),
                    value: value.to_string(),
                    line: Some(line),
                });
            }
        }

        document.lines.push(raw.to_string());
    }

    Ok(document)
}

/// Checks that an update can be written as one `key=value` line that
/// parses back to the same entry.
pub(super) fn validate_update(key: &str, value: &str) -> Result<(), IniError> {
    let invalid = |message: &str| IniError::InvalidEntry {
        key: key.to_string(),
        message: message.to_string(),
    };

    if key.is_empty() {
        return Err(invalid("key cannot be empty"));
    }
    if key.contains('=') {
        return Err(invalid("key cannot contain '='"));
    }
    if key.contains(['\n', '\r']) || value.contains(['\n', '\r']) {
        return Err(invalid("entries cannot span multiple lines"));
    }
    if key.starts_with(['#', ';', '[']) {
        return Err(invalid("key would be read as a comment or section header"));
    }
    if unquote(value).is_none() {
        return Err(invalid("value opens a quote it never closes"));
    }
    Ok(())
}
