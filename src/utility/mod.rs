// principium: Application Storage & Environment Settings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! fs
//!   files: read/write/append text, remove, ensure_dir,
//!          list_files(), modified_time()
//! ```

pub mod fs;
