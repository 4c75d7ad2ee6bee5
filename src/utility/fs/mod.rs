// principium: Application Storage & Environment Settings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Synchronous filesystem helpers with classified errors.
//!
//! ```text
//! files:  read_text()  write_text()  append_text() / append_line()
//!         remove_file_if_exists()    ensure_dir()
//!         list_files()  modified_time()  file_exists()
//!
//! io::ErrorKind --> FsError
//!   NotFound          NotFound(path)
//!   PermissionDenied  PermissionDenied(path)
//!   _                 IoError { path, source }
//! ```

pub mod files;
