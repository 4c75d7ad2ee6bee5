// principium: Application Storage & Environment Settings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! GlobalOptions --> open_store() / open_environment()
//!                         |
//!                         v
//!           cmd::run_* handlers (write to `out`)
//!                     var, env
//! ```

pub mod env;
pub mod var;

use crate::cli::global::GlobalOptions;
use crate::env::EnvironmentConfig;
use crate::error::Result;
use crate::storage::VariableStore;

/// Opens the variable store selected by `--storage` and `--sub`.
///
/// # Errors
///
/// Returns an error if a path fails validation or the working directory is unknown.
pub fn open_store(global: &GlobalOptions) -> Result<VariableStore> {
    let mut store = match &global.storage {
        Some(prefix) => VariableStore::new(prefix)?,
        None => VariableStore::with_default_prefix()?,
    };
    for sub in &global.sub_stores {
        store = store.sub_store(sub)?;
    }
    Ok(store)
}

/// Creates unloaded environment settings for `--env-file`.
///
/// # Errors
///
/// Returns an error if the path fails validation.
pub fn open_environment(global: &GlobalOptions) -> Result<EnvironmentConfig> {
    Ok(match &global.env_file {
        Some(path) => EnvironmentConfig::with_path(path)?,
        None => EnvironmentConfig::new(),
    })
}
