// principium: Application Storage & Environment Settings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Variable store command implementation.

use std::io::Write;
use std::time::UNIX_EPOCH;

use anyhow::Context;

use crate::cli::var::{VarArgs, VarSubcommand};
use crate::error::{Result, bail_out};
use crate::storage::VariableStore;

/// Main handler for the var command.
///
/// # Errors
///
/// Returns an error if a variable is missing without a default, a key is
/// invalid, or the store cannot be written.
pub fn run_var_command(args: &VarArgs, store: &VariableStore, out: &mut impl Write) -> Result<()> {
    match &args.subcommand {
        VarSubcommand::Get(get) => {
            let Some(value) = store.get(&get.key, get.default.as_deref()) else {
                return Err(bail_out(format!("variable '{}' not found", get.key)).into());
            };
            write!(out, "{value}")?;
            if !value.ends_with('\n') {
                writeln!(out)?;
            }
        }
        VarSubcommand::Set(set) => store.set(&set.key, set.value.as_deref())?,
        VarSubcommand::Remove(remove) => store.remove(&remove.key)?,
        VarSubcommand::Append(append) => store.append(&append.key, &append.value)?,
        VarSubcommand::List(list) => {
            let keys = store.list_keys()?;
            if list.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&keys)?)?;
            } else {
                for key in &keys {
                    writeln!(out, "{key}")?;
                }
            }
        }
        VarSubcommand::Modified(modified) => {
            let time = store
                .try_last_modified(&modified.key)
                .with_context(|| format!("no modification time for '{}'", modified.key))?;
            let secs = time
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default();
            writeln!(out, "{secs}")?;
        }
    }
    Ok(())
}
