// principium: Application Storage & Environment Settings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment settings command implementation.

use std::io::Write;

use tracing::warn;

use crate::cli::env::{EnvArgs, EnvSubcommand};
use crate::env::{EnvironmentConfig, LoadOptions};
use crate::error::{Result, bail_out};

/// Main handler for the env command.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or updated, or a setting is
/// missing without a default.
pub fn run_env_command(
    args: &EnvArgs,
    config: &mut EnvironmentConfig,
    out: &mut impl Write,
) -> Result<()> {
    match &args.subcommand {
        EnvSubcommand::Init => {
            let view = config.load(LoadOptions::create_if_missing())?;
            writeln!(out, "{}", view.source().display())?;
        }
        EnvSubcommand::Get(get) => {
            let view = config.load(LoadOptions::default())?;
            let Some(value) = view.get(&get.name).or(get.default.as_deref()) else {
                return Err(bail_out(format!("setting '{}' not found", get.name)).into());
            };
            writeln!(out, "{value}")?;
        }
        EnvSubcommand::Set(set) => {
            config.load(LoadOptions::default())?;
            config.set(&set.name, &set.value)?;
            let view = config.view()?;
            if let Some(entry) = view.entries().iter().find(|e| e.key() == set.name.trim())
                && entry.value() != set.value.trim()
            {
                warn!(
                    name = %set.name,
                    kept = entry.value(),
                    "setting already present, existing value kept"
                );
            }
        }
        EnvSubcommand::List(list) => {
            let view = config.load(LoadOptions::default())?;
            if list.json {
                writeln!(out, "{}", serde_json::to_string_pretty(view.entries())?)?;
            } else {
                for entry in view.entries() {
                    writeln!(out, "{}={}", entry.key(), entry.value())?;
                }
            }
        }
    }
    Ok(())
}
