// principium: Application Storage & Environment Settings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment settings command arguments.
//!
//! ```text
//! env get NAME [-d DEFAULT]   case-insensitive lookup
//! env set NAME VALUE          append if NAME is new
//! env list [--json]           entries in file order
//! env init                    create the file if missing
//! ```

use clap::{Args, Subcommand};

use super::var::ListFormatArgs;

/// Arguments for the `env` command.
#[derive(Debug, Clone, Args)]
pub struct EnvArgs {
    /// Environment subcommand.
    #[command(subcommand)]
    pub subcommand: EnvSubcommand,
}

/// Environment subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum EnvSubcommand {
    /// Prints a setting (name matched case-insensitively).
    Get(EnvGetArgs),

    /// Adds a setting to the file. Existing settings are left unchanged.
    Set(EnvSetArgs),

    /// Lists all settings.
    List(ListFormatArgs),

    /// Creates an empty environment file if none exists.
    Init,
}

/// Arguments for `env get`.
#[derive(Debug, Clone, Args)]
pub struct EnvGetArgs {
    /// Setting name.
    pub name: String,

    /// Value to print when the setting is absent.
    #[arg(short = 'd', long = "default", value_name = "VALUE")]
    pub default: Option<String>,
}

/// Arguments for `env set`.
#[derive(Debug, Clone, Args)]
pub struct EnvSetArgs {
    /// Setting name, written as given.
    pub name: String,

    /// Setting value.
    pub value: String,
}
