// principium: Application Storage & Environment Settings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Variable store command arguments.
//!
//! # Subcommands
//!
//! ```text
//! var get KEY [-d DEFAULT]   → print value (or default)
//! var set KEY [VALUE]        → overwrite; no VALUE deletes
//! var remove KEY             → delete
//! var append KEY VALUE       → add one trimmed line
//! var list [--json]          → stored keys
//! var modified KEY           → last write time (unix seconds)
//! ```

use clap::{Args, Subcommand};

/// Arguments for the `var` command.
#[derive(Debug, Clone, Args)]
pub struct VarArgs {
    /// Variable subcommand.
    #[command(subcommand)]
    pub subcommand: VarSubcommand,
}

/// Variable subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum VarSubcommand {
    /// Prints a variable's value.
    Get(VarGetArgs),

    /// Stores a value; omitting VALUE deletes the variable.
    Set(VarSetArgs),

    /// Deletes a variable.
    #[command(visible_alias = "rm")]
    Remove(VarKeyArgs),

    /// Appends one line to a variable, creating it if needed.
    Append(VarAppendArgs),

    /// Lists stored variable names.
    List(ListFormatArgs),

    /// Prints when a variable was last written.
    Modified(VarKeyArgs),
}

/// Arguments for `var get`.
#[derive(Debug, Clone, Args)]
pub struct VarGetArgs {
    /// Variable name.
    pub key: String,

    /// Value to print when the variable cannot be read.
    #[arg(short = 'd', long = "default", value_name = "VALUE")]
    pub default: Option<String>,
}

/// Arguments for `var set`.
#[derive(Debug, Clone, Args)]
pub struct VarSetArgs {
    /// Variable name.
    pub key: String,

    /// Value to store, written exactly as given.
    pub value: Option<String>,
}

/// Arguments naming a single variable.
#[derive(Debug, Clone, Args)]
pub struct VarKeyArgs {
    /// Variable name.
    pub key: String,
}

/// Arguments for `var append`.
#[derive(Debug, Clone, Args)]
pub struct VarAppendArgs {
    /// Variable name.
    pub key: String,

    /// Line to append (surrounding whitespace is trimmed).
    pub value: String,
}

/// Output format for listing commands.
#[derive(Debug, Clone, Default, Args)]
pub struct ListFormatArgs {
    /// Print JSON instead of one item per line.
    #[arg(long)]
    pub json: bool,
}
