// principium: Application Storage & Environment Settings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for principium using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! principium [global options] <command>
//! var {get|set|remove|append|list|modified}
//! env {get|set|list|init}
//! version
//! ```

pub mod env;
pub mod global;
pub mod var;


use crate::cli::env::EnvArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::var::VarArgs;
use clap::{Parser, Subcommand};

/// Application storage and environment settings.
///
/// Reads and writes file-backed variables and INI environment settings.
#[derive(Debug, Parser)]
#[command(
    name = "principium",
    author,
    version,
    about = "Application storage and environment settings",
    long_about = "principium Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Reads and writes the variables of an application storage\n\
                  directory and the entries of its INI environment file.",
    after_help = "STORAGE:\n\n\
                  Every variable is one file named after the variable inside the\n\
                  storage directory. `var append` adds one line per call.\n\n\
                  ENVIRONMENT FILE:\n\n\
                  `key=value` lines; lines starting with # or ; are comments and\n\
                  [section] lines are ignored. `env set` only adds settings that\n\
                  are not in the file yet, it never rewrites existing lines."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Reads and writes storage variables.
    Var(VarArgs),

    /// Reads and writes environment settings.
    Env(EnvArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}
