// principium: Application Storage & Environment Settings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! ```text
//! --storage DIR     ← variable store prefix (default: ./Storage)
//! --sub PATH        ← descend into a sub-store (can repeat)
//! --env-file FILE   ← environment settings file
//!                     (default: <exe dir>/Environment.ini)
//! --log-level N     ← console verbosity (0-6)
//! --file-log-level  ← log file verbosity (default: 5, trace)
//! --log-file FILE   ← also log to FILE
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::logging::{LogConfig, LogLevel};

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Directory holding the variable store.
    #[arg(short = 's', long = "storage", value_name = "DIR", global = true)]
    pub storage: Option<PathBuf>,

    /// Sub-store inside the storage directory.
    /// Can be specified multiple times to descend further.
    #[arg(long = "sub", value_name = "PATH", action = clap::ArgAction::Append, global = true)]
    pub sub_stores: Vec<PathBuf>,

    /// Environment settings file.
    #[arg(short = 'e', long = "env-file", value_name = "FILE", global = true)]
    pub env_file: Option<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", global = true, value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// Log file level, independent of --log-level.
    #[arg(long = "file-log-level", value_name = "LEVEL", global = true, value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Logging setup requested by the level and log file flags.
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        let console_level = self
            .log_level
            .and_then(LogLevel::from_u8)
            .unwrap_or_default();

        let file_level = self
            .file_log_level
            .and_then(LogLevel::from_u8)
            .unwrap_or(LogLevel::TRACE);

        LogConfig::builder()
            .with_console_level(console_level)
            .with_file_level(file_level)
            .maybe_with_log_file(self.log_file.as_ref().map(|p| p.display().to_string()))
            .build()
    }
}
