// principium: Application Storage & Environment Settings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Command Dispatch
//!   Var | Env | Version
//! ```

use std::io::Write;
use std::process::ExitCode;

use principium::cli::{self, Command};
use principium::cmd::env::run_env_command;
use principium::cmd::var::run_var_command;
use principium::cmd::{open_environment, open_store};
use principium::logging::init_logging;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = cli.global.log_config();
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli)
}

fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let mut stdout = std::io::stdout().lock();

    let result = match &cli.command {
        Some(Command::Version) => {
            writeln!(stdout, "{}", env!("CARGO_PKG_VERSION")).map_err(anyhow::Error::from)
        }
        Some(Command::Var(args)) => {
            open_store(&cli.global).and_then(|store| run_var_command(args, &store, &mut stdout))
        }
        Some(Command::Env(args)) => open_environment(&cli.global)
            .and_then(|mut config| run_env_command(args, &mut config, &mut stdout)),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
