// principium: Application Storage & Environment Settings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |                  var / env
//!                +----------+----------+
//!                           |
//!              +------------+------------+
//!              v                         v
//!         storage                       env
//!      VariableStore            EnvironmentConfig
//!    one file per key         Unloaded | Loaded(doc)
//!              |                         |
//!              |                         v
//!              |                        ini
//!              |                    IniDocument
//!              |              parse / load / apply
//!              +------------+------------+
//!                           v
//!   +-----------------------------------------+
//!   |  validation   host-invalid name chars   |
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod env;
pub mod error;
pub mod ini;
pub mod logging;
pub mod storage;
pub mod utility;
pub mod validation;
