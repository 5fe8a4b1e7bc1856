// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! -C DIR            ← start directory
//! -c FILE           ← additional config files (can repeat)
//! -t SECS           ← git.timeout_secs override
//! --no-color        ← ui.color = false
//! --no-clear        ← ui.clear_screen = false
//! --log-level N     ← console verbosity (0-6)
//! --file-log-level  ← file verbosity
//! --log-file FILE   ← also log to FILE
//!
//! Precedence: CLI flags > GITMAN_* > --config > gitman.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::loader::ConfigLoader;
use crate::error::Result;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Directory to start in instead of the current one.
    #[arg(short = 'C', long = "directory", value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times; later files win.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Timeout for local git commands, in seconds (0 disables it).
    #[arg(short = 't', long = "timeout", value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Disables colors.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Keeps previous output instead of clearing the screen between menus.
    #[arg(long = "no-clear")]
    pub no_clear: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, defaults to trace.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Applies the flags that override configuration keys.
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be stored.
    pub fn apply_overrides(&self, mut loader: ConfigLoader) -> Result<ConfigLoader> {
        if let Some(secs) = self.timeout {
            loader = loader.set("git.timeout_secs", secs)?;
        }
        if self.no_color {
            loader = loader.set("ui.color", false)?;
        }
        if self.no_clear {
            loader = loader.set("ui.clear_screen", false)?;
        }
        Ok(loader)
    }
}
