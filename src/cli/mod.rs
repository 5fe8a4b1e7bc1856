// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for gitman using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! gitman [global options] [command]
//! (none)            interactive menu
//! status [--json]   one-shot repository summary
//! version
//! ```

pub mod global;
pub mod status;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::status::StatusArgs;
use clap::{Parser, Subcommand};

/// Menu-driven terminal front-end for git.
#[derive(Debug, Parser)]
#[command(
    name = "gitman",
    author,
    version,
    about = "Menu-driven terminal front-end for git",
    long_about = "gitman Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Run `gitman` inside a repository to open the interactive menu.\n\
                  Letters S, C, F, B and R jump to the quick actions; numbers open\n\
                  the full menus. `gitman status` prints a summary and exits.",
    after_help = "CONFIGURATION:\n\n\
                  Settings are read from built-in defaults, then `gitman.toml` in the\n\
                  start directory, then each --config file in order, then GITMAN_*\n\
                  environment variables (e.g. GITMAN_GIT__TIMEOUT_SECS=30), then the\n\
                  command-line flags."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute; the interactive menu when absent
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prints the repository status and suggestions, then exits.
    Status(StatusArgs),

    /// Shows the version.
    Version,
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

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
