// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use clap::Args;

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, Args)]
pub struct StatusArgs {
    /// Prints the snapshot, counts and suggestions as JSON.
    #[arg(long)]
    pub json: bool,
}
