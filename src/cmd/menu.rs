// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Interactive menu on the process's terminal.

use std::io::IsTerminal;

use anyhow::Context;
use tracing::{info, warn};

use crate::config::Config;
use crate::core::interrupt::Interrupter;
use crate::error::Result;
use crate::git::context::RepoContext;
use crate::git::exec::ShellGit;
use crate::ui::Session;
use crate::ui::theme::Theme;

/// Exit status after Ctrl-C at the menu prompt.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Runs the menu on stdin/stdout until the user quits.
///
/// Ctrl-C cancels the running git command; with no command running it
/// exits with [`INTERRUPTED_EXIT_CODE`].
///
/// # Errors
///
/// Returns an error if the terminal cannot be read or written.
pub async fn run_menu_command(config: Config, ctx: RepoContext) -> Result<()> {
    let interrupter = Interrupter::new();
    spawn_interrupt_handler(interrupter.clone());

    let git = ShellGit::new(&config.git).with_interrupter(interrupter);
    let theme = Theme::detect(config.ui.color);
    let spinner = std::io::stderr().is_terminal();
    info!(dir = %ctx.dir().display(), color = theme.has_color(), "starting menu");

    let stdin = std::io::stdin();
    let mut session = Session::new(stdin.lock(), std::io::stdout(), git, ctx, config)
        .with_theme(theme)
        .with_spinner(spinner);
    session.run_menu().await.context("terminal I/O failed")
}

fn spawn_interrupt_handler(interrupter: Interrupter) {
    tokio::spawn(async move {
        while tokio::signal::ctrl_c().await.is_ok() {
            if interrupter.interrupt() {
                warn!("git command interrupted");
            } else {
                info!("interrupted at the prompt, exiting");
                println!();
                std::process::exit(INTERRUPTED_EXIT_CODE);
            }
        }
    });
}
