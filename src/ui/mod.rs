// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Interactive menus.
//!
//! ```text
//!   Session<R: BufRead, W: Write, G: GitExecutor>
//!      |
//!      +-- menu      main loop, MainChoice dispatch
//!      +-- status    detailed status, quick status + hints
//!      +-- quick     S C F B R shortcuts
//!      +-- branch commit remote files tags stash stats tools
//!      |
//!      v
//!   run() --> git.execute(args, ctx.dir()) --> CommandOutput
//! ```
//!
//! Input and output are generic so tests drive whole sessions from a byte
//! slice and inspect the rendered text. End of input ends the session: menus
//! return, confirmations read as "no" and no further git command runs.

pub mod branch;
pub mod commit;
pub mod files;
pub mod menu;
pub mod quick;
pub mod remote;
pub mod stash;
pub mod stats;
pub mod status;
pub mod tags;
pub mod theme;
pub mod tools;

#[cfg(test)]
mod tests;

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::sync::OnceLock;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::config::Config;
use crate::git::context::RepoContext;
use crate::git::exec::{CommandOutput, GitExecutor};

use theme::Theme;

/// Output reported for commands skipped after input closed.
pub const INPUT_CLOSED: &str = "input closed";

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// One interactive run of the menus.
pub struct Session<R, W, G> {
    input: R,
    out: W,
    git: G,
    ctx: RepoContext,
    config: Config,
    theme: Theme,
    spinner: bool,
    eof: bool,
}

impl<R: BufRead, W: Write, G: GitExecutor> Session<R, W, G> {
    /// Plain-themed session without spinners.
    pub fn new(input: R, out: W, git: G, ctx: RepoContext, config: Config) -> Self {
        Self {
            input,
            out,
            git,
            ctx,
            config,
            theme: Theme::plain(),
            spinner: false,
            eof: false,
        }
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Shows a spinner while network commands run.
    #[must_use]
    pub fn with_spinner(mut self, enabled: bool) -> Self {
        self.spinner = enabled;
        self
    }

    pub const fn context(&self) -> &RepoContext {
        &self.ctx
    }

    pub const fn git(&self) -> &G {
        &self.git
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// True once input reached end of file.
    pub const fn input_closed(&self) -> bool {
        self.eof
    }

    pub const fn output(&self) -> &W {
        &self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    // --- input ---

    fn read_line(&mut self) -> io::Result<Option<String>> {
        if self.eof {
            return Ok(None);
        }
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.eof = true;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Asks for a value; empty when the user just presses Enter.
    pub(crate) fn prompt(&mut self, label: &str) -> io::Result<String> {
        let label = self.theme.warn(label);
        write!(self.out, "{label}")?;
        self.out.flush()?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    /// Reads a menu choice; `None` at end of input.
    pub(crate) fn choice(&mut self) -> io::Result<Option<String>> {
        let label = self.theme.warn("Choose an option: ");
        write!(self.out, "\n{label}")?;
        self.out.flush()?;
        self.read_line()
    }

    /// Confirmation for destructive actions; yes only for `y` or `Y`.
    pub(crate) fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let question = self.theme.error(&format!("⚠️  {question} (y/N): "));
        self.yes_no(&question)
    }

    /// Plain yes/no question, defaulting to no.
    pub(crate) fn ask(&mut self, question: &str) -> io::Result<bool> {
        let question = self.theme.warn(&format!("{question} (y/N): "));
        self.yes_no(&question)
    }

    fn yes_no(&mut self, rendered: &str) -> io::Result<bool> {
        write!(self.out, "{rendered}")?;
        self.out.flush()?;
        Ok(self
            .read_line()?
            .is_some_and(|answer| answer.eq_ignore_ascii_case("y")))
    }

    pub(crate) fn pause(&mut self) -> io::Result<()> {
        if self.eof {
            return Ok(());
        }
        let label = self.theme.warn("Press Enter to continue...");
        write!(self.out, "\n{label}")?;
        self.out.flush()?;
        self.read_line()?;
        Ok(())
    }

    // --- output ---

    pub(crate) fn clear(&mut self) -> io::Result<()> {
        if self.config.ui.clear_screen {
            write!(self.out, "{CLEAR_SCREEN}")?;
        }
        Ok(())
    }

    pub(crate) fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    pub(crate) fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Prints non-empty command output as is.
    pub(crate) fn show(&mut self, text: &str) -> io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.say(text)
    }

    pub(crate) fn success(&mut self, message: &str) -> io::Result<()> {
        let line = self.theme.ok(&format!("✅ {message}"));
        self.say(line)
    }

    pub(crate) fn failure(&mut self, message: &str) -> io::Result<()> {
        let line = self.theme.error(&format!("❌ {message}"));
        self.say(line)
    }

    pub(crate) fn error_output(&mut self, text: &str) -> io::Result<()> {
        self.failure(&format!("Error: {text}"))
    }

    pub(crate) fn invalid_option(&mut self) -> io::Result<()> {
        self.failure("Invalid option!")?;
        self.pause()
    }

    /// Prints `message` on success or git's diagnostic on failure.
    pub(crate) fn report(&mut self, output: &CommandOutput, message: &str) -> io::Result<bool> {
        if output.succeeded() {
            self.success(message)?;
        } else {
            self.error_output(output.text())?;
        }
        Ok(output.succeeded())
    }

    /// Title line plus a rule of `width` characters.
    pub(crate) fn banner(&mut self, title: &str, width: usize) -> io::Result<()> {
        let title = self.theme.section(title);
        self.say(title)?;
        self.say("═".repeat(width))
    }

    /// Numbered options followed by `0. Back`.
    pub(crate) fn options(&mut self, items: &[&str]) -> io::Result<()> {
        for (index, item) in items.iter().enumerate() {
            writeln!(self.out, "{}. {item}", index + 1)?;
        }
        writeln!(self.out, "0. Back")
    }

    // --- git ---

    /// Runs git in the session directory.
    pub(crate) async fn run(&mut self, args: &[&str]) -> CommandOutput {
        if self.eof {
            debug!(args = ?args, "skipped, input closed");
            return CommandOutput::failed(INPUT_CLOSED);
        }
        self.git.execute(args, self.ctx.dir()).await
    }

    /// Like [`Self::run`] with a spinner on interactive terminals.
    pub(crate) async fn run_network(&mut self, args: &[&str], message: &str) -> CommandOutput {
        let spinner = self.spinner.then(|| {
            let pb = ProgressBar::new_spinner();
            pb.set_style(spinner_style());
            pb.set_message(message.to_string());
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        });
        let output = self.run(args).await;
        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }
        output
    }

    /// Guard for git-dependent actions.
    pub(crate) fn require_repository(&mut self) -> io::Result<bool> {
        if self.ctx.is_repository() {
            return Ok(true);
        }
        self.failure("This directory is not a git repository!")?;
        self.pause()?;
        Ok(false)
    }

    /// `--color` flag matching the theme, for diffs and logs.
    pub(crate) const fn color_flag(&self) -> &'static str {
        if self.theme.has_color() {
            "--color=always"
        } else {
            "--color=never"
        }
    }

    pub(crate) fn is_trunk(&self, branch: &str) -> bool {
        self.config.repo.is_trunk(branch)
    }
}

fn spinner_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::with_template("{spinner:.green} {msg} [{elapsed}]")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        })
        .clone()
}

/// Branch name for display; a detached HEAD has none.
#[must_use]
pub fn display_branch(branch: &str) -> &str {
    if branch.is_empty() {
        "(detached HEAD)"
    } else {
        branch
    }
}

/// Whitespace-separated file names typed by the user.
#[must_use]
pub fn split_names(input: &str) -> Vec<&str> {
    input.split_whitespace().collect()
}

/// Stash index typed by the user; anything unparsable means the latest.
#[must_use]
pub fn stash_ref(input: &str) -> String {
    let index: u32 = input.trim().parse().unwrap_or(0);
    format!("stash@{{{index}}}")
}

/// Commit count typed by the user, falling back to `default`.
#[must_use]
pub fn parse_count(input: &str, default: u32) -> u32 {
    input
        .trim()
        .parse()
        .ok()
        .filter(|&n| n > 0)
        .unwrap_or(default)
}
