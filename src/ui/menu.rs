// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Main menu.

use std::io::{self, BufRead, Write};

use tracing::info;

use crate::git::exec::GitExecutor;
use crate::git::snapshot::{current_branch, staged_files, status_entries};
use crate::git::status::FileCounts;

use super::Session;
use super::status::{quick_hints, quick_status_line};

/// Entry selected on the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    Status,
    QuickCommit,
    QuickFiles,
    QuickBranch,
    QuickRemote,
    Branches,
    Commits,
    Remotes,
    Files,
    Tags,
    Stash,
    Statistics,
    Tools,
    ChangeDirectory,
    InitRepository,
    Quit,
}

impl MainChoice {
    /// Parses one token; letters are case-insensitive.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let choice = match input.trim().to_ascii_uppercase().as_str() {
            "S" | "1" => Self::Status,
            "C" => Self::QuickCommit,
            "F" => Self::QuickFiles,
            "B" => Self::QuickBranch,
            "R" => Self::QuickRemote,
            "2" => Self::Branches,
            "3" => Self::Commits,
            "4" => Self::Remotes,
            "5" => Self::Files,
            "6" => Self::Tags,
            "7" => Self::Stash,
            "8" => Self::Statistics,
            "9" => Self::Tools,
            "10" => Self::ChangeDirectory,
            "11" => Self::InitRepository,
            "0" => Self::Quit,
            _ => return None,
        };
        Some(choice)
    }
}

const QUICK_ENTRIES: [(&str, &str); 5] = [
    ("S", "📊 Detailed status"),
    ("C", "📦 Commits (new/history)"),
    ("F", "📁 Files (add/diff)"),
    ("B", "🌿 Branches (create/switch)"),
    ("R", "🔄 Remote (push/pull)"),
];

const FULL_ENTRIES: [(&str, &str); 11] = [
    ("1", "📊 Detailed repository status"),
    ("2", "🌿 Branch management"),
    ("3", "📦 Commit management"),
    ("4", "🔄 Remote management"),
    ("5", "📁 File management"),
    ("6", "🏷️  Tag management"),
    ("7", "🗂️  Stash management"),
    ("8", "📈 Statistics and logs"),
    ("9", "🔧 Tools and configuration"),
    ("10", "📂 Change directory"),
    ("11", "🚀 Initialize a new repository"),
];

impl<R: BufRead, W: Write, G: GitExecutor> Session<R, W, G> {
    /// Runs the main menu until `0` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error only when the terminal cannot be read or written.
    pub async fn run_menu(&mut self) -> io::Result<()> {
        while !self.input_closed() {
            self.clear()?;
            self.render_main_menu().await?;

            let Some(input) = self.read_line()? else {
                break;
            };
            match MainChoice::parse(&input) {
                Some(MainChoice::Quit) => {
                    self.say("👋 Goodbye!")?;
                    break;
                }
                Some(choice) => self.dispatch(choice).await?,
                None => {
                    self.failure(
                        "Invalid option! Use the numbers (0-11) or the letters (S, C, F, B, R)",
                    )?;
                    self.pause()?;
                }
            }
        }
        Ok(())
    }

    /// Runs the action behind a main menu entry.
    ///
    /// # Errors
    ///
    /// Returns an error only when the terminal cannot be read or written.
    pub async fn dispatch(&mut self, choice: MainChoice) -> io::Result<()> {
        match choice {
            MainChoice::Status => self.detailed_status().await,
            MainChoice::QuickCommit => self.quick_commit().await,
            MainChoice::QuickFiles => self.quick_files().await,
            MainChoice::QuickBranch => self.quick_branch().await,
            MainChoice::QuickRemote => self.quick_remote().await,
            MainChoice::Branches => self.branch_menu().await,
            MainChoice::Commits => self.commit_menu().await,
            MainChoice::Remotes => self.remote_menu().await,
            MainChoice::Files => self.file_menu().await,
            MainChoice::Tags => self.tag_menu().await,
            MainChoice::Stash => self.stash_menu().await,
            MainChoice::Statistics => self.statistics_menu().await,
            MainChoice::Tools => self.tools_menu().await,
            MainChoice::ChangeDirectory => self.change_directory(),
            MainChoice::InitRepository => self.init_repository().await,
            MainChoice::Quit => Ok(()),
        }
    }

    /// Moves the session to another directory.
    fn change_directory(&mut self) -> io::Result<()> {
        let current = self.ctx.dir().display().to_string();
        self.say(format!("{} {current}", self.theme.warn("Current path:")))?;
        let input = self.prompt("New directory: ")?;
        if input.is_empty() {
            return Ok(());
        }
        match self.ctx.change_dir(&input) {
            Ok(ctx) => {
                info!(dir = %ctx.dir().display(), "changed directory");
                self.ctx = ctx;
                let dir = self.ctx.dir().display().to_string();
                self.success(&format!("Directory changed to: {dir}"))?;
            }
            Err(e) => self.failure(&format!("Could not change directory: {e}"))?,
        }
        self.pause()
    }

    async fn init_repository(&mut self) -> io::Result<()> {
        if self.ctx.is_repository() {
            self.say(self.theme.warn(
                "⚠️  A git repository already exists in this directory.",
            ))?;
            return self.pause();
        }
        let dir = self.ctx.dir().display().to_string();
        if !self.confirm(&format!("Initialize a new git repository in {dir}?"))? {
            return Ok(());
        }
        let output = self.run(&["init"]).await;
        if self.report(&output, "Git repository initialized!")? {
            self.show(output.text())?;
        }
        self.pause()
    }

    async fn render_main_menu(&mut self) -> io::Result<()> {
        self.render_header()?;
        if self.context().is_repository() {
            self.render_quick_status().await?;
        }

        let theme = self.theme;
        let rule = theme.heading(&"═".repeat(67));
        self.say(&rule)?;
        self.say(theme.heading("                          📋 MAIN MENU"))?;
        self.say(&rule)?;

        self.say(theme.section("⚡ QUICK ACCESS:"))?;
        for (key, label) in QUICK_ENTRIES {
            self.say(format!("{} {label}", theme.accent(&format!("{key:>2}"))))?;
        }
        self.blank()?;
        self.say(theme.section("📋 FULL MENU:"))?;
        for (key, label) in FULL_ENTRIES {
            self.say(format!("{} {label}", theme.ok(&format!("{key:>2}."))))?;
        }
        self.say(format!("{} 🚪 Quit", theme.error(" 0.")))?;

        let label = theme.warn("Choose an option: ");
        write!(self.out, "\n{label}")?;
        self.out.flush()
    }

    fn render_header(&mut self) -> io::Result<()> {
        let theme = self.theme;
        self.say(theme.title(
            "╔════════════════════════════════════════════════════════════════╗",
        ))?;
        self.say(theme.title(
            "║                     🔧 GIT MANAGER CLI 🔧                      ║",
        ))?;
        self.say(theme.title(
            "╚════════════════════════════════════════════════════════════════╝",
        ))?;
        let dir = self.context().dir().display().to_string();
        self.say(format!("{} {dir}", theme.warn("Current directory:")))?;
        self.blank()
    }

    async fn render_quick_status(&mut self) -> io::Result<()> {
        let branch = current_branch(&self.git, self.ctx.dir()).await;
        let entries = status_entries(&self.git, self.ctx.dir()).await;
        let staged = staged_files(&self.git, self.ctx.dir()).await;
        let theme = self.theme;

        self.say(format!(
            "{} {}",
            theme.section("📍 Current branch:"),
            theme.accent(super::display_branch(&branch))
        ))?;
        if let Some(line) = quick_status_line(&FileCounts::from_entries(&entries), theme) {
            self.say(line)?;
        }
        self.blank()?;

        let hints = quick_hints(!entries.is_empty(), !staged.is_empty(), self.is_trunk(&branch));
        self.say(theme.section("⚡ QUICK ACTIONS AVAILABLE:"))?;
        for hint in hints {
            self.say(format!("   💡 {}", hint.message()))?;
        }
        self.blank()
    }
}
