// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Commit management.

use std::io::{self, BufRead, Write};

use crate::git::exec::GitExecutor;
use crate::git::snapshot::staged_files;

use super::Session;

/// Mode offered by the reset submenu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetMode {
    Soft,
    Mixed,
    Hard,
}

impl ResetMode {
    /// `1`, `2` or `3`; anything else is the default mixed reset.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => Self::Soft,
            "3" => Self::Hard,
            _ => Self::Mixed,
        }
    }

    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Self::Soft => "--soft",
            Self::Mixed => "--mixed",
            Self::Hard => "--hard",
        }
    }
}

impl<R: BufRead, W: Write, G: GitExecutor> Session<R, W, G> {
    pub(crate) async fn commit_menu(&mut self) -> io::Result<()> {
        if !self.require_repository()? {
            return Ok(());
        }
        while !self.input_closed() {
            self.clear()?;
            self.banner("📦 COMMIT MANAGEMENT", 30)?;
            self.options(&[
                "Make a commit",
                "View history",
                "Show a commit",
                "Amend the last commit",
                "Undo commits (reset/revert)",
                "Search commits",
            ])?;

            match self.choice()?.as_deref() {
                Some("1") => self.make_commit().await?,
                Some("2") => self.show_history().await?,
                Some("3") => self.show_commit().await?,
                Some("4") => self.amend_commit().await?,
                Some("5") => self.undo_menu().await?,
                Some("6") => self.search_history().await?,
                Some("0") | None => break,
                Some(_) => self.invalid_option()?,
            }
        }
        Ok(())
    }

    async fn make_commit(&mut self) -> io::Result<()> {
        let mut staged = staged_files(&self.git, self.ctx.dir()).await;
        if staged.is_empty() {
            self.say(self.theme.warn("⚠️  No staged files."))?;
            if !self.ask("Add files now?")? {
                return self.pause();
            }
            if !self.stage_from_prompt().await? {
                return self.pause();
            }
            staged = staged_files(&self.git, self.ctx.dir()).await;
            if staged.is_empty() {
                self.failure("Nothing to commit.")?;
                return self.pause();
            }
        }

        self.say(self.theme.ok("Files to commit:"))?;
        for file in &staged {
            self.say(format!("  {file}"))?;
        }
        let message = self.prompt("Commit message: ")?;
        if message.is_empty() {
            self.failure("Empty commit message. Cancelled.")?;
            return self.pause();
        }
        let output = self.run(&["commit", "-m", message.as_str()]).await;
        if self.report(&output, "Commit created!")? {
            self.show(output.text())?;
        }
        self.pause()
    }

    async fn show_commit(&mut self) -> io::Result<()> {
        let input = self.prompt("Commit hash (empty for HEAD): ")?;
        let target = if input.is_empty() { "HEAD" } else { input.as_str() };
        let color = self.color_flag();
        let output = self.run(&["show", color, target]).await;
        if output.succeeded() {
            self.say(output.text())?;
        } else {
            self.error_output(output.text())?;
        }
        self.pause()
    }

    async fn amend_commit(&mut self) -> io::Result<()> {
        let last = self.run(&["log", "-1", "--pretty=format:%h %s"]).await;
        if !last.succeeded() {
            self.failure("There is no commit to amend.")?;
            return self.pause();
        }
        self.say(format!("{} {}", self.theme.info("Last commit:"), last.text()))?;

        let output = if self.ask("Change the commit message?")? {
            let message = self.prompt("New message: ")?;
            if message.is_empty() {
                self.failure("Empty commit message. Cancelled.")?;
                return self.pause();
            }
            self.run(&["commit", "--amend", "-m", message.as_str()]).await
        } else {
            self.run(&["commit", "--amend", "--no-edit"]).await
        };
        self.report(&output, "Commit amended!")?;
        self.pause()
    }

    async fn undo_menu(&mut self) -> io::Result<()> {
        self.blank()?;
        self.say(self.theme.section("↩️  Undo commits"))?;
        self.options(&["Reset to a commit", "Revert a commit"])?;
        match self.choice()?.as_deref() {
            Some("1") => self.reset_commits().await,
            Some("2") => self.revert_commit().await,
            Some("0") | None => Ok(()),
            Some(_) => self.invalid_option(),
        }
    }

    async fn reset_commits(&mut self) -> io::Result<()> {
        let input = self.prompt("Target commit (empty for HEAD~1): ")?;
        let target = if input.is_empty() { "HEAD~1" } else { input.as_str() };

        self.say("1. --soft  (keep changes staged)")?;
        self.say("2. --mixed (keep changes unstaged, default)")?;
        self.say("3. --hard  (discard all changes)")?;
        let mode = ResetMode::parse(&self.prompt("Reset mode [2]: ")?);

        if mode == ResetMode::Hard
            && !self.confirm("A hard reset discards ALL uncommitted changes. Continue?")?
        {
            return Ok(());
        }
        let output = self.run(&["reset", mode.flag(), target]).await;
        self.report(&output, &format!("Reset to {target}!"))?;
        self.pause()
    }

    async fn revert_commit(&mut self) -> io::Result<()> {
        let input = self.prompt("Commit to revert: ")?;
        if input.is_empty() {
            return Ok(());
        }
        let output = self.run(&["revert", "--no-edit", input.as_str()]).await;
        self.report(&output, "Revert commit created!")?;
        self.pause()
    }
}
