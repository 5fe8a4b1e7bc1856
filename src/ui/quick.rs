// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Letter shortcuts of the main menu.

use std::io::{self, BufRead, Write};

use crate::git::exec::GitExecutor;
use crate::git::snapshot::{UPSTREAM, ahead_behind, current_branch};
use crate::git::status::parse_porcelain;

use super::Session;
use super::files::file_status_line;
use super::status::sync_lines;

impl<R: BufRead, W: Write, G: GitExecutor> Session<R, W, G> {
    fn quick_options(&mut self, items: &[&str]) -> io::Result<()> {
        let theme = self.theme;
        for (index, item) in items.iter().enumerate() {
            self.say(format!("{} {item}", theme.accent(&format!("{}.", index + 1))))?;
        }
        self.say(format!("{} Back", theme.error("0.")))
    }

    pub(crate) async fn quick_commit(&mut self) -> io::Result<()> {
        if !self.require_repository()? {
            return Ok(());
        }
        self.banner("📦 QUICK COMMIT", 20)?;

        let staged = self.run(&["diff", "--cached", "--name-only"]).await;
        let staged = staged.ok_text().unwrap_or_default().to_string();
        let theme = self.theme;

        if staged.is_empty() {
            self.say(theme.warn("📋 No staged files."))?;
            self.quick_options(&["View commit history", "Open the full commit menu"])?;
            match self.choice()?.as_deref() {
                Some("1") => {
                    let log = self
                        .run(&["log", "--oneline", "--graph", "--decorate", "-10"])
                        .await;
                    self.say(theme.info("📈 Last 10 commits:"))?;
                    self.show(log.text())?;
                }
                Some("2") => return self.commit_menu().await,
                _ => return Ok(()),
            }
        } else {
            self.say(theme.ok("✅ Staged files:"))?;
            self.say(&staged)?;
            self.blank()?;
            let message = self.prompt("Commit message: ")?;
            if message.is_empty() {
                self.failure("Empty commit message. Cancelled.")?;
            } else {
                let output = self.run(&["commit", "-m", message.as_str()]).await;
                self.report(&output, "Commit created!")?;
            }
        }
        self.pause()
    }

    pub(crate) async fn quick_files(&mut self) -> io::Result<()> {
        if !self.require_repository()? {
            return Ok(());
        }
        self.banner("📁 QUICK FILES", 20)?;

        let status = self.run(&["status", "--porcelain"]).await;
        let entries = parse_porcelain(status.ok_text().unwrap_or_default());
        let theme = self.theme;
        if entries.is_empty() {
            self.success("No changes detected")?;
            return self.pause();
        }

        self.say(theme.warn("📋 Changed files:"))?;
        for entry in &entries {
            self.say(file_status_line(entry, theme))?;
        }
        self.blank()?;
        self.quick_options(&[
            "Add all files and show the summary",
            "Show the differences only",
            "Open the full file menu",
        ])?;

        match self.choice()?.as_deref() {
            Some("1") => {
                let added = self.run(&["add", "."]).await;
                if self.report(&added, "All files added!")? {
                    let summary = self.run(&["diff", "--cached", "--stat"]).await;
                    self.say(theme.info("📊 Summary of changes:"))?;
                    self.show(summary.text())?;
                }
                self.pause()
            }
            Some("2") => {
                let color = self.color_flag();
                let diff = self.run(&["diff", color]).await;
                if diff.text().is_empty() {
                    self.success("No unstaged changes to show.")?;
                } else {
                    self.say(theme.info("📊 Differences:"))?;
                    self.say(diff.text())?;
                }
                self.pause()
            }
            Some("3") => self.file_menu().await,
            _ => Ok(()),
        }
    }

    pub(crate) async fn quick_branch(&mut self) -> io::Result<()> {
        if !self.require_repository()? {
            return Ok(());
        }
        let branch = current_branch(&self.git, self.ctx.dir()).await;
        let theme = self.theme;
        self.banner("🌿 QUICK BRANCH", 20)?;
        self.say(format!(
            "{} {}",
            theme.info("Current branch:"),
            theme.accent(super::display_branch(&branch))
        ))?;
        self.blank()?;

        let branches = self.run(&["branch", "--format=%(refname:short)"]).await;
        self.say(theme.warn("Local branches:"))?;
        self.show(branches.text())?;
        self.blank()?;
        self.quick_options(&[
            "Create a new branch",
            "Switch branch",
            "Open the full branch menu",
        ])?;

        match self.choice()?.as_deref() {
            Some("1") => self.create_branch().await,
            Some("2") => self.switch_branch().await,
            Some("3") => self.branch_menu().await,
            _ => Ok(()),
        }
    }

    pub(crate) async fn quick_remote(&mut self) -> io::Result<()> {
        if !self.require_repository()? {
            return Ok(());
        }
        self.banner("🔄 QUICK REMOTE", 20)?;

        let remote = self.config.repo.default_remote.clone();
        self.run_network(&["fetch", remote.as_str()], &format!("Fetching {remote}..."))
            .await;
        let (ahead, behind) = ahead_behind(&self.git, self.ctx.dir(), UPSTREAM).await;
        for line in sync_lines(ahead, behind) {
            self.say(line)?;
        }
        self.blank()?;

        self.quick_options(&[
            &format!("Quick push ({remote} + current branch)"),
            &format!("Quick pull ({remote} + current branch)"),
            "Fetch from a remote",
            "Open the full remote menu",
        ])?;
        let choice = self.choice()?;
        let branch = current_branch(&self.git, self.ctx.dir()).await;

        match choice.as_deref() {
            Some("1") => {
                self.say(self.theme.warn(&format!("Pushing to {remote}/{branch}...")))?;
                let output = self
                    .run_network(&["push", remote.as_str(), branch.as_str()], "Pushing...")
                    .await;
                self.report(&output, "Push complete!")?;
                self.pause()
            }
            Some("2") => {
                self.say(self.theme.warn(&format!("Pulling from {remote}/{branch}...")))?;
                let output = self
                    .run_network(&["pull", remote.as_str(), branch.as_str()], "Pulling...")
                    .await;
                self.report(&output, "Pull complete!")?;
                self.pause()
            }
            Some("3") => self.fetch_from_remote().await,
            Some("4") => self.remote_menu().await,
            _ => Ok(()),
        }
    }
}
