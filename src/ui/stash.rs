// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Stash management. Stashes are addressed by index, `stash@{N}`.

use std::io::{self, BufRead, Write};

use crate::git::exec::GitExecutor;

use super::{Session, stash_ref};

/// Which files `stash push` takes along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StashScope {
    Tracked,
    Untracked,
    All,
}

impl StashScope {
    /// `2` and `3` select the wider scopes; anything else is tracked only.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "2" => Self::Untracked,
            "3" => Self::All,
            _ => Self::Tracked,
        }
    }

    #[must_use]
    pub const fn flag(self) -> Option<&'static str> {
        match self {
            Self::Tracked => None,
            Self::Untracked => Some("-u"),
            Self::All => Some("-a"),
        }
    }
}

impl<R: BufRead, W: Write, G: GitExecutor> Session<R, W, G> {
    pub(crate) async fn stash_menu(&mut self) -> io::Result<()> {
        if !self.require_repository()? {
            return Ok(());
        }
        while !self.input_closed() {
            self.clear()?;
            self.banner("🗂️  STASH MANAGEMENT", 30)?;
            let list = self.run(&["stash", "list"]).await;
            self.say(self.theme.warn("Stashes:"))?;
            if list.text().is_empty() {
                self.say("(none)")?;
            } else {
                self.say(list.text())?;
            }
            self.blank()?;
            self.options(&[
                "Stash changes",
                "Apply a stash",
                "Pop a stash",
                "Show a stash",
                "Drop a stash",
                "Clear all stashes",
                "Create a branch from a stash",
            ])?;

            match self.choice()?.as_deref() {
                Some("1") => self.create_stash().await?,
                Some("2") => self.restore_stash("apply").await?,
                Some("3") => self.restore_stash("pop").await?,
                Some("4") => self.show_stash().await?,
                Some("5") => self.drop_stash().await?,
                Some("6") => self.clear_stashes().await?,
                Some("7") => self.stash_branch().await?,
                Some("0") | None => break,
                Some(_) => self.invalid_option()?,
            }
        }
        Ok(())
    }

    async fn create_stash(&mut self) -> io::Result<()> {
        let message = self.prompt("Stash message (optional): ")?;
        self.say("1. Tracked files only")?;
        self.say("2. Include untracked files")?;
        self.say("3. Include ignored files too")?;
        let scope = StashScope::parse(&self.prompt("Scope [1]: ")?);

        let mut args = vec!["stash", "push"];
        if let Some(flag) = scope.flag() {
            args.push(flag);
        }
        if !message.is_empty() {
            args.extend(["-m", message.as_str()]);
        }
        let output = self.run(&args).await;
        if self.report(&output, "Changes stashed!")? {
            self.show(output.text())?;
        }
        self.pause()
    }

    /// `stash apply` or `stash pop` of the typed index.
    async fn restore_stash(&mut self, action: &str) -> io::Result<()> {
        let reference = stash_ref(&self.prompt("Stash index (empty for 0): ")?);
        let output = self.run(&["stash", action, reference.as_str()]).await;
        if self.report(&output, &format!("{reference} restored!"))? {
            self.show(output.text())?;
        }
        self.pause()
    }

    async fn show_stash(&mut self) -> io::Result<()> {
        let reference = stash_ref(&self.prompt("Stash index (empty for 0): ")?);
        let color = self.color_flag();
        let output = self
            .run(&["stash", "show", "-p", color, reference.as_str()])
            .await;
        if output.succeeded() {
            self.say(output.text())?;
        } else {
            self.error_output(output.text())?;
        }
        self.pause()
    }

    async fn drop_stash(&mut self) -> io::Result<()> {
        let reference = stash_ref(&self.prompt("Stash index (empty for 0): ")?);
        if !self.confirm(&format!("Drop {reference}?"))? {
            return Ok(());
        }
        let output = self.run(&["stash", "drop", reference.as_str()]).await;
        self.report(&output, &format!("{reference} dropped!"))?;
        self.pause()
    }

    async fn clear_stashes(&mut self) -> io::Result<()> {
        if !self.confirm("Delete ALL stashes? This cannot be undone.")? {
            return Ok(());
        }
        let output = self.run(&["stash", "clear"]).await;
        self.report(&output, "All stashes cleared!")?;
        self.pause()
    }

    async fn stash_branch(&mut self) -> io::Result<()> {
        let name = self.prompt("New branch name: ")?;
        if name.is_empty() {
            return Ok(());
        }
        let reference = stash_ref(&self.prompt("Stash index (empty for 0): ")?);
        let output = self
            .run(&["stash", "branch", name.as_str(), reference.as_str()])
            .await;
        self.report(&output, &format!("Branch '{name}' created from {reference}!"))?;
        self.pause()
    }
}
