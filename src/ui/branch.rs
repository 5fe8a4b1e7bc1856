// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Branch management.

use std::io::{self, BufRead, Write};

use crate::git::exec::GitExecutor;

use super::Session;

impl<R: BufRead, W: Write, G: GitExecutor> Session<R, W, G> {
    pub(crate) async fn branch_menu(&mut self) -> io::Result<()> {
        if !self.require_repository()? {
            return Ok(());
        }
        while !self.input_closed() {
            self.clear()?;
            self.banner("🌿 BRANCH MANAGEMENT", 30)?;
            let branches = self.run(&["branch", "-v"]).await;
            self.say(self.theme.warn("Local branches:"))?;
            self.show(branches.text())?;
            self.blank()?;
            self.options(&[
                "Create a new branch",
                "Switch branch",
                "Delete branch",
                "Rename branch",
                "Merge a branch",
                "Show remote branches",
            ])?;

            match self.choice()?.as_deref() {
                Some("1") => self.create_branch().await?,
                Some("2") => self.switch_branch().await?,
                Some("3") => self.delete_branch().await?,
                Some("4") => self.rename_branch().await?,
                Some("5") => self.merge_branch().await?,
                Some("6") => self.remote_branches().await?,
                Some("0") | None => break,
                Some(_) => self.invalid_option()?,
            }
        }
        Ok(())
    }

    /// `checkout -b` on a new branch.
    pub(crate) async fn create_branch(&mut self) -> io::Result<()> {
        let name = self.prompt("New branch name: ")?;
        if name.is_empty() {
            return Ok(());
        }
        let output = self.run(&["checkout", "-b", name.as_str()]).await;
        self.report(&output, &format!("Branch '{name}' created and checked out!"))?;
        self.pause()
    }

    pub(crate) async fn switch_branch(&mut self) -> io::Result<()> {
        let name = self.prompt("Branch to switch to: ")?;
        if name.is_empty() {
            return Ok(());
        }
        let output = self.run(&["checkout", name.as_str()]).await;
        self.report(&output, &format!("Switched to branch '{name}'!"))?;
        self.pause()
    }

    async fn delete_branch(&mut self) -> io::Result<()> {
        let name = self.prompt("Branch to delete: ")?;
        if name.is_empty() {
            return Ok(());
        }
        if !self.confirm(&format!("Delete branch '{name}'?"))? {
            return Ok(());
        }
        let output = self.run(&["branch", "-d", name.as_str()]).await;
        if !self.report(&output, &format!("Branch '{name}' deleted!"))? {
            let hint = self
                .theme
                .warn(&format!("💡 Use 'git branch -D {name}' to force the deletion"));
            self.say(hint)?;
        }
        self.pause()
    }

    async fn rename_branch(&mut self) -> io::Result<()> {
        let old = self.prompt("Current branch name: ")?;
        if old.is_empty() {
            return Ok(());
        }
        let new = self.prompt("New name: ")?;
        if new.is_empty() {
            return Ok(());
        }
        let output = self.run(&["branch", "-m", old.as_str(), new.as_str()]).await;
        self.report(&output, &format!("Branch renamed from '{old}' to '{new}'!"))?;
        self.pause()
    }

    async fn merge_branch(&mut self) -> io::Result<()> {
        let name = self.prompt("Branch to merge into the current one: ")?;
        if name.is_empty() {
            return Ok(());
        }
        let output = self.run(&["merge", name.as_str()]).await;
        if self.report(&output, &format!("Branch '{name}' merged!"))? {
            self.show(output.text())?;
        }
        self.pause()
    }

    async fn remote_branches(&mut self) -> io::Result<()> {
        let output = self.run(&["branch", "-r"]).await;
        self.say(self.theme.remote("Remote branches:"))?;
        if output.text().is_empty() {
            self.say("(none)")?;
        } else {
            self.say(output.text())?;
        }
        self.pause()
    }
}
