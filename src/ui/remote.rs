// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote management. Fetch, pull and push go through `run_network`.

use std::io::{self, BufRead, Write};

use crate::git::exec::GitExecutor;
use crate::git::snapshot::current_branch;

use super::Session;

impl<R: BufRead, W: Write, G: GitExecutor> Session<R, W, G> {
    pub(crate) async fn remote_menu(&mut self) -> io::Result<()> {
        if !self.require_repository()? {
            return Ok(());
        }
        while !self.input_closed() {
            self.clear()?;
            self.banner("🔄 REMOTE MANAGEMENT", 30)?;
            let remotes = self.run(&["remote", "-v"]).await;
            self.say(self.theme.remote("Configured remotes:"))?;
            if remotes.text().is_empty() {
                self.say("(none)")?;
            } else {
                self.say(remotes.text())?;
            }
            self.blank()?;
            self.options(&[
                "Add remote",
                "Remove remote",
                "Rename remote",
                "Fetch",
                "Pull",
                "Push",
            ])?;

            match self.choice()?.as_deref() {
                Some("1") => self.add_remote().await?,
                Some("2") => self.remove_remote().await?,
                Some("3") => self.rename_remote().await?,
                Some("4") => self.fetch_from_remote().await?,
                Some("5") => self.pull_from_remote().await?,
                Some("6") => self.push_to_remote().await?,
                Some("0") | None => break,
                Some(_) => self.invalid_option()?,
            }
        }
        Ok(())
    }

    async fn add_remote(&mut self) -> io::Result<()> {
        let name = self.prompt("Remote name: ")?;
        if name.is_empty() {
            return Ok(());
        }
        let url = self.prompt("Remote URL: ")?;
        if url.is_empty() {
            return Ok(());
        }
        let output = self
            .run(&["remote", "add", name.as_str(), url.as_str()])
            .await;
        self.report(&output, &format!("Remote '{name}' added!"))?;
        self.pause()
    }

    async fn remove_remote(&mut self) -> io::Result<()> {
        let name = self.prompt("Remote to remove: ")?;
        if name.is_empty() {
            return Ok(());
        }
        let output = self.run(&["remote", "remove", name.as_str()]).await;
        self.report(&output, &format!("Remote '{name}' removed!"))?;
        self.pause()
    }

    async fn rename_remote(&mut self) -> io::Result<()> {
        let old = self.prompt("Current remote name: ")?;
        if old.is_empty() {
            return Ok(());
        }
        let new = self.prompt("New name: ")?;
        if new.is_empty() {
            return Ok(());
        }
        let output = self
            .run(&["remote", "rename", old.as_str(), new.as_str()])
            .await;
        self.report(&output, &format!("Remote renamed from '{old}' to '{new}'!"))?;
        self.pause()
    }

    /// All remotes with pruning on empty input, otherwise the named one.
    pub(crate) async fn fetch_from_remote(&mut self) -> io::Result<()> {
        let remote = self.prompt("Remote to fetch (empty for all): ")?;
        let output = if remote.is_empty() {
            self.run_network(&["fetch", "--all", "--prune"], "Fetching all remotes...")
                .await
        } else {
            self.run_network(
                &["fetch", remote.as_str(), "--prune"],
                &format!("Fetching {remote}..."),
            )
            .await
        };
        if self.report(&output, "Fetch complete!")? {
            self.show(output.text())?;
        }
        self.pause()
    }

    /// Remote and branch typed by the user, defaulting to the configured
    /// remote and the current branch.
    async fn remote_and_branch(&mut self) -> io::Result<(String, String)> {
        let default_remote = self.config.repo.default_remote.clone();
        let remote = self.prompt(&format!("Remote [{default_remote}]: "))?;
        let remote = if remote.is_empty() { default_remote } else { remote };

        let current = current_branch(&self.git, self.ctx.dir()).await;
        let branch = self.prompt(&format!("Branch [{}]: ", super::display_branch(&current)))?;
        let branch = if branch.is_empty() { current } else { branch };
        Ok((remote, branch))
    }

    async fn pull_from_remote(&mut self) -> io::Result<()> {
        let (remote, branch) = self.remote_and_branch().await?;
        let output = self
            .run_network(
                &["pull", remote.as_str(), branch.as_str()],
                &format!("Pulling {remote}/{branch}..."),
            )
            .await;
        if self.report(&output, "Pull complete!")? {
            self.show(output.text())?;
        }
        self.pause()
    }

    async fn push_to_remote(&mut self) -> io::Result<()> {
        let (remote, branch) = self.remote_and_branch().await?;
        let force = self.ask("Force push?")?;
        if force && !self.confirm("A force push may overwrite the remote history. Continue?")? {
            return Ok(());
        }

        let mut args = vec!["push", remote.as_str(), branch.as_str()];
        if force {
            args.push("--force");
        }
        let output = self
            .run_network(&args, &format!("Pushing to {remote}/{branch}..."))
            .await;
        if self.report(&output, "Push complete!")? {
            self.show(output.text())?;
        }
        self.pause()
    }
}
