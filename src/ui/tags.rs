// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::{self, BufRead, Write};

use crate::git::exec::GitExecutor;

use super::Session;

impl<R: BufRead, W: Write, G: GitExecutor> Session<R, W, G> {
    pub(crate) async fn tag_menu(&mut self) -> io::Result<()> {
        if !self.require_repository()? {
            return Ok(());
        }
        while !self.input_closed() {
            self.clear()?;
            self.banner("🏷️  TAG MANAGEMENT", 30)?;
            let tags = self.run(&["tag", "-l"]).await;
            self.say(self.theme.warn("Existing tags:"))?;
            if tags.text().is_empty() {
                self.say("(none)")?;
            } else {
                self.say(tags.text())?;
            }
            self.blank()?;
            self.options(&[
                "Create tag",
                "Create annotated tag",
                "Delete tag",
                "Show tag",
                "List tags by version",
            ])?;

            match self.choice()?.as_deref() {
                Some("1") => self.create_tag().await?,
                Some("2") => self.create_annotated_tag().await?,
                Some("3") => self.delete_tag().await?,
                Some("4") => self.show_tag().await?,
                Some("5") => self.list_tags().await?,
                Some("0") | None => break,
                Some(_) => self.invalid_option()?,
            }
        }
        Ok(())
    }

    async fn create_tag(&mut self) -> io::Result<()> {
        let name = self.prompt("Tag name: ")?;
        if name.is_empty() {
            return Ok(());
        }
        let commit = self.prompt("Commit (empty for HEAD): ")?;
        let mut args = vec!["tag", name.as_str()];
        if !commit.is_empty() {
            args.push(commit.as_str());
        }
        let output = self.run(&args).await;
        self.report(&output, &format!("Tag '{name}' created!"))?;
        self.pause()
    }

    async fn create_annotated_tag(&mut self) -> io::Result<()> {
        let name = self.prompt("Tag name: ")?;
        if name.is_empty() {
            return Ok(());
        }
        let message = self.prompt("Tag message: ")?;
        if message.is_empty() {
            self.failure("Empty tag message. Cancelled.")?;
            return self.pause();
        }
        let output = self
            .run(&["tag", "-a", name.as_str(), "-m", message.as_str()])
            .await;
        self.report(&output, &format!("Annotated tag '{name}' created!"))?;
        self.pause()
    }

    async fn delete_tag(&mut self) -> io::Result<()> {
        let name = self.prompt("Tag to delete: ")?;
        if name.is_empty() {
            return Ok(());
        }
        if !self.confirm(&format!("Delete tag '{name}'?"))? {
            return Ok(());
        }
        let output = self.run(&["tag", "-d", name.as_str()]).await;
        self.report(&output, &format!("Tag '{name}' deleted!"))?;
        self.pause()
    }

    async fn show_tag(&mut self) -> io::Result<()> {
        let name = self.prompt("Tag to show: ")?;
        if name.is_empty() {
            return Ok(());
        }
        let color = self.color_flag();
        let output = self.run(&["show", color, name.as_str()]).await;
        if output.succeeded() {
            self.say(output.text())?;
        } else {
            self.error_output(output.text())?;
        }
        self.pause()
    }

    async fn list_tags(&mut self) -> io::Result<()> {
        let output = self.run(&["tag", "-l", "--sort=-version:refname"]).await;
        self.say(self.theme.info("Tags, newest version first:"))?;
        if output.text().is_empty() {
            self.say("(none)")?;
        } else {
            self.say(output.text())?;
        }
        self.pause()
    }
}
