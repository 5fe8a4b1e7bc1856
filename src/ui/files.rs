// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! File management: staging, diffs, the ignore file, restore and untrack.

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::git::exec::GitExecutor;
use crate::git::files::ignore;
use crate::git::status::{Category, StatusEntry};

use super::theme::Theme;
use super::{Session, split_names};

/// One porcelain entry with a one-letter glyph, e.g. `M  src/lib.rs`.
///
/// Codes outside the known table are shown verbatim.
#[must_use]
pub fn file_status_line(entry: &StatusEntry, theme: Theme) -> String {
    let path = entry.path();
    match entry.category() {
        Category::StagedModified | Category::WorktreeModified => {
            format!("{}  {path}", theme.warn("M"))
        }
        Category::StagedAdded => format!("{}  {path}", theme.ok("A")),
        Category::StagedDeleted | Category::WorktreeDeleted => {
            format!("{}  {path}", theme.error("D"))
        }
        Category::Renamed => format!("{}  {path}", theme.info("R")),
        Category::Untracked => format!("{}  {path}", theme.accent("?")),
        Category::Unrecognized => format!("{} {path}", entry.code()),
    }
}

impl<R: BufRead, W: Write, G: GitExecutor> Session<R, W, G> {
    pub(crate) async fn file_menu(&mut self) -> io::Result<()> {
        if !self.require_repository()? {
            return Ok(());
        }
        while !self.input_closed() {
            self.clear()?;
            self.banner("📁 FILE MANAGEMENT", 30)?;
            let status = self.run(&["status", "--short"]).await;
            self.say(self.theme.warn("Repository status:"))?;
            if status.text().is_empty() {
                self.say("(clean)")?;
            } else {
                self.say(status.text())?;
            }
            self.blank()?;
            self.options(&[
                "Add files",
                "Unstage files",
                "Show differences",
                "Manage .gitignore",
                "Restore files",
                "Stop tracking files",
            ])?;

            match self.choice()?.as_deref() {
                Some("1") => self.add_files().await?,
                Some("2") => self.unstage_files().await?,
                Some("3") => self.diff_menu().await?,
                Some("4") => self.ignore_menu().await?,
                Some("5") => self.restore_files().await?,
                Some("6") => self.untrack_files().await?,
                Some("0") | None => break,
                Some(_) => self.invalid_option()?,
            }
        }
        Ok(())
    }

    async fn add_files(&mut self) -> io::Result<()> {
        self.stage_from_prompt().await?;
        self.pause()
    }

    /// `git add` of the typed names, all files on empty input.
    pub(crate) async fn stage_from_prompt(&mut self) -> io::Result<bool> {
        let input = self.prompt("Files to add (empty for all): ")?;
        let output = if input.is_empty() {
            self.run(&["add", "."]).await
        } else {
            let mut args = vec!["add", "--"];
            args.extend(split_names(&input));
            self.run(&args).await
        };
        self.report(&output, "Files added!")
    }

    async fn unstage_files(&mut self) -> io::Result<()> {
        let input = self.prompt("Files to unstage (empty for all): ")?;
        let output = if input.is_empty() {
            self.run(&["reset", "HEAD"]).await
        } else {
            let mut args = vec!["reset", "HEAD", "--"];
            args.extend(split_names(&input));
            self.run(&args).await
        };
        self.report(&output, "Files removed from the staging area!")?;
        self.pause()
    }

    async fn diff_menu(&mut self) -> io::Result<()> {
        self.blank()?;
        self.options(&[
            "Unstaged changes",
            "Staged changes",
            "Changes of one file",
            "Between two commits",
        ])?;
        let color = self.color_flag();
        let output = match self.choice()?.as_deref() {
            Some("1") => self.run(&["diff", color]).await,
            Some("2") => self.run(&["diff", "--cached", color]).await,
            Some("3") => {
                let file = self.prompt("File: ")?;
                if file.is_empty() {
                    return Ok(());
                }
                self.run(&["diff", color, "--", file.as_str()]).await
            }
            Some("4") => {
                let from = self.prompt("First commit: ")?;
                let to = self.prompt("Second commit: ")?;
                if from.is_empty() || to.is_empty() {
                    return Ok(());
                }
                self.run(&["diff", color, from.as_str(), to.as_str()]).await
            }
            Some("0") | None => return Ok(()),
            Some(_) => return self.invalid_option(),
        };

        if !output.succeeded() {
            self.error_output(output.text())?;
        } else if output.text().is_empty() {
            self.say("No differences.")?;
        } else {
            self.say(output.text())?;
        }
        self.pause()
    }

    async fn ignore_menu(&mut self) -> io::Result<()> {
        self.blank()?;
        self.say(self.theme.section("📝 .gitignore"))?;
        self.options(&[
            "View .gitignore",
            "Add patterns",
            "Create a basic .gitignore",
        ])?;
        let dir = self.ctx.dir().to_path_buf();

        match self.choice()?.as_deref() {
            Some("1") => match ignore::read_ignore(&dir).await {
                Ok(content) => {
                    self.say(self.theme.info("Contents of .gitignore:"))?;
                    self.say(content.trim_end())?;
                }
                Err(_) => self.failure("No .gitignore in this directory.")?,
            },
            Some("2") => {
                self.say("Enter one pattern per line, an empty line to finish:")?;
                let mut patterns = Vec::new();
                loop {
                    let pattern = self.prompt("> ")?;
                    if pattern.is_empty() {
                        break;
                    }
                    patterns.push(pattern);
                }
                if patterns.is_empty() {
                    self.say("Nothing to add.")?;
                } else {
                    match ignore::append_ignore_patterns(&dir, &patterns).await {
                        Ok(count) => self.success(&format!("{count} pattern(s) added!"))?,
                        Err(e) => {
                            warn!(error = %e, "could not update .gitignore");
                            self.error_output(&e.to_string())?;
                        }
                    }
                }
            }
            Some("3") => match ignore::write_basic_ignore(&dir).await {
                Ok(()) => self.success("Basic .gitignore created!")?,
                Err(e) => self.error_output(&e.to_string())?,
            },
            Some("0") | None => return Ok(()),
            Some(_) => return self.invalid_option(),
        }
        self.pause()
    }

    async fn restore_files(&mut self) -> io::Result<()> {
        let input = self.prompt("Files to restore (empty for all): ")?;
        let question = if input.is_empty() {
            "Discard ALL unstaged changes?"
        } else {
            "Discard the changes of these files?"
        };
        if !self.confirm(question)? {
            return Ok(());
        }

        let output = if input.is_empty() {
            self.run(&["checkout", "--", "."]).await
        } else {
            let mut args = vec!["checkout", "--"];
            args.extend(split_names(&input));
            self.run(&args).await
        };
        self.report(&output, "Files restored!")?;
        self.pause()
    }

    async fn untrack_files(&mut self) -> io::Result<()> {
        let input = self.prompt("Files to stop tracking: ")?;
        if input.is_empty() {
            return Ok(());
        }
        let keep = self.prompt("Keep the files locally? (Y/n): ")?;
        let mut args = if keep.eq_ignore_ascii_case("n") {
            vec!["rm", "--"]
        } else {
            vec!["rm", "--cached", "--"]
        };
        args.extend(split_names(&input));

        let output = self.run(&args).await;
        self.report(&output, "Files are no longer tracked!")?;
        self.pause()
    }
}
