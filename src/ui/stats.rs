// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Statistics, history, blame and search.
//!
//! ```text
//! 1 general       counts, first/last commit, count-objects
//! 2 contributors  shortlog + monthly activity (12 months)
//! 3 history       count + format
//! 4 graph         log --graph --all
//! 5 file stats    most modified, line totals, one file's history
//! 6 blame         full, moved-line detection, line range
//! 7 search        message, code, author, dates
//! ```

use std::io::{self, BufRead, Write};

use crate::git::exec::GitExecutor;
use crate::git::stats::{
    MOST_MODIFIED_LIMIT, count_lines, line_totals, monthly_activity, most_modified, parse_shortlog,
};

use super::{Session, parse_count};

/// Output format of the history screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryFormat {
    Oneline,
    Short,
    Detailed,
    Custom,
}

impl HistoryFormat {
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "2" => Self::Short,
            "3" => Self::Detailed,
            "4" => Self::Custom,
            _ => Self::Oneline,
        }
    }

    /// `log` arguments after the count, without the color flag.
    #[must_use]
    pub const fn args(self) -> &'static [&'static str] {
        match self {
            Self::Oneline => &["--oneline"],
            Self::Short => &["--pretty=format:%h - %an, %ar : %s"],
            Self::Detailed => &["--stat", "--pretty=fuller"],
            Self::Custom => &["--graph", "--pretty=format:%C(yellow)%h%Creset %C(cyan)%an%Creset %C(green)(%ar)%Creset %s%C(red)%d%Creset"],
        }
    }
}

/// Search offered by the search screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistorySearch {
    Message(String),
    Code(String),
    Author(String),
    Dates { since: String, until: String },
}

impl HistorySearch {
    /// `log` arguments selecting the matching commits; empty when the user
    /// typed nothing to search for.
    #[must_use]
    pub fn args(&self) -> Vec<String> {
        match self {
            Self::Message(text) | Self::Code(text) | Self::Author(text) if text.is_empty() => {
                Vec::new()
            }
            Self::Message(text) => vec![format!("--grep={text}")],
            Self::Code(text) => vec![format!("-S{text}")],
            Self::Author(name) => vec![format!("--author={name}")],
            Self::Dates { since, until } => {
                let mut args = Vec::new();
                if !since.is_empty() {
                    args.push(format!("--since={since}"));
                }
                if !until.is_empty() {
                    args.push(format!("--until={until}"));
                }
                args
            }
        }
    }
}

impl<R: BufRead, W: Write, G: GitExecutor> Session<R, W, G> {
    pub(crate) async fn statistics_menu(&mut self) -> io::Result<()> {
        if !self.require_repository()? {
            return Ok(());
        }
        while !self.input_closed() {
            self.clear()?;
            self.banner("📈 STATISTICS AND LOGS", 30)?;
            self.options(&[
                "General statistics",
                "Contributors",
                "Commit history",
                "Branch graph",
                "File statistics",
                "Blame",
                "Search history",
            ])?;

            match self.choice()?.as_deref() {
                Some("1") => self.general_stats().await?,
                Some("2") => self.contributors().await?,
                Some("3") => self.show_history().await?,
                Some("4") => self.branch_graph().await?,
                Some("5") => self.file_stats_menu().await?,
                Some("6") => self.blame().await?,
                Some("7") => self.search_history().await?,
                Some("0") | None => break,
                Some(_) => self.invalid_option()?,
            }
        }
        Ok(())
    }

    async fn general_stats(&mut self) -> io::Result<()> {
        self.say(self.theme.section("📊 General statistics"))?;

        let commits = self.run(&["rev-list", "--count", "HEAD"]).await;
        let branches = self.run(&["branch", "-a"]).await;
        let tags = self.run(&["tag", "-l"]).await;
        let commits = commits.ok_text().unwrap_or("0").to_string();
        let branches = count_lines(branches.ok_text().unwrap_or_default());
        let tags = count_lines(tags.ok_text().unwrap_or_default());
        self.say(format!("Total commits:  {commits}"))?;
        self.say(format!("Branches:       {branches}"))?;
        self.say(format!("Tags:           {tags}"))?;

        let first = self
            .run(&["log", "--reverse", "--pretty=format:%h %s (%ar)"])
            .await;
        if let Some(line) = first.ok_lines().next() {
            let line = line.to_string();
            self.say(format!("First commit:   {line}"))?;
        }
        let last = self.run(&["log", "-1", "--pretty=format:%h %s (%ar)"]).await;
        if let Some(text) = last.ok_text() {
            let text = text.to_string();
            self.say(format!("Last commit:    {text}"))?;
        }

        let objects = self.run(&["count-objects", "-vH"]).await;
        self.blank()?;
        self.say(self.theme.info("Repository size:"))?;
        self.show(objects.text())?;
        self.pause()
    }

    async fn contributors(&mut self) -> io::Result<()> {
        let shortlog = self.run(&["shortlog", "-sn", "--all"]).await;
        let authors = parse_shortlog(shortlog.ok_text().unwrap_or_default());
        self.say(self.theme.section("👥 Contributors by commits"))?;
        if authors.is_empty() {
            self.say("(no commits)")?;
        }
        for (count, author) in &authors {
            self.say(format!("{count:>6}  {author}"))?;
        }

        let dates = self
            .run(&[
                "log",
                "--since=12.months.ago",
                "--pretty=format:%ad",
                "--date=format:%Y-%m",
            ])
            .await;
        let months = monthly_activity(dates.ok_text().unwrap_or_default());
        if !months.is_empty() {
            self.blank()?;
            self.say(self.theme.section("📅 Activity over the last 12 months"))?;
            for (month, count) in &months {
                self.say(format!("{month}  {count:>4} commit(s)"))?;
            }
        }
        self.pause()
    }

    /// Asks for a count and a format, then prints the log.
    pub(crate) async fn show_history(&mut self) -> io::Result<()> {
        let count = parse_count(&self.prompt("Number of commits [20]: ")?, 20);
        self.say("1. One line per commit (default)")?;
        self.say("2. Short")?;
        self.say("3. Detailed")?;
        self.say("4. Custom graph")?;
        let format = HistoryFormat::parse(&self.prompt("Format [1]: ")?);

        let count = format!("-{count}");
        let mut args = vec!["log", self.color_flag(), count.as_str()];
        args.extend_from_slice(format.args());
        let output = self.run(&args).await;
        if output.succeeded() {
            self.say(output.text())?;
        } else {
            self.error_output(output.text())?;
        }
        self.pause()
    }

    async fn branch_graph(&mut self) -> io::Result<()> {
        let count = parse_count(&self.prompt("Number of commits [30]: ")?, 30);
        let count = format!("-{count}");
        let color = self.color_flag();
        let output = self
            .run(&[
                "log",
                color,
                "--graph",
                "--oneline",
                "--decorate",
                "--all",
                count.as_str(),
            ])
            .await;
        if output.succeeded() {
            self.say(output.text())?;
        } else {
            self.error_output(output.text())?;
        }
        self.pause()
    }

    async fn file_stats_menu(&mut self) -> io::Result<()> {
        self.blank()?;
        self.options(&[
            "Most modified files",
            "Lines added and removed per file",
            "History of one file",
        ])?;
        match self.choice()?.as_deref() {
            Some("1") => {
                let log = self.run(&["log", "--pretty=format:", "--name-only"]).await;
                let files = most_modified(log.ok_text().unwrap_or_default(), MOST_MODIFIED_LIMIT);
                self.say(self.theme.section("🔥 Most modified files"))?;
                for (path, count) in &files {
                    self.say(format!("{count:>5}  {path}"))?;
                }
            }
            Some("2") => {
                let log = self.run(&["log", "--numstat", "--pretty=format:"]).await;
                let totals = line_totals(log.ok_text().unwrap_or_default());
                self.say(self.theme.section("📝 Lines per file"))?;
                let hidden = totals.len().saturating_sub(MOST_MODIFIED_LIMIT);
                for total in totals.iter().take(MOST_MODIFIED_LIMIT) {
                    let line = format!(
                        "{} {} {}",
                        self.theme.ok(&format!("+{:<7}", total.added)),
                        self.theme.error(&format!("-{:<7}", total.removed)),
                        total.path
                    );
                    self.say(line)?;
                }
                if hidden > 0 {
                    self.say(format!("   ... and {hidden} more"))?;
                }
            }
            Some("3") => {
                let file = self.prompt("File: ")?;
                if file.is_empty() {
                    return Ok(());
                }
                let color = self.color_flag();
                let output = self
                    .run(&["log", color, "--follow", "--oneline", "--", file.as_str()])
                    .await;
                if !output.succeeded() {
                    self.error_output(output.text())?;
                } else if output.text().is_empty() {
                    self.say("No results")?;
                } else {
                    self.say(output.text())?;
                }
            }
            Some("0") | None => return Ok(()),
            Some(_) => return self.invalid_option(),
        }
        self.pause()
    }

    async fn blame(&mut self) -> io::Result<()> {
        let file = self.prompt("File: ")?;
        if file.is_empty() {
            return Ok(());
        }
        if !self.ctx.dir().join(&file).is_file() {
            self.failure(&format!("File '{file}' not found."))?;
            return self.pause();
        }

        self.say("1. Full blame")?;
        self.say("2. Detect moved and copied lines")?;
        self.say("3. Line range")?;
        let mode = self.prompt("Mode [1]: ")?;
        let output = match mode.as_str() {
            "2" => {
                self.run(&["blame", "-w", "-C", "-C", "-C", "--", file.as_str()])
                    .await
            }
            "3" => {
                let start = self.prompt("First line: ")?;
                let end = self.prompt("Last line: ")?;
                let (Ok(start), Ok(end)) = (start.parse::<u32>(), end.parse::<u32>()) else {
                    self.failure("Line numbers must be positive integers.")?;
                    return self.pause();
                };
                let range = format!("{start},{end}");
                self.run(&["blame", "-L", range.as_str(), "--", file.as_str()])
                    .await
            }
            _ => self.run(&["blame", "--", file.as_str()]).await,
        };
        if output.succeeded() {
            self.say(output.text())?;
        } else {
            self.error_output(output.text())?;
        }
        self.pause()
    }

    /// Searches the log by message, code, author or date range.
    pub(crate) async fn search_history(&mut self) -> io::Result<()> {
        self.blank()?;
        self.options(&[
            "By commit message",
            "By code change",
            "By author",
            "By date range",
        ])?;
        let search = match self.choice()?.as_deref() {
            Some("1") => HistorySearch::Message(self.prompt("Text in the message: ")?),
            Some("2") => HistorySearch::Code(self.prompt("Code to look for: ")?),
            Some("3") => HistorySearch::Author(self.prompt("Author: ")?),
            Some("4") => HistorySearch::Dates {
                since: self.prompt("Since (e.g. 2024-01-01, empty for any): ")?,
                until: self.prompt("Until (empty for any): ")?,
            },
            Some("0") | None => return Ok(()),
            Some(_) => return self.invalid_option(),
        };

        let filters = search.args();
        if filters.is_empty() {
            return Ok(());
        }
        let color = self.color_flag();
        let mut args = vec!["log", color, "--oneline"];
        args.extend(filters.iter().map(String::as_str));
        let output = self.run(&args).await;

        if !output.succeeded() {
            self.error_output(output.text())?;
        } else if output.text().is_empty() {
            self.say("No results")?;
        } else {
            self.say(self.theme.section("🔍 Results:"))?;
            self.say(output.text())?;
        }
        self.pause()
    }
}
