// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Status screens.
//!
//! ```text
//! detailed_status()
//!   1 basic info       repo, branch, last commit, total commits
//!   2 files            FileGroups from the snapshot
//!   3 branches         local/remote counts, 3 most recent
//!   4 remote sync      fetch (optional), ahead/behind, last fetch
//!   5 recent activity  last 3 commits, weekly contributors
//!   6 suggestions      suggest::suggestions(snapshot)
//! ```

use std::io::{self, BufRead, Write};

use crate::git::exec::GitExecutor;
use crate::git::snapshot::{RepositorySnapshot, UPSTREAM, ahead_behind};
use crate::git::stats::count_lines;
use crate::git::status::{Category, FileCounts, StatusEntry, UpstreamCount};
use crate::git::suggest::suggestions;

use super::Session;
use super::theme::Theme;

/// Hint printed under the main menu header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickHint {
    Commit,
    Add,
    FeatureBranch,
}

impl QuickHint {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Commit => "You have staged files -> type 'C' to commit",
            Self::Add => "Modified files detected -> type 'F' to add them",
            Self::FeatureBranch => "On the main branch -> type 'B' to create a feature branch",
        }
    }
}

/// Hints for the main menu header.
#[must_use]
pub fn quick_hints(has_changes: bool, has_staged: bool, on_trunk: bool) -> Vec<QuickHint> {
    let mut hints = Vec::new();
    if has_staged {
        hints.push(QuickHint::Commit);
    } else if has_changes {
        hints.push(QuickHint::Add);
    }
    if on_trunk {
        hints.push(QuickHint::FeatureBranch);
    }
    hints
}

/// Staged, modified and untracked counts; `None` when all are zero.
#[must_use]
pub fn quick_status_line(counts: &FileCounts, theme: Theme) -> Option<String> {
    let mut parts = Vec::new();
    if counts.staged > 0 {
        parts.push(theme.ok(&format!("✓ {} staged file(s)", counts.staged)));
    }
    if counts.modified > 0 {
        parts.push(theme.warn(&format!("⚠ {} modified file(s)", counts.modified)));
    }
    if counts.untracked > 0 {
        parts.push(theme.error(&format!("? {} untracked file(s)", counts.untracked)));
    }
    (!parts.is_empty()).then(|| parts.join("  "))
}

/// Status entries grouped for the detailed file listing.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FileGroups<'a> {
    pub staged: Vec<(&'a str, Category)>,
    pub modified: Vec<&'a str>,
    pub added: Vec<&'a str>,
    pub untracked: Vec<&'a str>,
    pub deleted: Vec<&'a str>,
    pub renamed: Vec<&'a str>,
    pub other: Vec<&'a StatusEntry>,
}

impl<'a> FileGroups<'a> {
    #[must_use]
    pub fn from_entries(entries: &'a [StatusEntry]) -> Self {
        let mut groups = Self::default();
        for entry in entries {
            let path = entry.path();
            match entry.category() {
                category @ (Category::StagedModified | Category::StagedDeleted) => {
                    groups.staged.push((path, category));
                }
                Category::StagedAdded => {
                    groups.staged.push((path, Category::StagedAdded));
                    groups.added.push(path);
                }
                Category::WorktreeModified => groups.modified.push(path),
                Category::WorktreeDeleted => groups.deleted.push(path),
                Category::Renamed => groups.renamed.push(path),
                Category::Untracked => groups.untracked.push(path),
                Category::Unrecognized => groups.other.push(entry),
            }
        }
        groups
    }
}

/// Label appended to a staged path.
#[must_use]
pub const fn staged_kind(category: Category) -> &'static str {
    match category {
        Category::StagedAdded => "new",
        Category::StagedDeleted => "deleted",
        _ => "modified",
    }
}

/// Ahead/behind as shown on the status screens.
#[must_use]
pub fn sync_lines(ahead: UpstreamCount, behind: UpstreamCount) -> Vec<String> {
    if !ahead.is_known() && !behind.is_known() {
        return vec!["⚪ Upstream: not configured".to_string()];
    }
    let mut lines = Vec::new();
    for (count, icon, label) in [(ahead, "📤", "push"), (behind, "📥", "pull")] {
        match count {
            UpstreamCount::Known(0) => {}
            UpstreamCount::Known(n) => {
                lines.push(format!("{icon} Commits to {label}: {n} commit(s)"));
            }
            UpstreamCount::Unknown => {
                lines.push(format!("⚪ Commits to {label}: not configured"));
            }
        }
    }
    if lines.is_empty() {
        lines.push("✅ Branch is in sync with the remote".to_string());
    }
    lines
}

/// Per-file lines of `git diff --stat`, without the trailing
/// `N files changed` summary.
#[must_use]
pub fn stat_file_lines(stat: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = stat.lines().filter(|line| !line.trim().is_empty()).collect();
    if lines
        .last()
        .is_some_and(|last| last.contains(" changed") && !last.contains('|'))
    {
        lines.pop();
    }
    lines
}

/// Fetch URL of `remote` in `git remote -v` output.
#[must_use]
pub fn fetch_url<'a>(remote_v: &'a str, remote: &str) -> Option<&'a str> {
    remote_v.lines().find_map(|line| {
        let mut fields = line.split_whitespace();
        let name = fields.next()?;
        let url = fields.next()?;
        let kind = fields.next()?;
        (name == remote && kind == "(fetch)").then_some(url)
    })
}

impl<R: BufRead, W: Write, G: GitExecutor> Session<R, W, G> {
    pub(crate) async fn detailed_status(&mut self) -> io::Result<()> {
        if !self.require_repository()? {
            return Ok(());
        }

        let theme = self.theme;
        self.say(theme.heading("📊 REPOSITORY STATUS"))?;
        self.say("═".repeat(60))?;

        let mut snapshot = RepositorySnapshot::capture(&self.git, self.ctx.dir()).await;
        self.status_basic_info(&snapshot).await?;
        self.status_files(&snapshot).await?;
        self.status_branches(&snapshot.branch).await?;
        if let Some((ahead, behind)) = self.status_remote_sync().await? {
            snapshot.ahead = ahead;
            snapshot.behind = behind;
        }
        self.status_recent_activity().await?;
        self.status_suggestions(&snapshot)?;

        self.pause()
    }

    async fn status_basic_info(&mut self, snapshot: &RepositorySnapshot) -> io::Result<()> {
        let theme = self.theme;
        let last = self
            .run(&["log", "-1", "--pretty=format:%h - %s (%an, %ar)"])
            .await;
        let total = self.run(&["rev-list", "--count", "HEAD"]).await;

        let name = self.ctx.name();
        self.say(format!("🏠 REPOSITORY: {name}"))?;
        self.say(format!(
            "🌿 CURRENT BRANCH: {}",
            theme.accent(super::display_branch(&snapshot.branch))
        ))?;
        self.say(format!("📦 LAST COMMIT: {}", last.ok_text().unwrap_or("none")))?;
        if let Some(total) = total.ok_text().filter(|t| !t.is_empty()) {
            self.say(format!("📊 TOTAL COMMITS: {total}"))?;
        }
        self.blank()
    }

    async fn status_files(&mut self, snapshot: &RepositorySnapshot) -> io::Result<()> {
        let theme = self.theme;
        self.say(theme.section("📁 FILE STATUS"))?;

        if snapshot.is_clean() {
            self.say(theme.ok("✨ Working directory clean - no changes detected"))?;
            return self.blank();
        }

        let groups = FileGroups::from_entries(&snapshot.entries);
        let modified_limit = self.config.ui.modified_preview;
        let untracked_limit = self.config.ui.untracked_preview;

        if !groups.staged.is_empty() {
            self.say(theme.ok(&format!("✅ STAGED FILES ({}):", groups.staged.len())))?;
            for (path, category) in &groups.staged {
                self.say(format!("   ▶ {path} ({})", staged_kind(*category)))?;
            }
            let stat = self.run(&["diff", "--cached", "--stat"]).await;
            let lines = stat_file_lines(stat.ok_text().unwrap_or_default());
            if !lines.is_empty() {
                self.say(theme.accent("   📊 Statistics:"))?;
                for line in lines {
                    self.say(format!("   {line}"))?;
                }
            }
            self.blank()?;
        }

        self.preview_list(
            &theme.warn(&format!("⚠️  MODIFIED FILES ({}):", groups.modified.len())),
            "●",
            &groups.modified,
            modified_limit,
        )?;
        self.preview_list(
            &theme.info(&format!("➕ NEW FILES ({}):", groups.added.len())),
            "+",
            &groups.added,
            usize::MAX,
        )?;
        self.preview_list(
            &theme.error(&format!("❓ UNTRACKED FILES ({}):", groups.untracked.len())),
            "?",
            &groups.untracked,
            untracked_limit,
        )?;
        self.preview_list(
            &theme.error(&format!("🗑️  DELETED FILES ({}):", groups.deleted.len())),
            "✗",
            &groups.deleted,
            usize::MAX,
        )?;
        self.preview_list(
            &theme.accent(&format!("🔄 RENAMED FILES ({}):", groups.renamed.len())),
            "↻",
            &groups.renamed,
            usize::MAX,
        )?;

        if !groups.other.is_empty() {
            self.say(format!("OTHER CHANGES ({}):", groups.other.len()))?;
            for entry in &groups.other {
                self.say(format!("   {} {}", entry.code(), entry.path()))?;
            }
            self.blank()?;
        }
        Ok(())
    }

    fn preview_list(
        &mut self,
        heading: &str,
        glyph: &str,
        items: &[&str],
        limit: usize,
    ) -> io::Result<()> {
        if items.is_empty() {
            return Ok(());
        }
        self.say(heading)?;
        for item in items.iter().take(limit) {
            self.say(format!("   {glyph} {item}"))?;
        }
        if items.len() > limit {
            self.say(format!("   ... and {} more", items.len() - limit))?;
        }
        self.blank()
    }

    async fn status_branches(&mut self, branch: &str) -> io::Result<()> {
        let theme = self.theme;
        self.say(theme.section("🌿 BRANCHES"))?;

        let local = self.run(&["branch", "--format=%(refname:short)"]).await;
        let remote = self
            .run(&["branch", "-r", "--format=%(refname:short)"])
            .await;
        let recent = self
            .run(&[
                "for-each-ref",
                "--count=3",
                "--sort=-committerdate",
                "--format=%(refname:short) (%(committerdate:relative))",
                "refs/heads/",
            ])
            .await;

        self.say(format!(
            "📍 Current branch: {}",
            theme.accent(super::display_branch(branch))
        ))?;
        self.say(format!(
            "🏠 Local branches: {}",
            count_lines(local.ok_text().unwrap_or_default())
        ))?;
        self.say(format!(
            "🌐 Remote branches: {}",
            count_lines(remote.ok_text().unwrap_or_default())
        ))?;
        if self.is_trunk(branch) {
            self.say(theme.warn("⚠️  You are on the main branch"))?;
        }

        let recent: Vec<String> = recent.ok_lines().map(|l| format!("   {l}")).collect();
        if !recent.is_empty() {
            self.say(theme.accent("🕐 Recently used branches:"))?;
            for line in recent {
                self.say(line)?;
            }
        }
        self.blank()
    }

    /// Returns refreshed ahead/behind counts when a remote exists.
    async fn status_remote_sync(&mut self) -> io::Result<Option<(UpstreamCount, UpstreamCount)>> {
        let theme = self.theme;
        self.say(theme.remote("🔄 REMOTE SYNC"))?;

        let remotes = self.run(&["remote", "-v"]).await;
        let Some(remotes) = remotes.ok_text().filter(|t| !t.is_empty()) else {
            self.say(theme.error("❌ No remote configured"))?;
            self.blank()?;
            return Ok(None);
        };

        let remote = self.config.repo.default_remote.clone();
        if let Some(url) = fetch_url(remotes, &remote) {
            self.say(format!("🌐 Main remote: {url}"))?;
        }

        if self.config.repo.fetch_on_status {
            let fetched = self
                .run_network(&["fetch", remote.as_str()], &format!("Fetching {remote}..."))
                .await;
            if !fetched.succeeded() {
                self.say(theme.warn(&format!("⚠️  Could not fetch {remote}")))?;
            }
        }

        let (ahead, behind) = ahead_behind(&self.git, self.ctx.dir(), UPSTREAM).await;
        for line in sync_lines(ahead, behind) {
            self.say(line)?;
        }

        let last_fetch = self
            .run(&["log", "-1", "--pretty=format:%ar", "FETCH_HEAD"])
            .await;
        if let Some(age) = last_fetch.ok_text().filter(|t| !t.is_empty()) {
            self.say(format!("🕐 Last fetch: {age}"))?;
        }
        self.blank()?;
        Ok(Some((ahead, behind)))
    }

    async fn status_recent_activity(&mut self) -> io::Result<()> {
        let theme = self.theme;
        self.say(theme.heading("📈 RECENT ACTIVITY"))?;

        let color = self.color_flag();
        let commits = self
            .run(&[
                "log",
                color,
                "-3",
                "--pretty=format:%C(yellow)%h%C(reset) %s %C(cyan)(%an, %ar)%C(reset)",
            ])
            .await;
        let commits: Vec<String> = commits.ok_lines().map(|l| format!("   {l}")).collect();
        if !commits.is_empty() {
            self.say(theme.ok("📦 Latest commits:"))?;
            for line in commits {
                self.say(line)?;
            }
        }

        let contributors = self
            .run(&["shortlog", "-sn", "--since=1.week.ago", "HEAD"])
            .await;
        let contributors: Vec<String> = contributors
            .ok_lines()
            .map(|l| format!("   {}", l.trim()))
            .collect();
        if contributors.len() > 1 {
            self.say(theme.accent("👥 Activity this week:"))?;
            for line in contributors.into_iter().take(3) {
                self.say(line)?;
            }
        }
        self.blank()
    }

    fn status_suggestions(&mut self, snapshot: &RepositorySnapshot) -> io::Result<()> {
        let theme = self.theme;
        self.say(theme.warn("💡 SUGGESTIONS"))?;

        let found = suggestions(
            snapshot,
            |branch| self.config.repo.is_trunk(branch),
            self.config.ui.suggestion_limit,
        );
        if found.is_empty() {
            self.say(theme.ok("   🎯 Everything looks fine! Keep up the good work."))?;
        }
        for suggestion in found {
            self.say(theme.warn(&format!("   {} {suggestion}", suggestion.icon())))?;
        }
        self.blank()?;

        self.say(theme.accent("⚡ QUICK ACTIONS:"))?;
        self.say("   S = Refresh this status  C = Commits  F = Files  B = Branches  R = Remote")
    }
}
