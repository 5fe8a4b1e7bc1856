// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository state snapshot.
//!
//! ```text
//! RepositorySnapshot::capture(git, dir)
//!   branch --show-current           --> branch ("unknown" on failure)
//!   status --porcelain              --> entries
//!   diff --cached --name-only       --> staged
//!   rev-list --count @{u}..HEAD     --> ahead
//!   rev-list --count HEAD..@{u}     --> behind
//!   log -1 --pretty=format:%ar      --> last_commit_age
//! ```
//!
//! Snapshots are never cached; every status screen captures a new one.

use std::path::Path;

use serde::Serialize;

use super::exec::GitExecutor;
use super::status::{FileCounts, StatusEntry, UpstreamCount, parse_porcelain};

/// Branch name reported when `git branch --show-current` fails.
pub const UNKNOWN_BRANCH: &str = "unknown";

/// Default upstream revision for ahead/behind counts.
pub const UPSTREAM: &str = "@{u}";

/// Returns true if `path/.git` exists.
///
/// Existence only: a broken repository still passes and later commands fail.
#[must_use]
pub fn is_repository(path: &Path) -> bool {
    path.join(".git").exists()
}

/// Current branch, or [`UNKNOWN_BRANCH`] when git fails.
///
/// A detached HEAD yields an empty string.
pub async fn current_branch<G: GitExecutor>(git: &G, dir: &Path) -> String {
    git.execute(&["branch", "--show-current"], dir)
        .await
        .ok_text()
        .map_or_else(|| UNKNOWN_BRANCH.to_string(), |text| text.trim().to_string())
}

/// Parsed `git status --porcelain`; empty when git fails.
pub async fn status_entries<G: GitExecutor>(git: &G, dir: &Path) -> Vec<StatusEntry> {
    git.execute(&["status", "--porcelain"], dir)
        .await
        .ok_text()
        .map(parse_porcelain)
        .unwrap_or_default()
}

/// Paths recorded in the index, from `git diff --cached --name-only`.
pub async fn staged_files<G: GitExecutor>(git: &G, dir: &Path) -> Vec<String> {
    git.execute(&["diff", "--cached", "--name-only"], dir)
        .await
        .ok_lines()
        .map(str::to_string)
        .collect()
}

/// Commits ahead of and behind `upstream`.
pub async fn ahead_behind<G: GitExecutor>(
    git: &G,
    dir: &Path,
    upstream: &str,
) -> (UpstreamCount, UpstreamCount) {
    let ahead_range = format!("{upstream}..HEAD");
    let behind_range = format!("HEAD..{upstream}");
    let ahead = git.execute(&["rev-list", "--count", &ahead_range], dir).await;
    let behind = git.execute(&["rev-list", "--count", &behind_range], dir).await;
    (
        UpstreamCount::parse(ahead.ok_text()),
        UpstreamCount::parse(behind.ok_text()),
    )
}

/// Relative age of the last commit, e.g. `3 days ago`.
pub async fn last_commit_age<G: GitExecutor>(git: &G, dir: &Path) -> Option<String> {
    git.execute(&["log", "-1", "--pretty=format:%ar"], dir)
        .await
        .ok_text()
        .map(str::trim)
        .filter(|age| !age.is_empty())
        .map(str::to_string)
}

/// Point-in-time view of a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositorySnapshot {
    pub branch: String,
    pub entries: Vec<StatusEntry>,
    pub staged: Vec<String>,
    pub ahead: UpstreamCount,
    pub behind: UpstreamCount,
    pub last_commit_age: Option<String>,
}

impl RepositorySnapshot {
    /// Queries git for every field.
    pub async fn capture<G: GitExecutor>(git: &G, dir: &Path) -> Self {
        let branch = current_branch(git, dir).await;
        let entries = status_entries(git, dir).await;
        let staged = staged_files(git, dir).await;
        let (ahead, behind) = ahead_behind(git, dir, UPSTREAM).await;
        let last_commit_age = last_commit_age(git, dir).await;
        Self {
            branch,
            entries,
            staged,
            ahead,
            behind,
            last_commit_age,
        }
    }

    #[must_use]
    pub fn counts(&self) -> FileCounts {
        FileCounts::from_entries(&self.entries)
    }

    /// Any porcelain entry at all, including unrecognized codes.
    #[must_use]
    pub const fn has_changes(&self) -> bool {
        !self.entries.is_empty()
    }

    #[must_use]
    pub const fn has_staged(&self) -> bool {
        !self.staged.is_empty()
    }

    #[must_use]
    pub const fn is_clean(&self) -> bool {
        !self.has_changes() && !self.has_staged()
    }
}
