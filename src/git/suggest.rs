// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Suggestion engine.
//!
//! ```text
//! RepositorySnapshot
//!    |
//!    v  rules, in order
//! 1 changes && !staged          --> StageFiles
//! 2 staged                      --> Commit
//! 3 trunk && (changes||staged)  --> CreateFeatureBranch
//! 4 ahead > 0                   --> Push
//! 5 behind > 0                  --> Pull
//! 6 none yet && clean           --> CleanTreeNewBranch, ViewStatistics
//! 7 last commit day/week/month/year old --> CommitMoreOften
//!    |
//!    v
//! truncate(limit)
//! ```

use serde::Serialize;

use super::snapshot::RepositorySnapshot;

/// Default number of suggestions surfaced.
pub const DEFAULT_LIMIT: usize = 4;

/// Words in a relative commit age that mark it as stale.
const STALE_UNITS: [&str; 4] = ["day", "week", "month", "year"];

/// A recommended next action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Suggestion {
    StageFiles,
    Commit,
    CreateFeatureBranch,
    Push,
    Pull,
    CleanTreeNewBranch,
    ViewStatistics,
    CommitMoreOften,
}

impl Suggestion {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::StageFiles => "Files are modified -> type 'F' to stage them",
            Self::Commit => "Files are staged -> type 'C' to create a commit",
            Self::CreateFeatureBranch => {
                "You are working on the main branch -> type 'B' to create a feature branch"
            }
            Self::Push => "You have local commits -> type 'R' then '1' to push",
            Self::Pull => "Commits are available on the remote -> type 'R' then '2' to pull",
            Self::CleanTreeNewBranch => "Working directory clean -> good time to start a new branch",
            Self::ViewStatistics => "Type '8' to view project statistics",
            Self::CommitMoreOften => "Last commit is old -> consider committing more often",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::StageFiles => "📁",
            Self::Commit => "✅",
            Self::CreateFeatureBranch => "⚠️ ",
            Self::Push => "📤",
            Self::Pull => "📥",
            Self::CleanTreeNewBranch => "🎉",
            Self::ViewStatistics => "📊",
            Self::CommitMoreOften => "🕐",
        }
    }
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Computes suggestions for a snapshot.
///
/// `is_trunk` decides which branch names count as trunk; `limit` caps the
/// result, dropping the latest rules first.
pub fn suggestions(
    snapshot: &RepositorySnapshot,
    is_trunk: impl Fn(&str) -> bool,
    limit: usize,
) -> Vec<Suggestion> {
    let changes = snapshot.has_changes();
    let staged = snapshot.has_staged();
    let mut out = Vec::new();

    if changes && !staged {
        out.push(Suggestion::StageFiles);
    }
    if staged {
        out.push(Suggestion::Commit);
    }
    if is_trunk(&snapshot.branch) && (changes || staged) {
        out.push(Suggestion::CreateFeatureBranch);
    }
    if snapshot.ahead.or_zero() > 0 {
        out.push(Suggestion::Push);
    }
    if snapshot.behind.or_zero() > 0 {
        out.push(Suggestion::Pull);
    }
    if out.is_empty() && snapshot.is_clean() {
        out.push(Suggestion::CleanTreeNewBranch);
        out.push(Suggestion::ViewStatistics);
    }
    if snapshot
        .last_commit_age
        .as_deref()
        .is_some_and(is_stale_age)
    {
        out.push(Suggestion::CommitMoreOften);
    }

    out.truncate(limit);
    out
}

/// True when a relative age such as `2 weeks ago` is a day or older.
#[must_use]
pub fn is_stale_age(age: &str) -> bool {
    STALE_UNITS.iter().any(|unit| age.contains(unit))
}
