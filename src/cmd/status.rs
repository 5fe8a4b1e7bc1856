// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `gitman status`: one snapshot, printed as text or JSON.

use anyhow::Context;
use serde::Serialize;
use tracing::debug;

use crate::cli::status::StatusArgs;
use crate::config::Config;
use crate::error::{GitError, GitmanError, Result};
use crate::git::context::RepoContext;
use crate::git::exec::GitExecutor;
use crate::git::snapshot::RepositorySnapshot;
use crate::git::status::FileCounts;
use crate::git::suggest::{Suggestion, suggestions};
use crate::ui::display_branch;
use crate::ui::status::sync_lines;

/// Everything the status command reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub repository: String,
    pub directory: String,
    pub snapshot: RepositorySnapshot,
    pub counts: FileCounts,
    pub suggestions: Vec<Suggestion>,
}

impl StatusReport {
    /// Captures a snapshot of `ctx` and derives counts and suggestions.
    ///
    /// # Errors
    ///
    /// Returns `GitError::NotARepository` outside a repository.
    pub async fn capture<G: GitExecutor>(
        git: &G,
        ctx: &RepoContext,
        config: &Config,
    ) -> std::result::Result<Self, GitmanError> {
        if !ctx.is_repository() {
            return Err(GitError::NotARepository {
                path: ctx.dir().display().to_string(),
            }
            .into());
        }
        let snapshot = RepositorySnapshot::capture(git, ctx.dir()).await;
        let found = suggestions(
            &snapshot,
            |branch| config.repo.is_trunk(branch),
            config.ui.suggestion_limit,
        );
        debug!(branch = %snapshot.branch, suggestions = found.len(), "status captured");
        Ok(Self {
            repository: ctx.name(),
            directory: ctx.dir().display().to_string(),
            counts: snapshot.counts(),
            snapshot,
            suggestions: found,
        })
    }

    /// Plain-text rendering for terminals and pipes.
    #[must_use]
    pub fn render(&self) -> String {
        let counts = &self.counts;
        let mut lines = vec![
            format!("Repository:  {} ({})", self.repository, self.directory),
            format!("Branch:      {}", display_branch(&self.snapshot.branch)),
            format!(
                "Last commit: {}",
                self.snapshot.last_commit_age.as_deref().unwrap_or("none")
            ),
            format!(
                "Files:       {} staged, {} modified, {} untracked, {} added, {} deleted, {} renamed",
                counts.staged,
                counts.modified,
                counts.untracked,
                counts.added,
                counts.deleted,
                counts.renamed
            ),
        ];
        lines.extend(sync_lines(self.snapshot.ahead, self.snapshot.behind));
        if self.suggestions.is_empty() {
            lines.push("Suggestions: none".to_string());
        } else {
            lines.push("Suggestions:".to_string());
            lines.extend(
                self.suggestions
                    .iter()
                    .map(|s| format!("  {} {s}", s.icon())),
            );
        }
        lines.join("\n") + "\n"
    }
}

/// Handler for `gitman status`.
///
/// # Errors
///
/// Returns an error outside a repository or if JSON encoding fails.
pub async fn run_status_command<G: GitExecutor>(
    args: &StatusArgs,
    config: &Config,
    ctx: &RepoContext,
    git: &G,
) -> Result<()> {
    let report = StatusReport::capture(git, ctx, config).await?;
    if args.json {
        let json = serde_json::to_string_pretty(&report).context("failed to encode status")?;
        println!("{json}");
    } else {
        print!("{}", report.render());
    }
    Ok(())
}
