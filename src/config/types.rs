// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration sections.
//!
//! ```text
//! Config: GitConfig [git], UiConfig [ui], RepoConfig [repo]
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How `git` is launched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitConfig {
    /// Program name or path, resolved through `PATH`.
    pub program: String,
    /// Deadline for local commands in seconds (0 disables).
    pub timeout_secs: u64,
    /// Deadline for fetch, pull and push in seconds (0 disables).
    pub network_timeout_secs: u64,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
            timeout_secs: 120,
            network_timeout_secs: 300,
        }
    }
}

impl GitConfig {
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        secs_to_timeout(self.timeout_secs)
    }

    #[must_use]
    pub const fn network_timeout(&self) -> Option<Duration> {
        secs_to_timeout(self.network_timeout_secs)
    }
}

const fn secs_to_timeout(secs: u64) -> Option<Duration> {
    if secs == 0 {
        None
    } else {
        Some(Duration::from_secs(secs))
    }
}

/// Terminal presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    pub color: bool,
    /// Clear the screen before each menu.
    pub clear_screen: bool,
    /// Maximum number of suggestions shown.
    pub suggestion_limit: usize,
    /// Modified files listed on the status screen before "... and N more".
    pub modified_preview: usize,
    /// Untracked files listed on the status screen before "... and N more".
    pub untracked_preview: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: true,
            clear_screen: true,
            suggestion_limit: 4,
            modified_preview: 10,
            untracked_preview: 5,
        }
    }
}

/// Repository conventions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RepoConfig {
    /// Branch names treated as trunk.
    pub trunk_branches: Vec<String>,
    pub default_remote: String,
    /// Run a silent `git fetch` before showing remote sync state.
    pub fetch_on_status: bool,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            trunk_branches: vec!["main".to_string(), "master".to_string()],
            default_remote: "origin".to_string(),
            fetch_on_status: true,
        }
    }
}

impl RepoConfig {
    /// Returns true if `branch` is one of the configured trunk names.
    #[must_use]
    pub fn is_trunk(&self, branch: &str) -> bool {
        self.trunk_branches.iter().any(|t| t == branch)
    }
}
