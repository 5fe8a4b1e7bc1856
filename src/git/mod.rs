// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git access and repository state.
//!
//! ```text
//!   snapshot.rs    suggest.rs    stats.rs
//!  (state query)  (next steps)  (log parsing)
//!        \            |
//!         v           v
//!      status.rs (porcelain, Category, counts)
//!        |
//!        v
//!      ,-------------------,
//!      | exec (GitExecutor) |
//!      '---------+---------'
//!                |
//!                v
//!            ShellGit --> core::process (timeout, Ctrl-C)
//!
//!   context.rs  RepoContext: explicit working directory
//!   files/      .gitignore and .git/hooks, edited directly
//! ```

pub mod context;
pub mod exec;
pub mod files;
pub mod snapshot;
pub mod stats;
pub mod status;
pub mod suggest;

#[cfg(test)]
pub(crate) mod scripted;

pub use context::RepoContext;
pub use exec::{CommandOutput, GitExecutor, ShellGit};
pub use snapshot::RepositorySnapshot;
pub use suggest::Suggestion;
