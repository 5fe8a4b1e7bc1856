// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Working directory of a session.
//!
//! The process-wide current directory is never changed; every git
//! invocation receives the context's directory explicitly.

use std::path::{Path, PathBuf};

use crate::error::{FsError, GitmanResult};

/// Directory all commands of a session run in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoContext {
    dir: PathBuf,
}

impl RepoContext {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Context for the process's current directory.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the current directory cannot be read.
    pub fn current() -> GitmanResult<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Final path component, used as the repository name.
    #[must_use]
    pub fn name(&self) -> String {
        self.dir.file_name().map_or_else(
            || self.dir.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }

    #[must_use]
    pub fn is_repository(&self) -> bool {
        super::snapshot::is_repository(&self.dir)
    }

    /// Resolves `input` against this context and returns the new context.
    ///
    /// A leading `~` expands to the home directory; relative paths are
    /// taken from the current context.
    ///
    /// # Errors
    ///
    /// Returns `FsError::NotFound` if the path does not exist and
    /// `FsError::NotADirectory` if it is not a directory.
    pub fn change_dir(&self, input: &str) -> GitmanResult<Self> {
        let target = self.resolve(input.trim());
        let canonical = target
            .canonicalize()
            .map_err(|e| FsError::io(&target, e))?;
        if !canonical.is_dir() {
            return Err(FsError::NotADirectory(canonical.display().to_string()).into());
        }
        Ok(Self::new(canonical))
    }

    fn resolve(&self, input: &str) -> PathBuf {
        let expanded = expand_home(input);
        if expanded.is_absolute() {
            expanded
        } else {
            self.dir.join(expanded)
        }
    }
}

/// Expands `~` and `~/rest` using `HOME` (or `USERPROFILE`).
fn expand_home(input: &str) -> PathBuf {
    let rest = match input {
        "~" => Some(""),
        _ => input
            .strip_prefix("~/")
            .or_else(|| input.strip_prefix("~\\")),
    };
    match (rest, home_dir()) {
        (Some(rest), Some(home)) if rest.is_empty() => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(input),
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
}
