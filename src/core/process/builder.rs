// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process configuration.
//!
//! ```text
//! ProcessBuilder::new(program)   find(name) --> PATH lookup, cached
//!   .name()  .args()  .cwd()  .env()  .flag()  .maybe_timeout()
//!
//! ProcessFlags: ALLOW_FAILURE
//! stdout and stderr are always captured
//! ```

use bitflags::bitflags;
use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::{OnceLock, RwLock};
use std::time::Duration;

/// Resolved executable paths, keyed by the name asked for.
static EXECUTABLE_CACHE: OnceLock<RwLock<BTreeMap<String, PathBuf>>> = OnceLock::new();

fn exe_cache() -> &'static RwLock<BTreeMap<String, PathBuf>> {
    EXECUTABLE_CACHE.get_or_init(|| RwLock::new(BTreeMap::new()))
}

bitflags! {
    /// Flags controlling how the exit status is judged.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ProcessFlags: u32 {
        /// A non-zero exit code is returned as output, not as an error.
        const ALLOW_FAILURE = 0x01;
    }
}

/// Captured result of a finished or cancelled child.
#[derive(Debug, Clone, Default)]
pub struct ProcessOutput {
    exit_code: i32,
    stdout: String,
    stderr: String,
    interrupted: bool,
}

impl ProcessOutput {
    pub(super) const fn new(exit_code: i32, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            interrupted: false,
        }
    }

    pub(super) const fn interrupted(stdout: String, stderr: String) -> Self {
        Self {
            exit_code: -1,
            stdout,
            stderr,
            interrupted: true,
        }
    }

    /// Exit code, -1 when killed or ended by a signal.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }

    #[must_use]
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    #[must_use]
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// True when the cancellation token stopped the child.
    #[must_use]
    pub const fn is_interrupted(&self) -> bool {
        self.interrupted
    }

    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0 && !self.interrupted
    }
}

/// One child process to run.
#[derive(Debug)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<String>,
    cwd: Option<PathBuf>,
    /// Added on top of the inherited environment
    env: BTreeMap<String, String>,
    flags: ProcessFlags,
    /// Display name for logs and error messages
    name: Option<String>,
    timeout: Option<Duration>,
}

impl ProcessBuilder {
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            cwd: None,
            env: BTreeMap::new(),
            flags: ProcessFlags::empty(),
            name: None,
            timeout: None,
        }
    }

    /// Full path of `program` on `PATH`; lookups are cached.
    #[must_use]
    pub fn find(program: &str) -> Option<PathBuf> {
        {
            let cache = exe_cache()
                .read()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            if let Some(path) = cache.get(program) {
                return Some(path.clone());
            }
        }

        let path = which::which(program).ok()?;
        exe_cache()
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(program.to_string(), path.clone());
        Some(path)
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args.extend(
            args.into_iter()
                .map(|arg| arg.as_ref().to_string_lossy().into_owned()),
        );
        self
    }

    #[must_use]
    pub fn cwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn flag(mut self, flag: ProcessFlags) -> Self {
        self.flags |= flag;
        self
    }

    /// Name shown in logs instead of the program's file stem.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Kill deadline; `None` waits indefinitely.
    #[must_use]
    pub const fn maybe_timeout(mut self, duration: Option<Duration>) -> Self {
        self.timeout = duration;
        self
    }

    pub(super) const fn program(&self) -> &PathBuf {
        &self.program
    }

    pub(super) fn args_slice(&self) -> &[String] {
        &self.args
    }

    pub(super) const fn working_dir(&self) -> Option<&PathBuf> {
        self.cwd.as_ref()
    }

    pub(super) const fn env_overrides(&self) -> &BTreeMap<String, String> {
        &self.env
    }

    pub(super) const fn process_flags(&self) -> ProcessFlags {
        self.flags
    }

    pub(super) fn name_override(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub(super) const fn timeout_duration(&self) -> Option<Duration> {
        self.timeout
    }
}
