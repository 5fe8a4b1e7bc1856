// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command execution facility.
//!
//! ```text
//! GitExecutor::execute(args, dir)
//!        |
//!        v
//!    ShellGit
//!    GIT_TERMINAL_PROMPT=0, GCM_INTERACTIVE=never
//!    timeout: fetch/pull/push/clone/ls-remote --> network_timeout
//!             everything else                --> timeout
//!    Ctrl-C  --> Interrupter token
//!        |
//!        v
//!    CommandOutput { text: stdout + stderr, succeeded }
//! ```
//!
//! Nothing here returns an error: launch failures, timeouts and interruptions
//! all become `succeeded == false` with a diagnostic text, which is exactly
//! what the menus print.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, trace};

use crate::config::types::GitConfig;
use crate::core::interrupt::Interrupter;
use crate::core::process::builder::{ProcessBuilder, ProcessFlags};

/// Subcommands that talk to a remote and get the longer deadline.
pub const NETWORK_SUBCOMMANDS: &[&str] = &["fetch", "pull", "push", "clone", "ls-remote"];

/// Text shown when the user cancels a running command.
pub const INTERRUPTED_TEXT: &str = "interrupted";

/// Result of one git invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    text: String,
    succeeded: bool,
}

impl CommandOutput {
    pub fn new(text: impl Into<String>, succeeded: bool) -> Self {
        Self {
            text: text.into(),
            succeeded,
        }
    }

    pub fn ok(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }

    pub fn failed(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }

    /// Combined output, stdout first.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.succeeded
    }

    /// Output text when the command succeeded, `None` otherwise.
    #[must_use]
    pub fn ok_text(&self) -> Option<&str> {
        self.succeeded.then_some(self.text.as_str())
    }

    /// Non-empty lines of a successful command; empty on failure.
    pub fn ok_lines(&self) -> impl Iterator<Item = &str> {
        self.ok_text()
            .unwrap_or_default()
            .lines()
            .filter(|line| !line.trim().is_empty())
    }

    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

/// Runs git with arguments in a working directory.
///
/// Implemented by [`ShellGit`] for real use; tests substitute a scripted
/// executor so repository logic runs without spawning processes.
pub trait GitExecutor {
    fn execute(&self, args: &[&str], dir: &Path) -> impl Future<Output = CommandOutput> + Send;
}

/// Git CLI executor backed by [`ProcessBuilder`].
#[derive(Debug, Clone)]
pub struct ShellGit {
    program: PathBuf,
    timeout: Option<Duration>,
    network_timeout: Option<Duration>,
    interrupter: Interrupter,
}

impl ShellGit {
    /// Creates an executor from the `[git]` config section.
    ///
    /// The program is resolved through `PATH` once; an unresolvable name is
    /// kept as-is so the launch failure surfaces as command output.
    #[must_use]
    pub fn new(config: &GitConfig) -> Self {
        let program = ProcessBuilder::find(&config.program)
            .unwrap_or_else(|| PathBuf::from(&config.program));
        Self {
            program,
            timeout: config.timeout(),
            network_timeout: config.network_timeout(),
            interrupter: Interrupter::new(),
        }
    }

    /// Shares an interrupter with the Ctrl-C listener.
    #[must_use]
    pub fn with_interrupter(mut self, interrupter: Interrupter) -> Self {
        self.interrupter = interrupter;
        self
    }

    #[must_use]
    pub const fn interrupter(&self) -> &Interrupter {
        &self.interrupter
    }

    /// Deadline applying to `args`.
    #[must_use]
    pub fn timeout_for(&self, args: &[&str]) -> Option<Duration> {
        if is_network(args) {
            self.network_timeout
        } else {
            self.timeout
        }
    }

    fn builder(&self, args: &[&str], dir: &Path) -> ProcessBuilder {
        ProcessBuilder::new(&self.program)
            .name("git")
            .args(args)
            .cwd(dir)
            .env("GIT_TERMINAL_PROMPT", "0")
            .env("GCM_INTERACTIVE", "never")
            .flag(ProcessFlags::ALLOW_FAILURE)
            .maybe_timeout(self.timeout_for(args))
    }
}

impl GitExecutor for ShellGit {
    async fn execute(&self, args: &[&str], dir: &Path) -> CommandOutput {
        let builder = self.builder(args, dir);
        let guard = self.interrupter.begin();
        let result = builder.run_with_cancellation(guard.token()).await;
        drop(guard);

        let output = match result {
            Ok(output) if output.is_interrupted() => CommandOutput::failed(INTERRUPTED_TEXT),
            Ok(output) => CommandOutput::new(
                combine_streams(output.stdout(), output.stderr()),
                output.success(),
            ),
            Err(e) => CommandOutput::failed(e.to_string()),
        };

        if output.succeeded() {
            trace!(args = ?args, "git ok");
        } else {
            debug!(args = ?args, cwd = %dir.display(), output = %output.text(), "git failed");
        }
        output
    }
}

/// Returns true if the first argument names a remote-facing subcommand.
#[must_use]
pub fn is_network(args: &[&str]) -> bool {
    args.first()
        .is_some_and(|sub| NETWORK_SUBCOMMANDS.contains(sub))
}

/// Joins stdout and stderr and strips surrounding blank space.
///
/// Indentation of the first line survives: `status --porcelain` starts with a
/// space for worktree-only changes and the column matters.
#[must_use]
pub fn combine_streams(stdout: &str, stderr: &str) -> String {
    let stdout = tidy(stdout);
    let stderr = tidy(stderr);
    match (stdout.is_empty(), stderr.is_empty()) {
        (true, _) => stderr.to_string(),
        (_, true) => stdout.to_string(),
        _ => format!("{stdout}\n{stderr}"),
    }
}

fn tidy(text: &str) -> &str {
    let text = text.trim_end();
    let first_content = text
        .char_indices()
        .find(|&(_, c)| !c.is_whitespace())
        .map_or(text.len(), |(i, _)| i);
    // keep leading spaces of the first non-blank line only
    let line_start = text[..first_content].rfind('\n').map_or(0, |nl| nl + 1);
    &text[line_start..]
}
