// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Running a configured process.
//!
//! ```text
//! run_with_cancellation(token)
//!        |
//!   spawn (stdin null, pipes, kill_on_drop)
//!   both pipes drained on their own tasks
//!        |
//!   select! { exit | deadline | token }
//!        |       |          |
//!        |   kill, Err    kill, interrupted output
//!        v
//!   exit code checked unless ALLOW_FAILURE
//! ```

use std::process::Stdio;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

use super::builder::{ProcessBuilder, ProcessFlags, ProcessOutput};
use crate::error::ProcessError;

/// How long readers may keep draining pipes after the child was killed.
///
/// Grandchildren (ssh, credential helpers) can hold the pipes open.
const DRAIN_GRACE: Duration = Duration::from_secs(2);

enum Outcome {
    Exited(i32),
    TimedOut,
    Cancelled,
}

impl ProcessBuilder {
    fn display_name(&self) -> String {
        self.name_override().map_or_else(
            || {
                self.program().file_stem().map_or_else(
                    || "process".to_string(),
                    |s| s.to_string_lossy().into_owned(),
                )
            },
            String::from,
        )
    }

    /// Command line as shown in logs and errors, e.g. `git commit -m "fix it"`.
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut parts = vec![self.display_name()];
        parts.extend(self.args_slice().iter().map(|arg| {
            if arg.is_empty() || arg.contains(' ') {
                format!("\"{arg}\"")
            } else {
                arg.clone()
            }
        }));
        parts.join(" ")
    }

    /// Runs the process until it exits, its deadline passes or `token` is
    /// cancelled.
    ///
    /// Cancellation kills the child and returns the output gathered so far
    /// with `is_interrupted() == true`. An already cancelled token never
    /// spawns anything.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Spawning the child process fails.
    /// - The deadline passes (the child is killed).
    /// - The exit code is non-zero and `ALLOW_FAILURE` is not set.
    pub async fn run_with_cancellation(
        self,
        token: CancellationToken,
    ) -> std::result::Result<ProcessOutput, ProcessError> {
        if token.is_cancelled() {
            return Ok(ProcessOutput::interrupted(String::new(), String::new()));
        }

        let cmd_line = self.command_line();
        match self.working_dir() {
            Some(cwd) => debug!(cmd = %cmd_line, cwd = %cwd.display(), "exec"),
            None => debug!(cmd = %cmd_line, "exec"),
        }

        let mut child = self
            .build_command()
            .spawn()
            .map_err(|source| ProcessError::SpawnFailed {
                command: cmd_line.clone(),
                source,
            })?;
        trace!(cmd = %cmd_line, pid = ?child.id(), "spawned");

        let stdout_reader = spawn_reader(child.stdout.take());
        let stderr_reader = spawn_reader(child.stderr.take());

        let outcome = wait_for_exit(&mut child, self.timeout_duration(), &token)
            .await
            .map_err(|e| ProcessError::OutputError {
                command: cmd_line.clone(),
                message: e.to_string(),
            })?;

        let killed = !matches!(outcome, Outcome::Exited(_));
        let stdout = collect(stdout_reader, killed).await;
        let stderr = collect(stderr_reader, killed).await;

        let output = match outcome {
            Outcome::Exited(code) => ProcessOutput::new(code, stdout, stderr),
            Outcome::Cancelled => {
                warn!(cmd = %cmd_line, "interrupted");
                return Ok(ProcessOutput::interrupted(stdout, stderr));
            }
            Outcome::TimedOut => {
                let timeout_secs = self.timeout_duration().map_or(0, |d| d.as_secs());
                warn!(cmd = %cmd_line, timeout = timeout_secs, "timed out");
                return Err(ProcessError::Timeout {
                    command: cmd_line,
                    timeout_secs,
                });
            }
        };

        if !self.process_flags().contains(ProcessFlags::ALLOW_FAILURE) && !output.success() {
            debug!(cmd = %cmd_line, exit_code = output.exit_code(), stderr = %output.stderr(), "failed");
            return Err(ProcessError::Failed {
                command: cmd_line,
                code: output.exit_code(),
            });
        }

        trace!(cmd = %cmd_line, exit_code = output.exit_code(), "completed");
        Ok(output)
    }

    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());
        command.args(self.args_slice());
        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }
        command.envs(self.env_overrides());
        command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }
}

/// Reads a whole pipe so neither stream can fill up and stall the child.
fn spawn_reader<R>(pipe: Option<R>) -> Option<JoinHandle<Vec<u8>>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    pipe.map(|mut pipe| {
        tokio::spawn(async move {
            let mut buf = Vec::new();
            if let Err(e) = pipe.read_to_end(&mut buf).await {
                debug!(error = %e, "error reading process pipe");
            }
            buf
        })
    })
}

async fn collect(reader: Option<JoinHandle<Vec<u8>>>, killed: bool) -> String {
    let Some(mut handle) = reader else {
        return String::new();
    };
    let bytes = if killed {
        if let Ok(joined) = tokio::time::timeout(DRAIN_GRACE, &mut handle).await {
            joined.unwrap_or_default()
        } else {
            handle.abort();
            Vec::new()
        }
    } else {
        handle.await.unwrap_or_default()
    };
    String::from_utf8_lossy(&bytes).into_owned()
}

async fn wait_for_exit(
    child: &mut Child,
    timeout: Option<Duration>,
    token: &CancellationToken,
) -> std::io::Result<Outcome> {
    let deadline = async {
        match timeout {
            Some(duration) => tokio::time::sleep(duration).await,
            None => std::future::pending().await,
        }
    };

    let outcome = tokio::select! {
        status = child.wait() => return Ok(Outcome::Exited(status?.code().unwrap_or(-1))),
        () = deadline => Outcome::TimedOut,
        () = token.cancelled() => Outcome::Cancelled,
    };

    child.kill().await.ok();
    child.wait().await?;
    Ok(outcome)
}
