// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning and management.
//!
//! ```text
//! ProcessBuilder::new("git")
//!   .args() .cwd() .env() .maybe_timeout()
//!   .run_with_cancellation(token)
//!       --> tokio::process::Command (kill_on_drop)
//!           drain stdout/stderr concurrently
//!       --> ProcessOutput { exit_code, stdout, stderr }
//! ```

pub mod builder;
mod runner;
