// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Executor returning canned output per argument list.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use super::exec::{CommandOutput, GitExecutor};

#[derive(Debug, Default)]
pub(crate) struct ScriptedGit {
    responses: HashMap<String, CommandOutput>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedGit {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Answers `args` (space-joined) with a successful output.
    pub(crate) fn ok(mut self, args: &str, text: &str) -> Self {
        self.responses
            .insert(args.to_string(), CommandOutput::ok(text));
        self
    }

    pub(crate) fn fail(mut self, args: &str, text: &str) -> Self {
        self.responses
            .insert(args.to_string(), CommandOutput::failed(text));
        self
    }

    /// Every invocation so far, space-joined.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl GitExecutor for ScriptedGit {
    async fn execute(&self, args: &[&str], _dir: &Path) -> CommandOutput {
        let key = args.join(" ");
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(key.clone());
        self.responses
            .get(&key)
            .cloned()
            .unwrap_or_else(|| CommandOutput::failed(format!("unscripted: git {key}")))
    }
}
