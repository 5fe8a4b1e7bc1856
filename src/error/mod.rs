// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            GitmanError (~24 bytes)
//!                     |
//!   +--------+--------+--------+--------+------+
//!   |        |        |        |        |      |
//!   v        v        v        v        v      v
//! Bailed    Git    Process   Config    Fs   Io/Other
//!           Box      Box      Box      Box  Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Git      NotARepository, CommandFailed, InvalidHookName
//!   Process  SpawnFailed, Failed, Timeout, OutputError
//!   Config   ParseError, InvalidValue
//!   Fs       NotFound, NotADirectory, InvalidPattern, IoError
//! ```
//!
//! The menu only ever shows two kinds of failure to the user: "not a
//! repository" and "command failed" with git's own output. Everything else
//! surfaces at the application boundary through `anyhow`.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`GitmanError`].
pub type GitmanResult<T> = std::result::Result<T, GitmanError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum GitmanError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Create a fatal [`GitmanError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> GitmanError {
    GitmanError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for GitmanError {
                fn from(err: $error) -> Self {
                    GitmanError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    ProcessError => Process,
    ConfigError => Config,
    FsError => Fs,
    std::io::Error => Io,
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// The directory has no `.git` metadata directory.
    #[error("not a git repository: {path}")]
    NotARepository { path: String },

    /// Git command exited unsuccessfully; `message` is git's own output.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Hook name would escape the hooks directory.
    #[error("invalid hook name: '{name}'")]
    InvalidHookName { name: String },

    /// Sample hook to activate does not exist.
    #[error("sample hook not found: {name}.sample")]
    SampleHookNotFound { name: String },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exceeded its deadline and was killed.
    #[error("{command} timed out after {timeout_secs} seconds")]
    Timeout { command: String, timeout_secs: u64 },

    /// Process exited with a code outside the accepted set.
    #[error("{command} exited with code {code}")]
    Failed { command: String, code: i32 },

    /// Failed to read process output.
    #[error("failed to read output from process '{command}': {message}")]
    OutputError { command: String, message: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration sources.
    #[error("failed to parse config '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// Path exists but is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(String),

    /// Ignore pattern rejected by the glob parser.
    #[error("invalid ignore pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::NotFound(path.display().to_string());
        }
        Self::IoError {
            path: path.display().to_string(),
            source,
        }
    }
}
