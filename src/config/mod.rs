// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for gitman.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. gitman.toml (start directory, optional)
//! 3. --config FILE (repeatable, required)
//! 4. GITMAN_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! GITMAN_GIT__TIMEOUT_SECS=30          → git.timeout_secs = 30
//! GITMAN_UI__COLOR=false               → ui.color = false
//! GITMAN_REPO__TRUNK_BRANCHES=main,dev → repo.trunk_branches = ["main", "dev"]
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{GitConfig, RepoConfig, UiConfig};

/// Name of the optional per-directory configuration file.
pub const LOCAL_CONFIG_FILE: &str = "gitman.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "GITMAN";

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub git: GitConfig,
    pub ui: UiConfig,
    pub repo: RepoConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gitman::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("gitman.toml")
    ///     .with_env_prefix("GITMAN")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for the first offending key.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.ui.suggestion_limit == 0 {
            return Err(invalid("ui", "suggestion_limit", "must be at least 1"));
        }
        if self.repo.trunk_branches.is_empty() {
            return Err(invalid("repo", "trunk_branches", "must not be empty"));
        }
        if self.git.program.trim().is_empty() {
            return Err(invalid("git", "program", "must not be empty"));
        }
        if self.repo.default_remote.trim().is_empty() {
            return Err(invalid("repo", "default_remote", "must not be empty"));
        }
        Ok(())
    }
}

fn invalid(section: &str, key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        message: message.to_string(),
    }
}
