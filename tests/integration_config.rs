// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic files on disk.

use std::collections::HashMap;
use std::fs;
use std::time::Duration;

use gitman::config::{Config, ENV_PREFIX, LOCAL_CONFIG_FILE};

const TEAM_CONFIG: &str = r#"
[git]
timeout_secs = 45
network_timeout_secs = 0

[ui]
color = false
suggestion_limit = 2

[repo]
trunk_branches = ["main", "develop"]
default_remote = "upstream"
fetch_on_status = false
"#;

#[test]
fn config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(LOCAL_CONFIG_FILE);
    fs::write(&path, TEAM_CONFIG).unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.git.timeout(), Some(Duration::from_secs(45)));
    assert_eq!(config.git.network_timeout(), None);
    assert!(!config.ui.color);
    assert!(config.ui.clear_screen);
    assert_eq!(config.ui.suggestion_limit, 2);
    assert!(config.repo.is_trunk("develop"));
    assert!(!config.repo.is_trunk("master"));
    assert_eq!(config.repo.default_remote, "upstream");
    assert!(!config.repo.fetch_on_status);
}

#[test]
fn config_layers_local_file_extra_file_and_env() {
    let dir = tempfile::tempdir().unwrap();
    let local = dir.path().join(LOCAL_CONFIG_FILE);
    let extra = dir.path().join("extra.toml");
    fs::write(&local, TEAM_CONFIG).unwrap();
    fs::write(&extra, "[ui]\nsuggestion_limit = 3\n").unwrap();

    let env = HashMap::from([
        ("GITMAN_REPO__DEFAULT_REMOTE".to_string(), "fork".to_string()),
        ("OTHER_VAR".to_string(), "ignored".to_string()),
    ]);
    let config = Config::builder()
        .add_toml_file_optional(&local)
        .add_toml_file(&extra)
        .with_env_prefix(ENV_PREFIX)
        .with_env_source(env)
        .build()
        .unwrap();

    assert_eq!(config.git.timeout_secs, 45);
    assert_eq!(config.ui.suggestion_limit, 3);
    assert_eq!(config.repo.default_remote, "fork");
}

#[test]
fn config_missing_optional_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::builder()
        .add_toml_file_optional(dir.path().join(LOCAL_CONFIG_FILE))
        .build()
        .unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn config_invalid_toml_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(LOCAL_CONFIG_FILE);
    fs::write(&path, "[git\ntimeout_secs = ").unwrap();
    assert!(Config::from_file(&path).is_err());
}

#[test]
fn config_rejects_empty_remote() {
    let err = Config::parse("[repo]\ndefault_remote = \"  \"\n").unwrap_err();
    assert!(format!("{err:#}").contains("default_remote"));
}
