// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use crate::config::Config;
use clap::Parser;
use std::collections::HashMap;
use std::path::PathBuf;

#[test]
fn test_parse_no_command_opens_menu() {
    let cli = Cli::try_parse_from(["gitman"]).unwrap();
    assert!(cli.command.is_none());
    assert!(cli.global.directory.is_none());
    assert!(cli.global.configs.is_empty());
    assert!(!cli.global.no_color);
}

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["gitman", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_status_json() {
    let cli = Cli::try_parse_from(["gitman", "status", "--json"]).unwrap();
    let Some(Command::Status(args)) = cli.command else {
        panic!("expected status command");
    };
    assert!(args.json);

    let cli = Cli::try_parse_from(["gitman", "status"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Status(args)) if !args.json));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "gitman",
        "-C",
        "/tmp/repo",
        "-c",
        "a.toml",
        "--config",
        "b.toml",
        "-t",
        "30",
        "--no-color",
        "--no-clear",
        "-l",
        "4",
        "--log-file",
        "gitman.log",
        "--file-log-level",
        "5",
    ])
    .unwrap();

    let global = cli.global;
    assert_eq!(global.directory, Some(PathBuf::from("/tmp/repo")));
    assert_eq!(
        global.configs,
        [PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    assert_eq!(global.timeout, Some(30));
    assert!(global.no_color);
    assert!(global.no_clear);
    assert_eq!(global.log_level, Some(4));
    assert_eq!(global.log_file, Some(PathBuf::from("gitman.log")));
    assert_eq!(global.file_log_level, Some(5));
}

#[test]
fn test_parse_rejects_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["gitman", "-l", "7"]).is_err());
    assert!(Cli::try_parse_from(["gitman", "--file-log-level", "9"]).is_err());
}

#[test]
fn test_parse_rejects_unknown_command() {
    assert!(Cli::try_parse_from(["gitman", "build"]).is_err());
}

#[test]
fn test_overrides_beat_environment() {
    let cli = Cli::try_parse_from(["gitman", "-t", "15", "--no-color", "--no-clear"]).unwrap();
    let env = HashMap::from([("GITMAN_GIT__TIMEOUT_SECS".to_string(), "60".to_string())]);
    let loader = Config::builder()
        .with_env_prefix("GITMAN")
        .with_env_source(env);

    let config = cli.global.apply_overrides(loader).unwrap().build().unwrap();
    assert_eq!(config.git.timeout_secs, 15);
    assert!(!config.ui.color);
    assert!(!config.ui.clear_screen);
}

#[test]
fn test_no_overrides_keep_defaults() {
    let cli = Cli::try_parse_from(["gitman"]).unwrap();
    let config = cli
        .global
        .apply_overrides(Config::builder())
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config, Config::default());
}
