// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the `gitman` binary.

mod common;

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn gitman() -> Command {
    let mut cmd = Command::cargo_bin("gitman").unwrap();
    cmd.env_remove("GITMAN_GIT__TIMEOUT_SECS")
        .env_remove("GITMAN_UI__COLOR")
        .env_remove("GITMAN_REPO__TRUNK_BRANCHES");
    cmd
}

#[test]
fn cli_version_prints_package_version() {
    gitman()
        .arg("version")
        .assert()
        .success()
        .stdout(format!("{}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn cli_help_lists_commands() {
    gitman()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("--directory"));
}

#[test]
fn cli_status_outside_repository_fails() {
    let dir = tempfile::tempdir().unwrap();
    gitman()
        .args(["-C", dir.path().to_str().unwrap(), "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a git repository"));
}

#[test]
fn cli_status_json_reports_branch_and_counts() {
    let repo = common::repo_with_commit();
    fs::write(repo.path().join("scratch.txt"), "x\n").unwrap();

    let output = gitman()
        .args(["-C", repo.path().to_str().unwrap(), "status", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["snapshot"]["branch"], "main");
    assert_eq!(json["counts"]["untracked"], 1);
    assert_eq!(json["snapshot"]["ahead"], serde_json::Value::Null);
}

#[test]
fn cli_status_text_lists_suggestions() {
    let repo = common::repo_with_commit();
    gitman()
        .current_dir(repo.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Branch:      main"))
        .stdout(predicate::str::contains("Working directory clean"));
}

#[test]
fn cli_local_config_file_is_loaded() {
    let repo = common::repo_with_commit();
    fs::write(repo.path().join("gitman.toml"), "[ui]\nsuggestion_limit = 0\n").unwrap();

    gitman()
        .args(["-C", repo.path().to_str().unwrap(), "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("suggestion_limit"));
}

#[test]
fn cli_menu_quits_on_zero() {
    let repo = common::repo_with_commit();
    gitman()
        .args(["-C", repo.path().to_str().unwrap(), "--no-clear", "--no-color"])
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("MAIN MENU"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn cli_menu_ends_at_end_of_input() {
    let repo = common::repo_with_commit();
    gitman()
        .args(["-C", repo.path().to_str().unwrap(), "--no-clear"])
        .write_stdin("")
        .assert()
        .success();
}

#[test]
fn cli_rejects_unknown_command() {
    gitman().arg("build").assert().failure();
}
