// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::hooks::{
    create_hook, disable, enable_sample, hook_template, hooks_dir, list_hooks, read_hook,
    validate_hook_name,
};
use super::ignore::{
    BASIC_IGNORE, append_ignore_patterns, ignore_path, read_ignore, validate_patterns,
    write_basic_ignore,
};
use crate::error::{FsError, GitError, GitmanError};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn patterns(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn fake_repo_with_hooks() -> TempDir {
    let temp = temp_dir();
    let hooks = hooks_dir(temp.path());
    std::fs::create_dir_all(&hooks).unwrap();
    std::fs::write(hooks.join("pre-commit.sample"), "#!/bin/sh\nexit 0\n").unwrap();
    std::fs::write(hooks.join("commit-msg.sample"), "#!/bin/sh\nexit 1\n").unwrap();
    temp
}

// =============================================================================
// ignore file
// =============================================================================

#[tokio::test]
async fn test_append_creates_file() {
    let temp = temp_dir();
    let written = append_ignore_patterns(temp.path(), &patterns(&["target/", "*.log"]))
        .await
        .unwrap();

    assert_eq!(written, 2);
    let content = read_ignore(temp.path()).await.unwrap();
    assert_eq!(content, "target/\n*.log\n");
}

#[tokio::test]
async fn test_append_after_existing_content_in_order() {
    let temp = temp_dir();
    std::fs::write(ignore_path(temp.path()), "node_modules/\n").unwrap();

    append_ignore_patterns(temp.path(), &patterns(&["a", "b", "c"]))
        .await
        .unwrap();

    let content = read_ignore(temp.path()).await.unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines, ["node_modules/", "a", "b", "c"]);
}

#[tokio::test]
async fn test_append_inserts_missing_trailing_newline() {
    let temp = temp_dir();
    std::fs::write(ignore_path(temp.path()), "dist").unwrap();

    append_ignore_patterns(temp.path(), &patterns(&["*.tmp"]))
        .await
        .unwrap();

    let content = read_ignore(temp.path()).await.unwrap();
    assert_eq!(content, "dist\n*.tmp\n");
}

#[tokio::test]
async fn test_append_rejects_invalid_glob_without_writing() {
    let temp = temp_dir();
    std::fs::write(ignore_path(temp.path()), "keep\n").unwrap();

    let err = append_ignore_patterns(temp.path(), &patterns(&["ok", "a{b"]))
        .await
        .unwrap_err();

    assert!(
        matches!(&err, GitmanError::Fs(fs) if matches!(**fs, FsError::InvalidPattern { ref pattern, .. } if pattern == "a{b")),
        "unexpected error: {err}"
    );
    assert_eq!(read_ignore(temp.path()).await.unwrap(), "keep\n");
}

#[test]
fn test_validate_patterns_rejects_bad_globs() {
    let temp = temp_dir();
    for bad in ["a{b", "[z-a]", "a\\"] {
        assert!(
            validate_patterns(temp.path(), &patterns(&[bad])).is_err(),
            "{bad} should be rejected"
        );
    }
    validate_patterns(temp.path(), &patterns(&["*.log", "/target", "!keep.log", "broken["]))
        .unwrap();
}

#[tokio::test]
async fn test_append_nothing_is_noop() {
    let temp = temp_dir();
    assert_eq!(append_ignore_patterns(temp.path(), &[]).await.unwrap(), 0);
    assert!(!ignore_path(temp.path()).exists());
}

#[tokio::test]
async fn test_read_missing_ignore_is_not_found() {
    let temp = temp_dir();
    let err = read_ignore(temp.path()).await.unwrap_err();
    assert!(matches!(&err, GitmanError::Fs(fs) if matches!(**fs, FsError::NotFound(_))));
}

#[tokio::test]
async fn test_basic_ignore_overwrites() {
    let temp = temp_dir();
    std::fs::write(ignore_path(temp.path()), "old\n").unwrap();

    write_basic_ignore(temp.path()).await.unwrap();

    let content = read_ignore(temp.path()).await.unwrap();
    assert_eq!(content, BASIC_IGNORE);
    assert!(content.contains("node_modules/"));
    assert!(content.contains(".env"));
}

// =============================================================================
// hooks
// =============================================================================

#[test]
fn test_hook_name_validation() {
    for name in ["pre-commit", "post-merge", "my.hook"] {
        assert!(validate_hook_name(name).is_ok(), "{name} should be valid");
    }
    for name in ["", ".", "../config", "a/b", "a\\b", "..", "x..y"] {
        let err = validate_hook_name(name).unwrap_err();
        assert!(
            matches!(&err, GitmanError::Git(g) if matches!(**g, GitError::InvalidHookName { .. })),
            "{name} should be rejected"
        );
    }
}

#[tokio::test]
async fn test_list_hooks_sorted_with_state() {
    let temp = fake_repo_with_hooks();
    std::fs::write(hooks_dir(temp.path()).join("pre-push"), "#!/bin/sh\n").unwrap();

    let hooks = list_hooks(temp.path()).await.unwrap();
    let listed: Vec<_> = hooks.iter().map(|h| (h.name.as_str(), h.active)).collect();
    assert_eq!(
        listed,
        [
            ("commit-msg.sample", false),
            ("pre-commit.sample", false),
            ("pre-push", true),
        ]
    );
}

#[tokio::test]
async fn test_enable_then_disable_sample() {
    let temp = fake_repo_with_hooks();

    enable_sample(temp.path(), "pre-commit").await.unwrap();
    let hook = hooks_dir(temp.path()).join("pre-commit");
    assert_eq!(std::fs::read_to_string(&hook).unwrap(), "#!/bin/sh\nexit 0\n");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(&hook).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    disable(temp.path(), "pre-commit").await.unwrap();
    assert!(!hook.exists());
    assert!(hooks_dir(temp.path()).join("pre-commit.sample").exists());
}

#[tokio::test]
async fn test_enable_missing_sample() {
    let temp = fake_repo_with_hooks();
    let err = enable_sample(temp.path(), "post-rewrite").await.unwrap_err();
    assert_eq!(err.to_string(), "git error: sample hook not found: post-rewrite.sample");
}

#[tokio::test]
async fn test_disable_missing_hook() {
    let temp = fake_repo_with_hooks();
    assert!(disable(temp.path(), "pre-push").await.is_err());
}

#[tokio::test]
async fn test_create_and_read_hook() {
    let temp = fake_repo_with_hooks();

    create_hook(temp.path(), "post-commit").await.unwrap();
    let content = read_hook(temp.path(), "post-commit").await.unwrap();

    assert!(content.starts_with("#!/bin/sh\n# Custom hook: post-commit\n# Created "));
    assert!(content.contains("echo \"Running hook post-commit\""));
    assert!(content.ends_with("exit 0\n"));
}

#[tokio::test]
async fn test_create_hook_rejects_traversal() {
    let temp = fake_repo_with_hooks();
    assert!(create_hook(temp.path(), "../../escape").await.is_err());
    assert!(!temp.path().join("escape").exists());
}

#[test]
fn test_hook_template_timestamp_shape() {
    let template = hook_template("x");
    let created = template
        .lines()
        .find_map(|line| line.strip_prefix("# Created "))
        .unwrap();
    assert!(chrono::NaiveDateTime::parse_from_str(created, "%Y-%m-%d %H:%M:%S").is_ok());
}
