// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use tempfile::TempDir;

use super::commit::ResetMode;
use super::files::file_status_line;
use super::menu::MainChoice;
use super::stash::StashScope;
use super::stats::{HistoryFormat, HistorySearch};
use super::status::{
    FileGroups, QuickHint, fetch_url, quick_hints, quick_status_line, staged_kind, stat_file_lines,
    sync_lines,
};
use super::theme::{Theme, color_allowed};
use super::tools::ArchiveFormat;
use super::{Session, display_branch, parse_count, split_names, stash_ref};
use crate::config::Config;
use crate::git::context::RepoContext;
use crate::git::scripted::ScriptedGit;
use crate::git::status::{Category, FileCounts, StatusEntry, UpstreamCount, parse_porcelain};

type TestSession = Session<&'static [u8], Vec<u8>, ScriptedGit>;

fn session(dir: &Path, git: ScriptedGit, input: &'static str) -> TestSession {
    let mut config = Config::default();
    config.ui.clear_screen = false;
    config.repo.fetch_on_status = false;
    Session::new(input.as_bytes(), Vec::new(), git, RepoContext::new(dir), config)
}

fn repo_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    std::fs::create_dir(dir.path().join(".git")).expect("create .git");
    dir
}

fn rendered(session: &TestSession) -> String {
    String::from_utf8(session.output().clone()).expect("menu output is UTF-8")
}

fn ran(session: &TestSession, prefix: &str) -> bool {
    session.git().calls().iter().any(|call| call.starts_with(prefix))
}

// =============================================================================
// main menu parsing
// =============================================================================

#[test]
fn test_main_choice_letters_and_digits() {
    assert_eq!(MainChoice::parse("S"), Some(MainChoice::Status));
    assert_eq!(MainChoice::parse("s"), Some(MainChoice::Status));
    assert_eq!(MainChoice::parse("1"), Some(MainChoice::Status));
    assert_eq!(MainChoice::parse(" c "), Some(MainChoice::QuickCommit));
    assert_eq!(MainChoice::parse("f"), Some(MainChoice::QuickFiles));
    assert_eq!(MainChoice::parse("B"), Some(MainChoice::QuickBranch));
    assert_eq!(MainChoice::parse("r"), Some(MainChoice::QuickRemote));
    assert_eq!(MainChoice::parse("9"), Some(MainChoice::Tools));
    assert_eq!(MainChoice::parse("10"), Some(MainChoice::ChangeDirectory));
    assert_eq!(MainChoice::parse("11"), Some(MainChoice::InitRepository));
    assert_eq!(MainChoice::parse("0"), Some(MainChoice::Quit));
}

#[test]
fn test_main_choice_rejects_unknown() {
    for input in ["", "12", "x", "SS", "-1", "1 2"] {
        assert_eq!(MainChoice::parse(input), None, "input {input:?}");
    }
}

// =============================================================================
// quick status and hints
// =============================================================================

#[test]
fn test_quick_hints() {
    assert_eq!(quick_hints(true, true, false), [QuickHint::Commit]);
    assert_eq!(quick_hints(true, false, false), [QuickHint::Add]);
    assert_eq!(
        quick_hints(false, false, true),
        [QuickHint::FeatureBranch]
    );
    assert_eq!(
        quick_hints(true, true, true),
        [QuickHint::Commit, QuickHint::FeatureBranch]
    );
    assert!(quick_hints(false, false, false).is_empty());
}

#[test]
fn test_quick_status_line() {
    let entries = parse_porcelain("M  a\n M b\n?? c\n?? d");
    let line = quick_status_line(&FileCounts::from_entries(&entries), Theme::plain());
    insta::assert_snapshot!(line.unwrap_or_default(), @"✓ 1 staged file(s)  ⚠ 1 modified file(s)  ? 2 untracked file(s)");

    assert_eq!(
        quick_status_line(&FileCounts::default(), Theme::plain()),
        None
    );
}

#[test]
fn test_file_groups() {
    let entries = parse_porcelain("M  a\nA  b\n M c\n?? d\n D e\nD  f\nR  g -> h\nUU i");
    let groups = FileGroups::from_entries(&entries);

    assert_eq!(
        groups.staged,
        [
            ("a", Category::StagedModified),
            ("b", Category::StagedAdded),
            ("f", Category::StagedDeleted),
        ]
    );
    assert_eq!(groups.added, ["b"]);
    assert_eq!(groups.modified, ["c"]);
    assert_eq!(groups.untracked, ["d"]);
    assert_eq!(groups.renamed, ["g -> h"]);
    assert_eq!(groups.other.len(), 1);
    assert_eq!(groups.other[0].code(), "UU");
}

#[test]
fn test_staged_kind() {
    assert_eq!(staged_kind(Category::StagedAdded), "new");
    assert_eq!(staged_kind(Category::StagedDeleted), "deleted");
    assert_eq!(staged_kind(Category::StagedModified), "modified");
}

#[test]
fn test_sync_lines() {
    assert_eq!(
        sync_lines(UpstreamCount::Unknown, UpstreamCount::Unknown),
        ["⚪ Upstream: not configured"]
    );
    assert_eq!(
        sync_lines(UpstreamCount::Known(0), UpstreamCount::Known(0)),
        ["✅ Branch is in sync with the remote"]
    );
    assert_eq!(
        sync_lines(UpstreamCount::Known(2), UpstreamCount::Known(1)),
        [
            "📤 Commits to push: 2 commit(s)",
            "📥 Commits to pull: 1 commit(s)"
        ]
    );
    assert_eq!(
        sync_lines(UpstreamCount::Known(0), UpstreamCount::Unknown),
        ["⚪ Commits to pull: not configured"]
    );
    assert_eq!(
        sync_lines(UpstreamCount::Unknown, UpstreamCount::Known(3)),
        [
            "⚪ Commits to push: not configured",
            "📥 Commits to pull: 3 commit(s)"
        ]
    );
}

#[test]
fn test_stat_file_lines_drop_summary() {
    let stat = " src/file_io.rs | 4 ++--\n docs/profile.md | 1 +\n 2 files changed, 3 insertions(+), 2 deletions(-)";
    assert_eq!(
        stat_file_lines(stat),
        [" src/file_io.rs | 4 ++--", " docs/profile.md | 1 +"]
    );

    let single = " a.txt | 1 +\n 1 file changed, 1 insertion(+)";
    assert_eq!(stat_file_lines(single), [" a.txt | 1 +"]);

    assert_eq!(stat_file_lines(" a.txt | 1 +"), [" a.txt | 1 +"]);
    assert!(stat_file_lines("").is_empty());
}

#[test]
fn test_fetch_url() {
    let remotes = "origin\tgit@host:a.git (fetch)\norigin\tgit@host:a.git (push)\n\
                   upstream\thttps://host/b.git (fetch)";
    assert_eq!(fetch_url(remotes, "origin"), Some("git@host:a.git"));
    assert_eq!(fetch_url(remotes, "upstream"), Some("https://host/b.git"));
    assert_eq!(fetch_url(remotes, "fork"), None);
    assert_eq!(fetch_url("", "origin"), None);
}

// =============================================================================
// input helpers
// =============================================================================

#[test]
fn test_input_helpers() {
    assert_eq!(split_names("  a.txt   b.txt\tc "), ["a.txt", "b.txt", "c"]);
    assert!(split_names("   ").is_empty());

    assert_eq!(stash_ref(""), "stash@{0}");
    assert_eq!(stash_ref(" 3 "), "stash@{3}");
    assert_eq!(stash_ref("abc"), "stash@{0}");

    assert_eq!(parse_count("", 20), 20);
    assert_eq!(parse_count("5", 20), 5);
    assert_eq!(parse_count("0", 20), 20);
    assert_eq!(parse_count("-3", 30), 30);

    assert_eq!(display_branch(""), "(detached HEAD)");
    assert_eq!(display_branch("main"), "main");
}

#[test]
fn test_color_allowed() {
    assert!(color_allowed(true, false, true));
    assert!(!color_allowed(false, false, true));
    assert!(!color_allowed(true, true, true));
    assert!(!color_allowed(true, false, false));
}

#[test]
fn test_plain_theme_is_identity() {
    let theme = Theme::plain();
    assert!(!theme.has_color());
    assert_eq!(theme.error("boom"), "boom");
    assert_eq!(theme.title("gitman"), "gitman");
}

#[test]
fn test_file_status_line() {
    let plain = Theme::plain();
    let line = |raw: &str| {
        let entry = StatusEntry::parse(raw).expect("line should parse");
        file_status_line(&entry, plain)
    };
    assert_eq!(line(" M src/lib.rs"), "M  src/lib.rs");
    assert_eq!(line("A  new.rs"), "A  new.rs");
    assert_eq!(line(" D gone.rs"), "D  gone.rs");
    assert_eq!(line("R  a -> b"), "R  a -> b");
    assert_eq!(line("?? notes.txt"), "?  notes.txt");
    assert_eq!(line("UU both.rs"), "UU both.rs");
}

#[test]
fn test_submenu_parsers() {
    assert_eq!(ResetMode::parse("1").flag(), "--soft");
    assert_eq!(ResetMode::parse("").flag(), "--mixed");
    assert_eq!(ResetMode::parse("3").flag(), "--hard");

    assert_eq!(StashScope::parse("").flag(), None);
    assert_eq!(StashScope::parse("2").flag(), Some("-u"));
    assert_eq!(StashScope::parse("3").flag(), Some("-a"));

    assert_eq!(HistoryFormat::parse(""), HistoryFormat::Oneline);
    assert_eq!(HistoryFormat::parse("3").args(), ["--stat", "--pretty=fuller"]);

    assert_eq!(ArchiveFormat::parse("zip"), Some(ArchiveFormat::Zip));
    assert_eq!(ArchiveFormat::parse("rar"), None);
    assert_eq!(ArchiveFormat::TarGz.default_file("demo"), "demo.tar.gz");
}

#[test]
fn test_history_search_args() {
    assert_eq!(
        HistorySearch::Message("fix".into()).args(),
        ["--grep=fix"]
    );
    assert_eq!(HistorySearch::Code("parse(".into()).args(), ["-Sparse("]);
    assert_eq!(
        HistorySearch::Author("Ada".into()).args(),
        ["--author=Ada"]
    );
    assert!(HistorySearch::Author(String::new()).args().is_empty());
    assert_eq!(
        HistorySearch::Dates {
            since: "2024-01-01".into(),
            until: String::new(),
        }
        .args(),
        ["--since=2024-01-01"]
    );
}

// =============================================================================
// scripted sessions
// =============================================================================

#[tokio::test]
async fn test_outside_repository_guard() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut s = session(dir.path(), ScriptedGit::new(), "2\n");
    s.run_menu().await.expect("session runs");

    assert!(rendered(&s).contains("❌ This directory is not a git repository!"));
    assert!(s.git().calls().is_empty());
}

#[tokio::test]
async fn test_invalid_option_then_quit() {
    let dir = repo_dir();
    let mut s = session(dir.path(), ScriptedGit::new(), "x\n\n0\n");
    s.run_menu().await.expect("session runs");

    let out = rendered(&s);
    assert!(out.contains("❌ Invalid option! Use the numbers (0-11) or the letters (S, C, F, B, R)"));
    assert!(out.contains("👋 Goodbye!"));
}

#[tokio::test]
async fn test_end_of_input_exits() {
    let dir = repo_dir();
    let mut s = session(dir.path(), ScriptedGit::new(), "");
    s.run_menu().await.expect("session runs");

    let out = rendered(&s);
    assert!(out.contains("📋 MAIN MENU"));
    assert!(!out.contains("Goodbye"));
    assert!(s.input_closed());
}

#[tokio::test]
async fn test_main_menu_quick_status() {
    let dir = repo_dir();
    let git = ScriptedGit::new()
        .ok("branch --show-current", "main")
        .ok("status --porcelain", " M a.rs\n?? b.rs")
        .ok("diff --cached --name-only", "");
    let mut s = session(dir.path(), git, "0\n");
    s.run_menu().await.expect("session runs");

    let out = rendered(&s);
    assert!(out.contains("📍 Current branch: main"));
    assert!(out.contains("⚠ 1 modified file(s)  ? 1 untracked file(s)"));
    assert!(out.contains("💡 Modified files detected -> type 'F' to add them"));
    assert!(out.contains("💡 On the main branch -> type 'B' to create a feature branch"));
}

#[tokio::test]
async fn test_create_branch() {
    let dir = repo_dir();
    let git = ScriptedGit::new().ok("checkout -b feature", "Switched to a new branch 'feature'");
    let mut s = session(dir.path(), git, "2\n1\nfeature\n\n0\n0\n");
    s.run_menu().await.expect("session runs");

    assert!(ran(&s, "checkout -b feature"));
    assert!(rendered(&s).contains("✅ Branch 'feature' created and checked out!"));
}

#[tokio::test]
async fn test_declined_branch_delete_runs_nothing() {
    let dir = repo_dir();
    let mut s = session(dir.path(), ScriptedGit::new(), "2\n3\nfeature\nn\n0\n0\n");
    s.run_menu().await.expect("session runs");

    assert!(!ran(&s, "branch -d"));
}

#[tokio::test]
async fn test_confirmation_at_end_of_input_is_no() {
    let dir = repo_dir();
    let mut s = session(dir.path(), ScriptedGit::new(), "2\n3\nfeature\n");
    s.run_menu().await.expect("session runs");

    assert!(!ran(&s, "branch -d"));
    assert!(s.input_closed());
}

#[tokio::test]
async fn test_failed_branch_delete_shows_force_hint() {
    let dir = repo_dir();
    let git = ScriptedGit::new().fail(
        "branch -d feature",
        "error: the branch 'feature' is not fully merged.",
    );
    let mut s = session(dir.path(), git, "2\n3\nfeature\ny\n\n0\n0\n");
    s.run_menu().await.expect("session runs");

    let out = rendered(&s);
    assert!(out.contains("❌ Error: error: the branch 'feature' is not fully merged."));
    assert!(out.contains("Use 'git branch -D feature' to force the deletion"));
}

#[tokio::test]
async fn test_quick_commit_with_staged_files() {
    let dir = repo_dir();
    let git = ScriptedGit::new()
        .ok("diff --cached --name-only", "a.txt")
        .ok("commit -m fix typo", "[main 1a2b3c4] fix typo");
    let mut s = session(dir.path(), git, "C\nfix typo\n\n0\n");
    s.run_menu().await.expect("session runs");

    assert!(ran(&s, "commit -m fix typo"));
    assert!(rendered(&s).contains("✅ Commit created!"));
}

#[tokio::test]
async fn test_quick_commit_empty_message_cancels() {
    let dir = repo_dir();
    let git = ScriptedGit::new().ok("diff --cached --name-only", "a.txt");
    let mut s = session(dir.path(), git, "C\n\n\n0\n");
    s.run_menu().await.expect("session runs");

    assert!(!ran(&s, "commit"));
    assert!(rendered(&s).contains("❌ Empty commit message. Cancelled."));
}

#[tokio::test]
async fn test_hard_reset_requires_confirmation() {
    let dir = repo_dir();
    let mut s = session(dir.path(), ScriptedGit::new(), "3\n5\n1\n\n3\nn\n0\n0\n");
    s.run_menu().await.expect("session runs");
    assert!(!ran(&s, "reset"));

    let git = ScriptedGit::new().ok("reset --soft abc123", "");
    let mut s = session(dir.path(), git, "3\n5\n1\nabc123\n1\n\n0\n0\n");
    s.run_menu().await.expect("session runs");
    assert!(ran(&s, "reset --soft abc123"));
}

#[tokio::test]
async fn test_stash_push_with_scope_and_message() {
    let dir = repo_dir();
    let git = ScriptedGit::new().ok("stash push -u -m wip", "Saved working directory");
    let mut s = session(dir.path(), git, "7\n1\nwip\n2\n\n0\n0\n");
    s.run_menu().await.expect("session runs");

    assert!(ran(&s, "stash push -u -m wip"));
}

#[tokio::test]
async fn test_force_push_requires_confirmation() {
    let dir = repo_dir();
    let git = ScriptedGit::new().ok("branch --show-current", "main");
    let mut s = session(dir.path(), git, "4\n6\n\n\ny\nn\n0\n0\n");
    s.run_menu().await.expect("session runs");
    assert!(!ran(&s, "push"));

    let git = ScriptedGit::new()
        .ok("branch --show-current", "main")
        .ok("push origin main", "Everything up-to-date");
    let mut s = session(dir.path(), git, "4\n6\n\n\nn\n\n0\n0\n");
    s.run_menu().await.expect("session runs");
    assert!(ran(&s, "push origin main"));
    assert!(!ran(&s, "push origin main --force"));
}

#[tokio::test]
async fn test_untrack_keeps_files_by_default() {
    let dir = repo_dir();
    let mut s = session(dir.path(), ScriptedGit::new(), "5\n6\na.txt b.txt\n\n\n0\n0\n");
    s.run_menu().await.expect("session runs");
    assert!(ran(&s, "rm --cached -- a.txt b.txt"));

    let mut s = session(dir.path(), ScriptedGit::new(), "5\n6\na.txt\nn\n\n0\n0\n");
    s.run_menu().await.expect("session runs");
    assert!(ran(&s, "rm -- a.txt"));
}

#[tokio::test]
async fn test_detailed_status_lists_files() {
    let dir = repo_dir();
    let git = ScriptedGit::new()
        .ok("branch --show-current", "feature")
        .ok("status --porcelain", " M src/lib.rs\n?? notes.txt");
    let mut s = session(dir.path(), git, "S\n");
    s.run_menu().await.expect("session runs");

    let out = rendered(&s);
    assert!(out.contains("🌿 CURRENT BRANCH: feature"));
    assert!(out.contains("⚠️  MODIFIED FILES (1):"));
    assert!(out.contains("   ● src/lib.rs"));
    assert!(out.contains("❓ UNTRACKED FILES (1):"));
    assert!(out.contains("   ? notes.txt"));
}

#[tokio::test]
async fn test_detailed_status_staged_statistics() {
    let dir = repo_dir();
    let git = ScriptedGit::new()
        .ok("branch --show-current", "feature")
        .ok("status --porcelain", "M  src/file_io.rs")
        .ok("diff --cached --name-only", "src/file_io.rs")
        .ok(
            "diff --cached --stat",
            " src/file_io.rs | 4 ++--\n 1 file changed, 2 insertions(+), 2 deletions(-)",
        );
    let mut s = session(dir.path(), git, "S\n");
    s.run_menu().await.expect("session runs");

    let out = rendered(&s);
    assert!(out.contains("✅ STAGED FILES (1):"));
    assert!(out.contains("    src/file_io.rs | 4 ++--"));
    assert!(!out.contains("1 file changed"));
}

#[tokio::test]
async fn test_change_directory() {
    let dir = tempfile::tempdir().expect("create temp dir");
    std::fs::create_dir(dir.path().join("sub")).expect("create sub");
    let mut s = session(dir.path(), ScriptedGit::new(), "10\nsub\n\n0\n");
    s.run_menu().await.expect("session runs");

    let expected = dir.path().join("sub").canonicalize().expect("canonical path");
    assert_eq!(s.context().dir(), expected);
    assert!(rendered(&s).contains("✅ Directory changed to:"));

    let mut s = session(dir.path(), ScriptedGit::new(), "10\nmissing\n\n0\n");
    s.run_menu().await.expect("session runs");
    assert_eq!(s.context().dir(), dir.path());
    assert!(rendered(&s).contains("❌ Could not change directory:"));
}

#[tokio::test]
async fn test_init_refuses_existing_repository() {
    let dir = repo_dir();
    let mut s = session(dir.path(), ScriptedGit::new(), "11\n\n0\n");
    s.run_menu().await.expect("session runs");

    assert!(rendered(&s).contains("A git repository already exists in this directory."));
    assert!(!ran(&s, "init"));
}

#[tokio::test]
async fn test_init_after_confirmation() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let git = ScriptedGit::new().ok("init", "Initialized empty Git repository");
    let mut s = session(dir.path(), git, "11\ny\n\n0\n");
    s.run_menu().await.expect("session runs");

    assert_eq!(s.git().calls(), ["init"]);
    assert!(rendered(&s).contains("✅ Git repository initialized!"));
}

#[tokio::test]
async fn test_empty_search_runs_nothing() {
    let dir = repo_dir();
    let mut s = session(dir.path(), ScriptedGit::new(), "8\n7\n1\n\n0\n0\n");
    s.run_menu().await.expect("session runs");

    assert!(!ran(&s, "log"));
}
