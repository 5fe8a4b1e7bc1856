// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};

use chrono::Local;
use tokio::fs;

use crate::error::{FsError, GitError, GitmanResult};

const SAMPLE_SUFFIX: &str = ".sample";

/// One file of the hooks directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookInfo {
    pub name: String,
    /// False for `*.sample` files, which git never runs.
    pub active: bool,
}

#[must_use]
pub fn hooks_dir(repo: &Path) -> PathBuf {
    repo.join(".git").join("hooks")
}

/// Rejects names that would leave the hooks directory.
///
/// # Errors
///
/// Returns `GitError::InvalidHookName`.
pub fn validate_hook_name(name: &str) -> GitmanResult<()> {
    let invalid = name.is_empty()
        || name == "."
        || name.contains("..")
        || name.contains('/')
        || name.contains('\\');
    if invalid {
        return Err(GitError::InvalidHookName {
            name: name.to_string(),
        }
        .into());
    }
    Ok(())
}

/// Hooks sorted by name.
///
/// # Errors
///
/// Returns an I/O error if the hooks directory cannot be read.
pub async fn list_hooks(repo: &Path) -> GitmanResult<Vec<HookInfo>> {
    let dir = hooks_dir(repo);
    let mut entries = fs::read_dir(&dir)
        .await
        .map_err(|e| FsError::io(&dir, e))?;

    let mut hooks = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| FsError::io(&dir, e))?
    {
        let name = entry.file_name().to_string_lossy().into_owned();
        let active = !name.ends_with(SAMPLE_SUFFIX);
        hooks.push(HookInfo { name, active });
    }
    hooks.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(hooks)
}

/// Copies `name.sample` to `name` and makes it executable.
///
/// # Errors
///
/// Returns `GitError::SampleHookNotFound` when there is no sample, or an I/O error.
pub async fn enable_sample(repo: &Path, name: &str) -> GitmanResult<()> {
    validate_hook_name(name)?;
    let dir = hooks_dir(repo);
    let sample = dir.join(format!("{name}{SAMPLE_SUFFIX}"));
    let content = match fs::read(&sample).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(GitError::SampleHookNotFound {
                name: name.to_string(),
            }
            .into());
        }
        Err(e) => return Err(FsError::io(&sample, e).into()),
    };
    write_executable(&dir.join(name), &content).await
}

/// Removes an active hook.
///
/// # Errors
///
/// Returns `FsError::NotFound` when the hook does not exist.
pub async fn disable(repo: &Path, name: &str) -> GitmanResult<()> {
    validate_hook_name(name)?;
    let path = hooks_dir(repo).join(name);
    fs::remove_file(&path)
        .await
        .map_err(|e| FsError::io(&path, e).into())
}

/// Script contents of a hook.
///
/// # Errors
///
/// Returns `FsError::NotFound` when the hook does not exist.
pub async fn read_hook(repo: &Path, name: &str) -> GitmanResult<String> {
    validate_hook_name(name)?;
    let path = hooks_dir(repo).join(name);
    fs::read_to_string(&path)
        .await
        .map_err(|e| FsError::io(&path, e).into())
}

/// Shell skeleton for a new hook, stamped with the creation time.
#[must_use]
pub fn hook_template(name: &str) -> String {
    let created = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!(
        "#!/bin/sh\n\
         # Custom hook: {name}\n\
         # Created {created}\n\
         \n\
         echo \"Running hook {name}\"\n\
         \n\
         # Add your code here\n\
         exit 0\n"
    )
}

/// Writes [`hook_template`] as an executable hook, replacing any existing one.
///
/// # Errors
///
/// Returns `GitError::InvalidHookName` or an I/O error.
pub async fn create_hook(repo: &Path, name: &str) -> GitmanResult<()> {
    validate_hook_name(name)?;
    let dir = hooks_dir(repo);
    fs::create_dir_all(&dir)
        .await
        .map_err(|e| FsError::io(&dir, e))?;
    write_executable(&dir.join(name), hook_template(name).as_bytes()).await
}

async fn write_executable(path: &Path, content: &[u8]) -> GitmanResult<()> {
    fs::write(path, content)
        .await
        .map_err(|e| FsError::io(path, e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
            .await
            .map_err(|e| FsError::io(path, e))?;
    }
    Ok(())
}
