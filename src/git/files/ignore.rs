// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};

use ::ignore::gitignore::GitignoreBuilder;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::{FsError, GitmanResult};

pub const IGNORE_FILE: &str = ".gitignore";

/// Starter ignore file for new projects.
pub const BASIC_IGNORE: &str = "\
# Build artifacts
*.o
*.so
*.dylib
*.exe

# Debug files
*.dSYM/
*.pdb

# Temporary files
*.tmp
*.temp
*~
.DS_Store
Thumbs.db

# Dependency directories
node_modules/
vendor/

# Local configuration
.env
.env.local
config.local.*

# Logs
*.log
logs/

# IDE files
.vscode/
.idea/
*.swp
*.swo
";

#[must_use]
pub fn ignore_path(dir: &Path) -> PathBuf {
    dir.join(IGNORE_FILE)
}

/// Contents of `dir/.gitignore`.
///
/// # Errors
///
/// Returns `FsError::NotFound` when the file is missing.
pub async fn read_ignore(dir: &Path) -> GitmanResult<String> {
    let path = ignore_path(dir);
    fs::read_to_string(&path)
        .await
        .map_err(|e| FsError::io(&path, e).into())
}

/// Rejects patterns the gitignore glob parser cannot compile.
///
/// # Errors
///
/// Returns `FsError::InvalidPattern` naming the first bad pattern.
pub fn validate_patterns(dir: &Path, patterns: &[String]) -> GitmanResult<()> {
    let mut builder = GitignoreBuilder::new(dir);
    for pattern in patterns {
        builder
            .add_line(None, pattern)
            .map_err(|e| FsError::InvalidPattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;
    }
    Ok(())
}

/// Appends one line per pattern, creating the file if needed.
///
/// Nothing is written unless every pattern is valid. Returns the number of
/// patterns written.
///
/// # Errors
///
/// Returns `FsError::InvalidPattern` or an I/O error.
pub async fn append_ignore_patterns(dir: &Path, patterns: &[String]) -> GitmanResult<usize> {
    if patterns.is_empty() {
        return Ok(0);
    }
    validate_patterns(dir, patterns)?;

    let path = ignore_path(dir);
    let needs_newline = match fs::read(&path).await {
        Ok(existing) => existing.last().is_some_and(|&b| b != b'\n'),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
        Err(e) => return Err(FsError::io(&path, e).into()),
    };

    let mut content = String::new();
    if needs_newline {
        content.push('\n');
    }
    for pattern in patterns {
        content.push_str(pattern);
        content.push('\n');
    }

    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .await
        .map_err(|e| FsError::io(&path, e))?;
    file.write_all(content.as_bytes())
        .await
        .map_err(|e| FsError::io(&path, e))?;
    file.flush().await.map_err(|e| FsError::io(&path, e))?;

    Ok(patterns.len())
}

/// Writes [`BASIC_IGNORE`], replacing any existing file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be written.
pub async fn write_basic_ignore(dir: &Path) -> GitmanResult<()> {
    let path = ignore_path(dir);
    fs::write(&path, BASIC_IGNORE)
        .await
        .map_err(|e| FsError::io(&path, e).into())
}
