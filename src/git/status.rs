// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Porcelain status parsing and classification.
//!
//! ```text
//! "XY path" --> StatusEntry { code: "XY", path }
//!                   |
//!                classify()
//!                   v
//!   "M " "AM" --> StagedModified     " D" --> WorktreeDeleted
//!   " M" "MM" --> WorktreeModified   "R " --> Renamed
//!   "A "      --> StagedAdded        "??" --> Untracked
//!   "D "      --> StagedDeleted       _   --> Unrecognized
//! ```

use serde::Serialize;

/// One line of `git status --porcelain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusEntry {
    code: String,
    path: String,
}

impl StatusEntry {
    /// Splits a porcelain line into its two-character code and path.
    ///
    /// Returns `None` for lines shorter than three characters.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let mut chars = line.chars();
        let code: String = chars.by_ref().take(2).collect();
        // separator column
        chars.next()?;
        Some(Self {
            code,
            path: chars.as_str().to_string(),
        })
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn category(&self) -> Category {
        classify(&self.code)
    }
}

/// Parses porcelain output, dropping lines too short to carry a code.
#[must_use]
pub fn parse_porcelain(text: &str) -> Vec<StatusEntry> {
    text.lines().filter_map(StatusEntry::parse).collect()
}

/// Kind of change a status code represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    StagedModified,
    WorktreeModified,
    StagedAdded,
    StagedDeleted,
    WorktreeDeleted,
    Renamed,
    Untracked,
    Unrecognized,
}

impl Category {
    /// Short label used in file listings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::StagedModified => "modified (staged)",
            Self::WorktreeModified => "modified",
            Self::StagedAdded => "added",
            Self::StagedDeleted => "deleted (staged)",
            Self::WorktreeDeleted => "deleted",
            Self::Renamed => "renamed",
            Self::Untracked => "untracked",
            Self::Unrecognized => "other",
        }
    }

    /// Whether the change is recorded in the index.
    #[must_use]
    pub const fn is_staged(self) -> bool {
        matches!(
            self,
            Self::StagedModified | Self::StagedAdded | Self::StagedDeleted
        )
    }
}

/// Maps a two-character porcelain code to its category.
#[must_use]
pub fn classify(code: &str) -> Category {
    match code {
        "M " | "AM" => Category::StagedModified,
        " M" | "MM" => Category::WorktreeModified,
        "A " => Category::StagedAdded,
        "D " => Category::StagedDeleted,
        " D" => Category::WorktreeDeleted,
        "R " => Category::Renamed,
        "??" => Category::Untracked,
        _ => Category::Unrecognized,
    }
}

/// Per-category tallies shown on the status screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FileCounts {
    pub modified: usize,
    pub staged: usize,
    pub untracked: usize,
    pub added: usize,
    pub deleted: usize,
    pub renamed: usize,
}

impl FileCounts {
    /// Tallies entries; unrecognized codes are not counted.
    #[must_use]
    pub fn from_entries(entries: &[StatusEntry]) -> Self {
        let mut counts = Self::default();
        for entry in entries {
            let category = entry.category();
            if category.is_staged() {
                counts.staged += 1;
            }
            match category {
                Category::WorktreeModified => counts.modified += 1,
                Category::StagedAdded => counts.added += 1,
                Category::WorktreeDeleted => counts.deleted += 1,
                Category::Renamed => counts.renamed += 1,
                Category::Untracked => counts.untracked += 1,
                Category::StagedModified | Category::StagedDeleted | Category::Unrecognized => {}
            }
        }
        counts
    }
}

/// Commit count relative to the upstream branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamCount {
    Known(u32),
    /// No upstream, detached HEAD, or unparsable output.
    Unknown,
}

impl UpstreamCount {
    /// Parses the output of `git rev-list --count`.
    #[must_use]
    pub fn parse(output: Option<&str>) -> Self {
        output
            .and_then(|text| text.trim().parse().ok())
            .map_or(Self::Unknown, Self::Known)
    }

    /// Count used by the suggestion rules, where unknown means zero.
    #[must_use]
    pub const fn or_zero(self) -> u32 {
        match self {
            Self::Known(n) => n,
            Self::Unknown => 0,
        }
    }

    #[must_use]
    pub const fn is_known(self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl Serialize for UpstreamCount {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Known(n) => serializer.serialize_some(n),
            Self::Unknown => serializer.serialize_none(),
        }
    }
}
