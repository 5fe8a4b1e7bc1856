// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! History statistics parsed from git log output.
//!
//! ```text
//! log --pretty=format: --name-only   --> most_modified()    (path, count)
//! log --numstat --pretty=format:     --> line_totals()      (path, +, -)
//! log --pretty=format:%ad --date=format:%Y-%m --> monthly_activity()
//! ```

use std::collections::{BTreeMap, HashMap};

/// Number of files shown by the "most modified" screen.
pub const MOST_MODIFIED_LIMIT: usize = 20;

/// Added and removed line totals for one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTotals {
    pub path: String,
    pub added: u64,
    pub removed: u64,
}

/// Counts how often each path appears, most frequent first.
///
/// Ties are ordered by path so the output is stable.
#[must_use]
pub fn most_modified(log_name_only: &str, limit: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for path in log_name_only.lines().map(str::trim).filter(|p| !p.is_empty()) {
        *counts.entry(path).or_default() += 1;
    }

    let mut sorted: Vec<_> = counts
        .into_iter()
        .map(|(path, count)| (path.to_string(), count))
        .collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted.truncate(limit);
    sorted
}

/// Sums `--numstat` lines per path, sorted by path.
///
/// Binary entries (`-` counts) and malformed lines are skipped.
#[must_use]
pub fn line_totals(numstat: &str) -> Vec<LineTotals> {
    let mut totals: BTreeMap<&str, (u64, u64)> = BTreeMap::new();
    for line in numstat.lines() {
        let mut fields = line.splitn(3, '\t');
        let (Some(added), Some(removed), Some(path)) = (fields.next(), fields.next(), fields.next())
        else {
            continue;
        };
        let (Ok(added), Ok(removed)) = (added.trim().parse::<u64>(), removed.trim().parse::<u64>())
        else {
            continue;
        };
        let entry = totals.entry(path.trim()).or_default();
        entry.0 += added;
        entry.1 += removed;
    }

    totals
        .into_iter()
        .map(|(path, (added, removed))| LineTotals {
            path: path.to_string(),
            added,
            removed,
        })
        .collect()
}

/// Commits per `YYYY-MM` month, oldest first.
#[must_use]
pub fn monthly_activity(dates: &str) -> Vec<(String, usize)> {
    let mut months: BTreeMap<&str, usize> = BTreeMap::new();
    for month in dates.lines().map(str::trim).filter(|m| !m.is_empty()) {
        *months.entry(month).or_default() += 1;
    }
    months
        .into_iter()
        .map(|(month, count)| (month.to_string(), count))
        .collect()
}

/// Number of non-empty lines, used for branch and tag counts.
#[must_use]
pub fn count_lines(text: &str) -> usize {
    text.lines().filter(|line| !line.trim().is_empty()).count()
}

/// Parses `shortlog -sn` output into `(commits, author)` pairs.
#[must_use]
pub fn parse_shortlog(text: &str) -> Vec<(u32, String)> {
    text.lines()
        .filter_map(|line| {
            let (count, name) = line.trim().split_once(char::is_whitespace)?;
            Some((count.parse().ok()?, name.trim().to_string()))
        })
        .collect()
}
