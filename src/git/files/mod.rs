// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Files git reads but gitman edits directly.
//!
//! ```text
//! ignore:  read_ignore()  append_ignore_patterns()  write_basic_ignore()
//!          patterns validated by ignore::gitignore::GitignoreBuilder
//! hooks:   list_hooks()  enable_sample()  disable()  read_hook()  create_hook()
//!          .git/hooks, mode 0755
//! ```

pub mod hooks;
pub mod ignore;

#[cfg(test)]
mod tests;
