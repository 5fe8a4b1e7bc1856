// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Terminal colors.
//!
//! ```text
//! ui.color && --no-color absent
//!        && NO_COLOR unset
//!        && stdout is a terminal  --> Theme::colored()
//! otherwise                       --> Theme::plain()
//! ```

use std::io::IsTerminal;

use colored::{ColoredString, Colorize};

/// Semantic styles for menu text.
///
/// A plain theme returns its input unchanged, which keeps scripted sessions
/// and piped output free of escape sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Theme {
    color: bool,
}

impl Theme {
    #[must_use]
    pub const fn plain() -> Self {
        Self { color: false }
    }

    #[must_use]
    pub const fn colored() -> Self {
        Self { color: true }
    }

    /// Picks colors from the user's preference and the environment.
    ///
    /// Also pins the global `colored` override so both agree.
    #[must_use]
    pub fn detect(wanted: bool) -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty());
        let color = color_allowed(wanted, no_color, std::io::stdout().is_terminal());
        colored::control::set_override(color);
        Self { color }
    }

    #[must_use]
    pub const fn has_color(self) -> bool {
        self.color
    }

    fn paint(self, text: &str, style: impl FnOnce(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    #[must_use]
    pub fn title(self, text: &str) -> String {
        self.paint(text, |s| s.bold().cyan())
    }

    #[must_use]
    pub fn heading(self, text: &str) -> String {
        self.paint(text, |s| s.bold().blue())
    }

    #[must_use]
    pub fn section(self, text: &str) -> String {
        self.paint(text, |s| s.bold().green())
    }

    #[must_use]
    pub fn ok(self, text: &str) -> String {
        self.paint(text, |s| s.green())
    }

    #[must_use]
    pub fn warn(self, text: &str) -> String {
        self.paint(text, |s| s.yellow())
    }

    #[must_use]
    pub fn error(self, text: &str) -> String {
        self.paint(text, |s| s.red())
    }

    #[must_use]
    pub fn info(self, text: &str) -> String {
        self.paint(text, |s| s.blue())
    }

    #[must_use]
    pub fn accent(self, text: &str) -> String {
        self.paint(text, |s| s.cyan())
    }

    #[must_use]
    pub fn remote(self, text: &str) -> String {
        self.paint(text, |s| s.bold().purple())
    }
}

/// Colors are used only when wanted, not vetoed by `NO_COLOR`, and written
/// to a terminal.
#[must_use]
pub const fn color_allowed(wanted: bool, no_color: bool, is_terminal: bool) -> bool {
    wanted && !no_color && is_terminal
}
