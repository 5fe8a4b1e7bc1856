// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core process management.
//!
//! ```text
//!            core
//!             |
//!      +------+------+
//!      |             |
//!      v             v
//!   process      interrupt
//!      |             |
//!   Builder      Interrupter
//!   Output       Ctrl-C --> token of running command
//! ```

pub mod interrupt;
pub mod process;
