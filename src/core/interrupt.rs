// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Routing of Ctrl-C to the command currently running.
//!
//! ```text
//! Ctrl-C --> Interrupter::interrupt()
//!              |
//!      command running?
//!        yes: cancel its token, menu continues
//!        no:  caller exits the application
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use tokio_util::sync::CancellationToken;

/// Shared slot holding the cancellation token of the running command.
///
/// Cloning is cheap and every clone sees the same slot.
#[derive(Debug, Clone, Default)]
pub struct Interrupter {
    current: Arc<Mutex<Option<CancellationToken>>>,
}

impl Interrupter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a fresh token for a command about to start.
    ///
    /// The returned guard clears the slot when dropped.
    #[must_use]
    pub fn begin(&self) -> InterruptGuard {
        let token = CancellationToken::new();
        *self.lock() = Some(token.clone());
        InterruptGuard {
            owner: self.clone(),
            token,
        }
    }

    /// Cancels the running command.
    ///
    /// Returns false when nothing was running.
    pub fn interrupt(&self) -> bool {
        self.lock().as_ref().is_some_and(|token| {
            token.cancel();
            true
        })
    }

    /// Returns true while a command holds a guard.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.lock().is_some()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<CancellationToken>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Token holder for one command; see [`Interrupter::begin`].
#[derive(Debug)]
pub struct InterruptGuard {
    owner: Interrupter,
    token: CancellationToken,
}

impl InterruptGuard {
    #[must_use]
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }
}

impl Drop for InterruptGuard {
    fn drop(&mut self) {
        *self.owner.lock() = None;
    }
}
