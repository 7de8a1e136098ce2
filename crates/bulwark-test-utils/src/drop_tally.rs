// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Clone/drop-counting element probe for destructor-balance tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared counters behind a set of [`DropTally`] probes.
#[derive(Debug, Default)]
pub struct TallyBoard {
    clones: AtomicUsize,
    drops: AtomicUsize,
}

impl TallyBoard {
    /// Creates a fresh board with zeroed counters.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Number of clones recorded so far.
    pub fn clones(&self) -> usize {
        self.clones.load(Ordering::SeqCst)
    }

    /// Number of drops recorded so far.
    pub fn drops(&self) -> usize {
        self.drops.load(Ordering::SeqCst)
    }
}

/// Element probe that reports every clone and drop to its board.
///
/// Containers under test hold these; asserting on the board afterwards
/// proves which elements were actually destroyed rather than merely
/// forgotten or ignored.
#[derive(Debug)]
pub struct DropTally {
    value: i32,
    board: Arc<TallyBoard>,
}

impl DropTally {
    /// Creates a probe carrying `value`, reporting to `board`.
    pub fn new(value: i32, board: &Arc<TallyBoard>) -> Self {
        Self {
            value,
            board: Arc::clone(board),
        }
    }

    /// The carried value.
    pub fn value(&self) -> i32 {
        self.value
    }
}

impl Clone for DropTally {
    fn clone(&self) -> Self {
        self.board.clones.fetch_add(1, Ordering::SeqCst);
        Self {
            value: self.value,
            board: Arc::clone(&self.board),
        }
    }
}

impl Drop for DropTally {
    fn drop(&mut self) {
        self.board.drops.fetch_add(1, Ordering::SeqCst);
    }
}

impl PartialEq for DropTally {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for DropTally {}
