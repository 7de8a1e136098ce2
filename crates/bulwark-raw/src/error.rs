// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for bulwark-raw.

use core::alloc::Layout;

use thiserror::Error;

/// Errors from block allocation.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum AllocError {
    /// The requested capacity is not representable as a single allocation.
    #[error("requested capacity overflows the maximum allocation size")]
    CapacityOverflow,

    /// The system refused the allocation request.
    #[error("allocation of {size} bytes (align {align}) failed",
            size = .layout.size(), align = .layout.align())]
    AllocFailed {
        /// The layout that could not be satisfied.
        layout: Layout,
    },
}
