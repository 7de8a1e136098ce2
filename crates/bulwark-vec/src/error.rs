// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for bulwark-vec.

use bulwark_raw::AllocError;
use thiserror::Error;

/// Errors that can occur when growing a [`DynVec`](crate::DynVec).
///
/// Allocator errors propagate through here unmodified; no operation in this
/// crate swallows one.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ReserveError {
    /// The allocation seam reported failure.
    #[error("AllocError: {0}")]
    Alloc(#[from] AllocError),
}
