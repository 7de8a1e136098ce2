// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Heap - Minimal allocate/deallocate contract over the global allocator.

use core::alloc::Layout;
use core::ptr::NonNull;

use crate::error::AllocError;

/// The process heap, exposed through the minimal block contract.
///
/// `Heap` hands out uninitialized blocks and takes them back. It never
/// constructs or drops values; element lifetimes belong entirely to the
/// caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct Heap;

impl Heap {
    /// Allocates an uninitialized block for `layout`.
    ///
    /// The request is satisfied in full or fails; it is never truncated.
    ///
    /// `layout` must have non-zero size. Callers handle zero-size cases
    /// without allocating (see [`RawBuf`](crate::RawBuf)).
    ///
    /// # Errors
    ///
    /// Returns [`AllocError::AllocFailed`] when the system cannot satisfy
    /// the request.
    pub fn allocate(layout: Layout) -> Result<NonNull<u8>, AllocError> {
        debug_assert!(layout.size() > 0);

        // SAFETY: layout has non-zero size per the caller contract above.
        let ptr = unsafe { alloc::alloc::alloc(layout) };

        NonNull::new(ptr).ok_or(AllocError::AllocFailed { layout })
    }

    /// Releases a block previously returned by [`Heap::allocate`].
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by `allocate` with this exact `layout`,
    /// must not have been deallocated before, and must not be used afterwards.
    pub unsafe fn deallocate(ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: forwarded caller contract.
        unsafe { alloc::alloc::dealloc(ptr.as_ptr(), layout) }
    }
}
