// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! RawBuf - Owning handle over one uninitialized allocation.

use core::alloc::Layout;
use core::marker::PhantomData;
use core::mem;
use core::ptr::NonNull;

use crate::error::AllocError;
use crate::heap::Heap;

/// An owned block of uninitialized memory sized for `cap` elements of `T`.
///
/// `RawBuf` separates allocation from element lifetime: it allocates on
/// [`with_capacity`](RawBuf::with_capacity) and deallocates on drop, and does
/// nothing else. The memory it hands out via [`ptr`](RawBuf::ptr) is raw;
/// whoever writes elements into it must also drop them before the buffer
/// goes away.
///
/// Zero-sized element types never allocate. Their capacity reports
/// `usize::MAX` and the pointer stays dangling (well-aligned, never
/// dereferenced as storage).
pub struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

impl<T> RawBuf<T> {
    /// Creates the empty, unallocated buffer.
    pub const fn dangling() -> Self {
        let cap = if mem::size_of::<T>() == 0 {
            usize::MAX
        } else {
            0
        };

        Self {
            ptr: NonNull::dangling(),
            cap,
            _marker: PhantomData,
        }
    }

    /// Allocates an uninitialized block for exactly `cap` elements.
    ///
    /// `cap == 0` and zero-sized `T` produce the unallocated buffer without
    /// touching the allocator.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError::CapacityOverflow`] when the byte size of the
    /// block is not representable, and [`AllocError::AllocFailed`] when the
    /// system refuses the request. Failure is propagated, never truncated.
    pub fn with_capacity(cap: usize) -> Result<Self, AllocError> {
        if cap == 0 || mem::size_of::<T>() == 0 {
            return Ok(Self::dangling());
        }

        // Layout::array enforces the isize::MAX total-size limit.
        let layout = Layout::array::<T>(cap).map_err(|_| AllocError::CapacityOverflow)?;
        let ptr = Heap::allocate(layout)?;

        Ok(Self {
            ptr: ptr.cast(),
            cap,
            _marker: PhantomData,
        })
    }

    /// Pointer to the first element slot.
    ///
    /// Dangling (but well-aligned) for the unallocated buffer and for
    /// zero-sized `T`.
    #[inline]
    pub fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Number of element slots in the block.
    #[inline]
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Takes the allocation out, leaving the empty buffer behind.
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::dangling())
    }
}

impl<T> Default for RawBuf<T> {
    fn default() -> Self {
        Self::dangling()
    }
}

impl<T> core::fmt::Debug for RawBuf<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RawBuf")
            .field("cap", &self.cap)
            .finish_non_exhaustive()
    }
}

// Safety: RawBuf owns its block exclusively; the raw pointer is never shared.
unsafe impl<T: Send> Send for RawBuf<T> {}
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if self.cap == 0 || mem::size_of::<T>() == 0 {
            return;
        }

        // The layout was validated when the block was allocated.
        let Ok(layout) = Layout::array::<T>(self.cap) else {
            return;
        };

        // SAFETY: ptr came from Heap::allocate with this exact layout.
        unsafe { Heap::deallocate(self.ptr.cast(), layout) }
    }
}
