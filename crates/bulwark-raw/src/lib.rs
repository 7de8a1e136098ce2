// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Raw block allocation primitives.
//!
//! This crate is the allocation seam of the workspace: it hands out and takes
//! back untyped memory blocks and does nothing else. No value is ever
//! constructed or dropped here; containers built on top own every element
//! lifetime themselves.
//!
//! # Types
//!
//! ## Heap
//!
//! The minimal allocate/deallocate contract over the global allocator:
//! - `allocate(layout)` returns an uninitialized block or an error, never a
//!   silently truncated one
//! - `deallocate(ptr, layout)` releases a block previously allocated with the
//!   same layout
//!
//! ## RawBuf
//!
//! An owning handle over one allocation sized for `cap` elements of `T`:
//! - Allocates on `with_capacity`, deallocates on drop
//! - Never reads, writes, constructs, or drops elements
//! - Zero-sized element types never touch the allocator
//!
//! # Example
//!
//! ```rust
//! use bulwark_raw::{AllocError, RawBuf};
//!
//! fn example() -> Result<(), AllocError> {
//!     let buf: RawBuf<u64> = RawBuf::with_capacity(8)?;
//!     assert_eq!(buf.cap(), 8);
//!
//!     // The block is uninitialized; writing elements through `buf.ptr()`
//!     // and dropping them again is the caller's responsibility.
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod heap;
mod raw_buf;

pub use error::AllocError;
pub use heap::Heap;
pub use raw_buf::RawBuf;
