// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable contiguous array container over a raw allocation seam.
//!
//! `DynVec<T>` owns a single raw buffer (from [`bulwark_raw`]) split into a
//! live region of constructed elements and a reserve region of uninitialized
//! memory. It keeps elements in order across append, positional insert, and
//! removal, and it manages every element lifetime itself; the allocation
//! seam below it only ever sees untyped blocks.
//!
//! # Core Guarantees
//!
//! - **`len() <= capacity()`** after every operation
//! - **Allocate before mutate**: growth paths acquire the new block first;
//!   a failed allocation leaves the container exactly as it was
//! - **One reallocation per call**: insertions reallocate at most once, with
//!   prefix, inserted block, and suffix assembled in a single pass
//! - **Buffer-reusing assignment**: `clone_from` overwrites in place when
//!   capacity suffices and falls back to copy-and-swap when it does not
//!
//! # Example
//!
//! ```rust
//! use bulwark_vec::{DynVec, dyn_vec};
//!
//! let mut vec = dyn_vec![1, 2, 3];
//!
//! vec.push(4);
//! vec.insert(1, 9);
//! assert_eq!(vec.as_slice(), &[1, 9, 2, 3, 4]);
//!
//! vec.remove_range(1..3);
//! assert_eq!(vec.as_slice(), &[1, 3, 4]);
//!
//! let doubled: DynVec<i32> = vec.iter().map(|v| v * 2).collect();
//! assert_eq!(doubled.as_slice(), &[2, 6, 8]);
//! ```
//!
//! # Failure Surface
//!
//! Every growth operation has a fallible twin (`try_reserve`, `try_push`,
//! `try_with_capacity`) that propagates the allocator's error unmodified.
//! The infallible forms panic on capacity overflow and divert to the global
//! allocation-failure handler on system refusal, like the standard
//! containers. Out-of-bounds positions panic; `get`, `first`, `last`, and
//! `pop` are the checked forms.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod dyn_vec;
mod error;
mod into_iter;
mod macros;

pub use dyn_vec::DynVec;
pub use error::ReserveError;
pub use into_iter::IntoIter;
