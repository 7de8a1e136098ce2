// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>A growable contiguous array container, built from the
//! allocation seam up.</em></p>
//!
//! ---
//!
//! Bulwark is a from-scratch dynamic array for Rust. One raw buffer, an
//! explicit live/reserve split, and every element lifetime managed by hand,
//! with the allocation layer kept so small it can only hand blocks out and
//! take them back.
//!
//! # Features
//!
//! - **Strict separation**: allocation ([`raw`]) never constructs or drops
//!   an element; the container ([`vec`]) never talks to the system allocator
//!   directly
//! - **Allocate before mutate**: a failed allocation leaves the container
//!   exactly as it was, and `try_*` twins surface the error instead of
//!   aborting
//! - **One reallocation per insert**: bulk fills and positional inserts
//!   assemble prefix, block, and suffix in a single pass
//! - **Buffer-reusing assignment**: `clone_from` overwrites in place when
//!   capacity suffices, copy-and-swap when it does not
//! - **📦 `no_std` compatible**: only `core` and `alloc` are required
//!
//! # Quick Start
//!
//! ```rust
//! use bulwark::{DynVec, dyn_vec};
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
//! let squares: DynVec<i32> = vec.iter().map(|v| v * v).collect();
//! assert_eq!(squares.as_slice(), &[1, 9, 16]);
//! ```
//!
//! # Fallible allocation
//!
//! ```rust
//! use bulwark::{DynVec, ReserveError};
//!
//! fn example() -> Result<(), ReserveError> {
//!     let mut vec: DynVec<u8> = DynVec::try_with_capacity(1024)?;
//!
//!     vec.try_push(42)?;
//!     assert_eq!(vec.len(), 1);
//!     assert_eq!(vec.capacity(), 1024);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]

pub use bulwark_raw as raw;
pub use bulwark_vec as vec;

pub use bulwark_raw::{AllocError, Heap, RawBuf};
pub use bulwark_vec::{DynVec, IntoIter, ReserveError, dyn_vec};
