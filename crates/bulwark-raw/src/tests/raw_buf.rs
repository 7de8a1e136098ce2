// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::AllocError;
use crate::raw_buf::RawBuf;

// =============================================================================
// dangling()
// =============================================================================

#[test]
fn test_dangling_has_zero_cap() {
    let buf: RawBuf<u32> = RawBuf::dangling();

    assert_eq!(buf.cap(), 0);
    assert!(!buf.ptr().is_null());
}

#[test]
fn test_dangling_zst_reports_max_cap() {
    let buf: RawBuf<()> = RawBuf::dangling();

    assert_eq!(buf.cap(), usize::MAX);
}

// =============================================================================
// with_capacity()
// =============================================================================

#[test]
fn test_with_capacity_exact() {
    let buf: RawBuf<u64> = RawBuf::with_capacity(16).expect("Failed to with_capacity()");

    assert_eq!(buf.cap(), 16);
}

#[test]
fn test_with_capacity_zero_does_not_allocate() {
    let buf: RawBuf<u64> = RawBuf::with_capacity(0).expect("Failed to with_capacity()");

    assert_eq!(buf.cap(), 0);
}

#[test]
fn test_with_capacity_zst_never_allocates() {
    let buf: RawBuf<()> = RawBuf::with_capacity(1024).expect("Failed to with_capacity()");

    assert_eq!(buf.cap(), usize::MAX);
}

#[test]
fn test_with_capacity_overflow_is_reported() {
    let result: Result<RawBuf<u64>, _> = RawBuf::with_capacity(usize::MAX);

    assert_eq!(result.unwrap_err(), AllocError::CapacityOverflow);
}

#[test]
fn test_block_is_writable_across_full_cap() {
    let buf: RawBuf<u32> = RawBuf::with_capacity(8).expect("Failed to with_capacity()");

    unsafe {
        for i in 0..8 {
            buf.ptr().add(i).write(i as u32);
        }
        for i in 0..8 {
            assert_eq!(*buf.ptr().add(i), i as u32);
        }
    }
}

// =============================================================================
// take()
// =============================================================================

#[test]
fn test_take_moves_the_allocation_out() {
    let mut buf: RawBuf<u8> = RawBuf::with_capacity(32).expect("Failed to with_capacity()");
    let ptr = buf.ptr();

    let taken = buf.take();

    assert_eq!(taken.cap(), 32);
    assert_eq!(taken.ptr(), ptr);
    assert_eq!(buf.cap(), 0);
}

// =============================================================================
// Debug
// =============================================================================

#[test]
fn test_debug_shows_cap_not_contents() {
    let buf: RawBuf<u8> = RawBuf::with_capacity(4).expect("Failed to with_capacity()");
    let debug_output = format!("{:?}", buf);

    assert!(debug_output.contains("RawBuf"));
    assert!(debug_output.contains("cap"));
}
