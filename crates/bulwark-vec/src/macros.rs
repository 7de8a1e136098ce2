// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Construction macro for DynVec.

/// Creates a [`DynVec`](crate::DynVec) from a list of values, or from
/// `value; n` repetition.
///
/// # Example
///
/// ```rust
/// use bulwark_vec::dyn_vec;
///
/// let listed = dyn_vec![1, 2, 3];
/// assert_eq!(listed.as_slice(), &[1, 2, 3]);
///
/// let repeated = dyn_vec!["a"; 3];
/// assert_eq!(repeated.as_slice(), &["a", "a", "a"]);
/// ```
#[macro_export]
macro_rules! dyn_vec {
    () => {
        $crate::DynVec::new()
    };
    ($value:expr; $n:expr) => {
        $crate::DynVec::from_elem($n, $value)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::DynVec::from([$($value),+])
    };
}
