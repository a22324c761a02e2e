// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Grid Rotation over FFI
//!
//! Rotates caller-owned, row-major `size x size` buffers of `i64` in place.
//!
//! ## Safety
//!
//! Callers **must** ensure that `data` points to at least `size * size`
//! initialized, writable `i64` values that are not accessed concurrently
//! during the call. Passing `NULL` aborts the process.
//!
//! ## Exported API
//! * `rudiments_rotate_clockwise`

use crate::status::RudimentsStatus;
use rudiments_grid::rotate_clockwise_flat;

/// Rotates a row-major `size x size` grid 90° clockwise in place.
///
/// Returns `RudimentsStatus::InvalidShape` if `size == 0` or `size * size`
/// overflows. The buffer is untouched on error.
///
/// # Panics
///
/// This function will panic if called with a null pointer. The panic cannot
/// unwind across the C ABI, so the process aborts.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that `data` is valid for reads and writes of
/// `size * size` values.
#[no_mangle]
pub unsafe extern "C" fn rudiments_rotate_clockwise(data: *mut i64, size: usize) -> RudimentsStatus {
    rotate_clockwise_checked(data, size)
}

/// Rust-ABI body of `rudiments_rotate_clockwise`.
///
/// # Panics
///
/// This function will panic if `data` is null.
///
/// # Safety
///
/// Same contract as `rudiments_rotate_clockwise`.
unsafe fn rotate_clockwise_checked(data: *mut i64, size: usize) -> RudimentsStatus {
    assert!(
        !data.is_null(),
        "called `rudiments_rotate_clockwise` with null pointer"
    );

    let Some(len) = size.checked_mul(size).filter(|&len| len > 0) else {
        return RudimentsStatus::InvalidShape;
    };

    let cells = std::slice::from_raw_parts_mut(data, len);
    match rotate_clockwise_flat(cells, size) {
        Ok(()) => RudimentsStatus::Ok,
        Err(e) => e.into(),
    }
}
