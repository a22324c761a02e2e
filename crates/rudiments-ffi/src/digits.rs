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

//! # Next Bigger Permutation over FFI
//!
//! ## Exported API
//! * `rudiments_next_bigger`

use crate::status::RudimentsStatus;
use rudiments_digits::next_bigger;

/// Computes the nearest larger number made of the digits of `number` and
/// writes it to `out`. If no larger arrangement exists, `number` itself is
/// written.
///
/// Returns `RudimentsStatus::InvalidInput` for `0` and
/// `RudimentsStatus::Overflow` if the result exceeds `u64::MAX`. `out` is
/// only written on success.
///
/// # Panics
///
/// This function will panic if called with a null pointer. The panic cannot
/// unwind across the C ABI, so the process aborts.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that `out` is valid for a write of one `u64`.
#[no_mangle]
pub unsafe extern "C" fn rudiments_next_bigger(number: u64, out: *mut u64) -> RudimentsStatus {
    next_bigger_checked(number, out)
}

/// Rust-ABI body of `rudiments_next_bigger`.
///
/// # Panics
///
/// This function will panic if `out` is null.
///
/// # Safety
///
/// Same contract as `rudiments_next_bigger`.
unsafe fn next_bigger_checked(number: u64, out: *mut u64) -> RudimentsStatus {
    assert!(
        !out.is_null(),
        "called `rudiments_next_bigger` with null pointer"
    );

    match next_bigger(number) {
        Ok(bigger) => {
            *out = bigger;
            RudimentsStatus::Ok
        }
        Err(e) => e.into(),
    }
}
