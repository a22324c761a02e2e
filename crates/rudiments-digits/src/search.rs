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

use crate::error::InvalidDigitError;
use num_traits::PrimInt;
use rudiments_core::num::{constants::Radix, digits::DigitSequence};

/// Checks whether the decimal representation of `number` contains `digit`.
///
/// Negative numbers are inspected by magnitude, and `0` is written as the
/// single digit `0`, so `contains_digit(0, 0)` and `contains_digit(-10, 1)`
/// are both `true` rather than rejected as non-positive.
///
/// # Errors
///
/// Returns `InvalidDigitError` if `digit > 9`.
///
/// # Examples
///
/// ```rust
/// # use rudiments_digits::contains_digit;
///
/// assert_eq!(contains_digit(123450, 0), Ok(true));
/// assert_eq!(contains_digit(12345, 0), Ok(false));
/// assert!(contains_digit(12345, 10).is_err());
/// ```
pub fn contains_digit<T>(number: T, digit: u8) -> Result<bool, InvalidDigitError>
where
    T: PrimInt + Radix,
{
    if digit > 9 {
        tracing::debug!(digit, "rejected digit outside 0..=9");
        return Err(InvalidDigitError { digit });
    }

    Ok(match DigitSequence::from_magnitude(number) {
        Some(digits) => digits.contains(digit),
        None => digit == 0,
    })
}
