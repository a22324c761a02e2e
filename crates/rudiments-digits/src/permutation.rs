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

//! # Nearest Bigger Permutation
//!
//! Finds the smallest integer that is strictly greater than the input and is
//! written with exactly the same decimal digits. The digits are decomposed
//! into an inline [`DigitSequence`], advanced to their lexicographic next
//! permutation in place, and reassembled with checked arithmetic:
//!
//! 1. Scan right to left for the pivot, the last digit smaller than its right
//!    neighbour. Without a pivot the digits are non-increasing and the input
//!    is returned unchanged.
//! 2. Pick the smallest digit right of the pivot that is strictly greater
//!    than it, the leftmost one on ties.
//! 3. Swap the two digits.
//! 4. Sort the digits right of the pivot ascending.
//! 5. Reassemble.
//!
//! A leading zero can never appear: the prefix left of the pivot is kept and
//! the pivot itself only grows.

use crate::error::InvalidInputError;
use num_traits::PrimInt;
use rudiments_core::num::{
    constants::{DecimalWidth, Radix},
    digits::DigitSequence,
};

/// Returns the nearest integer greater than `number` that consists of the
/// same digits, or `number` itself if no such integer exists.
///
/// # Errors
///
/// - `InvalidInputError::NonPositive` if `number <= 0`.
/// - `InvalidInputError::Overflow` if the result would exceed `T::max_value()`.
///
/// Validation happens before any work is done.
///
/// # Examples
///
/// ```rust
/// # use rudiments_digits::{next_bigger, InvalidInputError};
///
/// assert_eq!(next_bigger(12345_u32), Ok(12354));
/// assert_eq!(next_bigger(123450_u32), Ok(123504));
/// assert_eq!(next_bigger(90822_u32), Ok(92028));
/// assert_eq!(next_bigger(321_u32), Ok(321));
/// assert_eq!(next_bigger(0_u32), Err(InvalidInputError::NonPositive));
/// ```
pub fn next_bigger<T>(number: T) -> Result<T, InvalidInputError>
where
    T: PrimInt + Radix + DecimalWidth + std::fmt::Display,
{
    let mut digits = DigitSequence::try_from_positive(number).map_err(|e| {
        tracing::debug!(%number, "rejected non-positive input for next bigger permutation");
        InvalidInputError::from(e)
    })?;

    if !digits.next_permutation() {
        tracing::trace!(%number, "digits are non-increasing, no bigger permutation");
        return Ok(number);
    }

    let bigger = digits.try_to_integer::<T>().map_err(|e| {
        tracing::debug!(%number, %digits, "next bigger permutation overflows the integer type");
        InvalidInputError::from(e)
    })?;
    tracing::trace!(%number, %bigger, "found next bigger permutation");
    Ok(bigger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn histogram(n: u64) -> [usize; 10] {
        DigitSequence::try_from_positive(n).unwrap().histogram()
    }

    /// Smallest number above `n` with the same digits, by exhaustive search.
    fn brute_force_next_bigger(n: u64) -> u64 {
        let target = histogram(n);
        let len = DigitSequence::try_from_positive(n).unwrap().len() as u32;
        let limit = 10u64.pow(len);
        ((n + 1)..limit)
            .find(|&m| histogram(m) == target)
            .unwrap_or(n)
    }

    #[test]
    fn test_next_bigger_documented_examples() {
        assert_eq!(next_bigger(12345_u64), Ok(12354));
        assert_eq!(next_bigger(123450_u64), Ok(123504));
        assert_eq!(next_bigger(12344_u64), Ok(12434));
        assert_eq!(next_bigger(123440_u64), Ok(124034));
        assert_eq!(next_bigger(1203450_u64), Ok(1203504));
        assert_eq!(next_bigger(90822_u64), Ok(92028));
        assert_eq!(next_bigger(321321_u64), Ok(322113));
    }

    #[test]
    fn test_next_bigger_descending_is_unchanged() {
        assert_eq!(next_bigger(321_u32), Ok(321));
        assert_eq!(next_bigger(9876543210_u64), Ok(9876543210));
        assert_eq!(next_bigger(5500_u32), Ok(5500));
        assert_eq!(next_bigger(1000_u32), Ok(1000));
    }

    #[test]
    fn test_next_bigger_single_digit_returns_itself() {
        for d in 1..=9_u8 {
            assert_eq!(next_bigger(d), Ok(d));
        }
    }

    #[test]
    fn test_next_bigger_trailing_zeros() {
        assert_eq!(next_bigger(1200_u32), Ok(2001));
        assert_eq!(next_bigger(10_u32), Ok(10));
        assert_eq!(next_bigger(1020_u32), Ok(1200));
    }

    #[test]
    fn test_next_bigger_rejects_non_positive() {
        assert_eq!(next_bigger(0_i32), Err(InvalidInputError::NonPositive));
        assert_eq!(next_bigger(-12_i32), Err(InvalidInputError::NonPositive));
        assert_eq!(next_bigger(i64::MIN), Err(InvalidInputError::NonPositive));
    }

    #[test]
    fn test_next_bigger_overflow() {
        assert_eq!(
            next_bigger(4_199_999_999_u32),
            Err(InvalidInputError::Overflow)
        );
        assert_eq!(next_bigger(127_i8), Err(InvalidInputError::Overflow));
        assert_eq!(next_bigger(4_199_999_999_u64), Ok(4_919_999_999));
    }

    #[test]
    fn test_next_bigger_signed_and_wide_types() {
        assert_eq!(next_bigger(12_i8), Ok(21));
        assert_eq!(next_bigger(1234_i16), Ok(1243));
        assert_eq!(
            next_bigger(i128::MAX as u128),
            Ok(170141183460469231731687303715884105772_u128)
        );
        assert_eq!(next_bigger(i128::MAX), Err(InvalidInputError::Overflow));
        assert_eq!(next_bigger(u128::MAX), Err(InvalidInputError::Overflow));
    }

    #[test]
    fn test_next_bigger_matches_brute_force() {
        for n in 1..=999_u64 {
            assert_eq!(next_bigger(n), Ok(brute_force_next_bigger(n)), "n = {}", n);
        }
    }

    #[test]
    fn test_next_bigger_preserves_digit_multiset() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        for _ in 0..1000 {
            let n: u64 = rng.random_range(1..1_000_000_000_000);
            let m = next_bigger(n).unwrap();
            assert_eq!(histogram(n), histogram(m), "n = {}", n);
            assert!(m >= n);
            if m == n {
                let d = DigitSequence::try_from_positive(n).unwrap();
                assert!(rudiments_core::algorithm::is_non_increasing(d.as_slice()));
            }
        }
    }
}
