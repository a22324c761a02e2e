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

//! # Decimal Digit Sequences
//!
//! `DigitSequence` is the base-10 decomposition of a non-zero integer, most
//! significant digit first, held in a fixed-size inline buffer. The buffer is
//! wide enough for every primitive integer up to 128 bits, so decomposition,
//! rearrangement and reassembly never touch the heap.
//!
//! ## Invariants
//!
//! - Every stored value is a decimal digit (`0..=9`).
//! - The sequence is never empty and never starts with `0`.
//!
//! Reassembly back into an integer is checked: a sequence that does not fit
//! into the requested type yields `DigitError::Overflow` instead of wrapping.
//!
//! ```rust
//! use rudiments_core::num::digits::DigitSequence;
//!
//! let mut digits = DigitSequence::try_from_positive(90822_u32).unwrap();
//! assert_eq!(digits.as_slice(), &[9, 0, 8, 2, 2]);
//! assert!(digits.next_permutation());
//! assert_eq!(digits.try_to_integer::<u32>(), Ok(92028));
//! ```

use crate::{
    algorithm,
    num::constants::{DecimalWidth, Radix},
};
use num_traits::{NumCast, PrimInt};

/// The number of digits a `DigitSequence` can hold.
///
/// `u128::MAX` and `i128::MIN` both have 39 decimal digits.
pub const DIGIT_CAPACITY: usize = 39;

/// The error type for building and converting digit sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum DigitError {
    /// The source integer was zero or negative.
    #[error("expected a positive integer")]
    NonPositive,
    /// The sequence does not fit into the requested integer type.
    #[error("digit sequence does not fit into the target integer type")]
    Overflow,
    /// No digits were supplied.
    #[error("digit sequence must not be empty")]
    Empty,
    /// The first digit was zero.
    #[error("digit sequence must not start with a zero")]
    LeadingZero,
    /// A value outside `0..=9` was supplied.
    #[error("value {value} at position {position} is not a decimal digit")]
    InvalidDigit {
        /// Position of the offending value.
        position: usize,
        /// The offending value.
        value: u8,
    },
    /// More digits were supplied than the buffer can hold.
    #[error("{len} digits exceed the capacity of {capacity}")]
    Capacity {
        /// Number of supplied digits.
        len: usize,
        /// The fixed capacity, `DIGIT_CAPACITY`.
        capacity: usize,
    },
}

/// The base-10 digits of a non-zero integer, most significant first.
#[derive(Clone, Copy)]
pub struct DigitSequence {
    digits: [u8; DIGIT_CAPACITY],
    len: usize,
}

/// Returns the last decimal digit of `value`, ignoring its sign.
#[inline(always)]
fn low_digit<T>(value: T) -> u8
where
    T: PrimInt + Radix,
{
    let rem = value % T::RADIX;
    let magnitude = if rem < T::zero() { T::zero() - rem } else { rem };
    // `magnitude` is in `0..10`, which every primitive integer can represent as `u8`.
    magnitude.to_u8().unwrap_or_default()
}

impl DigitSequence {
    /// Decomposes a positive integer into its decimal digits.
    ///
    /// # Errors
    ///
    /// Returns `DigitError::NonPositive` if `value <= 0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rudiments_core::num::digits::{DigitError, DigitSequence};
    ///
    /// let d = DigitSequence::try_from_positive(123450_i64).unwrap();
    /// assert_eq!(d.as_slice(), &[1, 2, 3, 4, 5, 0]);
    /// assert_eq!(DigitSequence::try_from_positive(0_i64).unwrap_err(), DigitError::NonPositive);
    /// ```
    #[inline]
    pub fn try_from_positive<T>(value: T) -> Result<Self, DigitError>
    where
        T: PrimInt + Radix,
    {
        if value <= T::zero() {
            return Err(DigitError::NonPositive);
        }
        Ok(Self::decompose(value))
    }

    /// Decomposes the magnitude of a non-zero integer into its decimal digits.
    ///
    /// Negative values are decomposed without negating them first, so
    /// `i32::MIN` is handled. Returns `None` for zero, which has no canonical
    /// digit sequence without a leading zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rudiments_core::num::digits::DigitSequence;
    ///
    /// let d = DigitSequence::from_magnitude(-907_i32).unwrap();
    /// assert_eq!(d.as_slice(), &[9, 0, 7]);
    /// assert!(DigitSequence::from_magnitude(0_u8).is_none());
    /// ```
    #[inline]
    pub fn from_magnitude<T>(value: T) -> Option<Self>
    where
        T: PrimInt + Radix,
    {
        if value.is_zero() {
            return None;
        }
        Some(Self::decompose(value))
    }

    /// Builds a sequence from raw digits, most significant first.
    ///
    /// # Errors
    ///
    /// - `DigitError::Empty` if `digits` is empty.
    /// - `DigitError::Capacity` if more than `DIGIT_CAPACITY` digits are given.
    /// - `DigitError::InvalidDigit` if a value is greater than 9.
    /// - `DigitError::LeadingZero` if the first digit is 0.
    pub fn try_from_digits(digits: &[u8]) -> Result<Self, DigitError> {
        if digits.is_empty() {
            return Err(DigitError::Empty);
        }
        if digits.len() > DIGIT_CAPACITY {
            return Err(DigitError::Capacity {
                len: digits.len(),
                capacity: DIGIT_CAPACITY,
            });
        }
        if let Some(position) = digits.iter().position(|&d| d > 9) {
            return Err(DigitError::InvalidDigit {
                position,
                value: digits[position],
            });
        }
        if digits[0] == 0 {
            return Err(DigitError::LeadingZero);
        }

        let mut buffer = [0u8; DIGIT_CAPACITY];
        buffer[..digits.len()].copy_from_slice(digits);
        Ok(Self {
            digits: buffer,
            len: digits.len(),
        })
    }

    fn decompose<T>(value: T) -> Self
    where
        T: PrimInt + Radix,
    {
        debug_assert!(!value.is_zero(), "called `decompose` with zero");

        let mut digits = [0u8; DIGIT_CAPACITY];
        let mut len = 0;
        let mut rest = value;
        while !rest.is_zero() {
            digits[len] = low_digit(rest);
            rest = rest / T::RADIX;
            len += 1;
        }
        digits[..len].reverse();
        Self { digits, len }
    }

    /// Returns the number of digits.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the sequence holds no digits.
    ///
    /// Always `false` for a constructed sequence.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the digits as a slice, most significant first.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.digits[..self.len]
    }

    /// Returns an iterator over the digits, most significant first.
    #[inline]
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, u8>> {
        self.as_slice().iter().copied()
    }

    /// Returns the most significant digit. Never zero.
    #[inline]
    pub fn leading_digit(&self) -> u8 {
        self.digits[0]
    }

    /// Returns `true` if `digit` occurs anywhere in the sequence.
    #[inline]
    pub fn contains(&self, digit: u8) -> bool {
        self.as_slice().contains(&digit)
    }

    /// Counts how often each digit `0..=9` occurs.
    ///
    /// Two sequences are permutations of each other exactly when their
    /// histograms are equal.
    pub fn histogram(&self) -> [usize; 10] {
        let mut counts = [0usize; 10];
        for d in self.iter() {
            counts[d as usize] += 1;
        }
        counts
    }

    /// Advances the digits to the lexicographically next greater arrangement.
    ///
    /// Returns `false` and leaves the sequence untouched if the digits are in
    /// non-increasing order, i.e. no greater arrangement exists.
    ///
    /// The leading digit can never become zero: either the pivot lies to the
    /// right of it and the leading digit is untouched, or the pivot is the
    /// leading digit and gets replaced by a strictly greater one.
    pub fn next_permutation(&mut self) -> bool {
        let advanced = algorithm::next_permutation(&mut self.digits[..self.len]);
        debug_assert!(
            self.digits[0] != 0,
            "`next_permutation` produced a leading zero"
        );
        advanced
    }

    /// Reassembles the digits into an integer of type `T`.
    ///
    /// # Errors
    ///
    /// Returns `DigitError::Overflow` if the value exceeds `T::max_value()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rudiments_core::num::digits::{DigitError, DigitSequence};
    ///
    /// let d = DigitSequence::try_from_digits(&[3, 0, 0]).unwrap();
    /// assert_eq!(d.try_to_integer::<u16>(), Ok(300));
    /// assert_eq!(d.try_to_integer::<u8>(), Err(DigitError::Overflow));
    /// ```
    pub fn try_to_integer<T>(&self) -> Result<T, DigitError>
    where
        T: PrimInt + Radix + DecimalWidth,
    {
        if self.len > T::MAX_DECIMAL_DIGITS {
            return Err(DigitError::Overflow);
        }

        self.iter().try_fold(T::zero(), |acc, d| {
            let digit = <T as NumCast>::from(d).ok_or(DigitError::Overflow)?;
            acc.checked_mul(&T::RADIX)
                .and_then(|shifted| shifted.checked_add(&digit))
                .ok_or(DigitError::Overflow)
        })
    }
}

impl PartialEq for DigitSequence {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for DigitSequence {}

impl std::hash::Hash for DigitSequence {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl TryFrom<&[u8]> for DigitSequence {
    type Error = DigitError;

    fn try_from(digits: &[u8]) -> Result<Self, Self::Error> {
        Self::try_from_digits(digits)
    }
}

impl<'a> IntoIterator for &'a DigitSequence {
    type Item = u8;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for d in self.iter() {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for DigitSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DigitSequence({})", self)
    }
}
