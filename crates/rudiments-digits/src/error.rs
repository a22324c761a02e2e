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

use rudiments_core::num::digits::DigitError;

/// The error type for `next_bigger`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum InvalidInputError {
    /// The number was zero or negative.
    #[error("expected a positive integer")]
    NonPositive,
    /// The next bigger permutation exceeds the maximum of the integer type.
    #[error("the next bigger permutation does not fit into the integer type")]
    Overflow,
    /// The digits could not be represented as a sequence.
    #[error("malformed digit sequence: {0}")]
    Digits(DigitError),
}

impl From<DigitError> for InvalidInputError {
    fn from(e: DigitError) -> Self {
        match e {
            DigitError::NonPositive => Self::NonPositive,
            DigitError::Overflow => Self::Overflow,
            other => Self::Digits(other),
        }
    }
}

/// The error type for digit arguments outside `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{digit} is not a decimal digit")]
pub struct InvalidDigitError {
    /// The rejected value.
    pub digit: u8,
}

/// The error type for numbers outside the supported Roman numeral range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{number} is outside the Roman numeral range {min}..={max}")]
pub struct RomanRangeError {
    /// The rejected number.
    pub number: u32,
    /// Smallest supported number.
    pub min: u32,
    /// Largest supported number.
    pub max: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_error_conversion() {
        assert_eq!(
            InvalidInputError::from(DigitError::NonPositive),
            InvalidInputError::NonPositive
        );
        assert_eq!(
            InvalidInputError::from(DigitError::Overflow),
            InvalidInputError::Overflow
        );
        assert_eq!(
            InvalidInputError::from(DigitError::LeadingZero),
            InvalidInputError::Digits(DigitError::LeadingZero)
        );
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            InvalidDigitError { digit: 12 }.to_string(),
            "12 is not a decimal digit"
        );
        assert_eq!(
            RomanRangeError {
                number: 40,
                min: 1,
                max: 39
            }
            .to_string(),
            "40 is outside the Roman numeral range 1..=39"
        );
    }
}
