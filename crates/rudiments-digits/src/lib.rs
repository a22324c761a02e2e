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

//! # Rudiments Digits
//!
//! Routines that treat an integer as a sequence of decimal digits.
//!
//! ## Modules
//!
//! - `error`: Error types for invalid numbers, digits and numeral ranges.
//! - `permutation`: `next_bigger`, the nearest larger integer made of the same
//!   digits (lexicographic next permutation with leftmost tie-breaking),
//!   generic over every primitive integer type with checked reassembly.
//! - `search`: `contains_digit`, digit membership by repeated division.
//! - `roman`: `to_roman`, subtractive Roman numerals for `1..=39`.

pub mod error;
pub mod permutation;
pub mod roman;
pub mod search;

pub use error::{InvalidDigitError, InvalidInputError, RomanRangeError};
pub use permutation::next_bigger;
pub use roman::to_roman;
pub use search::contains_digit;
