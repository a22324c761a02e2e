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

//! # Rudiments Text
//!
//! Routines over strings. All of them operate on Unicode scalar values
//! (`char`), never on raw bytes, so multi-byte text behaves as expected.
//!
//! ## Modules
//!
//! - `palindrome`: `is_palindrome`, comparing from both ends without allocating.
//! - `search`: `index_of`, the char index of the first occurrence.
//! - `shuffle`: `shuffle_chars`, repeated "even positions first, odd
//!   positions last" shuffling in `O(n)` regardless of the iteration count,
//!   via the cycle decomposition of the one-step permutation.
//! - `words`: `number_to_words`, spelling out a numeric string digit by digit.

pub mod error;
pub mod palindrome;
pub mod search;
pub mod shuffle;
pub mod words;

pub use error::UnexpectedCharError;
pub use palindrome::is_palindrome;
pub use search::index_of;
pub use shuffle::{shuffle_chars, shuffle_period};
pub use words::number_to_words;
