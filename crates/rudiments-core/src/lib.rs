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

//! # Rudiments Core
//!
//! Foundational numerics and slice algorithms shared by the rudiments
//! crates. Everything here is allocation-free and generic over the primitive
//! integer types, so the higher-level crates can stay small and focused on
//! their own routine.
//!
//! ## Modules
//!
//! - `algorithm`: Generic slice algorithms: lexicographic next permutation
//!   with leftmost tie-breaking, a stable in-place insertion sort, and
//!   monotonicity predicates.
//! - `num`: Integer-centric utilities including the `Radix` associated
//!   constant trait and `DigitSequence`, a fixed-capacity, inline buffer of
//!   base-10 digits with checked conversion back to any primitive integer.
//!
//! Refer to each module for detailed APIs and examples.

pub mod algorithm;
pub mod num;
