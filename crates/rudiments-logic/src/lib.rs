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

//! # Rudiments Logic
//!
//! Small predicates built from comparisons and branches.
//!
//! ## Modules
//!
//! - `compare`: `is_positive` (zero counts as positive) and `max_of_three`.
//! - `chess`: `Position` on a chessboard and `can_queen_capture_king`.
//! - `triangle`: `is_triangle` and `is_isosceles_triangle`, formulated so
//!   that no side sum can overflow.

pub mod chess;
pub mod compare;
pub mod triangle;

pub use chess::{can_queen_capture_king, Position};
pub use compare::{is_positive, max_of_three};
pub use triangle::{is_isosceles_triangle, is_triangle};
