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

//! # Rudiments Grid
//!
//! Square grids of values and the two routines that operate on them.
//!
//! ## Modules
//!
//! - `error`: `InvalidShapeError`, raised before any mutation when a grid is
//!   empty, ragged, or not square.
//! - `grid`: `SquareGrid<T>`, a row-major `N x N` grid whose squareness is a
//!   type invariant, with row access, `(row, col)` indexing and conversions
//!   to and from nested vectors.
//! - `rotate`: In-place 90° clockwise rotation, layer by layer, with a single
//!   temporary holder per four-cell cycle (`O(1)` extra space, `O(N^2)` time).
//!   Works on nested rows, flat row-major buffers, and `SquareGrid`.
//! - `spiral`: Clockwise spiral numbering starting from one.

pub mod error;
pub mod grid;
pub mod rotate;
pub mod spiral;

pub use error::InvalidShapeError;
pub use grid::SquareGrid;
pub use rotate::{rotate_clockwise, rotate_clockwise_flat};
pub use spiral::spiral;
