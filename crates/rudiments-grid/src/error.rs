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

/// The error type for grids that are not non-empty squares.
///
/// Shape checks always run before a grid is touched, so a rejected grid is
/// left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum InvalidShapeError {
    /// The grid has no rows (or a requested size of zero).
    #[error("grid must contain at least one cell")]
    Empty,
    /// A row does not have as many cells as the grid has rows.
    #[error("row {row} has {found} cells, expected {expected}")]
    NotSquare {
        /// Index of the first offending row.
        row: usize,
        /// The number of rows, which every row length must match.
        expected: usize,
        /// The actual length of the offending row.
        found: usize,
    },
    /// A flat buffer does not hold exactly `size * size` cells.
    #[error("buffer holds {found} cells, expected {expected} for a square grid")]
    LengthMismatch {
        /// `size * size`.
        expected: usize,
        /// The actual buffer length.
        found: usize,
    },
}
