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

use crate::{error::InvalidShapeError, rotate};
use std::ops::{Index, IndexMut};

/// A non-empty `N x N` grid stored in row-major order.
///
/// Squareness is established once, at construction, so operations such as
/// [`SquareGrid::rotate_clockwise`] cannot fail.
///
/// # Examples
///
/// ```rust
/// # use rudiments_grid::SquareGrid;
///
/// let mut grid = SquareGrid::try_from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// grid.rotate_clockwise();
/// assert_eq!(grid.into_rows(), vec![vec![3, 1], vec![4, 2]]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SquareGrid<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T> SquareGrid<T> {
    /// Creates a grid of side `size` whose cell `(row, col)` is `f(row, col)`.
    ///
    /// # Errors
    ///
    /// - `InvalidShapeError::Empty` if `size == 0`.
    /// - `InvalidShapeError::LengthMismatch` if `size * size` overflows `usize`.
    pub fn from_fn<F>(size: usize, mut f: F) -> Result<Self, InvalidShapeError>
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut cells = Vec::with_capacity(rotate::cell_count(size)?);
        for row in 0..size {
            for col in 0..size {
                cells.push(f(row, col));
            }
        }
        Ok(Self { size, cells })
    }

    /// Creates a grid from nested rows.
    ///
    /// # Errors
    ///
    /// - `InvalidShapeError::Empty` if `rows` is empty.
    /// - `InvalidShapeError::NotSquare` if any row length differs from the
    ///   number of rows.
    pub fn try_from_rows(rows: Vec<Vec<T>>) -> Result<Self, InvalidShapeError> {
        let size = rotate::validate_square(&rows)?;
        let cells = rows.into_iter().flatten().collect();
        Ok(Self { size, cells })
    }

    /// Creates a grid from a flat row-major buffer of `size * size` cells.
    ///
    /// # Errors
    ///
    /// - `InvalidShapeError::Empty` if `size == 0`.
    /// - `InvalidShapeError::LengthMismatch` if the buffer length is not `size * size`.
    pub fn try_from_flat(size: usize, cells: Vec<T>) -> Result<Self, InvalidShapeError> {
        rotate::validate_flat(cells.len(), size)?;
        Ok(Self { size, cells })
    }

    /// Returns the side length `N`.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of cells, `N * N`.
    #[inline]
    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    /// Returns a reference to the cell at `(row, col)`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.size && col < self.size {
            self.cells.get(row * self.size + col)
        } else {
            None
        }
    }

    /// Returns a mutable reference to the cell at `(row, col)`, or `None` if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.size && col < self.size {
            self.cells.get_mut(row * self.size + col)
        } else {
            None
        }
    }

    /// Returns the cells of one row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.size()`.
    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        assert!(
            row < self.size,
            "called `SquareGrid::row` with row {} on a grid of size {}",
            row,
            self.size
        );
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    /// Returns an iterator over the rows, top to bottom.
    #[inline]
    pub fn rows(&self) -> std::slice::ChunksExact<'_, T> {
        self.cells.chunks_exact(self.size)
    }

    /// Returns all cells in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Consumes the grid and returns its rows as nested vectors.
    pub fn into_rows(self) -> Vec<Vec<T>> {
        let size = self.size;
        let mut rows = Vec::with_capacity(size);
        let mut cells = self.cells.into_iter();
        for _ in 0..size {
            rows.push(cells.by_ref().take(size).collect());
        }
        rows
    }
}

impl<T> SquareGrid<T>
where
    T: Clone,
{
    /// Creates a grid of side `size` with every cell set to `value`.
    ///
    /// # Errors
    ///
    /// - `InvalidShapeError::Empty` if `size == 0`.
    /// - `InvalidShapeError::LengthMismatch` if `size * size` overflows `usize`.
    pub fn filled(size: usize, value: T) -> Result<Self, InvalidShapeError> {
        let len = rotate::cell_count(size)?;
        Ok(Self {
            size,
            cells: vec![value; len],
        })
    }
}

impl<T> SquareGrid<T>
where
    T: Copy,
{
    /// Rotates the grid 90° clockwise in place and returns it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rudiments_grid::SquareGrid;
    ///
    /// let mut grid = SquareGrid::from_fn(3, |r, c| r * 3 + c + 1).unwrap();
    /// grid.rotate_clockwise();
    /// assert_eq!(grid.row(0), &[7, 4, 1]);
    /// ```
    #[inline]
    pub fn rotate_clockwise(&mut self) -> &mut Self {
        rotate::rotate_layers(&mut rotate::FlatCells::new(&mut self.cells, self.size));
        self
    }
}

impl<T> Index<(usize, usize)> for SquareGrid<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.size && col < self.size,
            "index ({}, {}) out of bounds for grid of size {}",
            row,
            col,
            self.size
        );
        &self.cells[row * self.size + col]
    }
}

impl<T> IndexMut<(usize, usize)> for SquareGrid<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(
            row < self.size && col < self.size,
            "index ({}, {}) out of bounds for grid of size {}",
            row,
            col,
            self.size
        );
        &mut self.cells[row * self.size + col]
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for SquareGrid<T> {
    type Error = InvalidShapeError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Self::try_from_rows(rows)
    }
}

impl<T> From<SquareGrid<T>> for Vec<Vec<T>> {
    fn from(grid: SquareGrid<T>) -> Self {
        grid.into_rows()
    }
}

impl<T> std::fmt::Debug for SquareGrid<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}

impl<T> std::fmt::Display for SquareGrid<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_row_major() {
        let g = SquareGrid::from_fn(2, |r, c| (r, c)).unwrap();
        assert_eq!(g.as_slice(), &[(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(g.size(), 2);
        assert_eq!(g.num_cells(), 4);
    }

    #[test]
    fn test_zero_size_is_rejected() {
        assert_eq!(
            SquareGrid::from_fn(0, |_, _| 0u8).unwrap_err(),
            InvalidShapeError::Empty
        );
        assert_eq!(
            SquareGrid::filled(0, 1u8).unwrap_err(),
            InvalidShapeError::Empty
        );
    }

    #[test]
    fn test_overflowing_size_is_rejected() {
        let overflow = InvalidShapeError::LengthMismatch {
            expected: usize::MAX,
            found: 0,
        };
        assert_eq!(
            SquareGrid::from_fn(usize::MAX, |_, _| 0u8).unwrap_err(),
            overflow
        );
        assert_eq!(SquareGrid::filled(usize::MAX, 1u8).unwrap_err(), overflow);
    }

    #[test]
    fn test_try_from_rows_rejects_ragged() {
        let err = SquareGrid::try_from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            InvalidShapeError::NotSquare {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_try_from_flat_length_mismatch() {
        let err = SquareGrid::try_from_flat(3, vec![0; 8]).unwrap_err();
        assert_eq!(
            err,
            InvalidShapeError::LengthMismatch {
                expected: 9,
                found: 8
            }
        );
        assert!(SquareGrid::try_from_flat(3, vec![0; 9]).is_ok());
    }

    #[test]
    fn test_get_and_index() {
        let mut g = SquareGrid::from_fn(3, |r, c| r * 10 + c).unwrap();
        assert_eq!(g.get(2, 1), Some(&21));
        assert_eq!(g.get(3, 0), None);
        assert_eq!(g.get(0, 3), None);
        assert_eq!(g[(1, 2)], 12);
        g[(1, 2)] = 99;
        *g.get_mut(0, 0).unwrap() = 7;
        assert_eq!(g.row(1), &[10, 11, 99]);
        assert_eq!(g.row(0), &[7, 1, 2]);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds_panics() {
        let g = SquareGrid::filled(2, 0).unwrap();
        let _ = g[(0, 2)];
    }

    #[test]
    fn test_into_rows_round_trip() {
        let rows = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
        let g = SquareGrid::try_from(rows.clone()).unwrap();
        let back: Vec<Vec<i32>> = g.into();
        assert_eq!(back, rows);
    }

    #[test]
    fn test_display_and_debug() {
        let g = SquareGrid::from_fn(2, |r, c| r * 2 + c).unwrap();
        assert_eq!(format!("{}", g), "0 1\n2 3");
        assert_eq!(format!("{:?}", g), "[[0, 1], [2, 3]]");
    }
}
