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

//! # In-Place Clockwise Rotation
//!
//! Rotates an `N x N` grid by 90° clockwise without allocating. The grid is
//! processed as `N / 2` concentric layers from the outermost ring inward. For
//! every offset along a layer's top edge, the four cells that map onto each
//! other are cycled through one temporary holder:
//!
//! ```text
//! left -> top, bottom -> left, right -> bottom, top -> right
//! ```
//!
//! The routine is shared by nested rows (`&mut [Vec<T>]`), flat row-major
//! buffers (`&mut [T]`) and [`SquareGrid`](crate::grid::SquareGrid) through the
//! crate-private `CellAccess` seam. Shape validation always completes before
//! the first write.

use crate::error::InvalidShapeError;

/// Read/write access to the cells of a square grid.
pub(crate) trait CellAccess<T>
where
    T: Copy,
{
    fn side(&self) -> usize;
    fn read(&self, row: usize, col: usize) -> T;
    fn write(&mut self, row: usize, col: usize, value: T);
}

/// A square view over a flat row-major buffer.
pub(crate) struct FlatCells<'a, T> {
    cells: &'a mut [T],
    size: usize,
}

impl<'a, T> FlatCells<'a, T> {
    #[inline]
    pub(crate) fn new(cells: &'a mut [T], size: usize) -> Self {
        debug_assert_eq!(
            cells.len(),
            size * size,
            "`FlatCells` requires exactly size * size cells"
        );
        Self { cells, size }
    }
}

impl<T> CellAccess<T> for FlatCells<'_, T>
where
    T: Copy,
{
    #[inline(always)]
    fn side(&self) -> usize {
        self.size
    }

    #[inline(always)]
    fn read(&self, row: usize, col: usize) -> T {
        self.cells[row * self.size + col]
    }

    #[inline(always)]
    fn write(&mut self, row: usize, col: usize, value: T) {
        self.cells[row * self.size + col] = value;
    }
}

impl<T> CellAccess<T> for [Vec<T>]
where
    T: Copy,
{
    #[inline(always)]
    fn side(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn read(&self, row: usize, col: usize) -> T {
        self[row][col]
    }

    #[inline(always)]
    fn write(&mut self, row: usize, col: usize, value: T) {
        self[row][col] = value;
    }
}

/// Rotates the cells behind `grid` 90° clockwise, layer by layer.
pub(crate) fn rotate_layers<T, G>(grid: &mut G)
where
    T: Copy,
    G: CellAccess<T> + ?Sized,
{
    let n = grid.side();
    for layer in 0..n / 2 {
        let first = layer;
        let last = n - 1 - layer;
        for i in first..last {
            let offset = i - first;
            let top = grid.read(first, i);

            let left = grid.read(last - offset, first);
            grid.write(first, i, left);

            let bottom = grid.read(last, last - offset);
            grid.write(last - offset, first, bottom);

            let right = grid.read(i, last);
            grid.write(last, last - offset, right);

            grid.write(i, last, top);
        }
    }
}

/// Checks that `rows` forms a non-empty square and returns its side length.
///
/// # Errors
///
/// - `InvalidShapeError::Empty` if there are no rows.
/// - `InvalidShapeError::NotSquare` for the first row whose length differs
///   from the number of rows.
pub fn validate_square<T>(rows: &[Vec<T>]) -> Result<usize, InvalidShapeError> {
    let size = rows.len();
    if size == 0 {
        return Err(InvalidShapeError::Empty);
    }
    match rows.iter().position(|r| r.len() != size) {
        Some(row) => Err(InvalidShapeError::NotSquare {
            row,
            expected: size,
            found: rows[row].len(),
        }),
        None => Ok(size),
    }
}

/// Returns `size * size` for a non-empty grid that fits in memory.
///
/// An overflowing `size` reports `LengthMismatch` with `expected` saturated
/// to `usize::MAX` and no cells found.
pub(crate) fn cell_count(size: usize) -> Result<usize, InvalidShapeError> {
    if size == 0 {
        return Err(InvalidShapeError::Empty);
    }
    size.checked_mul(size).ok_or(InvalidShapeError::LengthMismatch {
        expected: usize::MAX,
        found: 0,
    })
}

/// Checks that a flat buffer of `len` cells forms a non-empty `size x size` square.
pub(crate) fn validate_flat(len: usize, size: usize) -> Result<(), InvalidShapeError> {
    if size == 0 {
        return Err(InvalidShapeError::Empty);
    }
    match size.checked_mul(size) {
        Some(expected) if expected == len => Ok(()),
        Some(expected) => Err(InvalidShapeError::LengthMismatch {
            expected,
            found: len,
        }),
        None => Err(InvalidShapeError::LengthMismatch {
            expected: usize::MAX,
            found: len,
        }),
    }
}

/// Rotates a grid given as nested rows 90° clockwise in place and returns it.
///
/// Uses `O(1)` auxiliary space and `O(N^2)` time. The same rows are mutated
/// and handed back; nothing is copied.
///
/// # Errors
///
/// Fails with `InvalidShapeError` if the grid is empty or not square. The
/// check completes before any cell is written, so a rejected grid is
/// unchanged.
///
/// # Examples
///
/// ```rust
/// # use rudiments_grid::rotate_clockwise;
///
/// let mut grid = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
/// rotate_clockwise(&mut grid).unwrap();
/// assert_eq!(grid, vec![vec![7, 4, 1], vec![8, 5, 2], vec![9, 6, 3]]);
///
/// let mut ragged = vec![vec![1, 2], vec![3]];
/// assert!(rotate_clockwise(&mut ragged).is_err());
/// ```
pub fn rotate_clockwise<T>(rows: &mut [Vec<T>]) -> Result<&mut [Vec<T>], InvalidShapeError>
where
    T: Copy,
{
    let size = validate_square(rows).inspect_err(|err| {
        tracing::debug!(rows = rows.len(), %err, "rejected grid rotation");
    })?;
    tracing::trace!(size, "rotating grid clockwise");

    rotate_layers(&mut *rows);
    Ok(rows)
}

/// Rotates a flat row-major `size x size` buffer 90° clockwise in place.
///
/// # Errors
///
/// Fails with `InvalidShapeError` if `size == 0` or the buffer does not hold
/// exactly `size * size` cells. The buffer is untouched on error.
///
/// # Examples
///
/// ```rust
/// # use rudiments_grid::rotate_clockwise_flat;
///
/// let mut cells = [1, 2, 3, 4];
/// rotate_clockwise_flat(&mut cells, 2).unwrap();
/// assert_eq!(cells, [3, 1, 4, 2]);
/// ```
pub fn rotate_clockwise_flat<T>(cells: &mut [T], size: usize) -> Result<(), InvalidShapeError>
where
    T: Copy,
{
    validate_flat(cells.len(), size).inspect_err(|err| {
        tracing::debug!(size, cells = cells.len(), %err, "rejected flat grid rotation");
    })?;
    tracing::trace!(size, "rotating flat grid clockwise");

    rotate_layers(&mut FlatCells::new(cells, size));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::SquareGrid;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn random_rows(rng: &mut ChaCha8Rng, size: usize) -> Vec<Vec<i64>> {
        (0..size)
            .map(|_| (0..size).map(|_| rng.random_range(-1000..1000)).collect())
            .collect()
    }

    /// Rotation by definition: cell (r, c) of the result is cell (n - 1 - c, r) of the input.
    fn rotated_copy(rows: &[Vec<i64>]) -> Vec<Vec<i64>> {
        let n = rows.len();
        (0..n)
            .map(|r| (0..n).map(|c| rows[n - 1 - c][r]).collect())
            .collect()
    }

    #[test]
    fn test_rotate_3x3_example() {
        let mut grid = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
        let rotated = rotate_clockwise(&mut grid).unwrap();
        assert_eq!(rotated, &[vec![7, 4, 1], vec![8, 5, 2], vec![9, 6, 3]]);
    }

    #[test]
    fn test_rotate_returns_the_same_rows() {
        let mut grid = vec![vec![1, 2], vec![3, 4]];
        let ptr = grid.as_ptr();
        let rotated = rotate_clockwise(&mut grid).unwrap();
        assert_eq!(rotated.as_ptr(), ptr);
    }

    #[test]
    fn test_rotate_1x1_is_noop() {
        let mut grid = vec![vec![42]];
        rotate_clockwise(&mut grid).unwrap();
        assert_eq!(grid, vec![vec![42]]);
    }

    #[test]
    fn test_rotate_4x4_even_size() {
        let mut grid: Vec<Vec<i32>> = (0..4)
            .map(|r| (0..4).map(|c| r * 4 + c + 1).collect())
            .collect();
        rotate_clockwise(&mut grid).unwrap();
        assert_eq!(
            grid,
            vec![
                vec![13, 9, 5, 1],
                vec![14, 10, 6, 2],
                vec![15, 11, 7, 3],
                vec![16, 12, 8, 4],
            ]
        );
    }

    #[test]
    fn test_rotate_empty_fails() {
        let mut grid: Vec<Vec<i32>> = vec![];
        assert_eq!(
            rotate_clockwise(&mut grid).unwrap_err(),
            InvalidShapeError::Empty
        );
    }

    #[test]
    fn test_rotate_non_square_fails() {
        let mut grid = vec![vec![1, 2, 3], vec![4, 5, 6]];
        assert_eq!(
            rotate_clockwise(&mut grid).unwrap_err(),
            InvalidShapeError::NotSquare {
                row: 0,
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn test_rotate_ragged_rows_leave_grid_untouched() {
        // The first rows look square; only the last row is short.
        let original = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8]];
        let mut grid = original.clone();
        assert_eq!(
            rotate_clockwise(&mut grid).unwrap_err(),
            InvalidShapeError::NotSquare {
                row: 2,
                expected: 3,
                found: 2
            }
        );
        assert_eq!(grid, original);
    }

    #[test]
    fn test_rotate_flat_rejects_bad_buffers() {
        let mut cells = [1, 2, 3];
        assert_eq!(
            rotate_clockwise_flat(&mut cells, 2).unwrap_err(),
            InvalidShapeError::LengthMismatch {
                expected: 4,
                found: 3
            }
        );
        assert_eq!(cells, [1, 2, 3]);

        let mut empty: [u8; 0] = [];
        assert_eq!(
            rotate_clockwise_flat(&mut empty, 0).unwrap_err(),
            InvalidShapeError::Empty
        );
    }

    #[test]
    fn test_validate_flat_overflowing_size() {
        assert_eq!(
            validate_flat(4, usize::MAX),
            Err(InvalidShapeError::LengthMismatch {
                expected: usize::MAX,
                found: 4
            })
        );
    }

    #[test]
    fn test_rotate_matches_definition_on_random_grids() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for size in 1..=12 {
            let original = random_rows(&mut rng, size);
            let expected = rotated_copy(&original);
            let mut grid = original.clone();
            rotate_clockwise(&mut grid).unwrap();
            assert_eq!(grid, expected, "size {}", size);
        }
    }

    #[test]
    fn test_four_rotations_are_identity() {
        let mut rng = ChaCha8Rng::seed_from_u64(0xC0FFEE);
        for size in 1..=16 {
            let original = random_rows(&mut rng, size);
            let mut grid = original.clone();
            for _ in 0..4 {
                rotate_clockwise(&mut grid).unwrap();
            }
            assert_eq!(grid, original, "size {}", size);
        }
    }

    #[test]
    fn test_flat_nested_and_grid_agree() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for size in 1..=9 {
            let rows = random_rows(&mut rng, size);

            let mut nested = rows.clone();
            rotate_clockwise(&mut nested).unwrap();

            let mut flat: Vec<i64> = rows.iter().flatten().copied().collect();
            rotate_clockwise_flat(&mut flat, size).unwrap();

            let mut grid = SquareGrid::try_from_rows(rows).unwrap();
            grid.rotate_clockwise();

            let nested_flat: Vec<i64> = nested.into_iter().flatten().collect();
            assert_eq!(flat, nested_flat);
            assert_eq!(grid.as_slice(), nested_flat.as_slice());
        }
    }
}
