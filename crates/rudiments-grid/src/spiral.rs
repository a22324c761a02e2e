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

use crate::{error::InvalidShapeError, grid::SquareGrid};

/// Builds a `size x size` grid numbered `1..=size * size` in a clockwise
/// spiral, starting at the top-left corner.
///
/// The fill walks the remaining ring as four edges (top left-to-right,
/// right top-to-bottom, bottom right-to-left, left bottom-to-top), shrinking
/// the unfilled window after each edge.
///
/// # Errors
///
/// Returns `InvalidShapeError::Empty` if `size == 0`, and
/// `InvalidShapeError::LengthMismatch` if `size * size` overflows `usize`.
///
/// # Examples
///
/// ```rust
/// # use rudiments_grid::spiral;
///
/// let grid = spiral(3).unwrap();
/// assert_eq!(grid.into_rows(), vec![vec![1, 2, 3], vec![8, 9, 4], vec![7, 6, 5]]);
/// ```
pub fn spiral(size: usize) -> Result<SquareGrid<usize>, InvalidShapeError> {
    let mut grid = SquareGrid::filled(size, 0).inspect_err(|err| {
        tracing::debug!(size, %err, "rejected spiral fill");
    })?;
    tracing::trace!(size, "filling spiral grid");

    // Unfilled window is rows `top..bottom` and columns `left..right`.
    let (mut top, mut bottom, mut left, mut right) = (0, size, 0, size);
    let mut next = 1;

    while top < bottom && left < right {
        for col in left..right {
            grid[(top, col)] = next;
            next += 1;
        }
        top += 1;

        for row in top..bottom {
            grid[(row, right - 1)] = next;
            next += 1;
        }
        right -= 1;

        if top < bottom {
            for col in (left..right).rev() {
                grid[(bottom - 1, col)] = next;
                next += 1;
            }
            bottom -= 1;
        }

        if left < right {
            for row in (top..bottom).rev() {
                grid[(row, left)] = next;
                next += 1;
            }
            left += 1;
        }
    }

    debug_assert_eq!(next, size * size + 1, "spiral must visit every cell once");
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spiral_size_one() {
        assert_eq!(spiral(1).unwrap().into_rows(), vec![vec![1]]);
    }

    #[test]
    fn test_spiral_size_two() {
        assert_eq!(spiral(2).unwrap().into_rows(), vec![vec![1, 2], vec![4, 3]]);
    }

    #[test]
    fn test_spiral_size_four() {
        assert_eq!(
            spiral(4).unwrap().into_rows(),
            vec![
                vec![1, 2, 3, 4],
                vec![12, 13, 14, 5],
                vec![11, 16, 15, 6],
                vec![10, 9, 8, 7],
            ]
        );
    }

    #[test]
    fn test_spiral_size_five_center_is_last() {
        let grid = spiral(5).unwrap();
        assert_eq!(grid[(2, 2)], 25);
        assert_eq!(grid.row(0), &[1, 2, 3, 4, 5]);
        assert_eq!(grid.row(4), &[13, 12, 11, 10, 9]);
    }

    #[test]
    fn test_spiral_is_a_permutation() {
        for size in 1..=10 {
            let grid = spiral(size).unwrap();
            let mut cells = grid.as_slice().to_vec();
            cells.sort_unstable();
            let expected: Vec<usize> = (1..=size * size).collect();
            assert_eq!(cells, expected, "size {}", size);
        }
    }

    #[test]
    fn test_spiral_consecutive_numbers_are_adjacent() {
        let size = 7;
        let grid = spiral(size).unwrap();
        let mut position = vec![(0, 0); size * size + 1];
        for r in 0..size {
            for c in 0..size {
                position[grid[(r, c)]] = (r, c);
            }
        }
        for k in 1..size * size {
            let (r0, c0) = position[k];
            let (r1, c1) = position[k + 1];
            assert_eq!(r0.abs_diff(r1) + c0.abs_diff(c1), 1, "step {}", k);
        }
    }

    #[test]
    fn test_spiral_zero_fails() {
        assert_eq!(spiral(0).unwrap_err(), InvalidShapeError::Empty);
    }

    #[test]
    fn test_spiral_overflowing_size_fails() {
        assert!(matches!(
            spiral(usize::MAX),
            Err(InvalidShapeError::LengthMismatch { .. })
        ));
    }
}
