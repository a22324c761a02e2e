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

/// A square on a chessboard, `x` for the file and `y` for the rank.
///
/// Coordinates are 1-based on a standard board (`1..=8`), but any integers
/// are accepted so the geometry also works on larger boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// The file (column), `1` for the a-file.
    pub x: i32,
    /// The rank (row), `1` for white's back rank.
    pub y: i32,
}

impl Position {
    /// The side length of a standard chessboard.
    pub const BOARD_SIZE: i32 = 8;

    /// Creates a new `Position`.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns `true` if both coordinates lie in `1..=8`.
    #[inline]
    pub fn is_on_board(&self) -> bool {
        (1..=Self::BOARD_SIZE).contains(&self.x) && (1..=Self::BOARD_SIZE).contains(&self.y)
    }

    /// Returns `true` if `other` shares a rank, file, or diagonal with `self`.
    #[inline]
    pub fn is_aligned_with(&self, other: &Self) -> bool {
        self.x == other.x
            || self.y == other.y
            || self.x.abs_diff(other.x) == self.y.abs_diff(other.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Returns `true` if a queen on `queen` attacks `king` on an empty board,
/// i.e. they share a rank, a file, or a diagonal.
///
/// # Examples
///
/// ```rust
/// # use rudiments_logic::{can_queen_capture_king, Position};
///
/// assert!(can_queen_capture_king(Position::new(1, 1), Position::new(5, 5)));
/// assert!(can_queen_capture_king(Position::new(2, 1), Position::new(2, 8)));
/// assert!(!can_queen_capture_king(Position::new(1, 1), Position::new(2, 8)));
/// ```
#[inline]
pub fn can_queen_capture_king(queen: Position, king: Position) -> bool {
    queen.is_aligned_with(&king)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn test_can_queen_capture_king_examples() {
        assert!(can_queen_capture_king(p(1, 1), p(5, 5)));
        assert!(can_queen_capture_king(p(2, 1), p(2, 8)));
        assert!(!can_queen_capture_king(p(1, 1), p(2, 8)));
    }

    #[test]
    fn test_can_queen_capture_king_rank_and_anti_diagonal() {
        assert!(can_queen_capture_king(p(1, 4), p(8, 4)));
        assert!(can_queen_capture_king(p(1, 8), p(8, 1)));
        assert!(can_queen_capture_king(p(4, 4), p(2, 6)));
        assert!(!can_queen_capture_king(p(4, 4), p(5, 6)));
    }

    #[test]
    fn test_can_queen_capture_king_is_symmetric_on_full_board() {
        for qx in 1..=8 {
            for qy in 1..=8 {
                for kx in 1..=8 {
                    for ky in 1..=8 {
                        let q = p(qx, qy);
                        let k = p(kx, ky);
                        assert_eq!(can_queen_capture_king(q, k), can_queen_capture_king(k, q));
                    }
                }
            }
        }
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        assert!(can_queen_capture_king(p(i32::MIN, i32::MIN), p(i32::MAX, i32::MAX)));
        assert!(!can_queen_capture_king(p(i32::MIN, 0), p(i32::MAX, 1)));
    }

    #[test]
    fn test_position_helpers() {
        assert!(p(1, 8).is_on_board());
        assert!(!p(0, 3).is_on_board());
        assert!(!p(3, 9).is_on_board());
        assert_eq!(Position::from((3, 4)), p(3, 4));
        assert_eq!(p(3, 4).to_string(), "(3, 4)");
    }

    #[test]
    fn test_position_fields_are_file_then_rank() {
        let pos = Position::from((1, 8));
        assert_eq!((pos.x, pos.y), (1, 8));
        assert!(can_queen_capture_king(pos, Position { x: 1, y: 1 }));
        assert!(can_queen_capture_king(pos, Position { x: 8, y: 8 }));
    }
}
