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

use num_traits::Zero;
use std::ops::Sub;

/// Returns the three values in ascending order.
#[inline(always)]
fn sort3<T>(a: T, b: T, c: T) -> (T, T, T)
where
    T: PartialOrd,
{
    let (a, b) = if a > b { (b, a) } else { (a, b) };
    let (b, c) = if b > c { (c, b) } else { (b, c) };
    let (a, b) = if a > b { (b, a) } else { (a, b) };
    (a, b, c)
}

/// Returns `true` if `a`, `b` and `c` are the sides of a non-degenerate
/// triangle: all positive and each shorter than the sum of the other two.
///
/// The check compares the shortest side with the difference of the two
/// longest ones, so it never forms a sum and cannot overflow.
///
/// # Examples
///
/// ```rust
/// # use rudiments_logic::is_triangle;
///
/// assert!(is_triangle(3, 4, 5));
/// assert!(!is_triangle(1, 2, 3));
/// ```
pub fn is_triangle<T>(a: T, b: T, c: T) -> bool
where
    T: Copy + PartialOrd + Zero + Sub<Output = T>,
{
    let zero = T::zero();
    if !(a > zero && b > zero && c > zero) {
        return false;
    }
    let (shortest, middle, longest) = sort3(a, b, c);
    shortest > longest - middle
}

/// Returns `true` if `a`, `b` and `c` form a triangle with at least two
/// equal sides.
///
/// # Examples
///
/// ```rust
/// # use rudiments_logic::is_isosceles_triangle;
///
/// assert!(is_isosceles_triangle(2, 3, 2));
/// assert!(!is_isosceles_triangle(2, 2, 5));
/// assert!(!is_isosceles_triangle(3, 0, 3));
/// ```
pub fn is_isosceles_triangle<T>(a: T, b: T, c: T) -> bool
where
    T: Copy + PartialOrd + Zero + Sub<Output = T>,
{
    (a == b || a == c || b == c) && is_triangle(a, b, c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_isosceles_triangle_examples() {
        assert!(!is_isosceles_triangle(1, 2, 3));
        assert!(!is_isosceles_triangle(3, 1, 2));
        assert!(is_isosceles_triangle(2, 3, 2));
        assert!(is_isosceles_triangle(3, 2, 2));
        assert!(is_isosceles_triangle(2, 2, 3));
        assert!(!is_isosceles_triangle(2, 2, 5));
        assert!(!is_isosceles_triangle(3, 0, 3));
    }

    #[test]
    fn test_equilateral_is_isosceles() {
        assert!(is_isosceles_triangle(7, 7, 7));
    }

    #[test]
    fn test_negative_and_nan_sides() {
        assert!(!is_isosceles_triangle(-2, -2, -3));
        assert!(!is_isosceles_triangle(f64::NAN, 2.0, 2.0));
        assert!(is_isosceles_triangle(0.5, 0.5, 0.9));
    }

    #[test]
    fn test_is_triangle_large_sides_do_not_overflow() {
        assert!(is_triangle(u32::MAX, u32::MAX, u32::MAX));
        assert!(is_isosceles_triangle(u64::MAX, u64::MAX, 1));
        assert!(!is_triangle(1u8, 1, 255));
    }

    #[test]
    fn test_is_triangle_agrees_with_sum_formulation() {
        for a in 0..12i64 {
            for b in 0..12i64 {
                for c in 0..12i64 {
                    let expected = a > 0 && b > 0 && c > 0 && a + b > c && a + c > b && b + c > a;
                    assert_eq!(is_triangle(a, b, c), expected, "{} {} {}", a, b, c);
                }
            }
        }
    }

    #[test]
    fn test_sort3_orders_all_permutations() {
        for (a, b, c) in [(1, 2, 3), (1, 3, 2), (2, 1, 3), (2, 3, 1), (3, 1, 2), (3, 2, 1)] {
            assert_eq!(sort3(a, b, c), (1, 2, 3));
        }
    }
}
