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

/// Returns `true` if `value` is zero or greater.
///
/// Values that do not compare with zero (`NaN`) are not positive.
///
/// # Examples
///
/// ```rust
/// # use rudiments_logic::is_positive;
///
/// assert!(is_positive(10));
/// assert!(is_positive(0));
/// assert!(!is_positive(-5));
/// ```
#[inline]
pub fn is_positive<T>(value: T) -> bool
where
    T: Zero + PartialOrd,
{
    value >= T::zero()
}

/// Returns the largest of three values.
///
/// On ties the earliest argument wins.
///
/// # Examples
///
/// ```rust
/// # use rudiments_logic::max_of_three;
///
/// assert_eq!(max_of_three(1, 2, 3), 3);
/// assert_eq!(max_of_three(-0.1, 0.0, 0.2), 0.2);
/// ```
#[inline]
pub fn max_of_three<T>(a: T, b: T, c: T) -> T
where
    T: PartialOrd,
{
    let ab = if a >= b { a } else { b };
    if ab >= c {
        ab
    } else {
        c
    }
}
