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

/// Returns the first index whose left-hand sum equals its right-hand sum.
///
/// The element at the index itself belongs to neither side. Sums are kept in
/// `i128`, so any slice of up-to-64-bit integers is summed without overflow.
/// Runs in a single pass after computing the total.
///
/// # Examples
///
/// ```rust
/// # use rudiments_seq::balance_index;
///
/// assert_eq!(balance_index(&[1, 2, 5, 3, 0]), Some(2));
/// assert_eq!(balance_index(&[2, 3, 9, 5]), Some(2));
/// assert_eq!(balance_index(&[1, 2, 3, 4, 5]), None);
/// ```
pub fn balance_index<T>(values: &[T]) -> Option<usize>
where
    T: Copy + Into<i128>,
{
    let total: i128 = values.iter().map(|&v| v.into()).sum();
    let mut left: i128 = 0;
    for (i, &v) in values.iter().enumerate() {
        let v: i128 = v.into();
        if left == total - left - v {
            return Some(i);
        }
        left += v;
    }
    None
}
