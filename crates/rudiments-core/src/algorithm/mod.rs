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

//! # Slice Algorithms
//!
//! Small, allocation-free algorithms over slices of totally ordered values.
//! They operate strictly in place and never reallocate, which lets callers
//! run them over fixed-size inline buffers such as
//! [`DigitSequence`](crate::num::digits::DigitSequence).

/// Checks whether the given slice is sorted in non-decreasing order.
///
/// Empty and single-element slices are trivially sorted.
#[inline]
pub fn is_non_decreasing<T>(seq: &[T]) -> bool
where
    T: PartialOrd,
{
    seq.windows(2).all(|w| w[0] <= w[1])
}

/// Checks whether the given slice is sorted in non-increasing order.
///
/// A non-increasing slice is the lexicographically greatest arrangement of
/// its elements, so it has no next permutation.
#[inline]
pub fn is_non_increasing<T>(seq: &[T]) -> bool
where
    T: PartialOrd,
{
    seq.windows(2).all(|w| w[0] >= w[1])
}

/// Sorts the slice in ascending order using a stable, in-place insertion sort.
///
/// Runs in `O(n^2)` time in the worst case and `O(n)` on already sorted
/// input. Meant for short slices (digit buffers, small runs).
///
/// # Examples
///
/// ```rust
/// # use rudiments_core::algorithm::insertion_sort;
///
/// let mut v = [3, 1, 2, 1];
/// insertion_sort(&mut v);
/// assert_eq!(v, [1, 1, 2, 3]);
/// ```
#[inline]
pub fn insertion_sort<T>(seq: &mut [T])
where
    T: PartialOrd,
{
    for i in 1..seq.len() {
        let mut j = i;
        // Strict comparison keeps equal elements in their original order.
        while j > 0 && seq[j - 1] > seq[j] {
            seq.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Returns the largest index `p` such that `seq[p] < seq[p + 1]`.
///
/// Returns `None` if the slice is non-increasing, i.e. no such index exists.
///
/// # Examples
///
/// ```rust
/// # use rudiments_core::algorithm::find_pivot;
///
/// assert_eq!(find_pivot(&[1, 2, 3, 4, 5]), Some(3));
/// assert_eq!(find_pivot(&[9, 0, 8, 2, 2]), Some(1));
/// assert_eq!(find_pivot(&[3, 2, 1]), None);
/// ```
#[inline]
pub fn find_pivot<T>(seq: &[T]) -> Option<usize>
where
    T: Ord,
{
    seq.windows(2).rposition(|w| w[0] < w[1])
}

/// Returns the index of the smallest element right of `pivot` that is
/// strictly greater than `seq[pivot]`, preferring the leftmost occurrence on ties.
///
/// # Panics
///
/// Panics if `pivot + 1 >= seq.len()`.
///
/// # Invariants
///
/// `seq[pivot] < seq[pivot + 1]` must hold, as guaranteed by [`find_pivot`].
#[inline]
pub fn find_successor<T>(seq: &[T], pivot: usize) -> usize
where
    T: Ord,
{
    assert!(
        pivot + 1 < seq.len(),
        "called `find_successor` with pivot {} on a slice of length {}",
        pivot,
        seq.len()
    );
    debug_assert!(
        seq[pivot] < seq[pivot + 1],
        "called `find_successor` with an index that is not a pivot"
    );

    let pivot_value = &seq[pivot];
    let mut best = pivot + 1;
    for i in (pivot + 2)..seq.len() {
        if seq[i] > *pivot_value && seq[i] < seq[best] {
            best = i;
        }
    }
    best
}

/// Rearranges `seq` into the lexicographically next greater permutation of
/// its elements.
///
/// Returns `true` if the slice was advanced. Returns `false` and leaves the
/// slice untouched if it is already the greatest permutation
/// (non-increasing order).
///
/// The steps are:
/// 1. Find the pivot, the last position whose element is smaller than its
///    right neighbour.
/// 2. Find the smallest element right of the pivot that is strictly greater
///    than it, taking the leftmost one on ties.
/// 3. Swap the two.
/// 4. Sort everything right of the pivot ascending.
///
/// # Examples
///
/// ```rust
/// # use rudiments_core::algorithm::next_permutation;
///
/// let mut v = [1, 2, 3, 4, 5];
/// assert!(next_permutation(&mut v));
/// assert_eq!(v, [1, 2, 3, 5, 4]);
///
/// let mut last = [3, 2, 1];
/// assert!(!next_permutation(&mut last));
/// assert_eq!(last, [3, 2, 1]);
/// ```
pub fn next_permutation<T>(seq: &mut [T]) -> bool
where
    T: Ord,
{
    let Some(pivot) = find_pivot(seq) else {
        return false;
    };
    let successor = find_successor(seq, pivot);
    seq.swap(pivot, successor);
    insertion_sort(&mut seq[pivot + 1..]);
    true
}
