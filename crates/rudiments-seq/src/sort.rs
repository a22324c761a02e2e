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

use rudiments_core::algorithm;

/// Slices up to this length are sorted with insertion sort.
pub const INSERTION_SORT_THRESHOLD: usize = 16;

/// Sorts `seq` in ascending order in place and returns it.
///
/// Short slices use a stable insertion sort. Longer slices use heap sort,
/// which is not stable but guarantees `O(n log n)` comparisons and needs no
/// extra memory, so arbitrarily large inputs are fine.
///
/// Values that are not comparable with each other (such as `f64::NAN`) do
/// not cause a panic, but their final position is unspecified.
///
/// # Examples
///
/// ```rust
/// # use rudiments_seq::sort_ascending;
///
/// let mut v = [-2, 9, 5, -3];
/// assert_eq!(sort_ascending(&mut v), &[-3, -2, 5, 9]);
/// ```
pub fn sort_ascending<T>(seq: &mut [T]) -> &mut [T]
where
    T: PartialOrd,
{
    tracing::trace!(len = seq.len(), "sorting ascending");
    if seq.len() <= INSERTION_SORT_THRESHOLD {
        algorithm::insertion_sort(seq);
    } else {
        heap_sort(seq);
    }
    seq
}

/// Checks whether `seq` is sorted in ascending (non-decreasing) order.
#[inline]
pub fn is_sorted_ascending<T>(seq: &[T]) -> bool
where
    T: PartialOrd,
{
    algorithm::is_non_decreasing(seq)
}

/// Restores the max-heap property for the subtree rooted at `root`,
/// considering only `seq[..end]`.
#[inline]
fn sift_down<T>(seq: &mut [T], mut root: usize, end: usize)
where
    T: PartialOrd,
{
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            break;
        }
        if child + 1 < end && seq[child] < seq[child + 1] {
            child += 1;
        }
        if seq[root] >= seq[child] {
            break;
        }
        seq.swap(root, child);
        root = child;
    }
}

fn heap_sort<T>(seq: &mut [T])
where
    T: PartialOrd,
{
    let len = seq.len();
    for start in (0..len / 2).rev() {
        sift_down(seq, start, len);
    }
    for end in (1..len).rev() {
        seq.swap(0, end);
        sift_down(seq, 0, end);
    }
}
