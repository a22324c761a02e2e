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

//! # Odd/Even Character Shuffle
//!
//! One shuffle step keeps the characters at even indices in order at the
//! front and moves the characters at odd indices, also in order, to the end:
//!
//! ```text
//! "012345" -> "024135"
//! ```
//!
//! A step is a fixed permutation of positions, so `k` steps equal the
//! permutation raised to the `k`-th power. Each cycle of the permutation is
//! rotated by `k mod cycle_len` independently, which makes the cost `O(n)` no
//! matter how large `k` is.

use fixedbitset::FixedBitSet;
use smallvec::SmallVec;

type CharBuffer = SmallVec<[char; 64]>;
type CycleBuffer = SmallVec<[usize; 64]>;

/// Position whose character lands on position `j` after one step.
#[inline(always)]
fn source_position(j: usize, evens: usize) -> usize {
    if j < evens {
        2 * j
    } else {
        2 * (j - evens) + 1
    }
}

/// Calls `f` with every cycle of the one-step permutation on `len` positions,
/// each listed in the order `j, source(j), source(source(j)), ...`.
fn for_each_cycle<F>(len: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    let evens = len.div_ceil(2);
    let mut visited = FixedBitSet::with_capacity(len);
    let mut cycle = CycleBuffer::new();

    for start in 0..len {
        if visited.contains(start) {
            continue;
        }
        cycle.clear();
        let mut j = start;
        while !visited.contains(j) {
            visited.insert(j);
            cycle.push(j);
            j = source_position(j, evens);
        }
        f(cycle.as_slice());
    }
}

/// Applies the odd/even shuffle to `s` `iterations` times.
///
/// # Examples
///
/// ```rust
/// # use rudiments_text::shuffle_chars;
///
/// assert_eq!(shuffle_chars("012345", 1), "024135");
/// assert_eq!(shuffle_chars("qwerty", 3), "qrwtey");
/// assert_eq!(shuffle_chars("qwerty", 10_000_000_000), shuffle_chars("qwerty", 10_000_000_000 % 4));
/// ```
pub fn shuffle_chars(s: &str, iterations: u64) -> String {
    let chars: CharBuffer = s.chars().collect();
    let len = chars.len();
    // With fewer than three characters the step is the identity.
    if len < 3 || iterations == 0 {
        return s.to_owned();
    }
    tracing::trace!(len, iterations, "shuffling characters");

    let mut shuffled = chars.clone();
    for_each_cycle(len, |cycle| {
        let cycle_len = cycle.len();
        let shift = (iterations % cycle_len as u64) as usize;
        for (i, &position) in cycle.iter().enumerate() {
            shuffled[position] = chars[cycle[(i + shift) % cycle_len]];
        }
    });
    shuffled.into_iter().collect()
}

/// Returns the smallest positive number of shuffle steps that restores any
/// string of `len` characters.
///
/// # Examples
///
/// ```rust
/// # use rudiments_text::{shuffle_chars, shuffle_period};
///
/// let period = shuffle_period(6);
/// assert_eq!(shuffle_chars("qwerty", period), "qwerty");
/// ```
pub fn shuffle_period(len: usize) -> u64 {
    fn gcd(mut a: u64, mut b: u64) -> u64 {
        while b != 0 {
            (a, b) = (b, a % b);
        }
        a
    }

    let mut period = 1u64;
    for_each_cycle(len, |cycle| {
        let cycle_len = cycle.len() as u64;
        period = period / gcd(period, cycle_len) * cycle_len;
    });
    period
}
