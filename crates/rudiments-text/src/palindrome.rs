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

/// Checks whether `s` reads the same forwards and backwards.
///
/// Characters are compared exactly (case-sensitive, no normalization).
/// The empty string is a palindrome.
///
/// # Examples
///
/// ```rust
/// # use rudiments_text::is_palindrome;
///
/// assert!(is_palindrome("abcba"));
/// assert!(is_palindrome("0123210"));
/// assert!(!is_palindrome("qweqwe"));
/// ```
pub fn is_palindrome(s: &str) -> bool {
    let mut chars = s.chars();
    loop {
        match (chars.next(), chars.next_back()) {
            (Some(front), Some(back)) => {
                if front != back {
                    return false;
                }
            }
            _ => return true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_palindrome_examples() {
        assert!(is_palindrome("abcba"));
        assert!(is_palindrome("0123210"));
        assert!(!is_palindrome("qweqwe"));
    }

    #[test]
    fn test_is_palindrome_trivial_inputs() {
        assert!(is_palindrome(""));
        assert!(is_palindrome("x"));
        assert!(is_palindrome("xx"));
        assert!(!is_palindrome("xy"));
    }

    #[test]
    fn test_is_palindrome_is_case_sensitive() {
        assert!(!is_palindrome("Abba"));
        assert!(is_palindrome("abba"));
    }

    #[test]
    fn test_is_palindrome_multibyte() {
        assert!(is_palindrome("шалаш"));
        assert!(is_palindrome("日本日"));
        assert!(!is_palindrome("日本"));
    }

    #[test]
    fn test_is_palindrome_agrees_with_reversal() {
        for s in ["", "a", "ab", "aba", "abca", "racecar", "never odd or even", "12 21"] {
            let reversed: String = s.chars().rev().collect();
            assert_eq!(is_palindrome(s), s == reversed, "{:?}", s);
        }
    }
}
