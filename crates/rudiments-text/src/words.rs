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

use crate::error::UnexpectedCharError;
use smallvec::SmallVec;

const DIGIT_WORDS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Spells out a numeric string one symbol at a time.
///
/// Digits become `zero` to `nine`, a leading `-` becomes `minus`, and both
/// `.` and `,` become `point`. Words are separated by single spaces.
///
/// # Errors
///
/// Returns `UnexpectedCharError` for any other character, including a `-`
/// that is not the first character.
///
/// # Examples
///
/// ```rust
/// # use rudiments_text::number_to_words;
///
/// assert_eq!(number_to_words("-10").unwrap(), "minus one zero");
/// assert_eq!(number_to_words("10,5").unwrap(), "one zero point five");
/// assert!(number_to_words("1e5").is_err());
/// ```
pub fn number_to_words(s: &str) -> Result<String, UnexpectedCharError> {
    let mut words: SmallVec<[&'static str; 32]> = SmallVec::new();
    for (position, ch) in s.chars().enumerate() {
        let word = match ch {
            '-' if position == 0 => "minus",
            '.' | ',' => "point",
            '0'..='9' => DIGIT_WORDS[(ch as u8 - b'0') as usize],
            _ => {
                tracing::debug!(?ch, position, "rejected character in numeric string");
                return Err(UnexpectedCharError { ch, position });
            }
        };
        words.push(word);
    }
    Ok(words.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_to_words_examples() {
        assert_eq!(number_to_words("1").unwrap(), "one");
        assert_eq!(number_to_words("10").unwrap(), "one zero");
        assert_eq!(number_to_words("-10").unwrap(), "minus one zero");
        assert_eq!(number_to_words("10.5").unwrap(), "one zero point five");
        assert_eq!(number_to_words("10,5").unwrap(), "one zero point five");
        assert_eq!(
            number_to_words("1950.2").unwrap(),
            "one nine five zero point two"
        );
    }

    #[test]
    fn test_number_to_words_all_digits() {
        assert_eq!(
            number_to_words("0123456789").unwrap(),
            "zero one two three four five six seven eight nine"
        );
    }

    #[test]
    fn test_number_to_words_empty() {
        assert_eq!(number_to_words("").unwrap(), "");
    }

    #[test]
    fn test_number_to_words_rejects_unknown_characters() {
        assert_eq!(
            number_to_words("12a"),
            Err(UnexpectedCharError {
                ch: 'a',
                position: 2
            })
        );
        assert_eq!(
            number_to_words("1-2"),
            Err(UnexpectedCharError {
                ch: '-',
                position: 1
            })
        );
        assert_eq!(
            number_to_words("٣"),
            Err(UnexpectedCharError {
                ch: '٣',
                position: 0
            })
        );
    }
}
