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

use crate::error::RomanRangeError;

/// The smallest number `to_roman` accepts.
pub const ROMAN_MIN: u32 = 1;

/// The largest number `to_roman` accepts.
pub const ROMAN_MAX: u32 = 39;

/// Numeral values in descending order, including the subtractive pairs.
const NUMERALS: [(u32, &str); 5] = [(10, "X"), (9, "IX"), (5, "V"), (4, "IV"), (1, "I")];

/// Converts `number` to Roman numerals.
///
/// # Errors
///
/// Returns `RomanRangeError` if `number` is outside `ROMAN_MIN..=ROMAN_MAX`.
///
/// # Examples
///
/// ```rust
/// # use rudiments_digits::to_roman;
///
/// assert_eq!(to_roman(26).unwrap(), "XXVI");
/// assert!(to_roman(40).is_err());
/// ```
pub fn to_roman(number: u32) -> Result<String, RomanRangeError> {
    if !(ROMAN_MIN..=ROMAN_MAX).contains(&number) {
        tracing::debug!(number, "rejected number outside the Roman numeral range");
        return Err(RomanRangeError {
            number,
            min: ROMAN_MIN,
            max: ROMAN_MAX,
        });
    }

    let mut numeral = String::with_capacity(8);
    let mut remaining = number;
    for (value, symbol) in NUMERALS {
        while remaining >= value {
            numeral.push_str(symbol);
            remaining -= value;
        }
    }
    Ok(numeral)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_roman_examples() {
        assert_eq!(to_roman(1).unwrap(), "I");
        assert_eq!(to_roman(2).unwrap(), "II");
        assert_eq!(to_roman(4).unwrap(), "IV");
        assert_eq!(to_roman(5).unwrap(), "V");
        assert_eq!(to_roman(9).unwrap(), "IX");
        assert_eq!(to_roman(10).unwrap(), "X");
        assert_eq!(to_roman(14).unwrap(), "XIV");
        assert_eq!(to_roman(26).unwrap(), "XXVI");
        assert_eq!(to_roman(38).unwrap(), "XXXVIII");
        assert_eq!(to_roman(39).unwrap(), "XXXIX");
    }

    #[test]
    fn test_to_roman_out_of_range() {
        assert_eq!(
            to_roman(0),
            Err(RomanRangeError {
                number: 0,
                min: 1,
                max: 39
            })
        );
        assert!(to_roman(40).is_err());
        assert!(to_roman(u32::MAX).is_err());
    }

    #[test]
    fn test_to_roman_symbols_sum_back() {
        fn value(c: char) -> i32 {
            match c {
                'I' => 1,
                'V' => 5,
                'X' => 10,
                _ => panic!("unexpected symbol {}", c),
            }
        }

        for n in ROMAN_MIN..=ROMAN_MAX {
            let numeral = to_roman(n).unwrap();
            let chars: Vec<char> = numeral.chars().collect();
            let mut total = 0;
            for (i, &c) in chars.iter().enumerate() {
                let v = value(c);
                if chars.get(i + 1).is_some_and(|&next| value(next) > v) {
                    total -= v;
                } else {
                    total += v;
                }
            }
            assert_eq!(total, n as i32, "numeral {}", numeral);
        }
    }
}
