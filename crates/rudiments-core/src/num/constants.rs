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

/// A trait for integer types that have a constant representing the decimal radix (10).
pub trait Radix {
    /// The constant representing 10 for the implementing type.
    const RADIX: Self;
}

/// A trait for integer types that know how many decimal digits their widest
/// value can occupy.
pub trait DecimalWidth {
    /// The maximum number of base-10 digits of any value of the type,
    /// ignoring the sign.
    const MAX_DECIMAL_DIGITS: usize;
}

macro_rules! impl_const_for {
    ($trait_name:ident, $const_name:ident, $const_ty:ty, $value:expr, $t:ty) => {
        impl $trait_name for $t {
            const $const_name: $const_ty = $value;
        }
    };
}

macro_rules! impl_radix_for {
    ($($t:ty),*) => {
        $(impl_const_for!(Radix, RADIX, Self, 10, $t);)*
    };
}

macro_rules! impl_decimal_width_for {
    ($($t:ty => $digits:expr),*) => {
        $(impl_const_for!(DecimalWidth, MAX_DECIMAL_DIGITS, usize, $digits, $t);)*
    };
}

impl_radix_for!(i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize);

impl_decimal_width_for!(
    i8 => 3,
    u8 => 3,
    i16 => 5,
    u16 => 5,
    i32 => 10,
    u32 => 10,
    i64 => 19,
    u64 => 20,
    i128 => 39,
    u128 => 39
);

#[cfg(target_pointer_width = "64")]
impl_decimal_width_for!(isize => 19, usize => 20);

#[cfg(target_pointer_width = "32")]
impl_decimal_width_for!(isize => 10, usize => 10);

#[cfg(target_pointer_width = "16")]
impl_decimal_width_for!(isize => 5, usize => 5);
