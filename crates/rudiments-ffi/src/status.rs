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

//! Status codes shared by every exported function.

use libc::c_char;
use rudiments_digits::InvalidInputError;
use rudiments_grid::InvalidShapeError;
use std::ffi::CStr;

/// The outcome of an FFI call.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RudimentsStatus {
    /// The call succeeded.
    Ok = 0,
    /// The grid was empty or its buffer length did not match `size * size`.
    InvalidShape = 1,
    /// The number was not a positive integer.
    InvalidInput = 2,
    /// The result does not fit into the output type.
    Overflow = 3,
}

impl RudimentsStatus {
    /// Returns a static, NUL-terminated description of the status.
    pub fn as_cstr(&self) -> &'static CStr {
        match self {
            Self::Ok => c"ok",
            Self::InvalidShape => c"invalid shape: grid must be a non-empty square",
            Self::InvalidInput => c"invalid input: expected a positive integer",
            Self::Overflow => c"overflow: result does not fit into the output type",
        }
    }
}

impl std::fmt::Display for RudimentsStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_cstr().to_string_lossy())
    }
}

impl From<InvalidShapeError> for RudimentsStatus {
    fn from(_: InvalidShapeError) -> Self {
        Self::InvalidShape
    }
}

impl From<InvalidInputError> for RudimentsStatus {
    fn from(e: InvalidInputError) -> Self {
        match e {
            InvalidInputError::Overflow => Self::Overflow,
            InvalidInputError::NonPositive | InvalidInputError::Digits(_) => Self::InvalidInput,
        }
    }
}

/// Returns a static C string describing `status`.
///
/// The pointer is valid for the lifetime of the program and must not be freed.
#[no_mangle]
pub extern "C" fn rudiments_status_str(status: RudimentsStatus) -> *const c_char {
    status.as_cstr().as_ptr()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_str_is_nul_terminated() {
        let ptr = rudiments_status_str(RudimentsStatus::Overflow);
        let s = unsafe { CStr::from_ptr(ptr) };
        assert_eq!(
            s.to_str().unwrap(),
            "overflow: result does not fit into the output type"
        );
    }

    #[test]
    fn test_status_discriminants_are_stable() {
        assert_eq!(RudimentsStatus::Ok as i32, 0);
        assert_eq!(RudimentsStatus::InvalidShape as i32, 1);
        assert_eq!(RudimentsStatus::InvalidInput as i32, 2);
        assert_eq!(RudimentsStatus::Overflow as i32, 3);
    }

    #[test]
    fn test_status_from_errors() {
        assert_eq!(
            RudimentsStatus::from(InvalidShapeError::Empty),
            RudimentsStatus::InvalidShape
        );
        assert_eq!(
            RudimentsStatus::from(InvalidInputError::NonPositive),
            RudimentsStatus::InvalidInput
        );
        assert_eq!(
            RudimentsStatus::from(InvalidInputError::Overflow),
            RudimentsStatus::Overflow
        );
    }

    #[test]
    fn test_status_display() {
        assert_eq!(RudimentsStatus::Ok.to_string(), "ok");
    }
}
