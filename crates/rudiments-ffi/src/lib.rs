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

//! # Rudiments FFI
//!
//! **C-Compatible Bindings for the rudiments routines.**
//!
//! This crate exposes grid rotation and the next bigger permutation to C,
//! C++, Python, C# and other hosts through a small, stable ABI.
//!
//! ## Core Design Principles
//!
//! 1.  **Plain Data**: Inputs are caller-owned buffers and integers. Nothing
//!     is allocated on the Rust side, so there is nothing to free.
//! 2.  **Status Codes**: Every fallible call returns a `RudimentsStatus`.
//!     Results are written through out-pointers only on success.
//!     `rudiments_status_str` turns a status into a static C string.
//! 3.  **Fail-Fast Safety**: Passing `NULL` results in an immediate panic
//!     rather than undefined behavior.

pub mod digits;
pub mod grid;
pub mod status;
