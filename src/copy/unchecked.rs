// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Unchecked copy (`strcpy`). The one place this crate allows `unsafe`.
//!
//! Nothing here consults a capacity. A source longer than the destination
//! writes past its end; that out-of-bounds write is intentional and must stay
//! visible to Miri, Kani and fuzzing. Do not add a length check: use
//! [`safe_copy`](super::safe_copy) when bounds matter.

#![allow(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]

use std::ffi::CStr;

use crate::utils::NUL;

/// Copy `src`, terminator included, to `dest` without any bounds check.
///
/// Advances one byte at a time until the terminator has been written, exactly
/// like C's `strcpy`.
///
/// # Safety
///
/// - `dest` must be valid for writes of `src.to_bytes_with_nul().len()` bytes.
/// - `dest` must not overlap `src`.
///
/// Neither condition is checked. Violating the first is an out-of-bounds
/// write.
///
/// # Example
///
/// ```
/// # #![allow(unsafe_code)]
/// use hello_bounds::{unsafe_copy, FixedBuffer};
///
/// let mut buf = FixedBuffer::<16>::new();
/// // SAFETY: "Alice\0" is 6 bytes and the buffer holds 16.
/// unsafe { unsafe_copy(buf.as_mut_ptr(), c"Alice") };
/// assert_eq!(buf.as_bytes(), b"Alice");
/// ```
pub unsafe fn unsafe_copy(dest: *mut u8, src: &CStr) {
    let mut from = src.as_ptr().cast::<u8>();
    let mut to = dest;

    loop {
        // SAFETY: `from` never moves past the terminator of `src`.
        let byte = unsafe { from.read() };
        // SAFETY: the caller promised room for every byte of `src` including
        // the terminator; this is the write that overflows when they lied.
        unsafe { to.write(byte) };
        if byte == NUL {
            break;
        }
        // SAFETY: `byte` was not the terminator, so both cursors have at
        // least one more byte to go under the caller's contract.
        unsafe {
            from = from.add(1);
            to = to.add(1);
        }
    }
}
