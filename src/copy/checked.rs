// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounds-checked, always-terminating copy (`strncpy` + explicit terminator).

use crate::contracts::{check_copy_postcondition, check_terminated_within};
use crate::utils::{until_nul, NUL};

/// What a checked copy did.
///
/// Truncation is reported here and nowhere else; the copy itself never
/// fails. Callers that only want the C behaviour can drop the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CopyOutcome {
    /// Bytes of the source now in the destination, excluding the terminator.
    pub copied: usize,
    /// The source did not fit in `capacity - 1` bytes.
    pub truncated: bool,
}

/// Copy `src` into `dest` as a terminated string, never exceeding `dest.len()`.
///
/// The capacity is `dest.len()`. The source is read as a C string: it ends at
/// its first `NUL`, or at the end of the slice if there is none.
///
/// After the call:
/// - `dest[..copied]` holds the first `min(len(src), capacity - 1)` bytes of `src`
/// - `dest[copied..capacity]` is all `NUL`, so `dest[capacity - 1]` is always a terminator
///
/// A zero-capacity destination cannot hold even the terminator. Nothing is
/// written and the outcome reports zero bytes copied.
///
/// # Example
///
/// ```
/// use hello_bounds::safe_copy;
///
/// let mut buf = [0xAAu8; 4];
/// let outcome = safe_copy(&mut buf, b"Alice");
/// assert_eq!(&buf, b"Ali\0");
/// assert!(outcome.truncated);
/// ```
pub fn safe_copy(dest: &mut [u8], src: &[u8]) -> CopyOutcome {
    let src = until_nul(src);

    let Some(limit) = dest.len().checked_sub(1) else {
        return CopyOutcome {
            copied: 0,
            truncated: !src.is_empty(),
        };
    };

    // INVARIANT: at most capacity - 1 payload bytes
    let copied = src.len().min(limit);

    dest[..copied].copy_from_slice(&src[..copied]);
    dest[copied..limit].fill(NUL);
    // INVARIANT: terminator at capacity - 1 even when the source was cut short
    dest[limit] = NUL;

    check_terminated_within(dest);
    check_copy_postcondition(dest, src, copied);

    CopyOutcome {
        copied,
        truncated: copied < src.len(),
    }
}
