// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the checked copy.
//!
//! Debug-mode assertions that re-check, after the fact, what `safe_copy`
//! promises. They:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Fail **at the call that broke the invariant**, not later when the buffer is read
//! 3. Mirror the properties proven in `kani-proofs/` and fuzzed in `fuzz/`
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function           | Property                                              |
//! |-----------------------------|-------------------------------------------------------|
//! | `check_terminated_within`   | `dest[capacity - 1] == NUL`                           |
//! | `check_copy_postcondition`  | `copied == min(len(src), capacity - 1)`, prefix equal, padded with NUL |
//!
//! # Usage
//!
//! ```ignore
//! use hello_bounds::contracts::*;
//!
//! // In debug builds, this panics if the buffer is unterminated
//! check_terminated_within(&buf);
//!
//! // In release builds, this is a no-op
//! ```

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

use crate::run::{BUFFER_CAPACITY, DEFAULT_NAME};
use crate::utils::{terminated_len, NUL};

/// The entry point's buffer and default name must be usable as-is.
/// If either fails, the crate won't build.
const _: () = {
    // INVARIANT: room for the terminator
    assert!(BUFFER_CAPACITY >= 1);

    // INVARIANT: the default name is never truncated
    assert!(DEFAULT_NAME.len() < BUFFER_CAPACITY);
};

// ============================================================================
// CHECKED COPY CONTRACTS
// ============================================================================

/// Check that a non-empty destination ends with a terminator.
///
/// # Panics (debug builds only)
/// Panics if `dest` is non-empty and `dest[dest.len() - 1] != NUL`.
#[inline]
pub fn check_terminated_within(dest: &[u8]) {
    if let Some(&last) = dest.last() {
        debug_assert_eq!(
            last,
            NUL,
            "Contract violation: Terminated - dest[{}] = {:#04x} (expected NUL)",
            dest.len() - 1,
            last
        );
    }
}

/// Check the full postcondition of a checked copy.
///
/// `src` is the effective source (already cut at its first NUL).
///
/// # Panics (debug builds only)
/// Panics if the copied length, the copied prefix, or the padding is wrong.
#[inline]
pub fn check_copy_postcondition(dest: &[u8], src: &[u8], copied: usize) {
    let Some(limit) = dest.len().checked_sub(1) else {
        debug_assert_eq!(
            copied, 0,
            "Contract violation: CopyLength - copied {} into zero capacity",
            copied
        );
        return;
    };

    debug_assert_eq!(
        copied,
        src.len().min(limit),
        "Contract violation: CopyLength - copied {} (expected min({}, {}))",
        copied,
        src.len(),
        limit
    );

    debug_assert!(
        dest[..copied] == src[..copied],
        "Contract violation: CopyPrefix - dest[..{}] differs from source",
        copied
    );

    debug_assert!(
        dest[copied..].iter().all(|&b| b == NUL),
        "Contract violation: CopyPadding - non-NUL byte after position {}",
        copied
    );

    debug_assert_eq!(
        terminated_len(dest),
        copied,
        "Contract violation: CopyLength - terminated length {} != copied {}",
        terminated_len(dest),
        copied
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminated_passes() {
        check_terminated_within(b"ab\0");
        check_terminated_within(b"");
    }

    #[test]
    fn test_postcondition_passes_on_truncation() {
        check_copy_postcondition(b"abc\0", b"abcdef", 3);
    }

    #[test]
    fn test_postcondition_passes_on_padding() {
        check_copy_postcondition(b"ab\0\0\0", b"ab", 2);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Contract violation: Terminated")]
    fn test_unterminated_is_caught() {
        check_terminated_within(b"abc");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Contract violation: CopyLength")]
    fn test_short_copy_is_caught() {
        check_copy_postcondition(b"ab\0\0", b"abc", 2);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Contract violation: CopyPadding")]
    fn test_dirty_tail_is_caught() {
        check_copy_postcondition(b"ab\0x\0", b"ab", 2);
    }
}
