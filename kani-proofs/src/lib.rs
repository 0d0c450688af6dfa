// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for hello-bounds copy primitives.
//!
//! This standalone crate extracts the two copy functions and model-checks
//! them with Kani.
//!
//! Run with: `cargo kani` (or `cargo xtask kani`)
//!
//! ## Verified Properties
//!
//! 1. **No panics**: safe_copy never panics for any capacity and source
//! 2. **Bounds**: safe_copy never writes outside `dest`
//! 3. **Termination**: `dest[capacity - 1] == 0` after every checked copy
//! 4. **Length**: copied == min(len(src), capacity - 1)
//! 5. **strcpy in bounds**: unsafe_copy is exact when the destination is big enough
//!
//! ## Expected Failure
//!
//! `detect_unsafe_copy_overflow` MUST fail verification with an out-of-bounds
//! pointer write. `cargo xtask kani` treats a pass there as an error: it would
//! mean the unchecked copy quietly stopped being `strcpy`.

#![allow(unsafe_code)]

use core::ffi::CStr;

/// Terminator byte.
pub const NUL: u8 = 0;

// ============================================================================
// CHECKED COPY (copied from src/copy/checked.rs, contracts removed)
// ============================================================================

/// Copy `src` into `dest` as a terminated string, never exceeding `dest.len()`.
///
/// Returns the number of payload bytes copied.
pub fn safe_copy(dest: &mut [u8], src: &[u8]) -> usize {
    let src_len = src.iter().position(|&b| b == NUL).unwrap_or(src.len());
    let src = &src[..src_len];

    let Some(limit) = dest.len().checked_sub(1) else {
        return 0;
    };

    let copied = src.len().min(limit);

    dest[..copied].copy_from_slice(&src[..copied]);
    dest[copied..limit].fill(NUL);
    dest[limit] = NUL;

    copied
}

// ============================================================================
// UNCHECKED COPY (copied from src/copy/unchecked.rs)
// ============================================================================

/// `strcpy`: no bounds check.
///
/// # Safety
///
/// `dest` must be valid for writes of `src.to_bytes_with_nul().len()` bytes
/// and must not overlap `src`.
pub unsafe fn unsafe_copy(dest: *mut u8, src: &CStr) {
    let mut from = src.as_ptr().cast::<u8>();
    let mut to = dest;

    loop {
        // SAFETY: `from` never moves past the terminator of `src`.
        let byte = unsafe { from.read() };
        // SAFETY: delegated to the caller.
        unsafe { to.write(byte) };
        if byte == NUL {
            break;
        }
        // SAFETY: not yet at the terminator.
        unsafe {
            from = from.add(1);
            to = to.add(1);
        }
    }
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Largest destination capacity explored symbolically.
    const MAX_CAPACITY: usize = 8;

    /// Largest source length explored symbolically.
    const MAX_SOURCE: usize = 10;

    /// Sentinel placed on both sides of the destination.
    const GUARD: u8 = 0xA5;

    /// Verify safe_copy never panics and never writes outside `dest`.
    #[kani::proof]
    #[kani::unwind(12)] // MAX_SOURCE + 2
    fn verify_safe_copy_stays_in_bounds() {
        let capacity: usize = kani::any_where(|&n| n <= MAX_CAPACITY);
        let src_len: usize = kani::any_where(|&n| n <= MAX_SOURCE);
        let src_storage: [u8; MAX_SOURCE] = kani::any();
        let src = &src_storage[..src_len];

        // One guard byte before, MAX_CAPACITY + 1 after (covers any capacity).
        let mut storage = [GUARD; MAX_CAPACITY + 2];

        // This must not panic
        safe_copy(&mut storage[1..1 + capacity], src);

        kani::assert(storage[0] == GUARD, "Leading guard must be untouched");
        kani::assert(
            storage[1 + capacity] == GUARD,
            "Byte just past dest must be untouched",
        );
        kani::assert(
            storage[MAX_CAPACITY + 1] == GUARD,
            "Trailing guard must be untouched",
        );
    }

    /// Verify the result is terminated and has the expected length.
    #[kani::proof]
    #[kani::unwind(12)]
    fn verify_safe_copy_terminates_with_bounded_length() {
        let capacity: usize = kani::any_where(|&n| (1..=MAX_CAPACITY).contains(&n));
        let src_len: usize = kani::any_where(|&n| n <= MAX_SOURCE);
        let src_storage: [u8; MAX_SOURCE] = kani::any();
        let src = &src_storage[..src_len];

        // Sources here contain no terminator
        for i in 0..src_len {
            kani::assume(src[i] != NUL);
        }

        let mut dest = [GUARD; MAX_CAPACITY];
        let dest = &mut dest[..capacity];
        let copied = safe_copy(dest, src);

        let expected = if src_len < capacity - 1 { src_len } else { capacity - 1 };
        kani::assert(copied == expected, "copied must be min(len, capacity - 1)");
        kani::assert(dest[capacity - 1] == NUL, "Last byte must be the terminator");

        // Everything after the prefix is NUL, including when nothing was copied
        let j: usize = kani::any_where(|&j| j >= copied && j < capacity);
        kani::assert(dest[j] == NUL, "Tail must be NUL padded");

        // An empty prefix has no index to pick; any_where would prune the path
        if copied > 0 {
            let i: usize = kani::any_where(|&i| i < copied);
            kani::assert(dest[i] == src[i], "Copied prefix must equal source");
        }
    }

    /// Verify zero capacity is a no-op.
    #[kani::proof]
    #[kani::unwind(12)]
    fn verify_safe_copy_zero_capacity() {
        let src: [u8; 4] = kani::any();
        let mut storage = [GUARD; 2];
        let copied = safe_copy(&mut storage[1..1], &src);

        kani::assert(copied == 0, "Zero capacity copies nothing");
        kani::assert(storage == [GUARD; 2], "Zero capacity writes nothing");
    }

    /// Verify unsafe_copy is an exact strcpy when its contract holds.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_unsafe_copy_in_bounds() {
        let mut src_storage: [u8; 8] = kani::any();
        let terminator: usize = kani::any_where(|&n| n < 8);
        src_storage[terminator] = NUL;

        let src = match CStr::from_bytes_until_nul(&src_storage) {
            Ok(s) => s,
            Err(_) => return,
        };

        let mut dest = [GUARD; 8];
        // SAFETY: `src` is at most 8 bytes including its terminator.
        unsafe { unsafe_copy(dest.as_mut_ptr(), src) };

        let len = src.to_bytes().len();
        let i: usize = kani::any_where(|&i| i <= len);
        kani::assert(dest[i] == src_storage[i], "Copy must be exact through the terminator");
    }

    /// EXPECTED TO FAIL: a 7-byte name into a 4-byte buffer.
    ///
    /// Kani must report an out-of-bounds write in unsafe_copy.
    #[kani::proof]
    #[kani::unwind(10)]
    fn detect_unsafe_copy_overflow() {
        let mut dest = [0u8; 4];
        // SAFETY: deliberately violated; this is the defect under test.
        unsafe { unsafe_copy(dest.as_mut_ptr(), c"toolong") };
    }
}
