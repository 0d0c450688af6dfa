// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed-capacity, stack-allocated terminated string buffer.

use std::borrow::Cow;
use std::fmt;

use crate::copy::{safe_copy, CopyOutcome};
use crate::utils::until_nul;

/// A `[u8; N]` holding a NUL-terminated string.
///
/// Starts zeroed, i.e. as the empty string. `N` must be at least 1 so there is
/// always room for the terminator; `FixedBuffer::<0>::new()` fails to compile.
#[derive(Clone, PartialEq, Eq)]
pub struct FixedBuffer<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> FixedBuffer<N> {
    const HAS_ROOM_FOR_TERMINATOR: () = assert!(N >= 1, "FixedBuffer capacity must be at least 1");

    /// Empty buffer.
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::HAS_ROOM_FOR_TERMINATOR;
        Self { bytes: [0; N] }
    }

    /// Fixed capacity in bytes, terminator included.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Checked copy of `src` into this buffer. See [`safe_copy`].
    pub fn copy_from(&mut self, src: &[u8]) -> CopyOutcome {
        safe_copy(&mut self.bytes, src)
    }

    /// String contents up to the first terminator.
    pub fn as_bytes(&self) -> &[u8] {
        until_nul(&self.bytes)
    }

    /// Length of the string, excluding the terminator.
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// `true` if the buffer holds the empty string.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` if a terminator lies within the buffer.
    ///
    /// Always holds after [`copy_from`](Self::copy_from). Raw writes through
    /// [`as_mut_ptr`](Self::as_mut_ptr) can break it.
    pub fn is_terminated(&self) -> bool {
        self.bytes.contains(&0)
    }

    /// Whole backing storage, including bytes after the terminator.
    pub fn raw(&self) -> &[u8; N] {
        &self.bytes
    }

    /// Raw pointer to the start of the storage, for the unchecked copy.
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.bytes.as_mut_ptr()
    }

    /// Contents as text, replacing invalid UTF-8.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }
}

impl<const N: usize> Default for FixedBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> AsRef<[u8]> for FixedBuffer<N> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<const N: usize> fmt::Debug for FixedBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedBuffer")
            .field("capacity", &N)
            .field("contents", &self.to_string_lossy())
            .finish()
    }
}
