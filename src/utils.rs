// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for terminated byte strings.

/// The terminator byte ending a C-style string.
pub const NUL: u8 = 0;

/// Length of the terminated string at the start of `bytes`.
///
/// Counts bytes up to (not including) the first `NUL`. If there is no
/// terminator, the whole slice is the string.
pub fn terminated_len(bytes: &[u8]) -> usize {
    bytes.iter().position(|&b| b == NUL).unwrap_or(bytes.len())
}

/// The terminated string at the start of `bytes`, without its terminator.
pub fn until_nul(bytes: &[u8]) -> &[u8] {
    &bytes[..terminated_len(bytes)]
}
