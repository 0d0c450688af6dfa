// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests, fuzzing and benches.
//!
//! This module is always compiled but hidden from documentation.
//! The main piece is [`GuardedBuffer`]: a destination region with sentinel
//! bytes on both sides, so a copy that strays outside its capacity leaves a
//! visible mark instead of silently corrupting a neighbour.

#![doc(hidden)]

/// Sentinel value written into the guard regions.
pub const GUARD_BYTE: u8 = 0xA5;

/// Guard bytes on each side of the destination.
pub const GUARD_LEN: usize = 16;

/// Value the destination itself is pre-filled with, distinct from `NUL` and
/// from [`GUARD_BYTE`], so untouched bytes are recognisable.
pub const FILL_BYTE: u8 = 0x5A;

/// A destination of fixed capacity surrounded by guard bytes.
///
/// ```text
/// [ GUARD_BYTE x GUARD_LEN | dest (capacity) | GUARD_BYTE x GUARD_LEN ]
/// ```
#[derive(Debug, Clone)]
pub struct GuardedBuffer {
    storage: Vec<u8>,
    capacity: usize,
}

impl GuardedBuffer {
    /// Destination of `capacity` bytes, pre-filled with [`FILL_BYTE`].
    pub fn new(capacity: usize) -> Self {
        let mut storage = vec![GUARD_BYTE; capacity + 2 * GUARD_LEN];
        storage[GUARD_LEN..GUARD_LEN + capacity].fill(FILL_BYTE);
        Self { storage, capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The destination region only.
    pub fn dest(&self) -> &[u8] {
        &self.storage[GUARD_LEN..GUARD_LEN + self.capacity]
    }

    /// The destination region only, for handing to a checked copy.
    pub fn dest_mut(&mut self) -> &mut [u8] {
        &mut self.storage[GUARD_LEN..GUARD_LEN + self.capacity]
    }

    /// `true` if every guard byte still holds [`GUARD_BYTE`].
    pub fn guards_intact(&self) -> bool {
        let (front, rest) = self.storage.split_at(GUARD_LEN);
        let back = &rest[self.capacity..];
        front.iter().chain(back).all(|&b| b == GUARD_BYTE)
    }

    /// Offsets (relative to the start of `dest`) of guard bytes that changed.
    ///
    /// Leading guards come back negative.
    pub fn clobbered_offsets(&self) -> Vec<isize> {
        let base = GUARD_LEN as isize;
        self.storage
            .iter()
            .enumerate()
            .filter(|&(i, &b)| {
                let in_dest = (GUARD_LEN..GUARD_LEN + self.capacity).contains(&i);
                !in_dest && b != GUARD_BYTE
            })
            .map(|(i, _)| i as isize - base)
            .collect()
    }
}
