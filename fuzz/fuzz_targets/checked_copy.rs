// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the checked copy.
//!
//! The checked copy is the only thing in this crate with a safety promise.
//! If it ever writes past its destination or leaves it unterminated, the
//! whole point of having a checked path is gone.

#![no_main]

use arbitrary::Arbitrary;
use hello_bounds::testing::GuardedBuffer;
use hello_bounds::{safe_copy, terminated_len};
use libfuzzer_sys::fuzz_target;

/// Fuzz input for one checked copy
#[derive(Debug, Arbitrary)]
struct CopyInput {
    /// Destination capacity (capped to keep iterations fast)
    capacity: u8,
    /// Source bytes, embedded NULs and all
    src: Vec<u8>,
}

fuzz_target!(|input: CopyInput| {
    let capacity = usize::from(input.capacity);
    let mut buf = GuardedBuffer::new(capacity);

    // Property 1: safe_copy never panics
    let outcome = safe_copy(buf.dest_mut(), &input.src);

    // Property 2: nothing outside [0, capacity) was touched
    assert!(
        buf.guards_intact(),
        "Guard bytes clobbered at offsets {:?} (capacity {})",
        buf.clobbered_offsets(),
        capacity
    );

    let effective = terminated_len(&input.src);

    if capacity == 0 {
        assert_eq!(outcome.copied, 0, "Zero capacity must copy nothing");
        return;
    }

    // Property 3: terminated at capacity - 1
    assert_eq!(buf.dest()[capacity - 1], 0, "Missing terminator");

    // Property 4: length is min(len, capacity - 1)
    let expected = effective.min(capacity - 1);
    assert_eq!(outcome.copied, expected);
    assert_eq!(terminated_len(buf.dest()), expected);
    assert_eq!(outcome.truncated, effective > capacity - 1);

    // Property 5: the prefix is the source
    assert_eq!(&buf.dest()[..expected], &input.src[..expected]);
});
