// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the full program output.
//!
//! Whatever bytes arrive as the name, the program prints it verbatim in the
//! greeting and a prefix of at most 63 bytes on the second line.

#![no_main]

use hello_bounds::{greeting, run, terminated_len, BUFFER_CAPACITY};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|name: &[u8]| {
    let mut out = Vec::new();
    run(&mut out, Some(name)).expect("writing to a Vec cannot fail");

    let greeting_line = greeting(name);
    assert!(
        out.starts_with(&greeting_line),
        "Greeting must contain the name verbatim"
    );

    let second = &out[greeting_line.len()..];
    let kept = terminated_len(name).min(BUFFER_CAPACITY - 1);

    let mut expected = b"Copied safely: ".to_vec();
    expected.extend_from_slice(&name[..kept]);
    expected.push(b'\n');
    assert_eq!(second, expected.as_slice());
});
