// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The program proper: greet, then copy the name into a fixed buffer.

use std::io::{self, Write};

use tracing::debug;

use crate::buffer::FixedBuffer;
use crate::greet::greet;

/// Name used when none is given on the command line.
pub const DEFAULT_NAME: &str = "World";

/// Capacity of the buffer the name is copied into, terminator included.
pub const BUFFER_CAPACITY: usize = 64;

const COPIED_PREFIX: &[u8] = b"Copied safely: ";

/// Greet `name` (or [`DEFAULT_NAME`]) and report its checked copy.
///
/// Writes exactly two lines to `out`:
///
/// ```text
/// Hello, <name>!
/// Copied safely: <name, cut to BUFFER_CAPACITY - 1 bytes>
/// ```
pub fn run<W: Write>(out: &mut W, name: Option<&[u8]>) -> io::Result<()> {
    let name = name.unwrap_or(DEFAULT_NAME.as_bytes());
    debug!(len = name.len(), "resolved name");

    greet(out, name)?;

    let mut buffer = FixedBuffer::<BUFFER_CAPACITY>::new();
    let outcome = buffer.copy_from(name);
    debug!(
        capacity = BUFFER_CAPACITY,
        copied = outcome.copied,
        truncated = outcome.truncated,
        "checked copy complete"
    );

    out.write_all(COPIED_PREFIX)?;
    out.write_all(buffer.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}
