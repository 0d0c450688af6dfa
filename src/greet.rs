// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `Hello, <name>!`

use std::io::{self, Write};

const PREFIX: &[u8] = b"Hello, ";
const SUFFIX: &[u8] = b"!\n";

/// Greeting line for `name`, trailing newline included.
///
/// The name is inserted byte for byte: no escaping, no UTF-8 validation.
pub fn greeting(name: &[u8]) -> Vec<u8> {
    let mut line = Vec::with_capacity(PREFIX.len() + name.len() + SUFFIX.len());
    line.extend_from_slice(PREFIX);
    line.extend_from_slice(name);
    line.extend_from_slice(SUFFIX);
    line
}

/// Write the greeting line for `name` to `out`.
pub fn greet<W: Write>(out: &mut W, name: &[u8]) -> io::Result<()> {
    out.write_all(&greeting(name))
}
