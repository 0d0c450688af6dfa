// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String copies into fixed-capacity destinations.
//!
//! Two entry points, deliberately kept apart:
//!
//! | Function                 | Bounds            | Failure mode                       |
//! |--------------------------|-------------------|------------------------------------|
//! | [`safe_copy`]            | `dest.len()`      | none; truncates silently           |
//! | [`unchecked::unsafe_copy`] | caller-promised | out-of-bounds write (UB) on misuse |
//!
//! The checked copy is total: every input yields a terminated string of at
//! most `capacity - 1` bytes and nothing outside `dest` is touched. The
//! unchecked copy is `strcpy`: it trusts the caller and is the defect that
//! the Kani harnesses in `kani-proofs/` are expected to catch.

mod checked;
pub mod unchecked;

pub use checked::{safe_copy, CopyOutcome};
