// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Greeting and fixed-buffer string copies, checked and unchecked.
//!
//! This crate is a target for analysis tooling. It greets a name, then copies
//! that name into a fixed 64-byte buffer. It ships two copies:
//!
//! - [`safe_copy`] is total. It never writes outside the destination and
//!   always terminates the result.
//! - [`unsafe_copy`] is `strcpy`. It trusts the caller and writes out of bounds
//!   when misused.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │  greet.rs   │◀────│   run.rs     │────▶│   buffer.rs      │
//! │ (greeting)  │     │ (entry flow) │     │ (FixedBuffer<N>) │
//! └─────────────┘     └──────────────┘     └──────────────────┘
//!                                                   │
//!                                                   ▼
//!                     ┌─────────────────────────────────────────┐
//!                     │ copy/                                   │
//!                     │  checked.rs   safe_copy   (total)       │
//!                     │  unchecked.rs unsafe_copy (unsafe fn)   │
//!                     └─────────────────────────────────────────┘
//!                                       │
//!                                       ▼
//!                     ┌─────────────────────────────────────────┐
//!                     │ contracts.rs (debug-mode postconditions)│
//!                     └─────────────────────────────────────────┘
//! ```
//!
//! # Verification
//!
//! | Property                               | Checked by                          |
//! |----------------------------------------|-------------------------------------|
//! | checked copy length = `min(len, C-1)`  | proptest, Kani, fuzz, contracts     |
//! | checked copy never writes past `C`     | guard bytes (proptest, fuzz), Kani  |
//! | unchecked copy overflows on misuse     | Kani (expected-failure harness)     |
//!
//! # Usage
//!
//! ```
//! use hello_bounds::{run, FixedBuffer};
//!
//! let mut buf = FixedBuffer::<8>::new();
//! buf.copy_from(b"Bartholomew");
//! assert_eq!(buf.as_bytes(), b"Barthol");
//!
//! let mut out = Vec::new();
//! run(&mut out, Some(b"Alice".as_slice())).unwrap();
//! assert_eq!(out, b"Hello, Alice!\nCopied safely: Alice\n");
//! ```

// Module declarations
mod buffer;
pub mod contracts;
pub mod copy;
mod greet;
mod run;
pub mod testing;
mod utils;

// Re-exports for public API
pub use buffer::FixedBuffer;
pub use copy::unchecked::unsafe_copy;
pub use copy::{safe_copy, CopyOutcome};
pub use greet::{greet, greeting};
pub use run::{run, BUFFER_CAPACITY, DEFAULT_NAME};
pub use utils::{terminated_len, NUL};
