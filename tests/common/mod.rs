//! Shared test utilities and fixtures.

#![allow(dead_code)]

use hello_bounds::{terminated_len, CopyOutcome, NUL};

// Re-export canonical test utilities from hello_bounds::testing
pub use hello_bounds::testing::{GuardedBuffer, FILL_BYTE, GUARD_BYTE, GUARD_LEN};

/// Capacity used by the program's own buffer.
pub const PROGRAM_CAPACITY: usize = 64;

/// Assert everything a checked copy of `src` into `dest` must guarantee.
///
/// Panics with a description of the first broken property.
pub fn assert_copy_well_formed(dest: &[u8], src: &[u8], outcome: CopyOutcome) {
    let effective = &src[..terminated_len(src)];

    if dest.is_empty() {
        assert_eq!(outcome.copied, 0, "zero capacity must copy nothing");
        assert_eq!(outcome.truncated, !effective.is_empty());
        return;
    }

    let limit = dest.len() - 1;
    let expected_len = effective.len().min(limit);

    assert_eq!(
        dest[limit], NUL,
        "dest[capacity - 1] must be the terminator"
    );
    assert_eq!(
        terminated_len(dest),
        expected_len,
        "terminated length must be min(len(src), capacity - 1)"
    );
    assert_eq!(&dest[..expected_len], &effective[..expected_len]);
    assert_eq!(outcome.copied, expected_len);
    assert_eq!(outcome.truncated, effective.len() > limit);
}
