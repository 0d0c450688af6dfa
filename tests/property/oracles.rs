//! Reference oracle for differential testing.
//!
//! `strncpy(dest, src, n - 1); dest[n - 1] = '\0';` written out the slow,
//! obviously-correct way: one byte at a time, mirroring C semantics.
//! `safe_copy` must agree with it on every byte of the destination.

use proptest::prelude::*;

use hello_bounds::safe_copy;

// =============================================================================
// ORACLE IMPLEMENTATION
// =============================================================================

/// Byte-at-a-time `strncpy` followed by an explicit terminator.
pub fn oracle_bounded_copy(dest: &mut [u8], src: &[u8]) {
    let n = dest.len();
    if n == 0 {
        return;
    }

    let limit = n - 1;
    let mut i = 0;
    // Copy until the source ends, hits NUL, or the limit is reached.
    while i < limit && i < src.len() && src[i] != 0 {
        dest[i] = src[i];
        i += 1;
    }
    // strncpy pads the rest of the first n - 1 bytes with NUL.
    while i < limit {
        dest[i] = 0;
        i += 1;
    }
    dest[limit] = 0;
}

// =============================================================================
// DIFFERENTIAL PROPERTIES
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// safe_copy matches the oracle byte for byte, including padding.
    #[test]
    fn prop_matches_oracle(
        src in prop::collection::vec(any::<u8>(), 0..96),
        capacity in 0usize..80,
        fill in any::<u8>(),
    ) {
        let mut actual = vec![fill; capacity];
        let mut expected = vec![fill; capacity];

        safe_copy(&mut actual, &src);
        oracle_bounded_copy(&mut expected, &src);

        prop_assert_eq!(actual, expected);
    }
}

#[test]
fn oracle_sanity() {
    let mut buf = [0xFFu8; 4];
    oracle_bounded_copy(&mut buf, b"ab");
    assert_eq!(&buf, b"ab\0\0");

    let mut buf = [0xFFu8; 4];
    oracle_bounded_copy(&mut buf, b"abcdef");
    assert_eq!(&buf, b"abc\0");
}
