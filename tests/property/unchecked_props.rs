//! Properties of the unchecked copy when its contract is honoured.
//!
//! Misuse is undefined behaviour and cannot be tested here; the out-of-bounds
//! case is covered by the expected-failure Kani harness in `kani-proofs/`.

#![allow(unsafe_code)]

use std::ffi::CString;

use proptest::prelude::*;

use super::common::GuardedBuffer;
use hello_bounds::{safe_copy, unsafe_copy};

proptest! {
    /// Property: with room to spare, the unchecked copy is an exact strcpy.
    #[test]
    fn prop_unchecked_copy_exact_when_contract_holds(
        body in prop::collection::vec(1u8..=255, 0..64),
        slack in 0usize..16,
    ) {
        let src = CString::new(body.clone()).unwrap();
        let needed = src.as_bytes_with_nul().len();

        let mut buf = GuardedBuffer::new(needed + slack);
        // SAFETY: the destination holds `needed + slack` >= `needed` bytes.
        unsafe { unsafe_copy(buf.dest_mut().as_mut_ptr(), &src) };

        prop_assert_eq!(&buf.dest()[..needed], src.as_bytes_with_nul());
        prop_assert!(buf.guards_intact());
    }

    /// Property: when the source fits, both copies agree on the string.
    #[test]
    fn prop_checked_and_unchecked_agree_when_source_fits(
        body in prop::collection::vec(1u8..=255, 0..63),
    ) {
        let src = CString::new(body.clone()).unwrap();

        let mut checked = [0u8; 64];
        safe_copy(&mut checked, &body);

        let mut unchecked = [0u8; 64];
        // SAFETY: at most 63 bytes plus terminator into 64.
        unsafe { unsafe_copy(unchecked.as_mut_ptr(), &src) };

        prop_assert_eq!(checked, unchecked);
    }
}
