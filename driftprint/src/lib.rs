// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The driftprint developers

//! Context triggered piecewise fingerprints for content drift detection.
//!
//! A *fingerprint* is a compact text value (`<blocksize>:<sig1>:<sig2>`)
//! computed from arbitrary bytes.  Unlike a cryptographic hash, similar inputs
//! produce similar fingerprints, so two observations of the same resource can
//! be compared later without keeping the content itself.
//!
//! ```
//! # #[cfg(feature = "easy-functions")]
//! # {
//! use driftprint::{hash_buf, Verdict};
//!
//! let before = b"A".repeat(10000);
//! let mut after = before.clone();
//! after[5000] = b'B';
//!
//! let fp1 = hash_buf(&before).unwrap();
//! let fp2 = hash_buf(&after).unwrap();
//! let score = fp1.compare(&fp2);
//! assert_eq!(Verdict::from_score(score), Verdict::ModifiedSlightly);
//! # }
//! ```
//!
//! # Crate features
//!
//! *   `std` (default): enables [`std::error::Error`] impls and the
//!     reader / file based easy functions.  Without it, the crate is
//!     `no_std` and never allocates (fingerprints are fixed-size values).
//! *   `easy-functions` (default): [`hash_buf()`], [`compare()`] and
//!     (with `std`) [`hash_stream()`] / [`hash_file()`].

#![cfg_attr(not(any(test, doc, feature = "std")), no_std)]
#![forbid(unsafe_code)]
// Non-test code requires documents
#![cfg_attr(not(test), warn(missing_docs))]
#![cfg_attr(not(test), warn(clippy::missing_docs_in_private_items))]
// Tests: constant (and/or obvious) assertions should be allowed.
#![cfg_attr(test, allow(clippy::assertions_on_constants))]

// alloc is only required when testing.
#[cfg(test)]
extern crate alloc;

mod base64;
mod compare;
mod compare_easy;
mod fingerprint;
mod generate;
mod generate_easy;
mod generate_easy_std;
mod macros;
mod test_utils;
mod verdict;

pub use compare::MIN_COMMON_SUBSTRING;
#[cfg(feature = "easy-functions")]
pub use compare_easy::{compare, ParseErrorEither, ParseErrorSide};
pub use fingerprint::block::{block_size, signature, BlockSizeRelation};
pub use fingerprint::parser::{ParseError, ParseErrorKind, ParseErrorOrigin};
pub use fingerprint::Fingerprint;
pub use generate::{Generator, GeneratorError, Precision};
#[cfg(feature = "easy-functions")]
pub use generate_easy::hash_buf;
#[cfg(all(feature = "easy-functions", feature = "std"))]
pub use generate_easy_std::{hash_file, hash_stream, GeneratorOrIOError};
pub use verdict::{Color, Verdict};

/// Module containing internal hash functions.
pub mod internal_hashes {
    pub use super::generate::{PartialFnv1aHash, RollingHash, RollingHashOf};
}

/// Module containing the signature-level comparison primitives.
pub mod internal_comparison {
    pub use super::compare::{edit_distance, has_common_substring, score_signatures};
}

/// The maximum length of the fingerprint's string representation.
pub const MAX_LEN_IN_STR: usize = Fingerprint::MAX_LEN_IN_STR;

/// Constant assertions related to the base requirements.
#[doc(hidden)]
mod const_asserts {
    use super::*;
    use static_assertions::const_assert;

    // Symbol values must fit in the alphabet and the length fields.
    const_assert!(signature::ALPHABET_SIZE == 64);
    const_assert!(signature::MAX_LEN <= u8::MAX as usize);

    // The largest block size must be representable in u32 (the text form).
    const_assert!(block_size::MAX as u64 == (block_size::MIN as u64) << (block_size::NUM_VALID - 1));

    // The common substring gate must never exceed a full signature.
    const_assert!(MIN_COMMON_SUBSTRING <= signature::MAX_LEN);

    // "4294967295".len() is the longest decimal block size.
    const_assert!(MAX_LEN_IN_STR == 10 + 1 + signature::MAX_LEN + 1 + signature::MAX_LEN);
}
