// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The driftprint developers

#![cfg(feature = "easy-functions")]

use crate::fingerprint::Fingerprint;
use crate::generate::{Generator, GeneratorError};


/// Generates a fingerprint from a given buffer.
///
/// # Example
///
/// ```
/// assert_eq!(
///     driftprint::hash_buf(b"Hello, World!\n").unwrap().to_string(),
///     "3:OOVUd:Ov"
/// );
/// ```
pub fn hash_buf(buffer: &[u8]) -> Result<Fingerprint, GeneratorError> {
    let mut generator = Generator::new();
    generator.set_fixed_input_size_in_usize(buffer.len());
    generator.update(buffer);
    generator.finalize()
}
