// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The driftprint developers

//! Test-only utilities.

#![cfg(test)]

use alloc::vec::Vec;

mod tests;

/// SplitMix64 pseudo-random number generator.
///
/// Used to build reproducible "random" content in tests.
#[derive(Debug, Clone)]
pub(crate) struct SplitMix64(u64);

impl SplitMix64 {
    /// Creates a generator from a seed.
    pub(crate) fn new(seed: u64) -> Self {
        SplitMix64(seed)
    }

    /// Returns the next 64-bit value.
    pub(crate) fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}

/// Returns `len` pseudo-random bytes (little-endian words of [`SplitMix64`]).
pub(crate) fn random_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut rng = SplitMix64::new(seed);
    let mut out = Vec::with_capacity(len + 8);
    while out.len() < len {
        out.extend_from_slice(&rng.next_u64().to_le_bytes());
    }
    out.truncate(len);
    out
}

/// Positions (indices of the last byte of each chunk) where the rolling
/// hash cuts `data` at `block_size`, including the length ceiling.
pub(crate) fn cut_positions(data: &[u8], block_size: u64) -> Vec<usize> {
    let mut roll = crate::generate::RollingHash::new();
    let mut chunk_len = 0u64;
    let mut cuts = Vec::new();
    for (i, &ch) in data.iter().enumerate() {
        roll.update_by_byte(ch);
        chunk_len += 1;
        if roll.is_trigger(block_size) || chunk_len >= crate::generate::MAX_CHUNK_FACTOR * block_size {
            cuts.push(i);
            chunk_len = 0;
        }
    }
    cuts
}

/// Test recommended [`Default`] implementation.
#[doc(alias = "test_recommended_default")]
macro_rules! test_recommended_default_impl {
    ($ty: ty) => {{
        let value1 = <$ty>::new();
        let value2 = <$ty>::default();
        assert_eq!(value1, value2);
    }};
}

pub(crate) use test_recommended_default_impl as test_recommended_default;
