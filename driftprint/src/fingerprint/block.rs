// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The driftprint developers

//! Block size and signature constraints.

/// Block size related constants and utilities.
///
/// The generator only emits `MIN * 2^n` where `0 <= n < NUM_VALID` (*valid*
/// block sizes) and handles them in the *base-2 logarithm* form (`n`).
/// Parsed fingerprints may carry any positive block size.
pub mod block_size {
    use core::ops::RangeInclusive;

    use super::{signature, BlockSizeRelation};

    /// The minimum block size.
    pub const MIN: u32 = 3;

    /// The number of valid block sizes.
    pub const NUM_VALID: usize = 31;

    /// The maximum block size.
    pub const MAX: u32 = MIN << (NUM_VALID - 1);

    /// The valid range of block sizes in the base-2 logarithm form.
    pub const RANGE_LOG_VALID: RangeInclusive<u8> = 0..=(NUM_VALID as u8 - 1);

    /// Checks whether the given base-2 logarithm form is valid.
    #[inline(always)]
    pub const fn is_log_valid(log_block_size: u8) -> bool {
        (log_block_size as usize) < NUM_VALID
    }

    /// Converts the base-2 logarithm form into the actual block size
    /// (unchecked, `log_block_size` must be valid).
    #[inline(always)]
    pub(crate) const fn from_log_internal(log_block_size: u8) -> u32 {
        debug_assert!(is_log_valid(log_block_size));
        MIN << log_block_size
    }

    /// Converts the base-2 logarithm form into the actual block size.
    ///
    /// Returns [`None`] if `log_block_size` is out of range.
    #[inline]
    pub const fn from_log(log_block_size: u8) -> Option<u32> {
        if is_log_valid(log_block_size) {
            Some(from_log_internal(log_block_size))
        } else {
            None
        }
    }

    /// The block size of the tracking level `level` (which may exceed the
    /// largest valid block size by one, for the second signature).
    #[inline(always)]
    pub(crate) const fn of_level(level: usize) -> u64 {
        (MIN as u64) << level
    }

    /// Checks whether a given block size is valid.
    #[inline]
    pub const fn is_valid(block_size: u32) -> bool {
        if block_size % MIN != 0 {
            return false;
        }
        let ratio = block_size / MIN;
        ratio.is_power_of_two() && (ratio.trailing_zeros() as usize) < NUM_VALID
    }

    /// Converts a block size into the base-2 logarithm form.
    ///
    /// Returns [`None`] if `block_size` is not valid.
    #[inline]
    pub const fn log_from_valid(block_size: u32) -> Option<u8> {
        if is_valid(block_size) {
            Some((block_size / MIN).trailing_zeros() as u8)
        } else {
            None
        }
    }

    /// The block size (in the base-2 logarithm form) expected to keep a
    /// signature of the given input within [`signature::MAX_LEN`].
    ///
    /// This is the smallest `n` with `MIN * 2^n * MAX_LEN >= input_size`,
    /// saturating at the largest valid block size.
    pub const fn log_for_input_size(input_size: u64) -> u8 {
        let mut log_block_size = 0;
        while log_block_size + 1 < NUM_VALID
            && of_level(log_block_size) * (signature::MAX_LEN as u64) < input_size
        {
            log_block_size += 1;
        }
        log_block_size as u8
    }

    /// Compares two block sizes and returns their relation.
    ///
    /// Block sizes are near each other only if they are equal or one is
    /// exactly the double of the other.
    #[inline]
    pub fn compare_sizes(lhs: u32, rhs: u32) -> BlockSizeRelation {
        let (lhs, rhs) = (lhs as u64, rhs as u64);
        if lhs == rhs {
            BlockSizeRelation::NearEq
        } else if lhs * 2 == rhs {
            BlockSizeRelation::NearLt
        } else if lhs == rhs * 2 {
            BlockSizeRelation::NearGt
        } else {
            BlockSizeRelation::Far
        }
    }
}

/// Signature related constants.
pub mod signature {
    /// The number of symbols in the signature alphabet.
    pub const ALPHABET_SIZE: usize = 64;

    /// The maximum number of symbols in a signature.
    pub const MAX_LEN: usize = 64;
}

/// The relation between two block sizes.
///
/// Only fingerprints whose block sizes are [near](Self::is_near) each other
/// can share a signature of the same block size, and thus be compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockSizeRelation {
    /// Two block sizes are not near each other (comparison yields zero).
    Far,
    /// The left block size is half of the right one.
    NearLt,
    /// Two block sizes are equal.
    NearEq,
    /// The left block size is double of the right one.
    NearGt,
}

impl BlockSizeRelation {
    /// Checks whether two block sizes are near enough to be compared.
    #[inline]
    pub fn is_near(&self) -> bool {
        !matches!(self, BlockSizeRelation::Far)
    }
}
