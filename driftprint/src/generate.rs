// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The driftprint developers

//! Streaming fingerprint generator.

use core::ops::AddAssign;

use crate::fingerprint::block::{block_size, signature};
use crate::fingerprint::Fingerprint;
use crate::macros::impl_error;

mod chunk_hash;
mod rolling_hash;

pub use chunk_hash::PartialFnv1aHash;
pub use rolling_hash::{RollingHash, RollingHashOf};

/// The number of tracked levels (every valid block size plus one more for
/// the signature 2 of the largest block size).
const NUM_LEVELS: usize = block_size::NUM_VALID + 1;

/// A chunk is cut unconditionally once it reaches this many times the
/// block size.
///
/// Long runs of the same byte keep the rolling hash constant, so without a
/// ceiling they would never trigger and the whole run would collapse into
/// one symbol.  On high-entropy data a chunk this long is rare.
pub(crate) const MAX_CHUNK_FACTOR: u64 = 4;

/// Returns the number of levels (starting from level 0) at which the
/// rolling hash value triggers a cut.
///
/// `value % bs == bs - 1` with `bs = MIN * 2^n` holds exactly when
/// `value + 1` is a multiple of both `MIN` and `2^n`, so every level below
/// the returned count triggers and every level above does not.
#[inline(always)]
pub(crate) fn trigger_levels(value: u32) -> usize {
    let next = value as u64 + 1;
    if next % block_size::MIN as u64 != 0 {
        return 0;
    }
    next.trailing_zeros() as usize + 1
}

/// The error type describing a fingerprint generator failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorError {
    /// The number of processed bytes differs from the fixed size set by
    /// [`Generator::set_fixed_input_size()`].
    FixedSizeMismatch,
    /// The value given to [`Generator::set_max_block_size()`] is not a
    /// valid block size.
    InvalidBlockSize,
}

impl core::fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            GeneratorError::FixedSizeMismatch => {
                "current state mismatches to the fixed size previously set"
            }
            GeneratorError::InvalidBlockSize => "block size is not valid",
        })
    }
}

impl_error! { GeneratorError {} }

/// Whether a generated fingerprint kept every chunk symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    /// Both signatures are complete.
    Exact,
    /// Even the largest allowed block size produced more symbols than a
    /// signature can hold; the trailing symbols are dropped.
    ///
    /// Comparisons involving such a fingerprint silently lose precision.
    Truncated,
}

/// Per block size state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LevelContext {
    /// Chunk hash accumulated since the last cut.
    chunk: PartialFnv1aHash,
    /// Number of bytes since the last cut.
    chunk_len: u64,
    /// Emitted symbols.
    sig: [u8; signature::MAX_LEN],
    /// Number of emitted symbols (up to [`signature::MAX_LEN`]).
    len: u8,
    /// Whether any symbol was dropped because the signature was full.
    overflowed: bool,
}

impl LevelContext {
    /// Creates an empty context.
    const fn new() -> Self {
        LevelContext {
            chunk: PartialFnv1aHash::new(),
            chunk_len: 0,
            sig: [0; signature::MAX_LEN],
            len: 0,
            overflowed: false,
        }
    }

    /// Appends a symbol (or records the overflow).
    #[inline]
    fn push(&mut self, symbol: u8) {
        if (self.len as usize) < signature::MAX_LEN {
            self.sig[self.len as usize] = symbol;
            self.len += 1;
        } else {
            self.overflowed = true;
        }
    }

    /// Processes a byte, cutting the chunk if `trigger` holds or if the
    /// chunk reached its ceiling at `block_size`.
    #[inline]
    fn update(&mut self, ch: u8, trigger: bool, block_size: u64) {
        self.chunk.update_by_byte(ch);
        self.chunk_len += 1;
        if trigger || self.chunk_len >= MAX_CHUNK_FACTOR * block_size {
            self.push(self.chunk.value());
            self.chunk = PartialFnv1aHash::new();
            self.chunk_len = 0;
        }
    }

    /// Returns a copy with the trailing (possibly empty) chunk flushed.
    fn finished(&self) -> LevelContext {
        let mut ctx = *self;
        ctx.push(ctx.chunk.value());
        ctx
    }

    /// Returns the emitted symbols.
    #[inline]
    fn signature(&self) -> &[u8] {
        &self.sig[..self.len as usize]
    }
}

/// Streaming fingerprint generator.
///
/// The generator consumes the content once and tracks every block size at
/// the same time, so no second pass is required when the first block size
/// guess produces too many chunks.
///
/// # Block Size Selection
///
/// On [finalization](Self::finalize()), the block size starts from the
/// estimate derived from the input size (the smallest block size whose
/// expected number of chunks fits in a signature) and is doubled while
/// either signature overflowed.  If even the largest allowed block size
/// overflows, the signatures are kept truncated
/// (see [`Precision::Truncated`]).
///
/// # Example
///
/// ```
/// use driftprint::Generator;
///
/// let mut generator = Generator::new();
/// generator.update(b"Hello, ");
/// generator.update(b"World!\n");
/// assert_eq!(generator.finalize().unwrap().to_string(), "3:OOVUd:Ov");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generator {
    /// Total number of processed bytes.
    input_size: u64,
    /// The fixed input size (if any).
    fixed_size: Option<u64>,
    /// Lowest tracked level (lower levels can no longer be selected).
    start_level: usize,
    /// Largest level usable as the signature 1.
    max_level: usize,
    /// The shared rolling hash.
    roll: RollingHash,
    /// Per level contexts.
    levels: [LevelContext; NUM_LEVELS],
}

impl Generator {
    /// Creates a new generator.
    pub fn new() -> Self {
        Generator {
            input_size: 0,
            fixed_size: None,
            start_level: 0,
            max_level: block_size::NUM_VALID - 1,
            roll: RollingHash::new(),
            levels: [LevelContext::new(); NUM_LEVELS],
        }
    }

    /// Resets the generator to the initial state, keeping the configured
    /// maximum block size.
    pub fn reset(&mut self) {
        let max_level = self.max_level;
        *self = Self::new();
        self.max_level = max_level;
    }

    /// Returns the number of bytes processed so far.
    #[inline]
    pub fn input_size(&self) -> u64 {
        self.input_size
    }

    /// Sets the total input size in advance.
    ///
    /// This is a hint: block sizes too small for that size are no longer
    /// tracked.  Finalization fails if the actual size differs.
    /// Call this before processing any data.
    pub fn set_fixed_input_size(&mut self, size: u64) -> &mut Self {
        self.fixed_size = Some(size);
        let estimated = block_size::log_for_input_size(size) as usize;
        self.start_level = self.start_level.max(estimated.min(self.max_level));
        self
    }

    /// Sets the fixed input size from a [`usize`].
    pub fn set_fixed_input_size_in_usize(&mut self, size: usize) -> &mut Self {
        self.set_fixed_input_size(size as u64)
    }

    /// Limits the largest block size the generator may select.
    ///
    /// If the content still produces too many chunks at this block size,
    /// the result is [truncated](Precision::Truncated).
    /// Call this before processing any data.
    pub fn set_max_block_size(&mut self, block_size: u32) -> Result<&mut Self, GeneratorError> {
        let log_block_size =
            block_size::log_from_valid(block_size).ok_or(GeneratorError::InvalidBlockSize)?;
        self.max_level = log_block_size as usize;
        self.start_level = self.start_level.min(self.max_level);
        Ok(self)
    }

    /// Updates the generator by processing a byte.
    pub fn update_by_byte(&mut self, ch: u8) -> &mut Self {
        self.roll.update_by_byte(ch);
        self.input_size = self.input_size.saturating_add(1);
        let triggered = trigger_levels(self.roll.value());
        for (level, ctx) in self
            .levels
            .iter_mut()
            .enumerate()
            .take(self.max_level + 2)
            .skip(self.start_level)
        {
            ctx.update(ch, level < triggered, block_size::of_level(level));
        }
        // Once a level overflows, neither it nor anything below can be
        // selected (except at the largest allowed block size).
        while self.start_level < self.max_level && self.levels[self.start_level].overflowed {
            self.start_level += 1;
        }
        self
    }

    /// Updates the generator by processing an iterator of [`u8`].
    pub fn update_by_iter(&mut self, iter: impl Iterator<Item = u8>) -> &mut Self {
        iter.for_each(|ch| {
            self.update_by_byte(ch);
        });
        self
    }

    /// Updates the generator by processing a slice of [`u8`].
    pub fn update(&mut self, buf: &[u8]) -> &mut Self {
        self.update_by_iter(buf.iter().copied())
    }

    /// Finalizes and returns the fingerprint with its precision.
    ///
    /// The generator itself is not modified; more data may be processed
    /// afterwards.
    pub fn finalize_with_precision(&self) -> Result<(Fingerprint, Precision), GeneratorError> {
        if let Some(size) = self.fixed_size {
            if size != self.input_size {
                return Err(GeneratorError::FixedSizeMismatch);
            }
        }
        if self.input_size == 0 {
            return Ok((Fingerprint::new(), Precision::Exact));
        }
        let estimated = block_size::log_for_input_size(self.input_size) as usize;
        let mut level = estimated.min(self.max_level).max(self.start_level);
        let mut sig1 = self.levels[level].finished();
        let mut sig2 = self.levels[level + 1].finished();
        while level < self.max_level && (sig1.overflowed || sig2.overflowed) {
            log::debug!(
                "block size {} too small for {} bytes, doubling",
                block_size::of_level(level),
                self.input_size
            );
            level += 1;
            sig1 = sig2;
            sig2 = self.levels[level + 1].finished();
        }
        let precision = if sig1.overflowed || sig2.overflowed {
            log::debug!(
                "signatures truncated at the largest block size {}",
                block_size::of_level(level)
            );
            Precision::Truncated
        } else {
            Precision::Exact
        };
        let fp = Fingerprint::from_raw(level as u8, sig1.signature(), sig2.signature());
        Ok((fp, precision))
    }

    /// Finalizes and returns the fingerprint.
    ///
    /// Use [`finalize_with_precision()`](Self::finalize_with_precision())
    /// to tell whether the signatures were truncated.
    pub fn finalize(&self) -> Result<Fingerprint, GeneratorError> {
        self.finalize_with_precision().map(|(fp, _)| fp)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl AddAssign<&[u8]> for Generator {
    /// Updates the generator by processing a slice of [`u8`].
    #[inline(always)]
    fn add_assign(&mut self, buffer: &[u8]) {
        self.update(buffer);
    }
}

impl<const N: usize> AddAssign<&[u8; N]> for Generator {
    /// Updates the generator by processing an array of [`u8`].
    #[inline(always)]
    fn add_assign(&mut self, buffer: &[u8; N]) {
        self.update(&buffer[..]);
    }
}

impl AddAssign<u8> for Generator {
    /// Updates the generator by processing a byte.
    #[inline(always)]
    fn add_assign(&mut self, byte: u8) {
        self.update_by_byte(byte);
    }
}
