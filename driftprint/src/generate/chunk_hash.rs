// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The driftprint developers

//! FNV-1a chunk hash reduced to one signature symbol.

use crate::fingerprint::block::signature;

/// Mask to keep the lowest 6 bits (one signature symbol).
const SYMBOL_MASK: u8 = (signature::ALPHABET_SIZE - 1) as u8;

/// Hasher computing the lowest 6 bits of 32-bit FNV-1a.
///
/// Both the xor and the multiplication of FNV-1a are compatible with the
/// reduction modulo 64, so tracking only the lowest 6 bits yields exactly
/// `fnv1a_32(bytes) % 64` without ever computing the full hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartialFnv1aHash(u8);

impl PartialFnv1aHash {
    /// The offset basis of 32-bit FNV-1a.
    pub(crate) const FNV_OFFSET_BASIS: u32 = 0x811c9dc5;

    /// The prime of 32-bit FNV-1a.
    pub(crate) const FNV_PRIME: u32 = 0x01000193;

    /// The initial state (which is also the symbol of an empty chunk).
    const INIT: u8 = (Self::FNV_OFFSET_BASIS as u8) & SYMBOL_MASK;

    /// The prime, reduced.
    const PRIME: u8 = (Self::FNV_PRIME as u8) & SYMBOL_MASK;

    /// Creates a new hasher with the initial state.
    #[inline]
    pub const fn new() -> Self {
        PartialFnv1aHash(Self::INIT)
    }

    /// Updates the hash value by processing a byte.
    #[inline]
    pub fn update_by_byte(&mut self, ch: u8) -> &mut Self {
        self.0 = (self.0 ^ ch).wrapping_mul(Self::PRIME) & SYMBOL_MASK;
        self
    }

    /// Updates the hash value by processing an iterator of [`u8`].
    pub fn update_by_iter(&mut self, iter: impl Iterator<Item = u8>) -> &mut Self {
        iter.for_each(|ch| {
            self.update_by_byte(ch);
        });
        self
    }

    /// Updates the hash value by processing a slice of [`u8`].
    pub fn update(&mut self, buf: &[u8]) -> &mut Self {
        self.update_by_iter(buf.iter().copied())
    }

    /// Returns the symbol value (`0..64`).
    #[inline]
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for PartialFnv1aHash {
    fn default() -> Self {
        Self::new()
    }
}
