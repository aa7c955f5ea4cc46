// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The driftprint developers

//! A 32-bit rolling hash deciding where chunks are cut.

use core::ops::AddAssign;

/// The default window size of the rolling hash.
pub const ROLLING_WINDOW: usize = 7;

/// Rolling hash over the last `WINDOW` bytes.
///
/// The hash only decides *where* the content is cut into chunks; it is never
/// part of the fingerprint itself.  Updating costs O(1) regardless of the
/// window size: the byte leaving the window is subtracted instead of
/// recomputing the whole window.
///
/// The value is the (wrapping) sum of three components:
///
/// *   `h1`: plain sum of the window (Adler-style),
/// *   `h2`: position-weighted sum of the window (the newest byte has the
///     weight `WINDOW`, the oldest has the weight 1),
/// *   `h3`: shift-xor register.  Each byte shifts it left by
///     `ceil(32 / WINDOW)` bits, so a byte falls out of the register after
///     `WINDOW` updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingHashOf<const WINDOW: usize> {
    /// Index of the oldest byte in `window` (next to be replaced).
    index: usize,
    /// Sum of the window.
    h1: u32,
    /// Position-weighted sum of the window.
    h2: u32,
    /// Shift-xor register.
    h3: u32,
    /// The last `WINDOW` bytes (ring buffer).
    window: [u8; WINDOW],
}

/// The rolling hash with the default window size ([`ROLLING_WINDOW`]).
pub type RollingHash = RollingHashOf<ROLLING_WINDOW>;

impl<const WINDOW: usize> RollingHashOf<WINDOW> {
    /// The window size of the rolling hash.
    pub const WINDOW_SIZE: usize = WINDOW;

    /// Left shift width of `h3` for each byte.
    pub(crate) const H3_LSHIFT: u32 = ((u32::BITS as usize + WINDOW - 1) / WINDOW) as u32;

    /// Compile-time check of the window size.
    const VALID_WINDOW: () = assert!(WINDOW >= 2 && WINDOW <= 32, "window size must be in 2..=32");

    /// Creates a new rolling hash with the initial (all-zero window) state.
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_WINDOW;
        RollingHashOf {
            index: 0,
            h1: 0,
            h2: 0,
            h3: 0,
            window: [0; WINDOW],
        }
    }

    /// Updates the hash value by processing a byte.
    #[inline]
    pub fn update_by_byte(&mut self, ch: u8) -> &mut Self {
        debug_assert!(self.index < WINDOW);
        let outgoing = self.window[self.index] as u32;
        self.h2 = self
            .h2
            .wrapping_sub(self.h1)
            .wrapping_add((WINDOW as u32).wrapping_mul(ch as u32));
        self.h1 = self.h1.wrapping_add(ch as u32).wrapping_sub(outgoing);
        self.window[self.index] = ch;
        self.index = if self.index + 1 == WINDOW { 0 } else { self.index + 1 };
        self.h3 = (self.h3 << Self::H3_LSHIFT) ^ (ch as u32);
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

    /// Returns the current hash value.
    ///
    /// There is no finalization; updating may continue after reading it.
    #[inline]
    pub fn value(&self) -> u32 {
        self.h1.wrapping_add(self.h2).wrapping_add(self.h3)
    }

    /// Checks whether the current value triggers a cut at `block_size`.
    #[inline]
    pub fn is_trigger(&self, block_size: u64) -> bool {
        (self.value() as u64) % block_size == block_size - 1
    }
}

impl<const WINDOW: usize> AddAssign<&[u8]> for RollingHashOf<WINDOW> {
    /// Updates the hash value by processing a slice of [`u8`].
    #[inline(always)]
    fn add_assign(&mut self, buffer: &[u8]) {
        self.update(buffer);
    }
}

impl<const WINDOW: usize, const N: usize> AddAssign<&[u8; N]> for RollingHashOf<WINDOW> {
    /// Updates the hash value by processing an array of [`u8`].
    #[inline(always)]
    fn add_assign(&mut self, buffer: &[u8; N]) {
        self.update(&buffer[..]);
    }
}

impl<const WINDOW: usize> AddAssign<u8> for RollingHashOf<WINDOW> {
    /// Updates the hash value by processing a byte.
    #[inline(always)]
    fn add_assign(&mut self, byte: u8) {
        self.update_by_byte(byte);
    }
}

impl<const WINDOW: usize> Default for RollingHashOf<WINDOW> {
    fn default() -> Self {
        Self::new()
    }
}
