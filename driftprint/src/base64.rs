// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The driftprint developers

//! The 64-symbol alphabet used by fingerprint signatures.

/// Signature alphabet; the index of a character is its symbol value.
///
/// This is the same alphabet set defined in the Table 1 of
/// [RFC 4648](https://datatracker.ietf.org/doc/rfc4648/).
pub(crate) const ALPHABET: [u8; 64] =
    *b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// The constant representing an "invalid" symbol index.
pub(crate) const BASE64_INVALID: u8 = 0x40;

/// Reverse (character to symbol value) table, built from [`ALPHABET`].
///
/// All 256 entries exist so that the lookup never needs a range check.
const REVERSE_TABLE: [u8; 256] = {
    let mut table = [BASE64_INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Converts a character into its symbol value.
///
/// If `ch` is not in the alphabet, [`BASE64_INVALID`] is returned.
#[inline]
pub(crate) fn base64_index(ch: u8) -> u8 {
    REVERSE_TABLE[ch as usize]
}

/// Converts a symbol value (`0..64`) into its character.
#[inline]
pub(crate) fn base64_char(symbol: u8) -> u8 {
    debug_assert!((symbol as usize) < ALPHABET.len());
    ALPHABET[(symbol & 0x3f) as usize]
}
