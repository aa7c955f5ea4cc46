// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The driftprint developers

//! The fingerprint data model and its canonical text form.

use core::fmt::Write;

use crate::base64::base64_char;
use crate::fingerprint::block::{block_size, signature, BlockSizeRelation};
use crate::fingerprint::parser::{
    parse_block_size, parse_signature, ParseError, ParseErrorKind, ParseErrorOrigin, SignatureEnd,
};

pub mod block;
pub mod parser;

/// A content fingerprint.
///
/// # Fingerprint Internals
///
/// A fingerprint consists of three parts:
///
/// 1.  Block size (reciprocal of the average chunk-splitting probability
///     per byte of the signature 1).  Generated fingerprints always use
///     `3 * 2^n` but any positive value is accepted when parsing.
/// 2.  Signature 1.  One 6-bit symbol per chunk, up to
///     [`signature::MAX_LEN`] symbols.
/// 3.  Signature 2.  Same as signature 1 but chunked at the double of the
///     block size.
///
/// Its canonical text form is `"<block size>:<signature 1>:<signature 2>"`
/// where signatures are written in the Base64 alphabet
/// (`[A-Za-z0-9+/]`).  For instance: `"192:oFFFFFFFFFFFFF6:oFFFFFF6"`.
///
/// Parsing the text form and formatting it back always yields the same
/// string, so a fingerprint can be persisted as plain text between runs.
///
/// # Block Size Relations
///
/// Because signature 2 is chunked at the double block size, fingerprints
/// whose block sizes are equal or differ by a factor of two share at least
/// one signature computed with the same block size.  Any other pair is
/// unrelated and scores zero.  See [`BlockSizeRelation`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    /// Signature 1 as symbol values (unused slots are zero).
    sig1: [u8; signature::MAX_LEN],
    /// Signature 2 as symbol values (unused slots are zero).
    sig2: [u8; signature::MAX_LEN],
    /// Length of the signature 1.
    len1: u8,
    /// Length of the signature 2.
    len2: u8,
    /// Block size.
    block_size: u32,
}

impl Fingerprint {
    /// The maximum length of the string representation.
    pub const MAX_LEN_IN_STR: usize = 10 + 1 + signature::MAX_LEN + 1 + signature::MAX_LEN;

    /// Creates the fingerprint of empty content (`"3::"`).
    pub const fn new() -> Self {
        Fingerprint {
            sig1: [0; signature::MAX_LEN],
            sig2: [0; signature::MAX_LEN],
            len1: 0,
            len2: 0,
            block_size: block_size::MIN,
        }
    }

    /// Creates a fingerprint from symbol values.
    ///
    /// Both signatures must be valid symbol sequences within the cap
    /// and `log_block_size` must be valid.
    pub(crate) fn from_raw(log_block_size: u8, sig1: &[u8], sig2: &[u8]) -> Self {
        debug_assert!(block_size::is_log_valid(log_block_size));
        debug_assert!(sig1.len() <= signature::MAX_LEN && sig2.len() <= signature::MAX_LEN);
        debug_assert!(sig1.iter().chain(sig2).all(|&x| (x as usize) < signature::ALPHABET_SIZE));
        let mut fp = Self::new();
        fp.block_size = block_size::from_log_internal(log_block_size);
        fp.sig1[..sig1.len()].copy_from_slice(sig1);
        fp.sig2[..sig2.len()].copy_from_slice(sig2);
        fp.len1 = sig1.len() as u8;
        fp.len2 = sig2.len() as u8;
        fp
    }

    /// Creates a fingerprint from its three fields.
    ///
    /// Each signature is given in its text form.  The same validation as
    /// the text parser applies (offsets in errors are relative to the field)
    /// and a zero block size is rejected.
    pub fn from_parts(block_size: u32, sig1: &str, sig2: &str) -> Result<Self, ParseError> {
        if block_size == 0 {
            return Err(ParseError::new(
                ParseErrorKind::BlockSizeIsInvalid,
                ParseErrorOrigin::BlockSize,
                0,
            ));
        }
        let mut fp = Self::new();
        fp.block_size = block_size;
        for (text, buf, len, origin) in [
            (sig1, &mut fp.sig1, &mut fp.len1, ParseErrorOrigin::Signature1),
            (sig2, &mut fp.sig2, &mut fp.len2, ParseErrorOrigin::Signature2),
        ] {
            let mut i = 0;
            if parse_signature(buf, len, text.as_bytes(), &mut i, origin)? != SignatureEnd::EndOfString {
                return Err(ParseError::new(ParseErrorKind::UnexpectedCharacter, origin, i - 1));
            }
        }
        Ok(fp)
    }

    /// Parses a fingerprint from bytes of its string representation.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ParseError> {
        let mut fp = Self::new();
        let mut i = 0;
        fp.block_size = parse_block_size(bytes, &mut i)?;
        match parse_signature(&mut fp.sig1, &mut fp.len1, bytes, &mut i, ParseErrorOrigin::Signature1)? {
            SignatureEnd::Colon => {}
            SignatureEnd::EndOfString => {
                return Err(ParseError::new(
                    ParseErrorKind::UnexpectedEndOfString,
                    ParseErrorOrigin::Signature1,
                    bytes.len(),
                ));
            }
        }
        match parse_signature(&mut fp.sig2, &mut fp.len2, bytes, &mut i, ParseErrorOrigin::Signature2)? {
            SignatureEnd::EndOfString => Ok(fp),
            SignatureEnd::Colon => Err(ParseError::new(
                ParseErrorKind::UnexpectedCharacter,
                ParseErrorOrigin::Signature2,
                i - 1,
            )),
        }
    }

    /// Returns the block size.
    #[inline]
    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    /// Returns the block size in the base-2 logarithm form.
    ///
    /// Returns [`None`] if the block size is not `3 * 2^n`
    /// (only possible for parsed fingerprints).
    #[inline]
    pub fn log_block_size(&self) -> Option<u8> {
        block_size::log_from_valid(self.block_size)
    }

    /// Returns signature 1 as symbol values (`0..64`).
    #[inline]
    pub fn signature_1(&self) -> &[u8] {
        &self.sig1[..self.len1 as usize]
    }

    /// Returns signature 2 as symbol values (`0..64`).
    #[inline]
    pub fn signature_2(&self) -> &[u8] {
        &self.sig2[..self.len2 as usize]
    }

    /// Returns the relation between the block sizes of `self` and `other`.
    #[inline]
    pub fn block_size_relation(&self, other: &Self) -> BlockSizeRelation {
        block_size::compare_sizes(self.block_size, other.block_size)
    }

    /// Returns the length of the string representation.
    pub fn len_in_str(&self) -> usize {
        let mut digits = 1;
        let mut bs = self.block_size();
        while bs >= 10 {
            bs /= 10;
            digits += 1;
        }
        digits + 1 + self.len1 as usize + 1 + self.len2 as usize
    }
}

impl Default for Fingerprint {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes symbol values as signature text.
struct SignatureText<'a>(&'a [u8]);

impl core::fmt::Display for SignatureText<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.0.iter().try_for_each(|&symbol| f.write_char(base64_char(symbol) as char))
    }
}

impl core::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.block_size(),
            SignatureText(self.signature_1()),
            SignatureText(self.signature_2())
        )
    }
}

impl core::fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Fingerprint")
            .field("block_size", &self.block_size())
            .field("sig1", &format_args!("{}", SignatureText(self.signature_1())))
            .field("sig2", &format_args!("{}", SignatureText(self.signature_2())))
            .finish()
    }
}

impl core::str::FromStr for Fingerprint {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(s.as_bytes())
    }
}

mod tests;
