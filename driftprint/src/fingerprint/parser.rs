// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The driftprint developers

//! Parser for the canonical fingerprint text format.

use crate::base64::{base64_index, BASE64_INVALID};
use crate::fingerprint::block::signature;
use crate::macros::impl_error;

/// A cause of a [fingerprint](crate::Fingerprint) parse error.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Block size: is empty.
    BlockSizeIsEmpty,
    /// Block size: starts with the digit zero (`'0'`).
    BlockSizeStartsWithZero,
    /// Block size: is zero.
    BlockSizeIsInvalid,
    /// Block size: is too large to parse.
    BlockSizeIsTooLarge,
    /// Signature (either 1 or 2): longer than the signature cap.
    SignatureIsTooLong,
    /// Any: an unexpected character is encountered.
    UnexpectedCharacter,
    /// Any: an unexpected end-of-string is encountered.
    UnexpectedEndOfString,
}

impl core::fmt::Display for ParseErrorKind {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            ParseErrorKind::BlockSizeIsEmpty        => "block size field is empty",
            ParseErrorKind::BlockSizeStartsWithZero => "block size starts with '0'",
            ParseErrorKind::BlockSizeIsInvalid      => "block size is not valid",
            ParseErrorKind::BlockSizeIsTooLarge     => "block size is too large",
            ParseErrorKind::SignatureIsTooLong      => "signature is too long",
            ParseErrorKind::UnexpectedCharacter     => "an unexpected character is encountered",
            ParseErrorKind::UnexpectedEndOfString   => "end-of-string is not expected",
        })
    }
}

/// A part of the fingerprint which (possibly) caused a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorOrigin {
    /// Block size.
    BlockSize,
    /// Signature 1 (at the block size).
    Signature1,
    /// Signature 2 (at the double of the block size).
    Signature2,
}

impl core::fmt::Display for ParseErrorOrigin {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            ParseErrorOrigin::BlockSize  => "block size",
            ParseErrorOrigin::Signature1 => "signature 1",
            ParseErrorOrigin::Signature2 => "signature 2",
        })
    }
}

/// The error type for parse operations of [`Fingerprint`](crate::Fingerprint).
///
/// A parse error means the text could not be read as a fingerprint at all.
/// It is never used to express "no similarity" (that is a score of zero).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError {
    /// The cause of the error.
    kind: ParseErrorKind,
    /// The part which (possibly) caused the error.
    origin: ParseErrorOrigin,
    /// The byte offset which (possibly) caused the error.
    offset: usize,
}

impl ParseError {
    /// Creates a new parse error.
    pub(crate) const fn new(kind: ParseErrorKind, origin: ParseErrorOrigin, offset: usize) -> Self {
        ParseError { kind, origin, offset }
    }

    /// Returns the cause of the error.
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Returns the part which (possibly) caused the error.
    pub fn origin(&self) -> ParseErrorOrigin {
        self.origin
    }

    /// Returns the offset which (possibly) caused the error.
    ///
    /// Note that this offset may not be exact but may be usable as a hint.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "error occurred while parsing a fingerprint ({}, at byte offset {}): {}",
            self.origin, self.offset, self.kind
        )
    }
}

impl_error! { ParseError {} }

/// What terminated a signature field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SignatureEnd {
    /// A colon character (`:`) is encountered.
    Colon,
    /// The end of the string is encountered.
    EndOfString,
}

/// Parses the block size field (with its trailing `':'`).
///
/// On success, returns the block size and updates `i` to the first index
/// after the separator.  Any positive decimal value that fits in [`u32`]
/// is accepted; the generator only ever emits `3 * 2^n`.
pub(crate) fn parse_block_size(bytes: &[u8], i: &mut usize) -> Result<u32, ParseError> {
    let err = |kind, offset| ParseError::new(kind, ParseErrorOrigin::BlockSize, offset);
    let mut value = 0u32;
    let mut in_range = true;
    for (j, &ch) in bytes.iter().enumerate().skip(*i) {
        match ch {
            b'0'..=b'9' => {
                if j == *i && ch == b'0' {
                    return Err(err(ParseErrorKind::BlockSizeStartsWithZero, j));
                }
                if in_range {
                    match value
                        .checked_mul(10)
                        .and_then(|x| x.checked_add((ch - b'0') as u32))
                    {
                        Some(v) => value = v,
                        None => in_range = false,
                    }
                }
            }
            b':' => {
                if j == *i {
                    return Err(err(ParseErrorKind::BlockSizeIsEmpty, j));
                }
                if !in_range {
                    return Err(err(ParseErrorKind::BlockSizeIsTooLarge, *i));
                }
                *i = j + 1;
                return Ok(value);
            }
            _ => return Err(err(ParseErrorKind::UnexpectedCharacter, j)),
        }
    }
    Err(err(ParseErrorKind::UnexpectedEndOfString, bytes.len()))
}

/// Parses a signature field into symbol values.
///
/// Stops at `':'` or at the end of the string (the caller decides which one
/// is acceptable) and updates `i` to the index after the terminator.
/// The number of stored symbols is written to `len`.
pub(crate) fn parse_signature(
    sig: &mut [u8; signature::MAX_LEN],
    len: &mut u8,
    bytes: &[u8],
    i: &mut usize,
    origin: ParseErrorOrigin,
) -> Result<SignatureEnd, ParseError> {
    let mut n = 0usize;
    for (j, &ch) in bytes.iter().enumerate().skip(*i) {
        let symbol = base64_index(ch);
        if symbol == BASE64_INVALID {
            if ch == b':' {
                *len = n as u8;
                *i = j + 1;
                return Ok(SignatureEnd::Colon);
            }
            return Err(ParseError::new(ParseErrorKind::UnexpectedCharacter, origin, j));
        }
        if n >= signature::MAX_LEN {
            return Err(ParseError::new(ParseErrorKind::SignatureIsTooLong, origin, j));
        }
        sig[n] = symbol;
        n += 1;
    }
    *len = n as u8;
    *i = bytes.len();
    Ok(SignatureEnd::EndOfString)
}
