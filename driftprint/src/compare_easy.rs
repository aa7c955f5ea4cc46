// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The driftprint developers

//! Comparison of two fingerprints given in their text form.

#![cfg(feature = "easy-functions")]

use crate::fingerprint::parser::{ParseError, ParseErrorKind, ParseErrorOrigin};
use crate::fingerprint::Fingerprint;


/// The operand (side) which caused a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorSide {
    /// The left hand side.
    Left,
    /// The right hand side.
    Right,
}

/// The error type representing a parse error for one of the operands
/// given to the [`compare()`] function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseErrorEither(ParseErrorSide, ParseError);

impl ParseErrorEither {
    /// Returns which operand caused the parse error.
    pub fn side(&self) -> ParseErrorSide {
        self.0
    }

    /// Returns the parse error of the operand.
    pub fn error(&self) -> &ParseError {
        &self.1
    }

    /// Returns the cause of the error.
    pub fn kind(&self) -> ParseErrorKind {
        self.1.kind()
    }

    /// Returns the part which (possibly) caused the error.
    pub fn origin(&self) -> ParseErrorOrigin {
        self.1.origin()
    }

    /// Returns the offset which (possibly) caused the error.
    pub fn offset(&self) -> usize {
        self.1.offset()
    }
}

impl core::fmt::Display for ParseErrorEither {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "error occurred while parsing fingerprint {} ({}, at byte offset {}): {}",
            match self.side() {
                ParseErrorSide::Left => 1,
                ParseErrorSide::Right => 2,
            },
            self.origin(),
            self.offset(),
            self.kind()
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseErrorEither {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.1)
    }
}
#[cfg(all(not(feature = "std"), driftprint_error_in_core = "stable"))]
impl core::error::Error for ParseErrorEither {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.1)
    }
}

/// Compares two fingerprints given in their text form.
///
/// If either operand cannot be parsed, [`Err`] containing
/// [the parse error and its side](ParseErrorEither) is returned.
/// Otherwise, [`Ok`] containing the similarity score (`0..=100`) is returned.
///
/// A score of `0` means "no detected similarity" and is distinct from
/// a parse failure.
///
/// # Example
///
/// ```
/// assert_eq!(
///     driftprint::compare(
///         "192:oFFFFFFFFFFFFF6:oFFFFFF6",
///         "192:oFFFFFFkFFFFFF6:oFFFkFF6"
///     ).unwrap(),
///     93
/// );
/// assert!(driftprint::compare("3::", "3:").is_err());
/// ```
pub fn compare(lhs: &str, rhs: &str) -> Result<u32, ParseErrorEither> {
    let lhs: Fingerprint = lhs
        .parse()
        .map_err(|err| ParseErrorEither(ParseErrorSide::Left, err))?;
    let rhs: Fingerprint = rhs
        .parse()
        .map_err(|err| ParseErrorEither(ParseErrorSide::Right, err))?;
    Ok(lhs.compare(&rhs))
}
