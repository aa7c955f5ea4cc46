// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The driftprint developers

#![cfg(all(feature = "std", feature = "easy-functions"))]

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::fingerprint::Fingerprint;
use crate::generate::{Generator, GeneratorError};


/// The error type describing either a generator error or an I/O error.
#[derive(Debug)]
pub enum GeneratorOrIOError {
    /// An error caused by the fingerprint generator.
    GeneratorError(GeneratorError),
    /// An error caused by an internal I/O operation.
    IOError(std::io::Error),
}

impl core::fmt::Display for GeneratorOrIOError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GeneratorOrIOError::GeneratorError(err) => err.fmt(f),
            GeneratorOrIOError::IOError(err) => err.fmt(f),
        }
    }
}

impl From<GeneratorError> for GeneratorOrIOError {
    fn from(value: GeneratorError) -> Self {
        GeneratorOrIOError::GeneratorError(value)
    }
}

impl From<std::io::Error> for GeneratorOrIOError {
    fn from(value: std::io::Error) -> Self {
        GeneratorOrIOError::IOError(value)
    }
}

impl std::error::Error for GeneratorOrIOError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeneratorOrIOError::GeneratorError(err) => Some(err),
            GeneratorOrIOError::IOError(err) => Some(err),
        }
    }
}

/// Temporary buffer size for the reader based functions.
const BUFFER_SIZE: usize = 32768;

/// Feeds the whole reader into a prepared generator and finalizes it.
fn hash_stream_common<R: Read>(
    generator: &mut Generator,
    reader: &mut R,
) -> Result<Fingerprint, GeneratorOrIOError> {
    let mut buffer = [0u8; BUFFER_SIZE];
    loop {
        let len = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(len) => len,
            Err(err) if err.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        };
        generator.update(&buffer[..len]);
    }
    Ok(generator.finalize()?)
}

/// Generates a fingerprint from a given reader stream.
///
/// # Example
///
/// ```
/// let mut stream: &[u8] = b"Hello, World!\n";
/// let fp = driftprint::hash_stream(&mut stream).unwrap();
/// assert_eq!(fp.to_string(), "3:OOVUd:Ov");
/// ```
pub fn hash_stream<R: Read>(reader: &mut R) -> Result<Fingerprint, GeneratorOrIOError> {
    let mut generator = Generator::new();
    hash_stream_common(&mut generator, reader)
}

/// Generates a fingerprint from a given file.
///
/// The file size is used as the fixed input size of the generator.  If the
/// file changes its size while it is read, this function fails with
/// [`GeneratorError::FixedSizeMismatch`] instead of returning a wrong result.
pub fn hash_file<P: AsRef<Path>>(path: P) -> Result<Fingerprint, GeneratorOrIOError> {
    let mut file = File::open(path)?;
    let mut generator = Generator::new();
    generator.set_fixed_input_size(file.metadata()?.len());
    hash_stream_common(&mut generator, &mut file)
}
