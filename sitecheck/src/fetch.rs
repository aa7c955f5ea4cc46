// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The driftprint developers

//! Fetching the content of a target.

use std::fs::File;
use std::io::{self, Read};

use thiserror::Error;

use crate::config::FetchConfig;

/// Status reported for a successful fetch.
pub const STATUS_OK: u16 = 200;

/// Status reported when the target does not exist.
pub const STATUS_NOT_FOUND: u16 = 404;

/// The result of a fetch that reached the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    /// HTTP-like status code.
    pub status: u16,
    /// Content (empty unless the fetch succeeded).
    pub body: Vec<u8>,
}

impl Fetched {
    /// Whether the status indicates success (`2xx`).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failures that prevent any status from being reported.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The target could not be reached at all.
    #[error("unreachable target {target}: {source}")]
    Unreachable {
        target: String,
        #[source]
        source: io::Error,
    },

    /// The body exceeds the configured limit.
    #[error("body of {target} exceeds {limit} bytes")]
    TooLarge { target: String, limit: u64 },
}

/// A source of target content.
///
/// Implementations are shared across worker threads.
pub trait Fetcher: Send + Sync {
    /// Fetches a target.
    fn fetch(&self, target: &str) -> Result<Fetched, FetchError>;
}

/// Reads local files (`-` reads the standard input).
#[derive(Debug, Clone)]
pub struct FileFetcher {
    config: FetchConfig,
}

impl FileFetcher {
    /// Creates a fetcher with the given limits.
    pub fn new(config: FetchConfig) -> Self {
        FileFetcher { config }
    }

    /// Reads at most `max_bytes` from `reader`, failing if there is more.
    fn read_limited<R: Read>(&self, target: &str, reader: R) -> Result<Vec<u8>, FetchError> {
        let limit = self.config.max_bytes;
        let mut body = Vec::new();
        reader
            .take(limit.saturating_add(1))
            .read_to_end(&mut body)
            .map_err(|source| FetchError::Unreachable {
                target: target.to_string(),
                source,
            })?;
        if body.len() as u64 > limit {
            return Err(FetchError::TooLarge {
                target: target.to_string(),
                limit,
            });
        }
        Ok(body)
    }
}

impl Fetcher for FileFetcher {
    fn fetch(&self, target: &str) -> Result<Fetched, FetchError> {
        if target == "-" {
            let body = self.read_limited(target, io::stdin().lock())?;
            return Ok(Fetched {
                status: STATUS_OK,
                body,
            });
        }
        match File::open(target) {
            Ok(file) => {
                let body = self.read_limited(target, file)?;
                tracing::debug!(target_path = target, bytes = body.len(), "fetched");
                Ok(Fetched {
                    status: STATUS_OK,
                    body,
                })
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Fetched {
                status: STATUS_NOT_FOUND,
                body: Vec::new(),
            }),
            Err(source) => Err(FetchError::Unreachable {
                target: target.to_string(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn fetcher(max_bytes: u64) -> FileFetcher {
        FileFetcher::new(FetchConfig { max_bytes })
    }

    #[test]
    fn test_fetch_existing_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Hello, World!\n").unwrap();
        let fetched = fetcher(1024).fetch(file.path().to_str().unwrap()).unwrap();
        assert_eq!(fetched.status, STATUS_OK);
        assert!(fetched.is_success());
        assert_eq!(fetched.body, b"Hello, World!\n");
    }

    #[test]
    fn test_fetch_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.html");
        let fetched = fetcher(1024).fetch(path.to_str().unwrap()).unwrap();
        assert_eq!(fetched.status, STATUS_NOT_FOUND);
        assert!(!fetched.is_success());
        assert!(fetched.body.is_empty());
    }

    #[test]
    fn test_fetch_directory_is_unreachable() {
        let dir = tempfile::tempdir().unwrap();
        let err = fetcher(1024).fetch(dir.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, FetchError::Unreachable { .. }));
    }

    #[test]
    fn test_fetch_limit() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0u8; 100]).unwrap();
        let target = file.path().to_str().unwrap();
        assert_eq!(fetcher(100).fetch(target).unwrap().body.len(), 100);
        let err = fetcher(99).fetch(target).unwrap_err();
        assert!(matches!(err, FetchError::TooLarge { limit: 99, .. }));
        assert!(err.to_string().ends_with("exceeds 99 bytes"));
    }
}
