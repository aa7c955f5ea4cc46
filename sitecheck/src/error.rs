// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The driftprint developers

//! Error types for sitecheck.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for sitecheck operations.
pub type Result<T> = std::result::Result<T, SiteCheckError>;

/// Errors that abort a sitecheck run.
#[derive(Error, Debug)]
pub enum SiteCheckError {
    /// The configuration file could not be read.
    #[error("cannot read configuration {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid TOML for [`Config`](crate::config::Config).
    #[error("invalid configuration {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The log filter or the log file could not be set up.
    #[error("cannot initialize logging: {0}")]
    Logging(String),

    /// A fingerprint given on the command line is malformed.
    #[error("malformed fingerprint {text:?}: {source}")]
    InvalidFingerprint {
        text: String,
        #[source]
        source: driftprint::ParseError,
    },

    /// The fingerprint generator failed.
    #[error("fingerprint generation failed: {0}")]
    Generator(#[from] driftprint::GeneratorError),

    /// Writing the report failed.
    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),
}
