// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The driftprint developers

//! Detects how much a watched resource drifted since its last observation.
//!
//! `sitecheck hash` records a [`driftprint`] fingerprint of a target and
//! `sitecheck check` compares a fresh observation against a recorded one,
//! printing a [`Verdict`](driftprint::Verdict).

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod output;

pub use commands::{run, Outcome};
pub use error::{Result, SiteCheckError};
