// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The driftprint developers

//! Command execution.

use std::io::Write;

use driftprint::{Fingerprint, Generator, Precision, Verdict};
use rayon::prelude::*;

use crate::cli::Command;
use crate::error::{Result, SiteCheckError};
use crate::fetch::{FetchError, Fetched, Fetcher};
use crate::output::Painter;

/// How a run ended (errors aside).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every target was reached.
    Success,
    /// At least one target could not be fetched.
    FetchFailed,
}

/// The observation of one target.
enum Observation {
    /// Content was fetched and fingerprinted.
    Hashed { status: u16, fingerprint: Fingerprint },
    /// The target answered with a failure status.
    Skipped { status: u16 },
    /// The target could not be fetched.
    Failed(FetchError),
}

/// Fetches and fingerprints a target.
fn observe(fetcher: &dyn Fetcher, target: &str) -> Result<Observation> {
    let fetched = match fetcher.fetch(target) {
        Ok(fetched) => fetched,
        Err(err) => {
            tracing::warn!(target_name = target, error = %err, "fetch failed");
            return Ok(Observation::Failed(err));
        }
    };
    if !fetched.is_success() {
        tracing::info!(target_name = target, status = fetched.status, "skipping target");
        return Ok(Observation::Skipped {
            status: fetched.status,
        });
    }
    let Fetched { status, body } = fetched;
    let mut generator = Generator::new();
    generator.set_fixed_input_size_in_usize(body.len());
    generator.update(&body);
    let (fingerprint, precision) = generator.finalize_with_precision()?;
    if precision == Precision::Truncated {
        tracing::warn!(target_name = target, "fingerprint truncated, comparisons lose precision");
    }
    tracing::debug!(target_name = target, bytes = body.len(), %fingerprint, "fingerprinted");
    Ok(Observation::Hashed { status, fingerprint })
}

/// Writes the line for an observation that produced no fingerprint.
///
/// Returns `false` if the target could not be fetched.
fn report_failure<W: Write>(
    out: &mut W,
    painter: &Painter,
    target: &str,
    observation: &Observation,
) -> Result<bool> {
    let reached = match observation {
        Observation::Hashed { .. } => true,
        Observation::Skipped { status } => {
            writeln!(out, "{}", painter.skipped(*status, target))?;
            true
        }
        Observation::Failed(FetchError::Unreachable { .. }) => {
            writeln!(out, "{}", painter.unreachable(target))?;
            false
        }
        Observation::Failed(FetchError::TooLarge { limit, .. }) => {
            writeln!(out, "{}", painter.too_large(target, *limit))?;
            false
        }
    };
    Ok(reached)
}

/// Parses a fingerprint given on the command line.
fn parse_fingerprint(text: &str) -> Result<Fingerprint> {
    text.parse().map_err(|source| SiteCheckError::InvalidFingerprint {
        text: text.to_string(),
        source,
    })
}

/// Runs a command, writing the report to `out`.
pub fn run<W: Write>(
    command: &Command,
    fetcher: &dyn Fetcher,
    painter: &Painter,
    out: &mut W,
) -> Result<Outcome> {
    match command {
        Command::Hash { targets } => {
            // Order of results follows the order of targets.
            let observations = targets
                .par_iter()
                .map(|target| observe(fetcher, target))
                .collect::<Vec<_>>();
            let mut outcome = Outcome::Success;
            for (target, observation) in targets.iter().zip(observations) {
                let observation = observation?;
                if let Observation::Hashed { status, fingerprint } = &observation {
                    writeln!(out, "{}", painter.hashed(*status, target, fingerprint))?;
                } else if !report_failure(out, painter, target, &observation)? {
                    outcome = Outcome::FetchFailed;
                }
            }
            Ok(outcome)
        }
        Command::Check { target, previous } => {
            let previous = parse_fingerprint(previous)?;
            let observation = observe(fetcher, target)?;
            if let Observation::Hashed { status, fingerprint } = &observation {
                let score = fingerprint.compare(&previous);
                tracing::debug!(target_name = target.as_str(), score, "compared");
                let verdict = Verdict::from_score(score);
                writeln!(out, "{}", painter.checked(*status, target, verdict))?;
                return Ok(Outcome::Success);
            }
            if report_failure(out, painter, target, &observation)? {
                Ok(Outcome::Success)
            } else {
                Ok(Outcome::FetchFailed)
            }
        }
        Command::Compare { lhs, rhs } => {
            let lhs = parse_fingerprint(lhs)?;
            let rhs = parse_fingerprint(rhs)?;
            let score = lhs.compare(&rhs);
            writeln!(out, "{}", painter.scored(score, Verdict::from_score(score)))?;
            Ok(Outcome::Success)
        }
    }
}
