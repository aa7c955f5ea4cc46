// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The driftprint developers

//! sitecheck command line interface.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use sitecheck::cli::Cli;
use sitecheck::config::Config;
use sitecheck::fetch::FileFetcher;
use sitecheck::output::Painter;
use sitecheck::{logging, run, Outcome};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => Config::from_file(path)?,
        None => Config::default(),
    };
    cli.apply_to(&mut config);

    logging::init_logging(&config, cli.verbose)?;
    tracing::debug!(?config, "configuration loaded");

    let fetcher = FileFetcher::new(config.fetch.clone());
    let painter = Painter::new(config.color);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = run(&cli.command, &fetcher, &painter, &mut out)?;
    out.flush().context("cannot flush standard output")?;

    Ok(match outcome {
        Outcome::Success => ExitCode::SUCCESS,
        Outcome::FetchFailed => ExitCode::FAILURE,
    })
}
