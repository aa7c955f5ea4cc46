// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The driftprint developers

//! Logging and tracing initialization.
//!
//! Diagnostics go to stderr so that the report on stdout stays parseable.
//! Records emitted through the `log` facade (by `driftprint`) are forwarded
//! to the same subscriber.

use std::fs::File;
use std::path::Path;

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::Config;
use crate::error::{Result, SiteCheckError};

/// Builds the filter: `RUST_LOG` wins, then `-v`, then the configured level.
pub fn build_filter(config: &Config, verbose: bool) -> Result<EnvFilter> {
    let level = if verbose {
        Level::DEBUG
    } else {
        config.log_level.to_tracing_level()
    };
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("sitecheck={level},driftprint={level}")))
        .map_err(|e| SiteCheckError::Logging(format!("failed to create log filter: {e}")))
}

/// Initialize structured logging based on configuration.
pub fn init_logging(config: &Config, verbose: bool) -> Result<()> {
    let env_filter = build_filter(config, verbose)?;

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact();

    let file_layer = match config.log_file {
        Some(ref log_path) => Some(json_file_layer(log_path)?),
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| SiteCheckError::Logging(e.to_string()))
}

/// JSON lines written to a log file.
fn json_file_layer<S>(log_path: &Path) -> Result<Box<dyn Layer<S> + Send + Sync>>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    let file = File::create(log_path)
        .map_err(|e| SiteCheckError::Logging(format!("failed to create log file: {e}")))?;
    Ok(fmt::layer()
        .with_writer(file)
        .with_target(true)
        .with_thread_names(true)
        .with_ansi(false) // No ANSI colors in file
        .json()
        .boxed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;

    #[test]
    fn test_filter_from_config() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = Config {
            log_level: LogLevel::Error,
            ..Default::default()
        };
        let filter = build_filter(&config, false).unwrap().to_string().to_lowercase();
        assert!(filter.contains("sitecheck=error"), "{filter}");
        assert!(filter.contains("driftprint=error"), "{filter}");
        let filter = build_filter(&config, true).unwrap().to_string().to_lowercase();
        assert!(filter.contains("sitecheck=debug"), "{filter}");
        assert!(filter.contains("driftprint=debug"), "{filter}");
    }

    #[test]
    fn test_file_layer_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitecheck.json");
        let layer = json_file_layer::<tracing_subscriber::Registry>(&path);
        assert!(layer.is_ok());
        assert!(path.exists());

        let bad = dir.path().join("missing").join("sitecheck.json");
        assert!(matches!(
            json_file_layer::<tracing_subscriber::Registry>(&bad),
            Err(SiteCheckError::Logging(_))
        ));
    }
}
