// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The driftprint developers

//! Command line definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{ColorMode, Config};

#[derive(Parser, Debug)]
#[command(name = "sitecheck")]
#[command(version, about = "Detect how much a watched resource drifted", long_about = None)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// When to use colored output (overrides the configuration file)
    #[arg(long, value_enum, value_name = "WHEN", global = true)]
    pub color: Option<ColorMode>,

    /// Verbose diagnostics (debug log level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the fingerprint of each target
    Hash {
        /// Files to fingerprint (`-` for standard input)
        #[arg(required = true, value_name = "TARGET")]
        targets: Vec<String>,
    },

    /// Compare a target against a previously recorded fingerprint
    Check {
        /// File to check (`-` for standard input)
        #[arg(value_name = "TARGET")]
        target: String,

        /// Fingerprint printed by an earlier `hash`
        #[arg(value_name = "PREVIOUS")]
        previous: String,
    },

    /// Compare two fingerprints
    Compare {
        /// First fingerprint (for instance the older observation)
        #[arg(value_name = "LHS")]
        lhs: String,

        /// Second fingerprint
        #[arg(value_name = "RHS")]
        rhs: String,
    },
}

impl Cli {
    /// Applies command line overrides to a loaded configuration.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(color) = self.color {
            config.color = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_every_argument_has_help() {
        let cli = Cli::command();
        let is_builtin = |arg: &clap::Arg| matches!(arg.get_id().as_str(), "help" | "version");
        for sub in cli.get_subcommands() {
            for arg in sub.get_arguments().filter(|arg| !is_builtin(arg)) {
                assert!(
                    arg.get_help().is_some(),
                    "{} {} has no help",
                    sub.get_name(),
                    arg.get_id()
                );
            }
        }
        for arg in cli.get_arguments().filter(|arg| !is_builtin(arg)) {
            assert!(arg.get_help().is_some(), "{} has no help", arg.get_id());
        }
    }

    #[test]
    fn test_parse_hash() {
        let cli = Cli::try_parse_from(["sitecheck", "hash", "a.html", "b.html"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Hash {
                targets: vec!["a.html".into(), "b.html".into()]
            }
        );
        assert!(Cli::try_parse_from(["sitecheck", "hash"]).is_err());
    }

    #[test]
    fn test_parse_check_with_globals() {
        let cli = Cli::try_parse_from([
            "sitecheck",
            "check",
            "-v",
            "--color",
            "never",
            "a.html",
            "3:OOVUd:Ov",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.color, Some(ColorMode::Never));
        assert_eq!(
            cli.command,
            Command::Check {
                target: "a.html".into(),
                previous: "3:OOVUd:Ov".into()
            }
        );
    }

    #[test]
    fn test_color_override() {
        let mut config = Config::default();
        let cli = Cli::try_parse_from(["sitecheck", "compare", "3::", "3::"]).unwrap();
        cli.apply_to(&mut config);
        assert_eq!(config.color, ColorMode::Auto);
        let cli = Cli::try_parse_from(["sitecheck", "--color", "always", "compare", "3::", "3::"]).unwrap();
        cli.apply_to(&mut config);
        assert_eq!(config.color, ColorMode::Always);
    }
}
