//! Command-line interface for camphub.
//!
//! This module provides the CLI structure for the `camphub` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ConfigCommand, SeedCommand, ServeCommand, StatusCommand};

/// camphub - Campers, activities and signups over REST
#[derive(Debug, Parser)]
#[command(name = "camphub")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP API
    Serve(ServeCommand),

    /// Load demo activities, campers and signups
    Seed(SeedCommand),

    /// Show database location and record counts
    Status(StatusCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::Verbosity;
    use clap::CommandFactory;

    fn cli_with(verbose: u8, quiet: bool) -> Cli {
        Cli {
            config: None,
            verbose,
            quiet,
            command: Command::Status(StatusCommand { json: false }),
        }
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "camphub");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_flags() {
        assert_eq!(cli_with(0, true).verbosity(), Verbosity::Quiet);
        assert_eq!(cli_with(0, false).verbosity(), Verbosity::Normal);
        assert_eq!(cli_with(1, false).verbosity(), Verbosity::Verbose);
        assert_eq!(cli_with(2, false).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_parse_serve_overrides() {
        let cli =
            Cli::try_parse_from(["camphub", "serve", "--host", "0.0.0.0", "-p", "8080"]).unwrap();
        match cli.command {
            Command::Serve(cmd) => {
                assert_eq!(cmd.host.as_deref(), Some("0.0.0.0"));
                assert_eq!(cmd.port, Some(8080));
                assert!(!cmd.in_memory);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_serve_database_conflicts_with_in_memory() {
        let result = Cli::try_parse_from(["camphub", "serve", "-d", "x.db", "--in-memory"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_seed_reset() {
        let cli = Cli::try_parse_from(["camphub", "seed", "--reset"]).unwrap();
        assert!(matches!(cli.command, Command::Seed(SeedCommand { reset: true, .. })));
    }

    #[test]
    fn test_parse_config_validate() {
        let cli = Cli::try_parse_from(["camphub", "config", "validate", "-f", "c.toml"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Validate { file: Some(_) })
        ));
    }

    #[test]
    fn test_parse_with_config() {
        let cli = Cli::try_parse_from(["camphub", "-c", "/custom/config.toml", "status"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }
}
