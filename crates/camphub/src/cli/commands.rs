//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Serve command arguments.
#[derive(Debug, Args)]
pub struct ServeCommand {
    /// Address to bind (overrides `server.host`)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides `server.port`)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Database file (overrides `storage.database_path`)
    #[arg(short, long, value_name = "FILE", conflicts_with = "in_memory")]
    pub database: Option<PathBuf>,

    /// Use a throwaway in-memory database
    #[arg(long)]
    pub in_memory: bool,
}

/// Seed command arguments.
#[derive(Debug, Args)]
pub struct SeedCommand {
    /// Database file (overrides `storage.database_path`)
    #[arg(short, long, value_name = "FILE")]
    pub database: Option<PathBuf>,

    /// Delete all existing records first
    #[arg(long)]
    pub reset: bool,
}

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_command_debug() {
        let cmd = ServeCommand {
            host: None,
            port: Some(8080),
            database: None,
            in_memory: true,
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("8080"));
        assert!(debug_str.contains("in_memory"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        assert!(format!("{cmd:?}").contains("Show"));
    }
}
