//! `camphub` - CLI for the camp REST backend
//!
//! This binary runs the HTTP API and provides a few maintenance commands for
//! the database behind it.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use camphub::cli::{Cli, Command, ConfigCommand, SeedCommand, ServeCommand};
use camphub::{init_logging, seed, Config, Storage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    match cli.command {
        Command::Serve(serve_cmd) => handle_serve(config, serve_cmd).await,
        Command::Seed(seed_cmd) => handle_seed(&config, &seed_cmd),
        Command::Status(status_cmd) => handle_status(&config, status_cmd.json),
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

async fn handle_serve(mut config: Config, cmd: ServeCommand) -> anyhow::Result<()> {
    if let Some(host) = cmd.host {
        config.server.host = host;
    }
    if let Some(port) = cmd.port {
        config.server.port = port;
    }
    if let Some(database) = cmd.database {
        config.storage.database_path = Some(database);
    }
    config.validate()?;

    let storage = if cmd.in_memory {
        info!("Using in-memory database");
        Storage::open_in_memory()?
    } else {
        Storage::open(config.database_path())?
    };

    camphub::http::serve(config.bind_addr()?, storage).await?;
    Ok(())
}

fn handle_seed(config: &Config, cmd: &SeedCommand) -> anyhow::Result<()> {
    let path = database_path(config, cmd.database.clone());
    let mut storage =
        Storage::open(&path).with_context(|| format!("opening {}", path.display()))?;

    let summary = seed::seed(&mut storage, cmd.reset)?;
    println!(
        "Seeded {} activities, {} campers and {} signups into {}",
        summary.activities,
        summary.campers,
        summary.signups,
        path.display()
    );
    Ok(())
}

fn handle_status(config: &Config, json: bool) -> anyhow::Result<()> {
    let path = config.database_path();
    let stats = if path.exists() {
        Some(Storage::open(&path)?.stats()?)
    } else {
        None
    };

    if json {
        let status = serde_json::json!({
            "database_path": path,
            "database_exists": stats.is_some(),
            "campers": stats.as_ref().map(|s| s.campers),
            "activities": stats.as_ref().map(|s| s.activities),
            "signups": stats.as_ref().map(|s| s.signups),
            "db_size_bytes": stats.as_ref().map(|s| s.db_size_bytes),
            "listen": format!("{}:{}", config.server.host, config.server.port),
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("camphub status");
    println!("--------------");
    println!("Database:      {}", path.display());
    println!(
        "Listen:        {}:{}",
        config.server.host, config.server.port
    );
    match stats {
        Some(stats) => {
            println!("Campers:       {}", stats.campers);
            println!("Activities:    {}", stats.activities);
            println!("Signups:       {}", stats.signups);
            println!("Size (bytes):  {}", stats.db_size_bytes);
        }
        None => println!("(database not created yet; run `camphub seed` or `camphub serve`)"),
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Server]");
                println!("  Host:               {}", config.server.host);
                println!("  Port:               {}", config.server.port);
                println!();
                println!("[Storage]");
                println!("  Database path:      {}", config.database_path().display());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            Config::load_from(Some(path)).context("invalid configuration")?;
            println!("Configuration is valid.");
        }
    }
    Ok(())
}

fn database_path(config: &Config, database: Option<PathBuf>) -> PathBuf {
    database.unwrap_or_else(|| config.database_path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_config_validate_rejects_bad_file() {
        Jail::expect_with(|jail| {
            jail.create_file("bad.toml", "[server]\nhost = \"not-an-ip\"\n")?;

            let result = handle_config(
                &Config::default(),
                ConfigCommand::Validate {
                    file: Some(PathBuf::from("bad.toml")),
                },
            );
            assert!(result.is_err());
            Ok(())
        });
    }

    #[test]
    fn test_config_validate_accepts_good_file() {
        Jail::expect_with(|jail| {
            jail.create_file("good.toml", "[server]\nport = 8080\n")?;

            let result = handle_config(
                &Config::default(),
                ConfigCommand::Validate {
                    file: Some(PathBuf::from("good.toml")),
                },
            );
            assert!(result.is_ok());
            Ok(())
        });
    }
}
