//! Configuration management for camphub.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "camphub";

/// Default database file name.
const DATABASE_FILE_NAME: &str = "camp.db";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "CAMPHUB_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `CAMPHUB_`, nested with `__`)
/// 2. TOML config file at `~/.config/camphub/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server configuration.
    pub server: ServerConfig,
    /// Storage configuration.
    pub storage: StorageConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind, as an IP literal.
    pub host: String,
    /// Port to bind. 0 picks a free port.
    pub port: u16,
}

/// Storage-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the database file.
    /// Defaults to `~/.local/share/camphub/camp.db`
    pub database_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5555,
        }
    }
}

impl Config {
    /// Load configuration from all sources, reading `config_path` or the
    /// default config file.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);
        Self::from_figment(Self::figment(&config_file))
    }

    /// Build the layered figment for a config file.
    #[must_use]
    pub fn figment(config_file: &std::path::Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Extract and validate a configuration from a figment.
    ///
    /// # Errors
    ///
    /// Returns an error if extraction or validation fails.
    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(Error::ConfigValidation {
                message: "server.host must not be empty".to_string(),
            });
        }

        if self.server.host.parse::<IpAddr>().is_err() {
            return Err(Error::ConfigValidation {
                message: format!(
                    "server.host must be an IP address, got '{}'",
                    self.server.host
                ),
            });
        }

        Ok(())
    }

    /// Get the database path, resolving defaults if not set.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.storage
            .database_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(DATABASE_FILE_NAME))
    }

    /// Get the socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns an error if the host is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .server
            .host
            .parse()
            .map_err(|_| Error::ConfigValidation {
                message: format!("invalid server.host '{}'", self.server.host),
            })?;
        Ok(SocketAddr::new(ip, self.server.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5555);
        assert!(config.storage.database_path.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_host() {
        let mut config = Config::default();
        config.server.host = "  ".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("server.host"));
    }

    #[test]
    fn test_validate_hostname_rejected() {
        let mut config = Config::default();
        config.server.host = "localhost".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("IP address"));
    }

    #[test]
    fn test_validate_ipv6_host() {
        let mut config = Config::default();
        config.server.host = "::1".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bind_addr() {
        let config = Config::default();
        assert_eq!(
            config.bind_addr().unwrap(),
            "127.0.0.1:5555".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_database_path_default() {
        let config = Config::default();
        assert!(config.database_path().to_string_lossy().contains("camp.db"));
    }

    #[test]
    fn test_database_path_custom() {
        let mut config = Config::default();
        config.storage.database_path = Some(PathBuf::from("/custom/path/db.sqlite"));

        assert_eq!(
            config.database_path(),
            PathBuf::from("/custom/path/db.sqlite")
        );
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("camphub"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());
    }

    #[test]
    fn test_toml_and_env_layering() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "camphub.toml",
                r#"
                [server]
                host = "0.0.0.0"
                port = 8080

                [storage]
                database_path = "/srv/camp.db"
                "#,
            )?;
            jail.set_env("CAMPHUB_SERVER__PORT", "9090");

            let config = Config::from_figment(Config::figment(std::path::Path::new(
                "camphub.toml",
            )))
            .map_err(|e| e.to_string())?;

            assert_eq!(config.server.host, "0.0.0.0");
            assert_eq!(config.server.port, 9090);
            assert_eq!(config.database_path(), PathBuf::from("/srv/camp.db"));
            Ok(())
        });
    }

    #[test]
    fn test_invalid_toml_host_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file("camphub.toml", "[server]\nhost = \"not-an-ip\"\n")?;

            let result = Config::from_figment(Config::figment(std::path::Path::new(
                "camphub.toml",
            )));
            assert!(matches!(result, Err(Error::ConfigValidation { .. })));
            Ok(())
        });
    }

    #[test]
    fn test_server_config_deserialize() {
        let json = r#"{"port": 8000}"#;
        let server: ServerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(server.port, 8000);
        assert_eq!(server.host, "127.0.0.1");
    }

    #[test]
    fn test_config_serialize() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(json.contains("database_path"));
        assert!(json.contains("5555"));
    }
}
