//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; every section is optional.
//!
//! # Example
//!
//! ```no_run
//! use basin::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("basin.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

use super::cart::CartConfig;
use super::logging::LoggingConfig;
use super::storage::StorageConfig;
use crate::domain::Quantity;
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Location of persisted carts and favorites.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Cart behavior.
    #[serde(default)]
    pub cart: CartConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or is invalid.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse_toml(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::ReadFile(e).into()),
        }
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.cart.max_quantity == 0 || self.cart.max_quantity > Quantity::MAX {
            return Err(ConfigError::InvalidValue {
                field: "max_quantity",
                reason: format!("must be between 1 and {}", Quantity::MAX),
            }
            .into());
        }
        let currency = &self.cart.currency;
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidValue {
                field: "currency",
                reason: "must be a three-letter ISO code".to_string(),
            }
            .into());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: "must be \"pretty\" or \"json\"".to_string(),
            }
            .into());
        }
        if let Some(dir) = &self.storage.data_dir {
            if dir.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "data_dir",
                    reason: "must not be empty".to_string(),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config.cart.max_quantity, 100);
        assert_eq!(config.cart.currency, "usd");
        assert_eq!(config.logging.level, "info");
        assert!(config.storage.data_dir.is_none());
    }

    #[test]
    fn parses_all_sections() {
        let config = Config::parse_toml(
            r#"
[logging]
level = "debug"
format = "json"

[storage]
data_dir = "/tmp/basin"

[cart]
max_quantity = 20
currency = "USD"
"#,
        )
        .unwrap();

        assert_eq!(config.logging.format, "json");
        assert_eq!(config.cart.max_quantity, 20);
        assert_eq!(
            config.storage.resolve_data_dir().unwrap(),
            std::path::PathBuf::from("/tmp/basin")
        );
    }

    #[test]
    fn rejects_max_quantity_out_of_range() {
        for value in [0, 101] {
            let result = Config::parse_toml(&format!("[cart]\nmax_quantity = {value}\n"));
            assert!(matches!(
                result,
                Err(Error::Config(ConfigError::InvalidValue {
                    field: "max_quantity",
                    ..
                }))
            ));
        }
    }

    #[test]
    fn rejects_bad_currency() {
        let result = Config::parse_toml("[cart]\ncurrency = \"dollars\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "currency",
                ..
            }))
        ));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let result = Config::parse_toml("[cart\n");
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load_or_default("/definitely/not/here/basin.toml").unwrap();
        assert_eq!(config.cart.max_quantity, 100);
    }
}
