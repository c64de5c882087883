//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings.
//! Configuration is loaded from a TOML file; every section is optional.
//!
//! # Example
//!
//! ```no_run
//! use condotel_pricing::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use serde::Deserialize;
use std::path::Path;

use super::logging::LoggingConfig;
use super::pricing::PricingConfig;
use crate::domain::MAX_MINOR_UNITS;
use crate::error::{ConfigError, Result};

/// Largest UTC offset chrono accepts, in minutes (exclusive of a full day).
const MAX_OFFSET_MINUTES: i32 = 24 * 60 - 1;

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Currency, timezone, and stay limits for quotes.
    #[serde(default)]
    pub pricing: PricingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Replace the configured log level.
    ///
    /// # Errors
    ///
    /// Returns an error if the new level is blank.
    pub fn with_log_level(mut self, level: &str) -> Result<Self> {
        level.clone_into(&mut self.logging.level);
        self.validate()?;
        Ok(self)
    }

    /// Initialize logging from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "level" }.into());
        }

        let pricing = &self.pricing;
        if pricing.currency.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "currency" }.into());
        }
        if pricing.minor_units > MAX_MINOR_UNITS {
            return Err(ConfigError::InvalidValue {
                field: "minor_units",
                reason: format!("must be at most {MAX_MINOR_UNITS}"),
            }
            .into());
        }
        if pricing.utc_offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(ConfigError::InvalidValue {
                field: "utc_offset_minutes",
                reason: format!("must be between -{MAX_OFFSET_MINUTES} and {MAX_OFFSET_MINUTES}"),
            }
            .into());
        }
        if pricing.max_stay_nights == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_stay_nights",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
