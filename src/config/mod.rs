//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PERSONALIZATION` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use personalization_engine::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Generator timeout: {:?}", config.orchestrator.generator_timeout());
//! ```

mod error;
mod orchestrator;
mod telemetry;

pub use error::{ConfigError, ValidationError};
pub use orchestrator::OrchestratorConfig;
pub use telemetry::{init_tracing, LogFormat, TelemetryConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Pipeline timeouts and batch limits
    #[serde(default)]
    pub orchestrator: OrchestratorConfig,

    /// Logging filter and format
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PERSONALIZATION` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PERSONALIZATION__ORCHESTRATOR__GENERATOR_TIMEOUT_MS=1500`
    /// - `PERSONALIZATION__TELEMETRY__FORMAT=json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PERSONALIZATION")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.orchestrator.validate()?;
        self.telemetry.validate()?;
        Ok(())
    }
}
