//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DMA_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use maturity_assessment::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("History file: {}", config.storage.history_path.display());
//! ```

mod error;
mod questionnaire;
mod server;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use questionnaire::QuestionnaireConfig;
pub use server::ServerConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, logging, timeout)
    #[serde(default)]
    pub server: ServerConfig,

    /// History storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Optional custom questionnaire
    #[serde(default)]
    pub questionnaire: QuestionnaireConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DMA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DMA__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `DMA__STORAGE__HISTORY_PATH=/data/dma_history.csv` -> `storage.history_path`
    /// - `DMA__QUESTIONNAIRE__PATH=questionnaire.yaml` -> `questionnaire.path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DMA")
                    .separator("__"),
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
        self.server.validate()?;
        self.storage.validate()?;
        self.questionnaire.validate()?;
        Ok(())
    }
}
