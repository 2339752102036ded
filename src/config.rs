//! Configuration management for Reabertura

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct SourceConfig {
    /// Endpoint returning the `{ "locations": [...] }` document
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix REABERTURA_)
            .add_source(
                Environment::with_prefix("REABERTURA")
                    .separator("_")
                    .try_parsing(true),
            )
            // Override source URL from LOCATIONS_URL env var if present
            .set_override_option(
                "source.url",
                env::var("LOCATIONS_URL").ok(),
            )?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: "https://test-frontend-developer.s3.amazonaws.com/data/locations.json"
                .to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
