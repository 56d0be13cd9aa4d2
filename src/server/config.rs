use std::str::FromStr;

use dioxus_logger::tracing::Level;

use crate::server::error::config::ConfigError;

/// Default socket address the HTTP server binds to
pub static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Application configuration read from the environment
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub log_level: Level,
}

impl Config {
    /// Read the configuration from environment variables
    ///
    /// - `DATABASE_URL` - required
    /// - `BIND_ADDRESS` - defaults to [`DEFAULT_BIND_ADDRESS`]
    /// - `LOG_LEVEL` - one of `trace`, `debug`, `info`, `warn`, `error`; defaults to `info`
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());

        let log_level = match std::env::var("LOG_LEVEL") {
            Ok(value) => parse_log_level(&value)?,
            Err(_) => Level::INFO,
        };

        Ok(Self {
            database_url,
            bind_address,
            log_level,
        })
    }
}

fn parse_log_level(value: &str) -> Result<Level, ConfigError> {
    Level::from_str(value.trim()).map_err(|e| ConfigError::InvalidEnvValue {
        var: "LOG_LEVEL".to_string(),
        reason: e.to_string(),
    })
}
