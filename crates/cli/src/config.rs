//! Nursery configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `NURSERY_CATALOG` - Path to a YAML catalog replacing the built-in plants
//! - `NURSERY_LOG_FORMAT` - `text` (default) or `json`
//! - `RUST_LOG` - Standard tracing filter directives

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// How log lines are written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("expected `text` or `json`, got `{other}`")),
        }
    }
}

/// Terminal storefront configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NurseryConfig {
    /// YAML catalog to load instead of the house catalog
    pub catalog_path: Option<PathBuf>,
    /// Log output format
    pub log_format: LogFormat,
}

impl NurseryConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let catalog_path = lookup("NURSERY_CATALOG")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let log_format = match lookup("NURSERY_LOG_FORMAT") {
            Some(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidEnvVar("NURSERY_LOG_FORMAT".to_string(), e))?,
            None => LogFormat::default(),
        };

        Ok(Self {
            catalog_path,
            log_format,
        })
    }

    /// Override the catalog path, e.g. from a command-line flag.
    #[must_use]
    pub fn with_catalog_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.catalog_path = path;
        }
        self
    }
}
