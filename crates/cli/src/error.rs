//! Top-level error type for the `nursery` binary.

use thiserror::Error;

use crate::catalog_file::CatalogFileError;
use crate::config::ConfigError;

/// Anything that can stop a command.
///
/// Shopper mistakes (unknown plant ids, typos) are not errors; they become
/// notices inside the shop loop.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogFileError),

    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for `CliError`.
pub type Result<T> = std::result::Result<T, CliError>;
