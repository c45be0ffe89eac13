//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or environment variable could not be merged or extracted.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A loaded value is outside the range Herald can work with.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
