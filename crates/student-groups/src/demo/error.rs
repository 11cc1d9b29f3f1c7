//! Error types for the demo run.

use thiserror::Error;

use crate::error::{ModelError, NameSourceError, ValidationError};

/// Errors surfaced by the demo binary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DemoError {
    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
    /// A configured URL is not valid.
    #[error("invalid URL '{url}': {message}")]
    InvalidUrl {
        /// The rejected URL.
        url: String,
        /// Parser error message.
        message: String,
    },
    /// The name source could not be set up.
    #[error("name source error: {0}")]
    NameSource(#[from] NameSourceError),
    /// A sample student or group was rejected.
    #[error("model error: {0}")]
    Model(#[from] ModelError),
    /// Output could not be written.
    #[error("failed to write output: {message}")]
    Output {
        /// Description of the I/O or encoding error.
        message: String,
    },
}

impl From<ValidationError> for DemoError {
    fn from(error: ValidationError) -> Self {
        Self::Model(error.into())
    }
}
