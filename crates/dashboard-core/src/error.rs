//! Error types for link building.
//!
//! Every failure is local and immediate: a rejected input or an invalid
//! configuration surfaces to the caller, which decides whether to skip the link.

use thiserror::Error;

/// Main error type for link building.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An identifier was empty or otherwise unusable
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid endpoint or URL
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Configuration could not be (de)serialized
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Specialized result type for link building.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            Self::SerializationError(_) => "SERIALIZATION_ERROR",
        }
    }
}

// Conversions from external error types
impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
