//! Error types for the stack input model

use thiserror::Error;

/// Result type alias for model operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors raised while building or (de)serializing a stack input
#[derive(Debug, Error)]
pub enum ModelError {
    /// The payload cannot be represented, e.g. two vendor configs at once
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// JSON encoding or decoding failed
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ModelError {
    /// Create an invalid configuration error
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }

    /// Check if this error is an invalid configuration error
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration(_))
    }
}
