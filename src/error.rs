//! Error types for Wellscore

use thiserror::Error;

/// Errors that can occur at the engine boundary
///
/// The core calculators are total functions and never fail; errors only
/// arise when parsing, validating, or encoding records at the boundary.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to parse record: {0}")]
    ParseError(String),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid input: {field}: {message}")]
    InvalidInput {
        field: &'static str,
        message: String,
    },

    #[error("Encoding error: {0}")]
    EncodingError(String),
}

impl EngineError {
    /// Shorthand for an out-of-domain field rejection
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field,
            message: message.into(),
        }
    }
}
