//! Core error types for oposim-core.
//!
//! Errors are grouped by the component that raises them and folded into
//! [`CoreError`] for callers that do not care about the distinction.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for oposim-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Probability or timer parameter rejected
    #[error("Invalid parameter: {0}")]
    InvalidParameter(#[from] InvalidParameter),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A draw or timer parameter outside its allowed range.
///
/// Each precondition of the probability engine has its own variant so
/// callers can tell exactly which constraint failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidParameter {
    #[error("total topics must be greater than 0 (got {total})")]
    NonPositiveTotal { total: i64 },

    #[error("studied topics cannot be negative (got {studied})")]
    NegativeStudied { studied: i64 },

    #[error("balls drawn must be greater than 0 (got {drawn})")]
    NonPositiveDrawn { drawn: i64 },

    #[error("studied topics ({studied}) cannot exceed total topics ({total})")]
    StudiedExceedsTotal { studied: i64, total: i64 },

    #[error("balls drawn ({drawn}) cannot exceed total topics ({total})")]
    DrawnExceedsTotal { drawn: i64, total: i64 },

    #[error("timer duration must be greater than 0 minutes")]
    NonPositiveDuration,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration tree
    #[error("unknown config key: {0}")]
    UnknownKey(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Empty collection
    #[error("Empty collection: {0}")]
    EmptyCollection(String),

    /// Out of bounds
    #[error("Index {index} out of bounds for {collection} (length: {len})")]
    OutOfBounds {
        collection: String,
        index: usize,
        len: usize,
    },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_messages_are_distinct() {
        let messages = [
            InvalidParameter::NonPositiveTotal { total: 0 }.to_string(),
            InvalidParameter::NegativeStudied { studied: -1 }.to_string(),
            InvalidParameter::NonPositiveDrawn { drawn: 0 }.to_string(),
            InvalidParameter::StudiedExceedsTotal { studied: 11, total: 10 }.to_string(),
            InvalidParameter::DrawnExceedsTotal { drawn: 11, total: 10 }.to_string(),
            InvalidParameter::NonPositiveDuration.to_string(),
        ];
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn core_error_wraps_invalid_parameter() {
        let err: CoreError = InvalidParameter::NonPositiveDrawn { drawn: 0 }.into();
        assert!(err.to_string().contains("balls drawn must be greater than 0"));
    }
}
