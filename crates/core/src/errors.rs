//! Core error types for Goalpost.
//!
//! This module defines transport-agnostic error types. HTTP-specific failures
//! (from reqwest, status codes, envelopes) are converted to these types by the
//! `connect` crate.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for Goalpost.
#[derive(Error, Debug)]
pub enum Error {
    /// The request never produced a response (connection, TLS, timeout, body read).
    #[error("Request failed: {0}")]
    Transport(String),

    /// The backend answered but reported a failure, either through a non-2xx
    /// status or an envelope with `success: false`.
    #[error("API error{}: {message}", status.map(|s| format!(" {}", s)).unwrap_or_default())]
    Api {
        status: Option<u16>,
        message: String,
    },

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("No evaluation period configured")]
    NoEvaluationPeriod,

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Missing configuration key: {0}")]
    MissingConfigKey(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Creates an API error without an HTTP status (envelope-level failure).
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            status: None,
            message: message.into(),
        }
    }
}

/// Validation errors for user input and payload parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_messages() {
        let err = Error::Api {
            status: Some(404),
            message: "Goal not found".to_string(),
        };
        assert_eq!(err.to_string(), "API error 404: Goal not found");

        let err = Error::api("Period is locked");
        assert_eq!(err.to_string(), "API error: Period is locked");
    }

    #[test]
    fn test_validation_error_conversion() {
        let err: Error = ValidationError::MissingField("comment".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Input validation failed: Required field 'comment' is missing"
        );
    }
}
