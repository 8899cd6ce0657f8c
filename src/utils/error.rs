//! Error handling module
//!
//! Defines the error taxonomy returned by every client operation

use crate::config::ApiVersion;
use crate::services::client::TransportError;
use thiserror::Error;

/// Places client error types
///
/// No variant is retried internally. Callers that want retries should
/// consult [`PlacesError::is_retryable`] and apply their own policy.
#[derive(Error, Debug)]
pub enum PlacesError {
    /// Connection, DNS or timeout failure
    #[error("Network error: {0}")]
    Network(String),

    /// The API answered with a non-2xx status
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    /// The response payload is not valid JSON
    #[error("Decode error: {0}")]
    Decode(String),

    /// The operation has no equivalent in the configured API version
    #[error("Operation '{operation}' is not supported by the {version} Places API")]
    UnsupportedOperation {
        operation: &'static str,
        version: ApiVersion,
    },

    /// Invalid client configuration or call arguments (empty key, empty field mask, ...)
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl PlacesError {
    /// Get HTTP status code, when the API produced one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            PlacesError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get error type string
    pub fn error_type(&self) -> &'static str {
        match self {
            PlacesError::Network(_) => "network_error",
            PlacesError::Http { .. } => "http_error",
            PlacesError::Decode(_) => "decode_error",
            PlacesError::UnsupportedOperation { .. } => "unsupported_operation",
            PlacesError::Configuration(_) => "configuration_error",
        }
    }

    /// Whether repeating the same call could plausibly succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            PlacesError::Network(_) => true,
            PlacesError::Http { status, .. } => *status == 429 || *status >= 500,
            PlacesError::Decode(_)
            | PlacesError::UnsupportedOperation { .. }
            | PlacesError::Configuration(_) => false,
        }
    }
}

impl From<TransportError> for PlacesError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Network { message } => PlacesError::Network(message),
            TransportError::HttpStatus { status, body } => PlacesError::Http { status, body },
        }
    }
}

/// Result type alias
pub type PlacesResult<T> = Result<T, PlacesError>;

/// Error handling helper functions
pub mod helpers {
    use super::*;

    /// Create configuration error
    pub fn configuration_error(message: impl Into<String>) -> PlacesError {
        PlacesError::Configuration(message.into())
    }

    /// Create unsupported operation error
    pub fn unsupported(operation: &'static str, version: ApiVersion) -> PlacesError {
        PlacesError::UnsupportedOperation { operation, version }
    }
}

/// Error context extension trait
pub trait ErrorContext<T> {
    /// Add decode error context
    fn decode_context(self, message: &str) -> PlacesResult<T>;

    /// Add configuration error context
    fn configuration_context(self, message: &str) -> PlacesResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn decode_context(self, message: &str) -> PlacesResult<T> {
        self.map_err(|e| PlacesError::Decode(format!("{}: {}", message, e)))
    }

    fn configuration_context(self, message: &str) -> PlacesResult<T> {
        self.map_err(|e| PlacesError::Configuration(format!("{}: {}", message, e)))
    }
}
