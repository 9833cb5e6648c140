//! Error types used throughout the workspace

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Edgekit
///
/// Validation failures are raised before any network call; transport
/// failures pass through without being retried or reinterpreted.
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum EdgeError {
    /// A caller-supplied parameter is outside the accepted set.
    #[error("invalid parameter '{field}': {value}")]
    InvalidParameter {
        /// Name of the offending query parameter.
        field: String,
        /// The rejected value, verbatim.
        value: String,
    },

    /// The platform returned a structurally unusable analytics document.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Opaque transport failure (network error, non-2xx status).
    #[error("transport error: {0}")]
    Transport(String),

    /// Authentication rejected by the platform.
    #[error("authentication error: {0}")]
    Auth(String),

    /// The requested entity does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Configuration could not be loaded or is incomplete.
    #[error("configuration error: {0}")]
    Config(String),

    /// Invariant violation inside the client itself.
    #[error("internal error: {0}")]
    Internal(String),
}

impl EdgeError {
    /// Shorthand for an [`EdgeError::InvalidParameter`] carrying the field
    /// name and the rejected value.
    pub fn invalid_parameter(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidParameter { field: field.into(), value: value.into() }
    }
}

/// Result type alias for Edgekit operations
pub type Result<T> = std::result::Result<T, EdgeError>;
