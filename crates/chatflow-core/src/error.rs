//! Error types for chatflow-core.
//!
//! This module provides the error type used across the crate for message
//! conversion failures.

use thiserror::Error;

/// Result type alias for chatflow-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for chatflow-core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Error parsing or producing JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A message record carried a role outside the supported set.
    #[error("unknown message role: {0}")]
    UnknownRole(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an unknown role error.
    pub fn unknown_role(role: impl Into<String>) -> Self {
        Self::UnknownRole(role.into())
    }

    /// Create a generic error.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}
