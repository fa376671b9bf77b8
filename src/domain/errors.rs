//! Domain error types
//!
//! This module defines the error hierarchy for regionsnap.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main regionsnap error type
///
/// Used by configuration loading, collaborator adapters and logging setup.
/// The export command itself never returns this type to its caller; it folds
/// every failure into an [`Outcome`](super::Outcome).
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// The caller lacks the permission required for the operation
    #[error("{0}")]
    AccessDenied(String),

    /// Network/connection errors
    #[error("Connection error: {0}")]
    Connection(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl SnapshotError {
    /// Returns true when the error can be corrected by the caller
    /// (bad input or missing permission) rather than being an environment fault
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            SnapshotError::AccessDenied(_) | SnapshotError::Validation(_)
        )
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for SnapshotError {
    fn from(err: std::io::Error) -> Self {
        SnapshotError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        SnapshotError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for SnapshotError {
    fn from(err: toml::de::Error) -> Self {
        SnapshotError::Configuration(format!("TOML parse error: {err}"))
    }
}
