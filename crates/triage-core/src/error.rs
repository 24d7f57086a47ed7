//! Error types for the triage application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire triage application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum TriageError {
    /// Malformed or missing input field, caught at the boundary that
    /// received the input
    #[error("Validation failed for '{field}': {message}")]
    Validation { field: String, message: String },

    /// Entity not found error with type information
    #[error("{entity_type} not found: '{id}'")]
    NotFound { entity_type: String, id: String },

    /// Operation attempted against an entity whose current state does not
    /// permit it (e.g. approving a non-pending proposal)
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Storage backend failure (load/save collaborator)
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TriageError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    /// Creates an InvalidState error
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an InvalidState error
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState(_))
    }

    /// Check if this error came from the storage backend rather than from
    /// the caller's input.
    ///
    /// Returns true for `Storage` and `Io` errors. `Serialization` is kept
    /// separate: a document that no longer parses should surface as corrupt
    /// data, not trigger backend fallback.
    pub fn is_storage_failure(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::Io { .. })
    }

    /// Check if this error should map to a caller-fault (4xx-equivalent)
    /// outcome rather than a server-fault one.
    pub fn is_caller_fault(&self) -> bool {
        self.is_validation() || self.is_not_found() || self.is_invalid_state()
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for TriageError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for TriageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, TriageError>`.
pub type Result<T> = std::result::Result<T, TriageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_helpers() {
        let err = TriageError::validation("title", "title must not be empty");
        assert!(err.is_validation());
        assert!(err.is_caller_fault());

        let err = TriageError::not_found("task", "T0042");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "task not found: 'T0042'");
    }

    #[test]
    fn test_storage_failure_classification() {
        assert!(TriageError::storage("backend unavailable").is_storage_failure());
        assert!(TriageError::io("disk full").is_storage_failure());
        assert!(!TriageError::invalid_state("not pending").is_storage_failure());

        // A document that fails to parse is corrupt data, not a backend outage.
        let err: TriageError = serde_json::from_str::<serde_json::Value>("{oops")
            .unwrap_err()
            .into();
        assert!(!err.is_storage_failure());
    }
}
