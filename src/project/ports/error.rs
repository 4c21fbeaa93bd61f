//! Shared failure type for collaborator ports.

use thiserror::Error;

/// Result type for collaborator port operations.
pub type AdapterResult<T> = Result<T, AdapterError>;

/// Failure reported by an external collaborator.
///
/// Collaborator failures are opaque to the orchestration: the error carries
/// the collaborator's name and a human-readable message, never a
/// machine-readable subtype.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{collaborator}: {message}")]
pub struct AdapterError {
    collaborator: &'static str,
    message: String,
}

impl AdapterError {
    /// Creates a collaborator failure with the given message.
    #[must_use]
    pub fn new(collaborator: &'static str, message: impl Into<String>) -> Self {
        Self {
            collaborator,
            message: message.into(),
        }
    }

    /// Creates the failure reported when a collaborator finished without
    /// publishing a required link on the record.
    #[must_use]
    pub fn missing_link(collaborator: &'static str, link: &str) -> Self {
        Self::new(collaborator, format!("completed without returning a {link}"))
    }

    /// Returns the collaborator that failed.
    #[must_use]
    pub const fn collaborator(&self) -> &'static str {
        self.collaborator
    }

    /// Returns the failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
