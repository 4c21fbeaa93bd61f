//! Error types for project domain validation.

use thiserror::Error;

/// Error returned when a project key is empty or whitespace-only.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("project key must not be blank")]
pub struct BlankProjectKey;
