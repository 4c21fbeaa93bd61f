//! Validated project key.

use super::BlankProjectKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique, upper-cased identifier for a provisioned project.
///
/// Construction trims surrounding whitespace, rejects blank input, and
/// upper-cases the remainder, so every key is normalized before any side
/// effect depends on it. Deserialization runs through the same constructor.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectKey(String);

impl ProjectKey {
    /// Creates a validated project key.
    ///
    /// # Errors
    ///
    /// Returns [`BlankProjectKey`] when the value is empty or
    /// whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, BlankProjectKey> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(BlankProjectKey);
        }
        Ok(Self(normalized.to_uppercase()))
    }

    /// Returns the key as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProjectKey {
    type Error = BlankProjectKey;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProjectKey> for String {
    fn from(key: ProjectKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ProjectKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ProjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
