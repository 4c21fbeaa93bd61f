//! Repository metadata attached to a project record.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metadata describing one provisioned source repository.
///
/// Repositories are open string maps on the wire (clone links and other
/// collaborator-specific data), keyed by entry name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepositoryInfo(BTreeMap<String, String>);

impl RepositoryInfo {
    /// Creates empty repository metadata.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an arbitrary entry.
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Returns an arbitrary entry by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}
