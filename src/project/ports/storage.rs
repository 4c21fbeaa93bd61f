//! Storage port for project record persistence.

use super::AdapterResult;
use crate::project::domain::{ProjectKey, ProjectRecord};
use async_trait::async_trait;

/// Project record persistence contract.
///
/// Concurrent writers against the same key are not serialized; the last
/// write wins.
#[async_trait]
pub trait ProjectStorage: Send + Sync {
    /// Loads the stored record for a key.
    ///
    /// Returns `None` when no record is stored under the key.
    async fn get(&self, key: &ProjectKey) -> AdapterResult<Option<ProjectRecord>>;

    /// Stores a new record and returns its storage location.
    async fn store(&self, record: &ProjectRecord) -> AdapterResult<String>;

    /// Replaces the stored record under the same key.
    ///
    /// Returns `false` when no record was stored under the key.
    async fn update(&self, record: &ProjectRecord) -> AdapterResult<bool>;
}
