//! In-memory project record storage.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::project::{
    domain::{ProjectKey, ProjectRecord},
    ports::{AdapterError, AdapterResult, ProjectStorage},
};

/// Thread-safe in-memory project storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectStorage {
    state: Arc<RwLock<BTreeMap<ProjectKey, ProjectRecord>>>,
}

impl InMemoryProjectStorage {
    /// Creates empty in-memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the stored record for a key, bypassing the port.
    #[must_use]
    pub fn stored(&self, key: &ProjectKey) -> Option<ProjectRecord> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Seeds a record directly into storage.
    pub fn seed(&self, record: ProjectRecord) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(record.key.clone(), record);
    }
}

#[async_trait]
impl ProjectStorage for InMemoryProjectStorage {
    async fn get(&self, key: &ProjectKey) -> AdapterResult<Option<ProjectRecord>> {
        let state = self
            .state
            .read()
            .map_err(|err| AdapterError::new("storage", err.to_string()))?;
        Ok(state.get(key).cloned())
    }

    async fn store(&self, record: &ProjectRecord) -> AdapterResult<String> {
        let mut state = self
            .state
            .write()
            .map_err(|err| AdapterError::new("storage", err.to_string()))?;
        state.insert(record.key.clone(), record.clone());
        Ok(format!("memory:{}", record.key))
    }

    async fn update(&self, record: &ProjectRecord) -> AdapterResult<bool> {
        let mut state = self
            .state
            .write()
            .map_err(|err| AdapterError::new("storage", err.to_string()))?;
        if !state.contains_key(&record.key) {
            return Ok(false);
        }
        state.insert(record.key.clone(), record.clone());
        Ok(true)
    }
}
