//! In-memory job definition store.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::project::ports::{AdapterError, AdapterResult, JobDefinition, JobDefinitionStore};

/// Thread-safe in-memory job definition store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryJobDefinitionStore {
    definitions: Arc<RwLock<BTreeMap<String, JobDefinition>>>,
}

impl InMemoryJobDefinitionStore {
    /// Creates an empty in-memory definition store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a job definition for a component type.
    pub fn register(&self, component_type: impl Into<String>, description: impl Into<String>) {
        self.definitions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(
                component_type.into(),
                JobDefinition {
                    description: description.into(),
                },
            );
    }
}

#[async_trait]
impl JobDefinitionStore for InMemoryJobDefinitionStore {
    async fn lookup(&self, component_type: &str) -> AdapterResult<Option<JobDefinition>> {
        let definitions = self
            .definitions
            .read()
            .map_err(|err| AdapterError::new("job definitions", err.to_string()))?;
        Ok(definitions.get(component_type).cloned())
    }
}
