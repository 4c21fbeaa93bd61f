//! In-memory collaboration space host.

use async_trait::async_trait;
use std::sync::{Arc, PoisonError, RwLock};

use crate::project::{
    domain::ProjectRecord,
    ports::{AdapterError, AdapterResult, CollaborationAdapter},
};

/// Thread-safe in-memory collaboration space host.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCollaboration {
    created_spaces: Arc<RwLock<Vec<String>>>,
}

impl InMemoryCollaboration {
    /// Creates an empty in-memory collaboration host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the keys of projects that received a space.
    #[must_use]
    pub fn created_spaces(&self) -> Vec<String> {
        self.created_spaces
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl CollaborationAdapter for InMemoryCollaboration {
    async fn create_space(&self, mut record: ProjectRecord) -> AdapterResult<ProjectRecord> {
        record.collaboration_space_url = Some(format!(
            "https://wiki.example.com/spaces/{}",
            record.key
        ));
        self.created_spaces
            .write()
            .map_err(|err| AdapterError::new("collaboration", err.to_string()))?
            .push(record.key.as_str().to_owned());
        Ok(record)
    }

    async fn space_template(&self, project_type: &str) -> AdapterResult<String> {
        Ok(format!("{project_type}-space"))
    }
}
