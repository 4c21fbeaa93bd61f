//! In-memory issue tracker.

use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::{Arc, PoisonError, RwLock};

use crate::project::{
    domain::ProjectRecord,
    ports::{AdapterError, AdapterResult, BugtrackerAdapter, BugtrackerTemplate},
};

/// Maximum length of a derived project key.
const DERIVED_KEY_CHARS: usize = 5;

/// Thread-safe in-memory issue tracker.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBugtracker {
    state: Arc<RwLock<BugtrackerState>>,
}

#[derive(Debug, Default)]
struct BugtrackerState {
    known_keys: BTreeSet<String>,
    created_projects: Vec<String>,
    shortcut_projects: Vec<String>,
    component_projects: Vec<String>,
}

impl InMemoryBugtracker {
    /// Creates an empty in-memory tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a key or name as already present in the tracker.
    pub fn seed_existing_key(&self, key: impl Into<String>) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .known_keys
            .insert(key.into());
    }

    /// Returns the keys of projects created through this tracker.
    #[must_use]
    pub fn created_projects(&self) -> Vec<String> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .created_projects
            .clone()
    }

    /// Returns the keys of projects that received shortcuts.
    #[must_use]
    pub fn shortcut_projects(&self) -> Vec<String> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .shortcut_projects
            .clone()
    }

    /// Returns the keys of projects that received tracker components.
    #[must_use]
    pub fn component_projects(&self) -> Vec<String> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .component_projects
            .clone()
    }
}

#[async_trait]
impl BugtrackerAdapter for InMemoryBugtracker {
    async fn create_project(&self, mut record: ProjectRecord) -> AdapterResult<ProjectRecord> {
        record.bugtracker_url = Some(format!(
            "https://bugtracker.example.com/projects/{}",
            record.key
        ));
        let mut state = self
            .state
            .write()
            .map_err(|err| AdapterError::new("bugtracker", err.to_string()))?;
        state.known_keys.insert(record.key.as_str().to_owned());
        state.created_projects.push(record.key.as_str().to_owned());
        Ok(record)
    }

    async fn add_shortcuts(&self, record: &ProjectRecord) -> AdapterResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| AdapterError::new("bugtracker", err.to_string()))?;
        state.shortcut_projects.push(record.key.as_str().to_owned());
        Ok(())
    }

    async fn create_components_for_repositories(
        &self,
        record: &ProjectRecord,
    ) -> AdapterResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| AdapterError::new("bugtracker", err.to_string()))?;
        state
            .component_projects
            .push(record.key.as_str().to_owned());
        Ok(())
    }

    async fn project_key_exists(&self, name: &str) -> AdapterResult<bool> {
        let state = self
            .state
            .read()
            .map_err(|err| AdapterError::new("bugtracker", err.to_string()))?;
        Ok(state.known_keys.contains(name))
    }

    async fn build_project_key(&self, name: &str) -> AdapterResult<String> {
        Ok(name
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .take(DERIVED_KEY_CHARS)
            .map(|ch| ch.to_ascii_uppercase())
            .collect())
    }

    async fn project_template(&self, project_type: &str) -> AdapterResult<BugtrackerTemplate> {
        Ok(BugtrackerTemplate {
            template_type_key: "software".to_owned(),
            template_key: project_type.to_owned(),
        })
    }
}
