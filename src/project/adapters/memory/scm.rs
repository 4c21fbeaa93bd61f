//! In-memory source-control host.

use async_trait::async_trait;
use std::sync::{Arc, PoisonError, RwLock};

use crate::project::{
    domain::{ProjectRecord, RepositoryInfo},
    ports::{AdapterError, AdapterResult, ScmAdapter},
};

/// Thread-safe in-memory source-control host.
#[derive(Debug, Clone, Default)]
pub struct InMemoryScm {
    state: Arc<RwLock<ScmState>>,
}

#[derive(Debug, Default)]
struct ScmState {
    created_projects: Vec<String>,
    auxiliary_repositories: Vec<String>,
    component_repositories: Vec<String>,
}

impl InMemoryScm {
    /// Creates an empty in-memory SCM host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the keys of SCM projects created through this host.
    #[must_use]
    pub fn created_projects(&self) -> Vec<String> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .created_projects
            .clone()
    }

    /// Returns the names of auxiliary repositories created, in order.
    #[must_use]
    pub fn auxiliary_repositories(&self) -> Vec<String> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .auxiliary_repositories
            .clone()
    }

    /// Returns the names of component repositories created, in order.
    #[must_use]
    pub fn component_repositories(&self) -> Vec<String> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .component_repositories
            .clone()
    }
}

fn clone_url(project: &str, repository: &str) -> String {
    format!("https://scm.example.com/scm/{project}/{repository}.git")
}

#[async_trait]
impl ScmAdapter for InMemoryScm {
    async fn create_project(&self, mut record: ProjectRecord) -> AdapterResult<ProjectRecord> {
        record.scm_url = Some(format!("https://scm.example.com/projects/{}", record.key));
        self.state
            .write()
            .map_err(|err| AdapterError::new("scm", err.to_string()))?
            .created_projects
            .push(record.key.as_str().to_owned());
        Ok(record)
    }

    async fn create_auxiliary_repositories(
        &self,
        mut record: ProjectRecord,
        names: &[String],
    ) -> AdapterResult<ProjectRecord> {
        let project = record.key.as_str().to_lowercase();
        let mut state = self
            .state
            .write()
            .map_err(|err| AdapterError::new("scm", err.to_string()))?;
        for name in names {
            let repository =
                RepositoryInfo::new().with_entry("clone_url", clone_url(&project, name));
            record.repositories.insert(name.clone(), repository);
            state.auxiliary_repositories.push(name.clone());
        }
        Ok(record)
    }

    async fn create_component_repositories(
        &self,
        mut record: ProjectRecord,
    ) -> AdapterResult<ProjectRecord> {
        let project = record.key.as_str().to_lowercase();
        let mut state = self
            .state
            .write()
            .map_err(|err| AdapterError::new("scm", err.to_string()))?;
        for quickstarter in &record.quickstarters {
            let component = quickstarter
                .component_id()
                .or_else(|| quickstarter.component_type());
            let Some(component) = component else {
                continue;
            };
            let name = format!("{project}-{component}");
            let repository =
                RepositoryInfo::new().with_entry("clone_url", clone_url(&project, &name));
            record.repositories.insert(name.clone(), repository);
            state.component_repositories.push(name);
        }
        Ok(record)
    }
}
