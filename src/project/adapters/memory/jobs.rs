//! In-memory job-execution platform.

use async_trait::async_trait;
use std::sync::{Arc, PoisonError, RwLock};

use crate::project::{
    domain::ProjectRecord,
    ports::{AdapterError, AdapterResult, JobExecution, JobExecutionAdapter},
};

/// Thread-safe in-memory job runner.
#[derive(Debug, Clone, Default)]
pub struct InMemoryJobRunner {
    state: Arc<RwLock<JobRunnerState>>,
}

#[derive(Debug, Default)]
struct JobRunnerState {
    platform_projects: Vec<String>,
    executions: Vec<String>,
    next_execution: u64,
}

impl InMemoryJobRunner {
    /// Creates an empty in-memory job runner.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the keys of projects that received platform provisioning.
    #[must_use]
    pub fn platform_projects(&self) -> Vec<String> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .platform_projects
            .clone()
    }

    /// Returns the permalinks of all executions triggered, in order.
    #[must_use]
    pub fn executions(&self) -> Vec<String> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .executions
            .clone()
    }
}

#[async_trait]
impl JobExecutionAdapter for InMemoryJobRunner {
    async fn create_platform_projects(
        &self,
        record: ProjectRecord,
    ) -> AdapterResult<ProjectRecord> {
        self.state
            .write()
            .map_err(|err| AdapterError::new("jobs", err.to_string()))?
            .platform_projects
            .push(record.key.as_str().to_owned());
        Ok(record)
    }

    async fn provision_from_quickstarters(
        &self,
        record: &ProjectRecord,
    ) -> AdapterResult<Vec<JobExecution>> {
        let mut state = self
            .state
            .write()
            .map_err(|err| AdapterError::new("jobs", err.to_string()))?;
        let project = record.key.as_str().to_lowercase();
        let mut executions = Vec::with_capacity(record.quickstarters.len());
        for quickstarter in &record.quickstarters {
            let component = quickstarter.component_type().unwrap_or("component");
            state.next_execution += 1;
            let permalink = format!(
                "https://jobs.example.com/executions/{project}-{component}-{}",
                state.next_execution
            );
            state.executions.push(permalink.clone());
            executions.push(JobExecution { permalink });
        }
        Ok(executions)
    }
}
