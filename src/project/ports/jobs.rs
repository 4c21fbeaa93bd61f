//! Job-execution port for platform provisioning and component jobs.

use super::AdapterResult;
use crate::project::domain::ProjectRecord;
use async_trait::async_trait;

/// Execution record of one triggered provisioning job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobExecution {
    /// Stable reference to the job's execution record.
    pub permalink: String,
}

/// Job-execution platform contract.
#[async_trait]
pub trait JobExecutionAdapter: Send + Sync {
    /// Provisions the runtime (cluster/namespace) projects for the record.
    async fn create_platform_projects(&self, record: ProjectRecord)
    -> AdapterResult<ProjectRecord>;

    /// Triggers one provisioning job per quickstarter and returns the
    /// execution records in quickstarter order.
    async fn provision_from_quickstarters(
        &self,
        record: &ProjectRecord,
    ) -> AdapterResult<Vec<JobExecution>>;
}
