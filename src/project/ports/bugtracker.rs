//! Issue-tracker port for project, component, and template operations.

use super::AdapterResult;
use crate::project::domain::ProjectRecord;
use async_trait::async_trait;

/// Template binding reported by the issue tracker for a project type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BugtrackerTemplate {
    /// Tracker-side template type key.
    pub template_type_key: String,
    /// Tracker-side template key.
    pub template_key: String,
}

/// Issue-tracker contract.
#[async_trait]
pub trait BugtrackerAdapter: Send + Sync {
    /// Creates the tracker project for the record.
    ///
    /// Implementations must populate `bugtracker_url` on the returned
    /// record; the orchestration treats its absence as a contract violation.
    async fn create_project(&self, record: ProjectRecord) -> AdapterResult<ProjectRecord>;

    /// Attaches tracker shortcuts pointing at the other provisioned
    /// artifacts.
    async fn add_shortcuts(&self, record: &ProjectRecord) -> AdapterResult<()>;

    /// Creates one tracker component per provisioned repository.
    async fn create_components_for_repositories(
        &self,
        record: &ProjectRecord,
    ) -> AdapterResult<()>;

    /// Reports whether the tracker already knows the given key or name.
    async fn project_key_exists(&self, name: &str) -> AdapterResult<bool>;

    /// Derives a candidate project key from a project name.
    async fn build_project_key(&self, name: &str) -> AdapterResult<String>;

    /// Resolves the tracker template bound to a project type.
    async fn project_template(&self, project_type: &str) -> AdapterResult<BugtrackerTemplate>;
}
