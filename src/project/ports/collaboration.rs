//! Collaboration-space port for wiki space creation and templates.

use super::AdapterResult;
use crate::project::domain::ProjectRecord;
use async_trait::async_trait;

/// Collaboration-space contract.
#[async_trait]
pub trait CollaborationAdapter: Send + Sync {
    /// Creates the collaboration space for the record.
    ///
    /// Implementations must populate `collaboration_space_url` on the
    /// returned record; the orchestration treats its absence as a contract
    /// violation.
    async fn create_space(&self, record: ProjectRecord) -> AdapterResult<ProjectRecord>;

    /// Resolves the space template bound to a project type.
    async fn space_template(&self, project_type: &str) -> AdapterResult<String>;
}
