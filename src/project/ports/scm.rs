//! Source-control port for project and repository creation.

use super::AdapterResult;
use crate::project::domain::ProjectRecord;
use async_trait::async_trait;

/// Source-control host contract.
#[async_trait]
pub trait ScmAdapter: Send + Sync {
    /// Creates the SCM project (repository namespace) for the record.
    ///
    /// Implementations must populate `scm_url` on the returned record; the
    /// delivery chain treats its absence as a contract violation and aborts.
    async fn create_project(&self, record: ProjectRecord) -> AdapterResult<ProjectRecord>;

    /// Creates the named auxiliary repositories inside the SCM project,
    /// merging the results into `repositories`.
    async fn create_auxiliary_repositories(
        &self,
        record: ProjectRecord,
        names: &[String],
    ) -> AdapterResult<ProjectRecord>;

    /// Creates one repository per quickstarter, merging the results into
    /// `repositories`.
    async fn create_component_repositories(
        &self,
        record: ProjectRecord,
    ) -> AdapterResult<ProjectRecord>;
}
