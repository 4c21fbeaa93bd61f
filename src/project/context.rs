//! Correlation context threaded through the provisioning pipeline.
//!
//! Every provisioning operation carries an explicit context value rather
//! than writing correlation identifiers into process-global logging state,
//! so concurrent requests never observe each other's identifiers.

use crate::project::domain::ProjectKey;
use uuid::Uuid;

/// Correlation data for one provisioning request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    correlation_id: Uuid,
    project_key: ProjectKey,
}

impl RequestContext {
    /// Creates a context for an operation against the given project.
    #[must_use]
    pub fn for_project(project_key: ProjectKey) -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
            project_key,
        }
    }

    /// Returns the correlation identifier for this request.
    #[must_use]
    pub const fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    /// Returns the project key this request operates on.
    #[must_use]
    pub const fn project_key(&self) -> &ProjectKey {
        &self.project_key
    }
}
