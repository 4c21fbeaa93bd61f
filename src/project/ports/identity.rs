//! Identity-management port validating requested access control.

use crate::project::domain::ProjectRecord;
use async_trait::async_trait;
use thiserror::Error;

/// Error returned when requested access-control settings violate policy.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("identity policy violation: {0}")]
pub struct IdentityPolicyError(pub String);

/// Identity-management contract.
#[async_trait]
pub trait IdentityPolicyAdapter: Send + Sync {
    /// Validates the record's requested admin/user/readonly configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityPolicyError`] when the requested settings name
    /// unknown users or groups.
    async fn validate_project_settings(
        &self,
        record: &ProjectRecord,
    ) -> Result<(), IdentityPolicyError>;
}
