//! Conditional identity policy enforcement.

use std::sync::Arc;

use crate::project::{
    context::RequestContext,
    domain::ProjectRecord,
    ports::{IdentityPolicyAdapter, IdentityPolicyError},
};

/// Enforces identity policy before provisioning side effects, when asked to.
#[derive(Clone)]
pub struct IdentityPolicyChecker {
    identity: Arc<dyn IdentityPolicyAdapter>,
}

impl IdentityPolicyChecker {
    /// Creates a checker over the given identity backend.
    #[must_use]
    pub const fn new(identity: Arc<dyn IdentityPolicyAdapter>) -> Self {
        Self { identity }
    }

    /// Validates the requested permission settings when a special
    /// permission set was requested; does nothing otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityPolicyError`] when the requested settings violate
    /// policy.
    pub async fn check_if_requested(
        &self,
        ctx: &RequestContext,
        record: &ProjectRecord,
    ) -> Result<(), IdentityPolicyError> {
        if !record.permissions.special_permission_set {
            return Ok(());
        }
        tracing::debug!(
            correlation_id = %ctx.correlation_id(),
            project = %ctx.project_key(),
            "validating requested permission settings"
        );
        self.identity.validate_project_settings(record).await
    }
}
