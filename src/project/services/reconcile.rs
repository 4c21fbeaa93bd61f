//! Reconciliation of update requests against stored project state.

use crate::project::{
    context::RequestContext,
    domain::ProjectRecord,
    error::{ProvisioningError, ProvisioningResult},
    services::delivery::DeliveryChain,
};

/// Merges an incoming update request with the stored record and runs the
/// delivery chain on the reconciled request.
///
/// Stored facts that an update must not rewrite (description, name, SCM
/// URL, the bugtracker-space flag, and a previously granted special
/// permission set) are carried over from storage before provisioning. A
/// platform runtime, once provisioned, stays provisioned; requesting one
/// on a project without it is an upgrade and must be allowed by policy.
#[derive(Clone)]
pub struct UpdateReconciler {
    chain: DeliveryChain,
    allow_platform_upgrade: bool,
}

impl UpdateReconciler {
    /// Creates a reconciler running the given delivery chain.
    #[must_use]
    pub const fn new(chain: DeliveryChain, allow_platform_upgrade: bool) -> Self {
        Self {
            chain,
            allow_platform_upgrade,
        }
    }

    /// Reconciles `incoming` against the stored record, provisions the
    /// reconciled request, and returns the stored record updated with the
    /// provisioning outcome.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisioningError::NotFound`] when no record is stored,
    /// [`ProvisioningError::UpgradeNotAllowed`] when the update requests a
    /// platform runtime the stored project lacks and upgrades are
    /// disabled, and [`ProvisioningError::Adapter`] when the delivery
    /// chain fails.
    pub async fn reconcile(
        &self,
        ctx: &RequestContext,
        existing: Option<ProjectRecord>,
        mut incoming: ProjectRecord,
    ) -> ProvisioningResult<ProjectRecord> {
        let Some(mut stored) = existing else {
            return Err(ProvisioningError::NotFound(incoming.key));
        };
        incoming.description = stored.description.clone();
        incoming.name = stored.name.clone();
        incoming.scm_url = stored.scm_url.clone();
        incoming.bugtracker_space_requested = stored.bugtracker_space_requested;
        if stored.platform_runtime_requested {
            incoming.platform_runtime_requested = true;
        } else if incoming.platform_runtime_requested && !self.allow_platform_upgrade {
            return Err(ProvisioningError::UpgradeNotAllowed(incoming.key));
        }
        if stored.permissions.special_permission_set {
            incoming.permissions = stored.permissions.clone();
        }
        let provisioned = self.chain.run(ctx, incoming).await?;
        stored.scm_url = provisioned.scm_url;
        stored.quickstarters.extend(provisioned.quickstarters);
        stored.repositories.extend(provisioned.repositories);
        stored.last_execution_jobs = provisioned.last_execution_jobs;
        Ok(stored)
    }
}
