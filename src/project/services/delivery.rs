//! Delivery chain coordinating SCM, platform, and job-runner provisioning.

use std::sync::Arc;

use crate::project::{
    context::RequestContext,
    domain::ProjectRecord,
    ports::{AdapterError, AdapterResult, BugtrackerAdapter, JobExecutionAdapter, ScmAdapter},
};

/// Runs the ordered sequence of delivery-platform side effects for a
/// project record.
///
/// The chain only acts when the record requests a platform runtime. A
/// record without an SCM URL first gets its SCM project, auxiliary
/// repositories, and platform projects created; component repositories,
/// bugtracker components, and quickstarter job executions follow in every
/// run. Steps are not compensated: a failure aborts the chain and leaves
/// earlier side effects in place.
#[derive(Clone)]
pub struct DeliveryChain {
    scm: Arc<dyn ScmAdapter>,
    jobs: Arc<dyn JobExecutionAdapter>,
    bugtracker: Arc<dyn BugtrackerAdapter>,
    auxiliary_repositories: Vec<String>,
}

impl DeliveryChain {
    /// Creates a chain over the given backends.
    ///
    /// `auxiliary_repositories` names the per-project support repositories
    /// created alongside a fresh SCM project.
    #[must_use]
    pub const fn new(
        scm: Arc<dyn ScmAdapter>,
        jobs: Arc<dyn JobExecutionAdapter>,
        bugtracker: Arc<dyn BugtrackerAdapter>,
        auxiliary_repositories: Vec<String>,
    ) -> Self {
        Self {
            scm,
            jobs,
            bugtracker,
            auxiliary_repositories,
        }
    }

    /// Runs the chain, returning the record enriched with the outcome of
    /// each step.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError`] when a backend call fails or when the SCM
    /// backend completes without reporting a project URL. Side effects
    /// performed before the failure are not rolled back.
    pub async fn run(
        &self,
        ctx: &RequestContext,
        record: ProjectRecord,
    ) -> AdapterResult<ProjectRecord> {
        if !record.platform_runtime_requested {
            tracing::debug!(
                correlation_id = %ctx.correlation_id(),
                project = %ctx.project_key(),
                "platform runtime not requested, skipping delivery chain"
            );
            return Ok(record);
        }
        let mut provisioned = record;
        if !provisioned.has_scm_url() {
            provisioned = self.scm.create_project(provisioned).await?;
            if !provisioned.has_scm_url() {
                return Err(AdapterError::missing_link("scm", "scm url"));
            }
            tracing::debug!(
                correlation_id = %ctx.correlation_id(),
                project = %ctx.project_key(),
                "scm project created, provisioning auxiliary repositories"
            );
            provisioned = self
                .scm
                .create_auxiliary_repositories(provisioned, &self.auxiliary_repositories)
                .await?;
            provisioned = self.jobs.create_platform_projects(provisioned).await?;
        }
        provisioned = self.scm.create_component_repositories(provisioned).await?;
        self.bugtracker
            .create_components_for_repositories(&provisioned)
            .await?;
        let executions = self.jobs.provision_from_quickstarters(&provisioned).await?;
        tracing::debug!(
            correlation_id = %ctx.correlation_id(),
            project = %ctx.project_key(),
            executions = executions.len(),
            "quickstarter provisioning jobs triggered"
        );
        provisioned
            .last_execution_jobs
            .extend(executions.into_iter().map(|execution| execution.permalink));
        Ok(provisioned)
    }
}
