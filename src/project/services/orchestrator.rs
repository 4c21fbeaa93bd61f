//! Top-level provisioning service.
//!
//! Sequences validation, collaborator side effects, persistence, and
//! notification for every entry point. Each mutating operation runs under
//! a scoped authentication session and an explicit request context; a
//! failure downstream of validation is logged once here, with correlation
//! data, before it surfaces to the caller.

use std::sync::Arc;

use mockable::Clock;
use serde::Serialize;

use crate::config::ProvisioningSettings;
use crate::project::{
    context::RequestContext,
    domain::{ProjectKey, ProjectRecord},
    error::{ProvisioningError, ProvisioningResult},
    ports::{
        AdapterError, AuthSessions, BugtrackerAdapter, CollaborationAdapter,
        IdentityPolicyAdapter, JobDefinitionStore, JobExecutionAdapter, Notifier, ProjectStorage,
        ScmAdapter, SessionScope,
    },
    services::{
        delivery::DeliveryChain,
        identity::IdentityPolicyChecker,
        reconcile::UpdateReconciler,
        validation::{ensure_create_request, shorten_description},
    },
};

/// Collaborator backends wired into the provisioning service.
///
/// Each backend sits behind its port trait so deployments can substitute
/// implementations without touching the orchestration.
#[derive(Clone)]
pub struct ProvisioningAdapters {
    /// Issue-tracker backend.
    pub bugtracker: Arc<dyn BugtrackerAdapter>,
    /// Collaboration-space backend.
    pub collaboration: Arc<dyn CollaborationAdapter>,
    /// Source-control backend.
    pub scm: Arc<dyn ScmAdapter>,
    /// Job-execution backend.
    pub jobs: Arc<dyn JobExecutionAdapter>,
    /// Identity-management backend.
    pub identity: Arc<dyn IdentityPolicyAdapter>,
    /// Project record persistence.
    pub storage: Arc<dyn ProjectStorage>,
    /// Outbound user notification.
    pub notifier: Arc<dyn Notifier>,
    /// Quickstarter job definition lookup.
    pub job_definitions: Arc<dyn JobDefinitionStore>,
    /// Per-request authentication sessions.
    pub sessions: Arc<dyn AuthSessions>,
}

/// Availability of a project name or key on the issue tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// No tracker project occupies the value.
    Available,
    /// The tracker already knows the value.
    Taken,
}

/// Template bindings resolved for a project type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectTypeTemplates {
    /// Tracker template in `templateTypeKey#templateKey` form.
    pub bugtracker_template: String,
    /// Collaboration space template key.
    pub collaboration_template: String,
}

/// Provisioning entry points coordinating the delivery backends.
///
/// Create and update requests run as one sequential pipeline of
/// collaborator calls. Requests against distinct keys may run
/// concurrently; writes against the same key are not serialized, so the
/// last write wins. The pipeline performs no compensation: artifacts
/// created before a failure stay in place, and a retried update resumes
/// from the last completed step because every creation step skips work
/// that already exists.
#[derive(Clone)]
pub struct ProvisioningService<C>
where
    C: Clock + Send + Sync,
{
    adapters: ProvisioningAdapters,
    chain: DeliveryChain,
    reconciler: UpdateReconciler,
    identity_checker: IdentityPolicyChecker,
    settings: ProvisioningSettings,
    clock: Arc<C>,
}

impl<C> ProvisioningService<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a provisioning service over the given backends and policy
    /// settings.
    #[must_use]
    pub fn new(
        adapters: ProvisioningAdapters,
        settings: ProvisioningSettings,
        clock: Arc<C>,
    ) -> Self {
        let chain = DeliveryChain::new(
            Arc::clone(&adapters.scm),
            Arc::clone(&adapters.jobs),
            Arc::clone(&adapters.bugtracker),
            settings.auxiliary_repositories.clone(),
        );
        let reconciler = UpdateReconciler::new(chain.clone(), settings.allow_platform_upgrade);
        let identity_checker = IdentityPolicyChecker::new(Arc::clone(&adapters.identity));
        Self {
            adapters,
            chain,
            reconciler,
            identity_checker,
            settings,
            clock,
        }
    }

    /// Provisions a new project end to end and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisioningError::InvalidRequest`] when the name is
    /// blank, [`ProvisioningError::AlreadyExists`] when a bugtracker space
    /// is requested and a record already occupies the key,
    /// [`ProvisioningError::IdentityPolicy`] when requested permissions
    /// violate policy, and [`ProvisioningError::Adapter`] when a
    /// collaborator fails or omits a required link.
    pub async fn create_project(
        &self,
        record: ProjectRecord,
    ) -> ProvisioningResult<ProjectRecord> {
        let ctx = RequestContext::for_project(record.key.clone());
        let session = SessionScope::acquire(self.adapters.sessions.as_ref());
        tracing::info!(
            correlation_id = %ctx.correlation_id(),
            project = %ctx.project_key(),
            session = %session.token(),
            "creating project"
        );
        let outcome = self.run_create(&ctx, record).await;
        if let Err(error) = &outcome {
            tracing::error!(
                correlation_id = %ctx.correlation_id(),
                project = %ctx.project_key(),
                %error,
                "project creation failed"
            );
        }
        outcome
    }

    /// Applies an update request to a stored project and returns the
    /// merged record.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisioningError::NotFound`] when no record is stored
    /// under the key, [`ProvisioningError::UpgradeNotAllowed`] when the
    /// update requests a platform upgrade while policy forbids it, and
    /// [`ProvisioningError::Adapter`] when a collaborator fails.
    pub async fn update_project(
        &self,
        record: ProjectRecord,
    ) -> ProvisioningResult<ProjectRecord> {
        let ctx = RequestContext::for_project(record.key.clone());
        let session = SessionScope::acquire(self.adapters.sessions.as_ref());
        tracing::info!(
            correlation_id = %ctx.correlation_id(),
            project = %ctx.project_key(),
            session = %session.token(),
            "updating project"
        );
        let outcome = self.run_update(&ctx, record).await;
        if let Err(error) = &outcome {
            tracing::error!(
                correlation_id = %ctx.correlation_id(),
                project = %ctx.project_key(),
                %error,
                "project update failed"
            );
        }
        outcome
    }

    /// Loads a stored project, decorating each quickstarter with the
    /// description of its job definition.
    ///
    /// The decoration is transient: the stored record is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisioningError::NotFound`] when no record is stored
    /// under the key and [`ProvisioningError::Adapter`] when storage or
    /// the job definition lookup fails.
    pub async fn project_by_key(&self, key: &ProjectKey) -> ProvisioningResult<ProjectRecord> {
        let Some(mut record) = self.adapters.storage.get(key).await? else {
            return Err(ProvisioningError::NotFound(key.clone()));
        };
        for quickstarter in &mut record.quickstarters {
            let Some(component_type) = quickstarter.component_type().map(str::to_owned) else {
                continue;
            };
            if let Some(definition) =
                self.adapters.job_definitions.lookup(&component_type).await?
            {
                quickstarter.set_component_description(definition.description);
            }
        }
        Ok(record)
    }

    /// Reports whether the issue tracker already uses the given project
    /// name.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisioningError::InvalidRequest`] when the name is
    /// blank and [`ProvisioningError::Adapter`] when the tracker call
    /// fails.
    pub async fn validate_name(&self, name: &str) -> ProvisioningResult<Availability> {
        self.tracker_availability(name, "project name must not be blank")
            .await
    }

    /// Reports whether the issue tracker already uses the given project
    /// key.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisioningError::InvalidRequest`] when the key is blank
    /// and [`ProvisioningError::Adapter`] when the tracker call fails.
    pub async fn validate_key(&self, key: &str) -> ProvisioningResult<Availability> {
        self.tracker_availability(key, "project key must not be blank")
            .await
    }

    /// Derives a candidate project key from a name using the issue
    /// tracker's algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisioningError::InvalidRequest`] when the name is
    /// blank and [`ProvisioningError::Adapter`] when the tracker call
    /// fails.
    pub async fn generate_key(&self, name: &str) -> ProvisioningResult<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ProvisioningError::InvalidRequest(
                "project name must not be blank".to_owned(),
            ));
        }
        Ok(self.adapters.bugtracker.build_project_key(trimmed).await?)
    }

    /// Returns the project template keys offered to clients.
    #[must_use]
    pub fn template_keys(&self) -> &[String] {
        &self.settings.project_template_keys
    }

    /// Resolves the tracker and collaboration templates bound to a
    /// project type.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisioningError::InvalidRequest`] when the type is
    /// blank and [`ProvisioningError::Adapter`] when a template lookup
    /// fails.
    pub async fn templates_for_type(
        &self,
        project_type: &str,
    ) -> ProvisioningResult<ProjectTypeTemplates> {
        let trimmed = project_type.trim();
        if trimmed.is_empty() {
            return Err(ProvisioningError::InvalidRequest(
                "project type must not be blank".to_owned(),
            ));
        }
        let tracker = self.adapters.bugtracker.project_template(trimmed).await?;
        let collaboration_template = self.adapters.collaboration.space_template(trimmed).await?;
        Ok(ProjectTypeTemplates {
            bugtracker_template: format!(
                "{}#{}",
                tracker.template_type_key, tracker.template_key
            ),
            collaboration_template,
        })
    }

    async fn run_create(
        &self,
        ctx: &RequestContext,
        mut record: ProjectRecord,
    ) -> ProvisioningResult<ProjectRecord> {
        ensure_create_request(&record)?;
        shorten_description(&mut record);
        self.identity_checker.check_if_requested(ctx, &record).await?;
        if record.bugtracker_space_requested {
            if self.adapters.storage.get(&record.key).await?.is_some() {
                return Err(ProvisioningError::AlreadyExists(record.key.clone()));
            }
            record = self.adapters.bugtracker.create_project(record).await?;
            if !record.has_bugtracker_url() {
                return Err(AdapterError::missing_link("bugtracker", "bugtracker url").into());
            }
            record = self.adapters.collaboration.create_space(record).await?;
            if !record.has_collaboration_space_url() {
                return Err(
                    AdapterError::missing_link("collaboration", "collaboration space url").into(),
                );
            }
        }
        record = self.chain.run(ctx, record).await?;
        self.adapters.bugtracker.add_shortcuts(&record).await?;
        let now = self.clock.utc();
        record.created_at = Some(now);
        record.last_updated_at = Some(now);
        let location = self.adapters.storage.store(&record).await?;
        tracing::info!(
            correlation_id = %ctx.correlation_id(),
            project = %ctx.project_key(),
            %location,
            "project record stored"
        );
        self.adapters.notifier.notify_users(&record).await?;
        Ok(record)
    }

    async fn run_update(
        &self,
        ctx: &RequestContext,
        record: ProjectRecord,
    ) -> ProvisioningResult<ProjectRecord> {
        let existing = self.adapters.storage.get(&record.key).await?;
        let mut merged = self.reconciler.reconcile(ctx, existing, record).await?;
        merged.last_updated_at = Some(self.clock.utc());
        if self.adapters.storage.update(&merged).await? {
            tracing::info!(
                correlation_id = %ctx.correlation_id(),
                project = %ctx.project_key(),
                "project record updated"
            );
        }
        self.adapters.notifier.notify_users(&merged).await?;
        Ok(merged)
    }

    async fn tracker_availability(
        &self,
        value: &str,
        blank_message: &str,
    ) -> ProvisioningResult<Availability> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ProvisioningError::InvalidRequest(blank_message.to_owned()));
        }
        if self.adapters.bugtracker.project_key_exists(trimmed).await? {
            return Ok(Availability::Taken);
        }
        Ok(Availability::Available)
    }
}
