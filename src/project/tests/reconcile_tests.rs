//! Update reconciliation tests covering carry-over and merge rules.

use std::sync::Arc;

use rstest::rstest;

use super::fixtures::record;
use crate::project::{
    adapters::memory::{InMemoryBugtracker, InMemoryJobRunner, InMemoryScm},
    context::RequestContext,
    domain::{ProjectPermissions, Quickstarter, RepositoryInfo},
    error::ProvisioningError,
    services::{DeliveryChain, UpdateReconciler},
};

struct Backends {
    scm: InMemoryScm,
    jobs: InMemoryJobRunner,
    bugtracker: InMemoryBugtracker,
}

impl Backends {
    fn new() -> Self {
        Self {
            scm: InMemoryScm::new(),
            jobs: InMemoryJobRunner::new(),
            bugtracker: InMemoryBugtracker::new(),
        }
    }

    fn reconciler(&self, allow_platform_upgrade: bool) -> UpdateReconciler {
        let chain = DeliveryChain::new(
            Arc::new(self.scm.clone()),
            Arc::new(self.jobs.clone()),
            Arc::new(self.bugtracker.clone()),
            vec!["occonfig-artifacts".to_owned(), "design".to_owned()],
        );
        UpdateReconciler::new(chain, allow_platform_upgrade)
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reconcile_without_stored_record_fails_with_not_found() {
    let backends = Backends::new();
    let reconciler = backends.reconciler(false);
    let incoming = record("ghost", "Ghost Project");
    let ctx = RequestContext::for_project(incoming.key.clone());

    let result = reconciler.reconcile(&ctx, None, incoming).await;

    assert!(matches!(
        result,
        Err(ProvisioningError::NotFound(missing)) if missing.as_str() == "GHOST"
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stored_identity_fields_survive_an_update() {
    let backends = Backends::new();
    let reconciler = backends.reconciler(false);
    let mut stored = record("demo", "Stored Name").with_description("Stored description");
    stored.scm_url = Some("https://scm.example.com/projects/DEMO".to_owned());
    stored.bugtracker_space_requested = true;
    let incoming = record("demo", "Renamed").with_description("Rewritten");
    let ctx = RequestContext::for_project(incoming.key.clone());

    let merged = reconciler
        .reconcile(&ctx, Some(stored.clone()), incoming)
        .await
        .expect("reconcile");

    assert_eq!(merged.name, "Stored Name");
    assert_eq!(merged.description.as_deref(), Some("Stored description"));
    assert_eq!(merged.scm_url, stored.scm_url);
    assert!(merged.bugtracker_space_requested);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn platform_upgrade_is_rejected_while_policy_forbids_it() {
    let backends = Backends::new();
    let reconciler = backends.reconciler(false);
    let stored = record("demo", "Demo Project");
    let incoming = record("demo", "Demo Project").with_platform_runtime_requested(true);
    let ctx = RequestContext::for_project(incoming.key.clone());

    let result = reconciler.reconcile(&ctx, Some(stored), incoming).await;

    assert!(matches!(
        result,
        Err(ProvisioningError::UpgradeNotAllowed(denied)) if denied.as_str() == "DEMO"
    ));
    assert!(backends.scm.created_projects().is_empty());
    assert!(backends.jobs.platform_projects().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn platform_upgrade_provisions_when_policy_allows_it() {
    let backends = Backends::new();
    let reconciler = backends.reconciler(true);
    let stored = record("demo", "Demo Project");
    let incoming = record("demo", "Demo Project").with_platform_runtime_requested(true);
    let ctx = RequestContext::for_project(incoming.key.clone());

    let merged = reconciler
        .reconcile(&ctx, Some(stored), incoming)
        .await
        .expect("reconcile");

    assert!(merged.has_scm_url());
    assert_eq!(backends.scm.created_projects(), vec!["DEMO".to_owned()]);
    assert_eq!(backends.jobs.platform_projects(), vec!["DEMO".to_owned()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn provisioned_platform_runtime_cannot_be_switched_off() {
    let backends = Backends::new();
    let reconciler = backends.reconciler(false);
    let mut stored = record("demo", "Demo Project").with_platform_runtime_requested(true);
    stored.scm_url = Some("https://scm.example.com/projects/DEMO".to_owned());
    let incoming = record("demo", "Demo Project").with_platform_runtime_requested(false);
    let ctx = RequestContext::for_project(incoming.key.clone());

    let merged = reconciler
        .reconcile(&ctx, Some(stored), incoming)
        .await
        .expect("reconcile");

    assert!(merged.platform_runtime_requested);
    assert!(merged.has_scm_url());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn granted_special_permissions_ignore_update_values() {
    let backends = Backends::new();
    let reconciler = backends.reconciler(false);
    let granted = ProjectPermissions {
        special_permission_set: true,
        admin_user: Some("clarissa".to_owned()),
        admin_group: Some("demo-admins".to_owned()),
        user_group: Some("demo-users".to_owned()),
        readonly_group: Some("demo-readers".to_owned()),
    };
    let stored = record("demo", "Demo Project").with_permissions(granted.clone());
    let incoming = record("demo", "Demo Project").with_permissions(ProjectPermissions {
        special_permission_set: true,
        admin_user: Some("intruder".to_owned()),
        ..ProjectPermissions::default()
    });
    let ctx = RequestContext::for_project(incoming.key.clone());

    let merged = reconciler
        .reconcile(&ctx, Some(stored), incoming)
        .await
        .expect("reconcile");

    assert_eq!(merged.permissions, granted);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn quickstarters_append_and_repositories_union_on_merge() {
    let backends = Backends::new();
    let reconciler = backends.reconciler(false);
    let mut stored = record("demo", "Demo Project")
        .with_quickstarter(Quickstarter::of_type("python"));
    stored.repositories.insert(
        "a".to_owned(),
        RepositoryInfo::new().with_entry("clone_url", "https://old.example.com/a.git"),
    );
    stored.last_execution_jobs = vec!["https://jobs.example.com/executions/old".to_owned()];
    let mut incoming =
        record("demo", "Demo Project").with_quickstarter(Quickstarter::of_type("nodejs"));
    incoming.repositories.insert(
        "a".to_owned(),
        RepositoryInfo::new().with_entry("clone_url", "https://new.example.com/a.git"),
    );
    incoming.repositories.insert(
        "b".to_owned(),
        RepositoryInfo::new().with_entry("clone_url", "https://new.example.com/b.git"),
    );
    let ctx = RequestContext::for_project(incoming.key.clone());

    let merged = reconciler
        .reconcile(&ctx, Some(stored), incoming)
        .await
        .expect("reconcile");

    let quickstarter_types: Vec<_> = merged
        .quickstarters
        .iter()
        .filter_map(Quickstarter::component_type)
        .collect();
    assert_eq!(quickstarter_types, vec!["python", "nodejs"]);
    assert_eq!(merged.repositories.len(), 2);
    assert_eq!(
        merged
            .repositories
            .get("a")
            .and_then(|info| info.get("clone_url")),
        Some("https://new.example.com/a.git")
    );
    assert!(merged.repositories.contains_key("b"));
    assert!(merged.last_execution_jobs.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn chain_outcome_replaces_previous_execution_permalinks() {
    let backends = Backends::new();
    let reconciler = backends.reconciler(false);
    let mut stored = record("demo", "Demo Project").with_platform_runtime_requested(true);
    stored.scm_url = Some("https://scm.example.com/projects/DEMO".to_owned());
    stored.last_execution_jobs = vec!["https://jobs.example.com/executions/old".to_owned()];
    let incoming =
        record("demo", "Demo Project").with_quickstarter(Quickstarter::of_type("nodejs"));
    let ctx = RequestContext::for_project(incoming.key.clone());

    let merged = reconciler
        .reconcile(&ctx, Some(stored), incoming)
        .await
        .expect("reconcile");

    assert_eq!(merged.last_execution_jobs, backends.jobs.executions());
    assert_eq!(merged.last_execution_jobs.len(), 1);
    assert!(merged.repositories.contains_key("demo-nodejs"));
}
