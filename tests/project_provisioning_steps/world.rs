//! Shared world state for project provisioning BDD scenarios.

use std::sync::Arc;

use brunel::config::ProvisioningSettings;
use brunel::project::{
    adapters::memory::{
        CountingAuthSessions, InMemoryBugtracker, InMemoryCollaboration, InMemoryIdentityPolicy,
        InMemoryJobDefinitionStore, InMemoryJobRunner, InMemoryProjectStorage, InMemoryScm,
        RecordingNotifier,
    },
    domain::{ProjectKey, ProjectRecord},
    error::ProvisioningResult,
    services::{ProvisioningAdapters, ProvisioningService},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestProvisioningService = ProvisioningService<DefaultClock>;

/// Scenario world for project provisioning behaviour tests.
pub struct ProvisioningWorld {
    /// The provisioning service under test.
    pub service: TestProvisioningService,
    /// Issue tracker backend handle for assertions.
    pub bugtracker: InMemoryBugtracker,
    /// Source control backend handle for assertions.
    pub scm: InMemoryScm,
    /// Record storage handle for assertions.
    pub storage: InMemoryProjectStorage,
    /// Session counter handle for assertions.
    pub sessions: CountingAuthSessions,
    /// Create request queued by a given step.
    pub pending_request: Option<ProjectRecord>,
    /// Key of the project the scenario works on.
    pub project_key: Option<ProjectKey>,
    /// Result of the last create or update call.
    pub last_outcome: Option<ProvisioningResult<ProjectRecord>>,
}

impl ProvisioningWorld {
    /// Creates a world whose service runs with the given settings.
    #[must_use]
    pub fn with_settings(settings: ProvisioningSettings) -> Self {
        let bugtracker = InMemoryBugtracker::new();
        let scm = InMemoryScm::new();
        let storage = InMemoryProjectStorage::new();
        let sessions = CountingAuthSessions::new();
        let adapters = ProvisioningAdapters {
            bugtracker: Arc::new(bugtracker.clone()),
            collaboration: Arc::new(InMemoryCollaboration::new()),
            scm: Arc::new(scm.clone()),
            jobs: Arc::new(InMemoryJobRunner::new()),
            identity: Arc::new(InMemoryIdentityPolicy::new()),
            storage: Arc::new(storage.clone()),
            notifier: Arc::new(RecordingNotifier::new()),
            job_definitions: Arc::new(InMemoryJobDefinitionStore::new()),
            sessions: Arc::new(sessions.clone()),
        };
        let service = ProvisioningService::new(adapters, settings, Arc::new(DefaultClock));
        Self {
            service,
            bugtracker,
            scm,
            storage,
            sessions,
            pending_request: None,
            project_key: None,
            last_outcome: None,
        }
    }

    /// Creates a world with default provisioning settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(ProvisioningSettings::default())
    }
}

impl Default for ProvisioningWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ProvisioningWorld {
    ProvisioningWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
