//! In-memory adapter implementations for testing and embedded use.
//!
//! These adapters provide simple, thread-safe simulations of the external
//! collaborators so the full provisioning pipeline can be exercised without
//! network access. Each one records the calls it served for later
//! inspection.

mod bugtracker;
mod collaboration;
mod identity;
mod job_definitions;
mod jobs;
mod notifier;
mod scm;
mod sessions;
mod storage;

pub use bugtracker::InMemoryBugtracker;
pub use collaboration::InMemoryCollaboration;
pub use identity::InMemoryIdentityPolicy;
pub use job_definitions::InMemoryJobDefinitionStore;
pub use jobs::InMemoryJobRunner;
pub use notifier::{InMemoryMailGateway, RecordingNotifier};
pub use scm::InMemoryScm;
pub use sessions::CountingAuthSessions;
pub use storage::InMemoryProjectStorage;
