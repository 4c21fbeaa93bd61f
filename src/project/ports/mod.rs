//! Port contracts for project provisioning.
//!
//! Ports define infrastructure-agnostic interfaces for every external
//! collaborator the provisioning services depend on. Each backend keeps a
//! single deployed implementation behind its trait so alternates can be
//! substituted without touching the orchestration.

pub mod bugtracker;
pub mod collaboration;
pub mod error;
pub mod identity;
pub mod job_definitions;
pub mod jobs;
pub mod notifier;
pub mod scm;
pub mod session;
pub mod storage;

pub use bugtracker::{BugtrackerAdapter, BugtrackerTemplate};
pub use collaboration::CollaborationAdapter;
pub use error::{AdapterError, AdapterResult};
pub use identity::{IdentityPolicyAdapter, IdentityPolicyError};
pub use job_definitions::{JobDefinition, JobDefinitionStore};
pub use jobs::{JobExecution, JobExecutionAdapter};
pub use notifier::{MailGateway, MailMessage, Notifier};
pub use scm::ScmAdapter;
pub use session::{AuthSessions, SessionScope, SessionToken};
pub use storage::ProjectStorage;
