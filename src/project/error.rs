//! Error taxonomy for provisioning operations.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants that
//! can be inspected by callers. Validation and policy failures precede any
//! external side effect; collaborator failures are the catch-all for
//! everything downstream of validation.

use crate::project::domain::{BlankProjectKey, ProjectKey};
use crate::project::ports::{AdapterError, IdentityPolicyError};
use thiserror::Error;

/// Result type for provisioning service operations.
pub type ProvisioningResult<T> = Result<T, ProvisioningError>;

/// Errors surfaced by the provisioning service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProvisioningError {
    /// Mandatory request data is missing or malformed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// No stored project exists for the key.
    #[error("project not found: {0}")]
    NotFound(ProjectKey),

    /// A stored project already occupies the key.
    #[error("project already exists: {0}")]
    AlreadyExists(ProjectKey),

    /// The update requested a platform upgrade while policy forbids it.
    #[error("platform upgrade not allowed for project {0}")]
    UpgradeNotAllowed(ProjectKey),

    /// Requested access-control settings violate identity policy.
    #[error(transparent)]
    IdentityPolicy(#[from] IdentityPolicyError),

    /// A collaborator call failed or returned an incomplete result.
    #[error(transparent)]
    Adapter(#[from] AdapterError),
}

impl ProvisioningError {
    /// Returns the protocol-level failure class for this error.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::InvalidRequest(_) => FailureKind::BadRequest,
            Self::NotFound(_) => FailureKind::NotFound,
            Self::AlreadyExists(_) => FailureKind::Conflict,
            Self::UpgradeNotAllowed(_) | Self::IdentityPolicy(_) | Self::Adapter(_) => {
                FailureKind::Internal
            }
        }
    }
}

impl From<BlankProjectKey> for ProvisioningError {
    fn from(err: BlankProjectKey) -> Self {
        Self::InvalidRequest(err.to_string())
    }
}

/// Failure classes exposed to protocol layers.
///
/// Classifies errors without binding a transport; HTTP bindings map these
/// to 400, 404, 409, and 500 respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The request itself is unusable.
    BadRequest,
    /// The addressed project does not exist.
    NotFound,
    /// The request collides with existing state.
    Conflict,
    /// A collaborator or policy failure downstream of validation.
    Internal,
}
