//! In-memory identity management.

use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::{Arc, PoisonError, RwLock};

use crate::project::{
    domain::ProjectRecord,
    ports::{IdentityPolicyAdapter, IdentityPolicyError},
};

/// Thread-safe in-memory identity policy.
///
/// Validates requested permission settings against seeded sets of known
/// users and groups.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIdentityPolicy {
    state: Arc<RwLock<IdentityState>>,
}

#[derive(Debug, Default)]
struct IdentityState {
    known_users: BTreeSet<String>,
    known_groups: BTreeSet<String>,
}

impl InMemoryIdentityPolicy {
    /// Creates an identity policy with no known users or groups.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a known user account.
    pub fn permit_user(&self, user: impl Into<String>) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .known_users
            .insert(user.into());
    }

    /// Registers a known group.
    pub fn permit_group(&self, group: impl Into<String>) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .known_groups
            .insert(group.into());
    }
}

#[async_trait]
impl IdentityPolicyAdapter for InMemoryIdentityPolicy {
    async fn validate_project_settings(
        &self,
        record: &ProjectRecord,
    ) -> Result<(), IdentityPolicyError> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        let permissions = &record.permissions;
        let mut violations = Vec::new();

        if let Some(user) = permissions.admin_user.as_deref() {
            if !state.known_users.contains(user) {
                violations.push(format!("unknown admin user '{user}'"));
            }
        }
        let groups = [
            ("admin", permissions.admin_group.as_deref()),
            ("user", permissions.user_group.as_deref()),
            ("readonly", permissions.readonly_group.as_deref()),
        ];
        for (label, group) in groups {
            if let Some(name) = group {
                if !state.known_groups.contains(name) {
                    violations.push(format!("unknown {label} group '{name}'"));
                }
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(IdentityPolicyError(violations.join("; ")))
        }
    }
}
