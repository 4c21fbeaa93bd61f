//! Project record aggregate and its permission settings.

use super::{ProjectKey, Quickstarter, RepositoryInfo};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Access-control settings requested for a project.
///
/// Once a project is created with `special_permission_set`, the whole group
/// configuration is write-once: updates carry the stored values verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPermissions {
    /// Whether a project-specific permission set was requested.
    #[serde(default)]
    pub special_permission_set: bool,

    /// Account administering the project.
    #[serde(default)]
    pub admin_user: Option<String>,

    /// Group granted administrative access.
    #[serde(default)]
    pub admin_group: Option<String>,

    /// Group granted regular member access.
    #[serde(default)]
    pub user_group: Option<String>,

    /// Group granted read-only access.
    #[serde(default)]
    pub readonly_group: Option<String>,
}

/// Central project entity coordinated across the delivery backends.
///
/// A record is created by the provisioning service, merged on update, and
/// decorated (never mutated in storage) on read. Deletion is out of scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Unique upper-cased project identifier.
    pub key: ProjectKey,

    /// Descriptive project name, immutable after creation.
    #[serde(default)]
    pub name: String,

    /// Free-text description, shortened at ingestion time.
    #[serde(default)]
    pub description: Option<String>,

    /// Project type selecting template bindings.
    #[serde(default)]
    pub project_type: Option<String>,

    /// Whether an issue-tracker project and collaboration space must exist.
    /// Immutable after creation.
    #[serde(default)]
    pub bugtracker_space_requested: bool,

    /// Whether SCM and platform provisioning must exist. May go from `false`
    /// to `true` under the upgrade policy, never back.
    #[serde(default)]
    pub platform_runtime_requested: bool,

    /// Requested access-control settings.
    #[serde(default)]
    pub permissions: ProjectPermissions,

    /// Source-control project link, set once by the delivery chain.
    #[serde(default)]
    pub scm_url: Option<String>,

    /// Issue-tracker project link, set by tracker creation.
    #[serde(default)]
    pub bugtracker_url: Option<String>,

    /// Collaboration space link, set by space creation.
    #[serde(default)]
    pub collaboration_space_url: Option<String>,

    /// Provisioned repositories by repository name.
    #[serde(default)]
    pub repositories: BTreeMap<String, RepositoryInfo>,

    /// Requested automation components, in submission order.
    #[serde(default)]
    pub quickstarters: Vec<Quickstarter>,

    /// Permalinks of the provisioning jobs triggered by the latest run.
    #[serde(default)]
    pub last_execution_jobs: Vec<String>,

    /// When the record was first persisted.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the record was last persisted.
    #[serde(default)]
    pub last_updated_at: Option<DateTime<Utc>>,
}

impl ProjectRecord {
    /// Creates a record with the given key and name and every provisioning
    /// input unset.
    #[must_use]
    pub fn new(key: ProjectKey, name: impl Into<String>) -> Self {
        Self {
            key,
            name: name.into(),
            description: None,
            project_type: None,
            bugtracker_space_requested: false,
            platform_runtime_requested: false,
            permissions: ProjectPermissions::default(),
            scm_url: None,
            bugtracker_url: None,
            collaboration_space_url: None,
            repositories: BTreeMap::new(),
            quickstarters: Vec::new(),
            last_execution_jobs: Vec::new(),
            created_at: None,
            last_updated_at: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the project type.
    #[must_use]
    pub fn with_project_type(mut self, project_type: impl Into<String>) -> Self {
        self.project_type = Some(project_type.into());
        self
    }

    /// Sets whether an issue-tracker project and collaboration space are
    /// requested.
    #[must_use]
    pub const fn with_bugtracker_space_requested(mut self, requested: bool) -> Self {
        self.bugtracker_space_requested = requested;
        self
    }

    /// Sets whether SCM and platform provisioning are requested.
    #[must_use]
    pub const fn with_platform_runtime_requested(mut self, requested: bool) -> Self {
        self.platform_runtime_requested = requested;
        self
    }

    /// Sets the requested access-control settings.
    #[must_use]
    pub fn with_permissions(mut self, permissions: ProjectPermissions) -> Self {
        self.permissions = permissions;
        self
    }

    /// Appends a quickstarter.
    #[must_use]
    pub fn with_quickstarter(mut self, quickstarter: Quickstarter) -> Self {
        self.quickstarters.push(quickstarter);
        self
    }

    /// Returns `true` when the SCM project link is populated.
    #[must_use]
    pub fn has_scm_url(&self) -> bool {
        link_is_set(self.scm_url.as_deref())
    }

    /// Returns `true` when the issue-tracker project link is populated.
    #[must_use]
    pub fn has_bugtracker_url(&self) -> bool {
        link_is_set(self.bugtracker_url.as_deref())
    }

    /// Returns `true` when the collaboration space link is populated.
    #[must_use]
    pub fn has_collaboration_space_url(&self) -> bool {
        link_is_set(self.collaboration_space_url.as_deref())
    }
}

fn link_is_set(link: Option<&str>) -> bool {
    link.is_some_and(|value| !value.trim().is_empty())
}
