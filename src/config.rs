//! Provisioning policy settings.
//!
//! Deployment-tunable knobs consumed by the provisioning services. The
//! settings deserialize from configuration files with sensible defaults, so
//! an empty document yields a working policy.

use serde::Deserialize;

/// Policy settings injected into the provisioning services.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProvisioningSettings {
    /// Whether an update may switch platform runtime provisioning on for a
    /// project that was created without it.
    #[serde(default)]
    pub allow_platform_upgrade: bool,

    /// Repositories created alongside every new SCM project, in creation
    /// order.
    #[serde(default = "default_auxiliary_repositories")]
    pub auxiliary_repositories: Vec<String>,

    /// Project template keys offered to clients.
    #[serde(default = "default_project_template_keys")]
    pub project_template_keys: Vec<String>,
}

impl Default for ProvisioningSettings {
    fn default() -> Self {
        Self {
            allow_platform_upgrade: false,
            auxiliary_repositories: default_auxiliary_repositories(),
            project_template_keys: default_project_template_keys(),
        }
    }
}

fn default_auxiliary_repositories() -> Vec<String> {
    vec!["occonfig-artifacts".to_owned(), "design".to_owned()]
}

fn default_project_template_keys() -> Vec<String> {
    vec!["default".to_owned()]
}
