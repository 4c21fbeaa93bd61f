//! Application services for project provisioning orchestration.

mod delivery;
mod identity;
mod orchestrator;
mod reconcile;
mod validation;

pub use delivery::DeliveryChain;
pub use identity::IdentityPolicyChecker;
pub use orchestrator::{
    Availability, ProjectTypeTemplates, ProvisioningAdapters, ProvisioningService,
};
pub use reconcile::UpdateReconciler;
pub use validation::{ensure_create_request, shorten_description};
