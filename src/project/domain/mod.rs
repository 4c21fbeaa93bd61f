//! Domain model for project provisioning.
//!
//! The project domain models the central project record, its validated key,
//! and the quickstarter and repository metadata attached to it, keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod key;
mod quickstarter;
mod record;
mod repository;

pub use error::BlankProjectKey;
pub use key::ProjectKey;
pub use quickstarter::Quickstarter;
pub use record::{ProjectPermissions, ProjectRecord};
pub use repository::RepositoryInfo;
