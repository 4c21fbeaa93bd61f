//! Step definitions for project provisioning BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
