//! Project provisioning for Brunel.
//!
//! This module coordinates an issue tracker, a collaboration space, a
//! source-control host, and a job-execution platform into one consistent
//! project record: deciding which side effects to perform, in what order,
//! with what conditional branching, and how to reconcile create and update
//! requests against previously persisted state. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//!
//! Correlation data travels through the pipeline as an explicit
//! [`context::RequestContext`] value rather than process-global state.

pub mod adapters;
pub mod context;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
