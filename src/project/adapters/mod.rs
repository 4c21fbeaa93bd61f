//! Adapter implementations for the project provisioning ports.
//!
//! This module provides concrete implementations of the port contracts,
//! following hexagonal architecture principles. Adapters handle all
//! infrastructure concerns while the domain remains pure.
//!
//! # Available Adapters
//!
//! - [`memory`]: thread-safe in-memory collaborators for tests and embedded
//!   use
//! - [`fs::FsProjectStorage`]: JSON-file record storage over a capability
//!   directory
//! - [`mail::TemplatedMailNotifier`]: template-rendered notification bodies
//!   handed to a delivery gateway

pub mod fs;
pub mod mail;
pub mod memory;
