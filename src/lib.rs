//! Brunel: software-delivery project provisioning platform.
//!
//! This crate provides the core orchestration for provisioning a
//! software-delivery project: coordinating an issue tracker, a collaboration
//! space, a source-control host, and a job-execution platform into one
//! consistent project record.
//!
//! # Architecture
//!
//! Brunel follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (storage, mail, etc.)
//!
//! # Modules
//!
//! - [`config`]: provisioning policy settings
//! - [`project`]: project provisioning domain, ports, adapters, and services

pub mod config;
pub mod project;
