//! Unit tests for the project module.
//!
//! Tests are organised by layer: domain types, request validation, the
//! delivery chain, update reconciliation, the in-memory and templated
//! adapters, and the end-to-end provisioning service.

mod reconcile_tests;
