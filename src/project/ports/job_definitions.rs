//! Lookup port for quickstarter job definitions.

use super::AdapterResult;
use async_trait::async_trait;

/// Metadata describing one quickstarter job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDefinition {
    /// Human-readable description of the component the job provisions.
    pub description: String,
}

/// Job definition lookup contract.
#[async_trait]
pub trait JobDefinitionStore: Send + Sync {
    /// Looks up the job definition registered for a component type.
    ///
    /// Returns `None` when no definition is registered for the type.
    async fn lookup(&self, component_type: &str) -> AdapterResult<Option<JobDefinition>>;
}
