//! Quickstarter entries describing requested automation components.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const COMPONENT_TYPE_KEY: &str = "component_type";
const COMPONENT_ID_KEY: &str = "component_id";
const COMPONENT_DESCRIPTION_KEY: &str = "component_description";

/// One requested automation component.
///
/// Quickstarters are open string maps on the wire; each carries at least a
/// `component_type` entry. The typed accessors cover the entries the
/// provisioning pipeline reads and writes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quickstarter(BTreeMap<String, String>);

impl Quickstarter {
    /// Creates a quickstarter of the given component type.
    #[must_use]
    pub fn of_type(component_type: impl Into<String>) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(COMPONENT_TYPE_KEY.to_owned(), component_type.into());
        Self(entries)
    }

    /// Adds an arbitrary entry.
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Sets the `component_id` entry.
    #[must_use]
    pub fn with_component_id(self, component_id: impl Into<String>) -> Self {
        self.with_entry(COMPONENT_ID_KEY, component_id)
    }

    /// Returns the component type, when present.
    #[must_use]
    pub fn component_type(&self) -> Option<&str> {
        self.get(COMPONENT_TYPE_KEY)
    }

    /// Returns the component identifier, when present.
    #[must_use]
    pub fn component_id(&self) -> Option<&str> {
        self.get(COMPONENT_ID_KEY)
    }

    /// Returns the transient component description, when present.
    #[must_use]
    pub fn component_description(&self) -> Option<&str> {
        self.get(COMPONENT_DESCRIPTION_KEY)
    }

    /// Attaches a human-readable component description.
    ///
    /// The description is decoration for read responses; it is never
    /// persisted by the provisioning pipeline.
    pub fn set_component_description(&mut self, description: impl Into<String>) {
        self.0
            .insert(COMPONENT_DESCRIPTION_KEY.to_owned(), description.into());
    }

    /// Returns an arbitrary entry by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}
