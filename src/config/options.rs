//! Store option partials and resolved snapshots
//!
//! [`StoreOptions`] is the sparse shape callers hand to `configure()`: any
//! subset of fields may be present. [`ResolvedOptions`] is the dense shape
//! every field resolves to, and doubles as the JSON representation of a
//! configurable store.

use crate::storage::driver::DriverSpec;
use serde::{Deserialize, Serialize};

/// Sparse configuration partial
///
/// Unset fields fall through to whatever layer sits below (instance
/// overrides fall through to the global configuration).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreOptions {
    /// Driver, or ordered driver fallback sequence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver: Option<DriverSpec>,
    /// Database name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Store name within the database
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_name: Option<String>,
    /// Schema version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<f64>,
    /// Size hint in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Human-readable description; never part of store identity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl StoreOptions {
    /// Create an empty partial
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether no field is set
    pub fn is_empty(&self) -> bool {
        self.driver.is_none()
            && self.name.is_none()
            && self.store_name.is_none()
            && self.version.is_none()
            && self.size.is_none()
            && self.description.is_none()
    }

    /// Set the driver field
    pub fn with_driver(mut self, driver: impl Into<DriverSpec>) -> Self {
        self.driver = Some(driver.into());
        self
    }

    /// Set the name field
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the store name field
    pub fn with_store_name(mut self, store_name: impl Into<String>) -> Self {
        self.store_name = Some(store_name.into());
        self
    }

    /// Set the version field
    pub fn with_version(mut self, version: f64) -> Self {
        self.version = Some(version);
        self
    }

    /// Set the size field
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the description field
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Fully resolved configuration snapshot
///
/// The driver field keeps the shape it was last set with (scalar or
/// sequence); normalization happens only for identity comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedOptions {
    /// Driver, or ordered driver fallback sequence
    pub driver: DriverSpec,
    /// Database name
    pub name: String,
    /// Store name within the database
    pub store_name: String,
    /// Schema version
    pub version: f64,
    /// Size hint in bytes
    pub size: u64,
    /// Human-readable description
    pub description: String,
}

impl ResolvedOptions {
    /// Merge a partial over this snapshot, field by field
    pub fn merge(&mut self, options: &StoreOptions) {
        if let Some(driver) = &options.driver {
            self.driver = driver.clone();
        }
        if let Some(name) = &options.name {
            self.name = name.clone();
        }
        if let Some(store_name) = &options.store_name {
            self.store_name = store_name.clone();
        }
        if let Some(version) = options.version {
            self.version = version;
        }
        if let Some(size) = options.size {
            self.size = size;
        }
        if let Some(description) = &options.description {
            self.description = description.clone();
        }
    }
}
