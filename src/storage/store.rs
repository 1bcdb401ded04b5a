//! Store identity and the storage handle
//!
//! A [`StoreIdentity`] is the normalized subset of configuration the storage
//! engine needs to open a logical store. Two handles are interchangeable
//! exactly when their identities compare equal; the description field is
//! deliberately absent.

use crate::config::options::ResolvedOptions;
use crate::core::error::Result;
use crate::storage::driver::Driver;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// Normalized store-identity fields
///
/// Built from a resolved configuration with the driver field normalized to
/// an ordered sequence, so `driver = X` and `driver = [X]` produce equal
/// identities.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreIdentity {
    /// Ordered driver fallback sequence
    pub drivers: Vec<Driver>,
    /// Database name
    pub name: String,
    /// Store name within the database
    pub store_name: String,
    /// Schema version
    pub version: f64,
    /// Size hint in bytes
    pub size: u64,
}

impl StoreIdentity {
    /// Extract the identity fields from a resolved configuration
    pub fn from_resolved(resolved: &ResolvedOptions) -> Self {
        Self {
            drivers: resolved.driver.normalized(),
            name: resolved.name.clone(),
            store_name: resolved.store_name.clone(),
            version: resolved.version,
            size: resolved.size,
        }
    }
}

/// Raw key/value surface a storage backend must provide
///
/// Values cross the boundary as JSON documents; typed access lives on
/// [`StoreHandle`].
pub trait Backend: Send + Sync {
    /// Read a value
    fn get(&self, key: &str) -> Option<Value>;
    /// Write a value
    fn set(&self, key: &str, value: Value);
    /// Remove a value
    fn remove(&self, key: &str);
    /// Remove every value
    fn clear(&self);
    /// Number of stored values
    fn len(&self) -> usize;
    /// All stored keys, unordered
    fn keys(&self) -> Vec<String>;
}

/// Handle to an opened logical store
///
/// Records the identity it was built with so the owning proxy can tell
/// whether a configuration change requires a rebuild.
pub struct StoreHandle {
    identity: StoreIdentity,
    driver: Driver,
    backend: Box<dyn Backend>,
}

impl StoreHandle {
    /// Create a handle over a backend selected for `driver`
    pub fn new(identity: StoreIdentity, driver: Driver, backend: Box<dyn Backend>) -> Self {
        Self {
            identity,
            driver,
            backend,
        }
    }

    /// The identity this handle was constructed with
    pub fn identity(&self) -> &StoreIdentity {
        &self.identity
    }

    /// The driver that was selected from the fallback sequence
    pub fn driver(&self) -> Driver {
        self.driver
    }

    /// Store a serializable value under `key`
    pub fn set_item<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)?;
        self.backend.set(key, value);
        Ok(())
    }

    /// Fetch and deserialize the value under `key`
    pub fn get_item<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.backend.get(key) {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Remove the value under `key`
    pub fn remove_item(&self, key: &str) {
        self.backend.remove(key);
    }

    /// Remove every value in the store
    pub fn clear(&self) {
        self.backend.clear();
    }

    /// Number of stored values
    pub fn len(&self) -> usize {
        self.backend.len()
    }

    /// Check whether the store holds no values
    pub fn is_empty(&self) -> bool {
        self.backend.len() == 0
    }

    /// All stored keys, unordered
    pub fn keys(&self) -> Vec<String> {
        self.backend.keys()
    }
}

impl std::fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreHandle")
            .field("identity", &self.identity)
            .field("driver", &self.driver)
            .finish_non_exhaustive()
    }
}
