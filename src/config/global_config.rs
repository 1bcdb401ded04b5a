//! Global configuration management
//!
//! Provides the process-wide default configuration that every
//! [`ConfigurableStore`](crate::ConfigurableStore) falls back to for fields
//! without an instance override. The global configuration is mutable at any
//! time; proxies observe changes on their next field access.

use crate::config::options::{ResolvedOptions, StoreOptions};
use crate::storage::driver::{Driver, DriverSpec};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::sync::Arc;

/// Built-in default database name
pub const DEFAULT_NAME: &str = "kvlayer";

/// Built-in default store name
pub const DEFAULT_STORE_NAME: &str = "keyvaluepairs";

/// Built-in default schema version
pub const DEFAULT_VERSION: f64 = 1.0;

/// Built-in default size hint (bytes), sized for browser storage quotas
pub const DEFAULT_SIZE: u64 = 4_980_736;

static SHARED: Lazy<Arc<GlobalConfig>> = Lazy::new(|| Arc::new(GlobalConfig::new()));

/// Shared default configuration for kvlayer stores
///
/// Internally guarded by a lock so a single `Arc<GlobalConfig>` can be
/// handed to every proxy in the process and mutated from anywhere.
#[derive(Debug)]
pub struct GlobalConfig {
    inner: RwLock<ResolvedOptions>,
}

impl GlobalConfig {
    /// Create a configuration holding the built-in defaults
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Self::builtin_defaults()),
        }
    }

    /// The process-wide shared instance
    pub fn shared() -> Arc<Self> {
        Arc::clone(&SHARED)
    }

    fn builtin_defaults() -> ResolvedOptions {
        ResolvedOptions {
            driver: vec![Driver::IndexedDb, Driver::LocalStorage, Driver::Memory].into(),
            name: DEFAULT_NAME.to_string(),
            store_name: DEFAULT_STORE_NAME.to_string(),
            version: DEFAULT_VERSION,
            size: DEFAULT_SIZE,
            description: String::new(),
        }
    }

    /// Merge a partial into the global defaults
    ///
    /// `None` (and an all-unset partial) is a no-op; absent fields keep
    /// their prior values.
    pub fn configure(&self, options: Option<StoreOptions>) -> &Self {
        if let Some(options) = options {
            self.inner.write().merge(&options);
        }
        self
    }

    /// Snapshot of the current defaults
    pub fn snapshot(&self) -> ResolvedOptions {
        self.inner.read().clone()
    }

    /// Restore the built-in defaults (test teardown)
    pub fn reset(&self) {
        *self.inner.write() = Self::builtin_defaults();
    }

    /// Get the default driver configuration
    pub fn driver(&self) -> DriverSpec {
        self.inner.read().driver.clone()
    }

    /// Set the default driver configuration
    pub fn set_driver(&self, driver: impl Into<DriverSpec>) {
        self.inner.write().driver = driver.into();
    }

    /// Get the default database name
    pub fn name(&self) -> String {
        self.inner.read().name.clone()
    }

    /// Set the default database name
    pub fn set_name(&self, name: impl Into<String>) {
        self.inner.write().name = name.into();
    }

    /// Get the default store name
    pub fn store_name(&self) -> String {
        self.inner.read().store_name.clone()
    }

    /// Set the default store name
    pub fn set_store_name(&self, store_name: impl Into<String>) {
        self.inner.write().store_name = store_name.into();
    }

    /// Get the default schema version
    pub fn version(&self) -> f64 {
        self.inner.read().version
    }

    /// Set the default schema version
    pub fn set_version(&self, version: f64) {
        self.inner.write().version = version;
    }

    /// Get the default size hint
    pub fn size(&self) -> u64 {
        self.inner.read().size
    }

    /// Set the default size hint
    pub fn set_size(&self, size: u64) {
        self.inner.write().size = size;
    }

    /// Get the default description
    pub fn description(&self) -> String {
        self.inner.read().description.clone()
    }

    /// Set the default description
    pub fn set_description(&self, description: impl Into<String>) {
        self.inner.write().description = description.into();
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_defaults() {
        let config = GlobalConfig::new();

        assert_eq!(config.name(), DEFAULT_NAME);
        assert_eq!(config.store_name(), DEFAULT_STORE_NAME);
        assert_eq!(config.version(), DEFAULT_VERSION);
        assert_eq!(config.size(), DEFAULT_SIZE);
        assert_eq!(config.description(), "");
        assert_eq!(
            config.driver().normalized(),
            vec![Driver::IndexedDb, Driver::LocalStorage, Driver::Memory]
        );
    }

    #[test]
    fn test_configure_merges_partial() {
        let config = GlobalConfig::new();
        config.configure(Some(
            StoreOptions::new().with_name("merged").with_size(42),
        ));

        assert_eq!(config.name(), "merged");
        assert_eq!(config.size(), 42);
        // Untouched fields keep their defaults.
        assert_eq!(config.store_name(), DEFAULT_STORE_NAME);
    }

    #[test]
    fn test_configure_none_is_noop() {
        let config = GlobalConfig::new();
        let before = config.snapshot();

        config.configure(None);
        assert_eq!(config.snapshot(), before);
    }

    #[test]
    fn test_field_setters() {
        let config = GlobalConfig::new();

        config.set_driver(Driver::Memory);
        config.set_name("n");
        config.set_store_name("s");
        config.set_version(3.0);
        config.set_size(7);
        config.set_description("d");

        assert_eq!(config.driver(), DriverSpec::Single(Driver::Memory));
        assert_eq!(config.name(), "n");
        assert_eq!(config.store_name(), "s");
        assert_eq!(config.version(), 3.0);
        assert_eq!(config.size(), 7);
        assert_eq!(config.description(), "d");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let config = GlobalConfig::new();
        config.set_name("changed");

        config.reset();
        assert_eq!(config.name(), DEFAULT_NAME);
    }
}
