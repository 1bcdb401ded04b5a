//! Per-instance configuration proxy over the global defaults
//!
//! [`ConfigurableStore`] is the layered-resolution core: every field read
//! consults the instance override first and falls back to the live global
//! value, and every identity-relevant write decides whether the owned
//! storage handle has gone stale. The handle itself is built lazily and
//! replaced only when the resolved store identity actually changed.

use crate::config::global_config::GlobalConfig;
use crate::config::options::{ResolvedOptions, StoreOptions};
use crate::core::error::Result;
use crate::storage::driver::DriverSpec;
use crate::storage::factory::{MemoryFactory, StoreFactory};
use crate::storage::store::{StoreHandle, StoreIdentity};
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Lifecycle of the owned storage handle
///
/// `Uninitialized` becomes `Fresh` on first access. A write that changes a
/// resolved store-identity field moves `Fresh` to `Stale`; the next access
/// rebuilds and the slot is `Fresh` again. Staleness is sticky: reverting
/// the configuration before the next access does not resurrect the old
/// handle.
enum HandleSlot {
    Uninitialized,
    Fresh(Arc<StoreHandle>),
    Stale,
}

/// Storage proxy with per-instance configuration overrides
///
/// Overrides are sparse: a field that was never set on the instance reads
/// through to the shared [`GlobalConfig`] at access time, so later global
/// changes stay visible until an override shadows them.
pub struct ConfigurableStore {
    global: Arc<GlobalConfig>,
    overrides: StoreOptions,
    factory: Arc<dyn StoreFactory>,
    slot: HandleSlot,
}

impl ConfigurableStore {
    /// Create a proxy over `global` using the in-memory factory
    pub fn new(global: Arc<GlobalConfig>) -> Self {
        Self::with_factory(global, Arc::new(MemoryFactory))
    }

    /// Create a proxy over `global` with a custom handle factory
    pub fn with_factory(global: Arc<GlobalConfig>, factory: Arc<dyn StoreFactory>) -> Self {
        Self {
            global,
            overrides: StoreOptions::default(),
            factory,
            slot: HandleSlot::Uninitialized,
        }
    }

    /// Bulk-apply overrides with setter semantics
    ///
    /// `None` (the "falsy" spelling) is a strict no-op: the proxy, its
    /// resolved configuration, and any cached handle are left untouched.
    pub fn configure(&mut self, options: Option<StoreOptions>) -> &mut Self {
        let Some(options) = options else {
            return self;
        };

        if let Some(driver) = options.driver {
            self.set_driver(driver);
        }
        if let Some(name) = options.name {
            self.set_name(name);
        }
        if let Some(store_name) = options.store_name {
            self.set_store_name(store_name);
        }
        if let Some(version) = options.version {
            self.set_version(version);
        }
        if let Some(size) = options.size {
            self.set_size(size);
        }
        if let Some(description) = options.description {
            self.set_description(description);
        }

        self
    }

    /// Resolved driver configuration, in the shape it was last set
    pub fn driver(&self) -> DriverSpec {
        self.overrides
            .driver
            .clone()
            .unwrap_or_else(|| self.global.driver())
    }

    /// Override the driver configuration
    pub fn set_driver(&mut self, driver: impl Into<DriverSpec>) {
        self.overrides.driver = Some(driver.into());
        self.identity_field_changed();
    }

    /// Resolved database name
    pub fn name(&self) -> String {
        self.overrides
            .name
            .clone()
            .unwrap_or_else(|| self.global.name())
    }

    /// Override the database name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.overrides.name = Some(name.into());
        self.identity_field_changed();
    }

    /// Resolved store name
    pub fn store_name(&self) -> String {
        self.overrides
            .store_name
            .clone()
            .unwrap_or_else(|| self.global.store_name())
    }

    /// Override the store name
    pub fn set_store_name(&mut self, store_name: impl Into<String>) {
        self.overrides.store_name = Some(store_name.into());
        self.identity_field_changed();
    }

    /// Resolved schema version
    pub fn version(&self) -> f64 {
        self.overrides.version.unwrap_or_else(|| self.global.version())
    }

    /// Override the schema version
    pub fn set_version(&mut self, version: f64) {
        self.overrides.version = Some(version);
        self.identity_field_changed();
    }

    /// Resolved size hint
    pub fn size(&self) -> u64 {
        self.overrides.size.unwrap_or_else(|| self.global.size())
    }

    /// Override the size hint
    pub fn set_size(&mut self, size: u64) {
        self.overrides.size = Some(size);
        self.identity_field_changed();
    }

    /// Resolved description
    pub fn description(&self) -> String {
        self.overrides
            .description
            .clone()
            .unwrap_or_else(|| self.global.description())
    }

    /// Override the description
    ///
    /// Description is cosmetic: it never invalidates the cached handle.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.overrides.description = Some(description.into());
    }

    /// Full resolved configuration, override-or-global per field
    pub fn to_json(&self) -> ResolvedOptions {
        ResolvedOptions {
            driver: self.driver(),
            name: self.name(),
            store_name: self.store_name(),
            version: self.version(),
            size: self.size(),
            description: self.description(),
        }
    }

    /// The storage handle for the current resolved configuration
    ///
    /// Built lazily on first access and after invalidation; while no
    /// identity field changes, repeated calls return the same `Arc`.
    ///
    /// # Errors
    ///
    /// Propagates factory failures, e.g. when no requested driver is
    /// usable.
    pub fn store(&mut self) -> Result<Arc<StoreHandle>> {
        if let HandleSlot::Fresh(handle) = &self.slot {
            return Ok(Arc::clone(handle));
        }

        let identity = StoreIdentity::from_resolved(&self.to_json());
        debug!(name = %identity.name, store_name = %identity.store_name, "building store handle");

        let handle = Arc::new(self.factory.create(&identity)?);
        self.slot = HandleSlot::Fresh(Arc::clone(&handle));
        Ok(handle)
    }

    /// Mark the handle stale if the resolved identity no longer matches
    /// what it was built with
    fn identity_field_changed(&mut self) {
        if let HandleSlot::Fresh(handle) = &self.slot {
            let identity = StoreIdentity::from_resolved(&self.to_json());
            if *handle.identity() != identity {
                debug!(name = %identity.name, store_name = %identity.store_name, "store identity changed, handle stale");
                self.slot = HandleSlot::Stale;
            }
        }
    }
}

impl Default for ConfigurableStore {
    fn default() -> Self {
        Self::new(GlobalConfig::shared())
    }
}

impl Serialize for ConfigurableStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl fmt::Display for ConfigurableStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(&self.to_json()).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl fmt::Debug for ConfigurableStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigurableStore")
            .field("overrides", &self.overrides)
            .field("resolved", &self.to_json())
            .finish_non_exhaustive()
    }
}
