//! kvlayer - layered configuration over pluggable key/value storage
//!
//! kvlayer provides a small state-management core for key/value stores whose
//! identity is derived from configuration: a process-wide [`GlobalConfig`]
//! holds shared defaults, and any number of [`ConfigurableStore`] proxies
//! layer per-instance overrides on top of it. Each proxy owns a lazily built
//! storage handle that is recreated only when a configuration change actually
//! affects which logical store the handle points at.
//!
//! # Core Features
//!
//! - **Layered Resolution**: Field reads consult the instance override first
//!   and fall back to the live global value at access time
//! - **Lazy Recreation**: The storage handle is rebuilt only when a resolved
//!   store-identity field (driver, name, store name, version, size) changes
//! - **Driver Fallback Order**: The driver field accepts a single driver or
//!   an ordered fallback sequence, normalized for identity comparison
//! - **Pluggable Factories**: Handle construction goes through a
//!   [`StoreFactory`], so real storage engines plug in behind the same core
//!
//! # Example Usage
//!
//! ```rust
//! use kvlayer::{ConfigurableStore, GlobalConfig, StoreOptions};
//! use std::sync::Arc;
//!
//! let global = Arc::new(GlobalConfig::new());
//! global.set_name("my-app");
//!
//! let mut store = ConfigurableStore::new(global);
//! assert_eq!(store.name(), "my-app");
//!
//! // Per-instance override; the global default is untouched.
//! store.configure(Some(StoreOptions::new().with_store_name("sessions")));
//!
//! let handle = store.store()?;
//! handle.set_item("user", &"alice")?;
//! assert_eq!(handle.get_item::<String>("user")?.as_deref(), Some("alice"));
//! # Ok::<(), kvlayer::KvLayerError>(())
//! ```

pub mod config;
pub mod core;
pub mod storage;

// Re-export commonly used types
pub use crate::core::error::{KvLayerError, Result};

pub use config::{
    global_config::GlobalConfig,
    options::{ResolvedOptions, StoreOptions},
    proxy::ConfigurableStore,
};

pub use storage::{
    driver::{Driver, DriverSpec},
    factory::{MemoryFactory, StoreFactory},
    store::{StoreHandle, StoreIdentity},
};

/// Current version of kvlayer
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
