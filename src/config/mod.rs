//! Layered configuration for kvlayer
//!
//! This module provides the shared global defaults, the sparse option
//! partials used for bulk configuration, and the per-instance proxy that
//! layers overrides over the global values.

pub mod global_config;
pub mod options;
pub mod proxy;

// Re-export commonly used items
pub use global_config::GlobalConfig;
pub use options::{ResolvedOptions, StoreOptions};
pub use proxy::ConfigurableStore;
