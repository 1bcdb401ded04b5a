//! Storage layer for kvlayer
//!
//! This module defines the driver catalog, the store-identity model, the
//! handle factory seam, and the built-in in-memory backend.

pub mod driver;
pub mod factory;
pub mod memory;
pub mod store;

// Re-export commonly used items
pub use driver::{Driver, DriverSpec};
pub use factory::{MemoryFactory, StoreFactory};
pub use store::{Backend, StoreHandle, StoreIdentity};
