//! Error types for kvlayer

use crate::storage::driver::Driver;
use thiserror::Error;

/// Main error type for kvlayer operations
#[derive(Error, Debug)]
pub enum KvLayerError {
    /// Driver-related errors
    #[error("No usable driver among: {requested:?}")]
    NoUsableDriver { requested: Vec<Driver> },

    /// Store construction errors
    #[error("Store creation failed: {reason}")]
    StoreCreation { reason: String },

    /// Serialization errors
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

impl KvLayerError {
    /// Create a new no usable driver error
    pub fn no_usable_driver(requested: Vec<Driver>) -> Self {
        Self::NoUsableDriver { requested }
    }

    /// Create a new store creation error
    pub fn store_creation(reason: impl Into<String>) -> Self {
        Self::StoreCreation {
            reason: reason.into(),
        }
    }
}

/// Result type alias for kvlayer operations
pub type Result<T> = std::result::Result<T, KvLayerError>;
