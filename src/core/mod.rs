//! Core types for kvlayer

pub mod error;

// Re-export commonly used items
pub use error::{KvLayerError, Result};
