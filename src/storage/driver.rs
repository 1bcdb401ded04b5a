//! Driver catalog and the polymorphic driver field
//!
//! A store's driver configuration is either a single driver or an ordered
//! fallback sequence. Both shapes are preserved as set, and normalized to a
//! sequence only when deciding whether the resolved store identity changed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifiers for the storage drivers kvlayer knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Driver {
    /// Browser indexed database
    #[serde(rename = "indexed-database")]
    IndexedDb,
    /// Browser local storage
    #[serde(rename = "local-storage")]
    LocalStorage,
    /// Process-local in-memory storage
    #[serde(rename = "in-memory")]
    Memory,
}

impl Driver {
    /// Stable string identifier, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Driver::IndexedDb => "indexed-database",
            Driver::LocalStorage => "local-storage",
            Driver::Memory => "in-memory",
        }
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Driver field value: a single driver or an ordered fallback sequence
///
/// The shape is part of the observable configuration: a getter returns the
/// value exactly as it was last set. Normalization to a sequence happens only
/// inside [`DriverSpec::normalized`], which feeds store-identity comparison
/// and handle construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DriverSpec {
    /// A single driver with no fallback
    Single(Driver),
    /// Ordered fallback sequence, preferred driver first
    Sequence(Vec<Driver>),
}

impl DriverSpec {
    /// Normalize to an ordered sequence for identity comparison
    ///
    /// `Single(x)` and `Sequence([x])` normalize to the same value, so the
    /// two spellings never cause a spurious handle recreation.
    pub fn normalized(&self) -> Vec<Driver> {
        match self {
            DriverSpec::Single(driver) => vec![*driver],
            DriverSpec::Sequence(drivers) => drivers.clone(),
        }
    }
}

impl From<Driver> for DriverSpec {
    fn from(driver: Driver) -> Self {
        DriverSpec::Single(driver)
    }
}

impl From<Vec<Driver>> for DriverSpec {
    fn from(drivers: Vec<Driver>) -> Self {
        DriverSpec::Sequence(drivers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_normalizes_to_one_element_sequence() {
        let spec = DriverSpec::from(Driver::LocalStorage);
        assert_eq!(spec.normalized(), vec![Driver::LocalStorage]);
    }

    #[test]
    fn test_sequence_normalization_preserves_order() {
        let spec = DriverSpec::from(vec![Driver::LocalStorage, Driver::IndexedDb]);
        assert_eq!(
            spec.normalized(),
            vec![Driver::LocalStorage, Driver::IndexedDb]
        );
    }

    #[test]
    fn test_scalar_and_one_element_sequence_normalize_equal() {
        let scalar = DriverSpec::from(Driver::Memory);
        let sequence = DriverSpec::from(vec![Driver::Memory]);

        // Shapes stay distinct, normalized forms compare equal.
        assert_ne!(scalar, sequence);
        assert_eq!(scalar.normalized(), sequence.normalized());
    }

    #[test]
    fn test_driver_serializes_to_wire_identifier() {
        let json = serde_json::to_value(Driver::IndexedDb).unwrap();
        assert_eq!(json, serde_json::json!("indexed-database"));
        assert_eq!(Driver::IndexedDb.to_string(), "indexed-database");
    }

    #[test]
    fn test_driver_spec_serializes_untagged() {
        let scalar = serde_json::to_value(DriverSpec::from(Driver::Memory)).unwrap();
        assert_eq!(scalar, serde_json::json!("in-memory"));

        let sequence =
            serde_json::to_value(DriverSpec::from(vec![Driver::Memory, Driver::LocalStorage]))
                .unwrap();
        assert_eq!(sequence, serde_json::json!(["in-memory", "local-storage"]));
    }
}
