//! Serialization consistency tests
//!
//! The string form of a proxy must be exactly its JSON serialization, and
//! the JSON snapshot must agree with every individual getter.

use anyhow::Result;
use kvlayer::{ConfigurableStore, Driver, GlobalConfig, StoreOptions};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::Value;
use std::sync::Arc;

fn proxy() -> ConfigurableStore {
    ConfigurableStore::new(Arc::new(GlobalConfig::new()))
}

#[test]
fn to_string_is_the_json_serialization() -> Result<()> {
    let mut bc = proxy();
    assert_eq!(bc.to_string(), serde_json::to_string(&bc)?);

    bc.configure(Some(
        StoreOptions::new()
            .with_driver(vec![Driver::Memory, Driver::LocalStorage])
            .with_name("strings")
            .with_version(2.0),
    ));
    assert_eq!(bc.to_string(), serde_json::to_string(&bc)?);
    Ok(())
}

#[test]
fn json_snapshot_agrees_with_getters() -> Result<()> {
    let mut bc = proxy();
    bc.configure(Some(
        StoreOptions::new()
            .with_store_name("snap")
            .with_size(2048)
            .with_description("desc"),
    ));

    let json: Value = serde_json::to_value(bc.to_json())?;
    assert_eq!(json["driver"], serde_json::to_value(bc.driver())?);
    assert_eq!(json["name"], Value::from(bc.name()));
    assert_eq!(json["storeName"], Value::from(bc.store_name()));
    assert_eq!(json["version"], serde_json::to_value(bc.version())?);
    assert_eq!(json["size"], Value::from(bc.size()));
    assert_eq!(json["description"], Value::from(bc.description()));
    Ok(())
}

#[test]
fn json_snapshot_round_trips_through_configure() -> Result<()> {
    let mut source = proxy();
    source.configure(Some(
        StoreOptions::new().with_name("copied").with_version(4.0),
    ));

    // A snapshot applied to a sibling proxy yields the same resolved state.
    let snapshot = source.to_json();
    let mut sibling = proxy();
    sibling.configure(Some(StoreOptions {
        driver: Some(snapshot.driver.clone()),
        name: Some(snapshot.name.clone()),
        store_name: Some(snapshot.store_name.clone()),
        version: Some(snapshot.version),
        size: Some(snapshot.size),
        description: Some(snapshot.description.clone()),
    }));

    assert_eq!(sibling.to_json(), snapshot);
    Ok(())
}

proptest! {
    #[test]
    fn display_matches_json_for_any_overrides(
        name in "[a-zA-Z0-9_-]{1,24}",
        store_name in "[a-zA-Z0-9_-]{1,24}",
        version in 0.25f64..64.0,
        size in 1u64..16_000_000,
        description in "[ -~]{0,32}",
        scalar_driver in any::<bool>(),
    ) {
        let mut bc = proxy();
        let driver = if scalar_driver {
            Driver::Memory.into()
        } else {
            vec![Driver::IndexedDb, Driver::Memory].into()
        };

        bc.configure(Some(StoreOptions {
            driver: Some(driver),
            name: Some(name),
            store_name: Some(store_name),
            version: Some(version),
            size: Some(size),
            description: Some(description),
        }));

        prop_assert_eq!(bc.to_string(), serde_json::to_string(&bc).unwrap());
    }
}
