//! Store handle factories
//!
//! Handle construction is the seam between the configuration core and the
//! actual storage engines: the proxy resolves an identity and asks a factory
//! for a handle, at most once per rebuild.

use crate::core::error::{KvLayerError, Result};
use crate::storage::memory::MemoryBackend;
use crate::storage::store::{StoreHandle, StoreIdentity};
use tracing::trace;

/// Constructs storage handles from resolved store identities
pub trait StoreFactory: Send + Sync {
    /// Build a handle for `identity`
    ///
    /// # Errors
    ///
    /// Returns an error when none of the requested drivers can be served or
    /// the underlying engine fails to open the store.
    fn create(&self, identity: &StoreIdentity) -> Result<StoreHandle>;
}

/// Default factory serving every driver with the in-memory backend
///
/// Real storage engines sit behind their own [`StoreFactory`]
/// implementations; at this layer the driver sequence only selects which
/// identifier the handle reports.
#[derive(Debug, Default)]
pub struct MemoryFactory;

impl StoreFactory for MemoryFactory {
    fn create(&self, identity: &StoreIdentity) -> Result<StoreHandle> {
        let driver = identity
            .drivers
            .first()
            .copied()
            .ok_or_else(|| KvLayerError::no_usable_driver(identity.drivers.clone()))?;

        trace!(%driver, name = %identity.name, store_name = %identity.store_name, "creating store handle");

        Ok(StoreHandle::new(
            identity.clone(),
            driver,
            Box::new(MemoryBackend::new()),
        ))
    }
}
