//! # Inbound Ports (Driving Ports)
//!
//! The operations the hosting runtime invokes, one per unit of work.

use crate::domain::entities::{Asset, ListedEntry, Price};
use crate::domain::errors::RegistryError;
use canonical_encoding::Hash;

/// Primary API of the asset registry.
///
/// Every call is synchronous and self-contained: it reads what it needs from
/// the world state, writes at most one record per asset, and keeps nothing
/// afterwards. Concurrent callers rely on the store for isolation.
pub trait AssetRegistryApi {
    /// Write the fixed sample catalog.
    ///
    /// ## Errors
    ///
    /// - `Storage`: a write failed. Records written before the failure are
    ///   not rolled back here.
    fn seed(&mut self) -> Result<(), RegistryError>;

    /// Register a new asset with no owner and no price.
    ///
    /// ## Errors
    ///
    /// - `AlreadyExists`: `id` already holds a non-empty value
    /// - `Storage`: the store failed
    fn register(&mut self, id: &str, address: &str, builder_id: &str) -> Result<Asset, RegistryError>;

    /// Stored bytes for `id`, verbatim.
    ///
    /// ## Errors
    ///
    /// - `NotFound`: nothing (or an empty value) is stored under `id`
    fn get(&self, id: &str) -> Result<Vec<u8>, RegistryError>;

    /// True iff a non-empty value is stored under `id`. Never fails.
    fn exists(&self, id: &str) -> bool;

    /// Record a sale, returning the previous owner (`None` on first sale).
    ///
    /// ## Errors
    ///
    /// - `NotFound`: `id` is not registered; the store is left untouched
    /// - `MalformedRecord`: the stored value is not an asset
    /// - `Storage`: the store failed
    fn transfer(&mut self, id: &str, new_owner_id: &str, price: Price) -> Result<Option<String>, RegistryError>;

    /// Every entry of the namespace in store order.
    ///
    /// Values that do not decode as an asset come back as raw text.
    ///
    /// ## Errors
    ///
    /// - `Storage`: the scan could not be opened or advanced
    fn list_all(&self) -> Result<Vec<ListedEntry>, RegistryError>;

    /// Canonical JSON text of [`list_all`](Self::list_all).
    fn list_all_json(&self) -> Result<String, RegistryError>;

    /// Keccak-256 over the stored bytes of `id`.
    ///
    /// ## Errors
    ///
    /// - `NotFound`: nothing (or an empty value) is stored under `id`
    fn content_hash(&self, id: &str) -> Result<Hash, RegistryError>;
}
