//! # Registry Service
//!
//! The application service implementing [`AssetRegistryApi`].
//!
//! ## Architecture
//!
//! This service:
//! 1. Takes the world state collaborator by injection at construction
//! 2. Runs each operation as a plain read-then-write sequence
//! 3. Writes every record through the canonical encoder
//! 4. Keeps no state of its own between operations


use crate::domain::entities::{Asset, ListedEntry, Price};
use crate::domain::errors::RegistryError;
use crate::domain::seed::seed_catalog;
use crate::ports::inbound::AssetRegistryApi;
use crate::ports::outbound::WorldState;
use canonical_encoding::{keccak256, to_canonical_bytes, to_canonical_string, Hash, ToCanonical, Value};
use tracing::{debug, info, warn};

/// Start and end bounds that select the whole namespace.
const FULL_NAMESPACE: (&str, &str) = ("", "");

/// Stored field names rewritten by a sale.
const FIELD_OWNER: &str = "propietarioDNI";
const FIELD_PRICE: &str = "ultimoPrecio";

/// The asset registry over a world state store.
pub struct RegistryService<S: WorldState> {
    store: S,
}

impl<S: WorldState> RegistryService<S> {
    /// Create a registry over `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutably borrow the underlying store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Give the store back.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Stored bytes for `id`, with empty values treated as absent.
    fn lookup(&self, id: &str) -> Result<Option<Vec<u8>>, RegistryError> {
        Ok(self.store.get_state(id)?.filter(|bytes| !bytes.is_empty()))
    }

    /// Canonically encode `document` and write it under `key`.
    fn put_document(&mut self, key: &str, document: &Value) -> Result<(), RegistryError> {
        let bytes = to_canonical_bytes(document)?;
        self.store.put_state(key, &bytes)?;
        Ok(())
    }
}

impl<S: WorldState> AssetRegistryApi for RegistryService<S> {
    fn seed(&mut self) -> Result<(), RegistryError> {
        let catalog = seed_catalog();
        for asset in &catalog {
            self.put_document(&asset.catastro_id, &asset.to_value())?;
        }
        info!("[registry] Seeded {} catalog assets", catalog.len());
        Ok(())
    }

    fn register(&mut self, id: &str, address: &str, builder_id: &str) -> Result<Asset, RegistryError> {
        if self.lookup(id)?.is_some() {
            return Err(RegistryError::AlreadyExists { id: id.to_string() });
        }

        let asset = Asset::new(id, address, builder_id);
        self.put_document(id, &asset.to_value())?;

        info!(id, builder = builder_id, "[registry] Asset registered");
        Ok(asset)
    }

    fn get(&self, id: &str) -> Result<Vec<u8>, RegistryError> {
        debug!(id, "[registry] Reading asset");
        self.lookup(id)?
            .ok_or_else(|| RegistryError::NotFound { id: id.to_string() })
    }

    fn exists(&self, id: &str) -> bool {
        match self.lookup(id) {
            Ok(found) => found.is_some(),
            Err(e) => {
                warn!(id, error = %e, "[registry] Existence check failed");
                false
            }
        }
    }

    fn transfer(&mut self, id: &str, new_owner_id: &str, price: Price) -> Result<Option<String>, RegistryError> {
        let bytes = self
            .lookup(id)?
            .ok_or_else(|| RegistryError::NotFound { id: id.to_string() })?;

        let malformed = |reason: String| RegistryError::MalformedRecord {
            id: id.to_string(),
            reason,
        };

        // The record must read as an asset, but fields outside the asset
        // shape are carried through the sale untouched.
        Asset::from_slice(&bytes).map_err(|e| malformed(e.to_string()))?;
        let mut document = Value::parse(&bytes).map_err(|e| malformed(e.to_string()))?;

        let previous_owner = document
            .get(FIELD_OWNER)
            .and_then(Value::as_str)
            .map(str::to_owned);
        document.insert(FIELD_OWNER, Value::from(new_owner_id));
        document.insert(FIELD_PRICE, Value::from(price));

        self.put_document(id, &document)?;

        info!(
            id,
            new_owner = new_owner_id,
            previous_owner = previous_owner.as_deref().unwrap_or("-"),
            price,
            "[registry] Asset transferred"
        );
        Ok(previous_owner)
    }

    fn list_all(&self) -> Result<Vec<ListedEntry>, RegistryError> {
        let (start, end) = FULL_NAMESPACE;
        let range = self.store.get_state_by_range(start, end)?;

        let mut entries = Vec::new();
        for item in range {
            let kv = item?;
            let entry = ListedEntry::from_stored(&kv.value);
            if matches!(entry, ListedEntry::RawText(_)) {
                warn!(key = %kv.key, "[registry] Entry is not an asset, listing raw text");
            }
            entries.push(entry);
        }

        debug!(count = entries.len(), "[registry] Listed world state");
        Ok(entries)
    }

    fn list_all_json(&self) -> Result<String, RegistryError> {
        let listing = Value::Array(self.list_all()?.iter().map(ToCanonical::to_value).collect());
        Ok(to_canonical_string(&listing)?)
    }

    fn content_hash(&self, id: &str) -> Result<Hash, RegistryError> {
        let bytes = self.get(id)?;
        Ok(keccak256(&bytes))
    }
}
