//! # Asset Registry
//!
//! Registry of real-estate assets (inmuebles) kept in a replicated key-value
//! world state.
//!
//! ## Role in System
//!
//! - **State machine over the store**: every operation is one read-then-write
//!   unit of work against the [`WorldState`] collaborator
//! - **Deterministic writes**: records are written through `canonical-encoding`
//!   so honest replicas store byte-identical values
//! - **No caching**: nothing survives between operations except the store
//!
//! ## Operations
//!
//! | Operation | Writes | Errors |
//! |-----------|--------|--------|
//! | `seed` | Six catalog records tagged `docType = "inmueble"` | `Storage` |
//! | `register` | One new record, owner and price unset | `AlreadyExists`, `Storage` |
//! | `get` | - | `NotFound` |
//! | `exists` | - | - |
//! | `transfer` | Owner and price of one record | `NotFound`, `Storage` |
//! | `list_all` | - | `Storage` |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Asset entity, seed catalog, error types
//! - `ports/` - Inbound API trait, outbound world state trait
//! - `adapters/` - In-memory and file-backed world state stores
//! - `service/` - Application service implementing the API
//!
//! ## Usage
//!
//! ```
//! use asset_registry::{AssetRegistryApi, InMemoryWorldState, RegistryService};
//!
//! let mut registry = RegistryService::new(InMemoryWorldState::new());
//! registry.register("I00000", "Av de la Paloma 81", "C00000").unwrap();
//!
//! let previous = registry.transfer("I00000", "55555D", 200000.0).unwrap();
//! assert_eq!(previous, None);
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use adapters::{FileBackedWorldState, InMemoryWorldState};
pub use domain::entities::{Asset, ListedEntry, Price, DOC_TYPE_INMUEBLE};
pub use domain::errors::{RegistryError, StoreError};
pub use domain::seed::seed_catalog;
pub use ports::inbound::AssetRegistryApi;
pub use ports::outbound::{KeyValue, StateRange, WorldState};
pub use service::RegistryService;

pub use canonical_encoding::Hash;
