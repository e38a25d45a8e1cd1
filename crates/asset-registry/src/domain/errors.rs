//! # Domain Errors
//!
//! Error types for the asset registry.
//!
//! Store faults are carried through unchanged inside
//! [`RegistryError::Storage`]; the registry never retries.

use canonical_encoding::EncodeError;
use thiserror::Error;

/// Errors raised by registry operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegistryError {
    /// Register was called for an id that is already stored.
    #[error("El inmueble {id} ya existe")]
    AlreadyExists { id: String },

    /// The operation targets an id with no (or an empty) stored value.
    #[error("El inmueble {id} no existe")]
    NotFound { id: String },

    /// Opaque passthrough of a world state fault.
    #[error(transparent)]
    Storage(#[from] StoreError),

    /// The record could not be canonically encoded.
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodeError),

    /// A stored value could not be read back as an asset.
    #[error("El inmueble {id} no es un registro valido: {reason}")]
    MalformedRecord { id: String, reason: String },
}

impl RegistryError {
    /// Returns true for failures caused by the store collaborator.
    #[must_use]
    pub fn is_storage_failure(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

/// World state collaborator errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// I/O error during read/write.
    #[error("world state I/O error: {message}")]
    Io { message: String },

    /// Persisted data could not be read back.
    #[error("world state corruption: {message}")]
    Corruption { message: String },

    /// The write was refused by the store.
    #[error("world state rejected write for key {key}: {message}")]
    Rejected { key: String, message: String },
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io {
            message: err.to_string(),
        }
    }
}
