//! # Adapters Module
//!
//! World state stores implementing the outbound port.
//!
//! ## Modules
//!
//! - `storage`: in-memory and file-backed key/value stores

pub mod storage;

pub use storage::{FileBackedWorldState, InMemoryWorldState};
