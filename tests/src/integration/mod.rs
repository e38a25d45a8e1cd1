//! # Integration Tests
//!
//! Cross-crate flows between the registry service, its stores and the
//! canonical encoder.

pub mod replicas;
pub mod scenario;
