//! # Domain Layer
//!
//! Pure domain logic for the asset registry. No store access happens here.
//!
//! ## Modules
//!
//! - `entities` - Asset record and listing entries
//! - `errors` - Registry and store error types
//! - `seed` - Fixed catalog written by the seed operation

pub mod entities;
pub mod errors;
pub mod seed;
