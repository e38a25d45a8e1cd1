//! # Ports Layer
//!
//! Trait definitions between the registry and the outside world.
//!
//! - **Driving Port (Inbound)**: `AssetRegistryApi`
//! - **Driven Port (Outbound)**: `WorldState`

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
