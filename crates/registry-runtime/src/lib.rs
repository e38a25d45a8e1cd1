//! # Registry Runtime
//!
//! Host process for the asset registry.
//!
//! ## Modular Structure
//!
//! - `container/` - Runtime configuration and store wiring
//! - `commands` - One registry operation per CLI invocation
//!
//! ## Startup Sequence
//!
//! 1. Parse CLI arguments
//! 2. Load configuration (defaults, then environment, then flags)
//! 3. Initialize logging
//! 4. Open the world state and seed it if configured and empty
//! 5. Run the requested operation and print its result

pub mod commands;
pub mod container;

pub use commands::{execute, Command, CommandOutput};
pub use container::{ConfigError, RegistryContainer, RuntimeConfig};
