//! # Asset Registry Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── scenario.rs   # Register, read, sell, list end to end
//!     └── replicas.rs   # Independent replicas converge on identical bytes
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p registry-tests
//! cargo bench -p registry-tests
//! ```

pub mod integration;
