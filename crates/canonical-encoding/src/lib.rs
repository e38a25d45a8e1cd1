//! # Canonical Encoding
//!
//! Deterministic serialization of structured documents for world state.
//!
//! ## Role in System
//!
//! Every replica that executes the same registry operation must write the
//! same bytes for the same logical record. This crate is the only place those
//! bytes are produced.
//!
//! ## Encoding Rules
//!
//! | Node | Canonical text |
//! |------|----------------|
//! | Object | Keys sorted by code point at every level, last duplicate wins |
//! | Array | Elements in the given order |
//! | Number | Base-10, integral floats up to 2^53 printed as integers, no NaN/Inf |
//! | String | `serde_json` escaping |
//! | Null / Bool | `null`, `true`, `false` |
//!
//! No insignificant whitespace is ever emitted.
//!
//! ## Usage
//!
//! ```
//! use canonical_encoding::{to_canonical_string, Value};
//!
//! let a = Value::object([("b", Value::from(1_i64)), ("a", Value::Null)]);
//! let b = Value::object([("a", Value::Null), ("b", Value::from(1_i64))]);
//!
//! assert_eq!(to_canonical_string(&a).unwrap(), r#"{"a":null,"b":1}"#);
//! assert_eq!(to_canonical_string(&a).unwrap(), to_canonical_string(&b).unwrap());
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod encode;
pub mod errors;
pub mod number;
pub mod value;

pub use encode::{canonical_hash, keccak256, to_canonical_bytes, to_canonical_string, Hash, MAX_DEPTH};
pub use errors::{DecodeError, EncodeError};
pub use number::Number;
pub use value::{ToCanonical, Value};
