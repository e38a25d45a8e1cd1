//! # Canonical Encoder
//!
//! Turns a [`Value`] into the exact bytes written to world state.
//!
//! Two trees that are logically equal encode to identical bytes no matter in
//! which order their object fields were set. Replicas compare content hashes
//! of these bytes, so any instability here is a consensus failure.

use crate::errors::EncodeError;
use crate::value::Value;
use sha3::{Digest, Keccak256};
use std::collections::BTreeMap;

/// 32-byte content hash.
pub type Hash = [u8; 32];

/// Maximum nesting of arrays and objects.
pub const MAX_DEPTH: usize = 128;

// =============================================================================
// ENCODING
// =============================================================================

/// Encode `value` to canonical UTF-8 bytes.
pub fn to_canonical_bytes(value: &Value) -> Result<Vec<u8>, EncodeError> {
    to_canonical_string(value).map(String::into_bytes)
}

/// Encode `value` to canonical text.
pub fn to_canonical_string(value: &Value) -> Result<String, EncodeError> {
    let mut out = String::new();
    write_value(value, &mut out, 0)?;
    Ok(out)
}

fn write_value(value: &Value, out: &mut String, depth: usize) -> Result<(), EncodeError> {
    if depth > MAX_DEPTH {
        return Err(EncodeError::DepthExceeded { max: MAX_DEPTH });
    }

    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => n.write_canonical(out)?,
        Value::String(s) => write_string(s, out)?,
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, out, depth + 1)?;
            }
            out.push(']');
        }
        Value::Object(fields) => {
            // Byte order of UTF-8 strings is code point order.
            let sorted: BTreeMap<&str, &Value> =
                fields.iter().map(|(k, v)| (k.as_str(), v)).collect();

            out.push('{');
            for (i, (key, field)) in sorted.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(key, out)?;
                out.push(':');
                write_value(field, out, depth + 1)?;
            }
            out.push('}');
        }
    }
    Ok(())
}

fn write_string(s: &str, out: &mut String) -> Result<(), EncodeError> {
    let escaped = serde_json::to_string(s).map_err(|e| EncodeError::Serialization(e.to_string()))?;
    out.push_str(&escaped);
    Ok(())
}

// =============================================================================
// CONTENT HASH
// =============================================================================

/// Compute Keccak256 hash.
#[must_use]
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Keccak-256 of the canonical encoding of `value`.
pub fn canonical_hash(value: &Value) -> Result<Hash, EncodeError> {
    Ok(keccak256(&to_canonical_bytes(value)?))
}
