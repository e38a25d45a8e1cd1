//! # Value Tree
//!
//! Explicit tagged tree of the documents kept in world state. Record types
//! convert into this tree through [`ToCanonical`]; nothing is encoded by
//! reflecting over arbitrary structs.

use crate::errors::DecodeError;
use crate::number::Number;
use std::collections::BTreeMap;

/// A structured document.
///
/// Objects keep fields in the order they were set. Ordering only becomes
/// canonical on encode (or after [`Value::canonicalize`]).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(Vec<(String, Value)>),
}

/// Conversion of a record type into the value tree.
pub trait ToCanonical {
    /// Build the document for this record.
    fn to_value(&self) -> Value;
}

impl Value {
    /// Build an object from `(key, value)` pairs, keeping their order.
    pub fn object<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Set `key` on an object. Replaces an existing entry in place.
    ///
    /// Returns `false` when `self` is not an object.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> bool {
        let Value::Object(fields) = self else {
            return false;
        };
        let key = key.into();
        match fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => fields.push((key, value)),
        }
        true
    }

    /// Look up a field of an object. The last entry wins on duplicates.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(fields) => fields.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Borrow as a string leaf.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Recursively sort object keys by code point and drop shadowed
    /// duplicates. Array order is preserved.
    #[must_use]
    pub fn canonicalize(self) -> Self {
        match self {
            Value::Array(items) => Value::Array(items.into_iter().map(Value::canonicalize).collect()),
            Value::Object(fields) => {
                let sorted: BTreeMap<String, Value> = fields
                    .into_iter()
                    .map(|(k, v)| (k, v.canonicalize()))
                    .collect();
                Value::Object(sorted.into_iter().collect())
            }
            leaf => leaf,
        }
    }

    /// Parse stored bytes into a tree.
    pub fn parse(bytes: &[u8]) -> Result<Self, DecodeError> {
        let json: serde_json::Value = serde_json::from_slice(bytes)?;
        Ok(Value::from(json))
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(Number::from(&n)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(Number::Int(n))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(Number::UInt(n))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Number(Number::Float(f))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}
