//! Storage Adapters
//!
//! Implementations of the `WorldState` trait. Both keep keys in an ordered
//! map, so range scans yield keys in lexicographic byte order.

mod file;
mod memory;

pub use file::FileBackedWorldState;
pub use memory::InMemoryWorldState;

use crate::ports::outbound::{KeyValue, StateRange};
use std::collections::BTreeMap;
use std::ops::Bound;

/// Snapshot `[start_key, end_key)` of `data` into a scan. Empty bounds are open.
pub(crate) fn scan_range(data: &BTreeMap<String, Vec<u8>>, start_key: &str, end_key: &str) -> StateRange {
    // BTreeMap::range panics on inverted bounds.
    if !start_key.is_empty() && !end_key.is_empty() && start_key > end_key {
        return StateRange::empty();
    }

    let lower = if start_key.is_empty() {
        Bound::Unbounded
    } else {
        Bound::Included(start_key)
    };
    let upper = if end_key.is_empty() {
        Bound::Unbounded
    } else {
        Bound::Excluded(end_key)
    };

    let snapshot: Vec<KeyValue> = data
        .range::<str, _>((lower, upper))
        .map(|(k, v)| KeyValue::new(k.as_str(), v.clone()))
        .collect();
    StateRange::from_snapshot(snapshot)
}
