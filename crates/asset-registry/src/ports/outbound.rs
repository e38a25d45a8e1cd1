//! # Outbound Ports (Driven Ports)
//!
//! The world state collaborator the registry runs against. The hosting
//! runtime supplies it and owns conflict detection, commit ordering and
//! durability; the registry only issues plain reads, writes and scans.

use crate::domain::errors::StoreError;
use std::fmt;

/// One key/value pair yielded by a range scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: Vec<u8>,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Abstract interface for world state operations.
///
/// Testing: `InMemoryWorldState`
/// Local persistence: `FileBackedWorldState`
pub trait WorldState: Send + Sync {
    /// Value stored under `key`, or `None`.
    ///
    /// An empty value is reported as `Some(vec![])`; callers decide what an
    /// empty value means.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Open a scan over `[start_key, end_key)`.
    ///
    /// An empty `start_key` means "from the first key" and an empty
    /// `end_key` means "to the last key", so `("", "")` covers the whole
    /// namespace.
    fn get_state_by_range(&self, start_key: &str, end_key: &str) -> Result<StateRange, StoreError>;
}

/// A finite, forward-only scan over world state.
///
/// Each call to `next` yields the following pair until the scan is
/// exhausted. A scan cannot be rewound; open a new one instead.
pub struct StateRange {
    inner: Box<dyn Iterator<Item = Result<KeyValue, StoreError>> + Send>,
}

impl StateRange {
    /// Wrap a store-specific iterator.
    pub fn new<I>(iter: I) -> Self
    where
        I: Iterator<Item = Result<KeyValue, StoreError>> + Send + 'static,
    {
        Self {
            inner: Box::new(iter),
        }
    }

    /// A scan over an already materialized point-in-time snapshot.
    #[must_use]
    pub fn from_snapshot(entries: Vec<KeyValue>) -> Self {
        Self::new(entries.into_iter().map(Ok))
    }

    /// A scan that yields nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_snapshot(Vec::new())
    }
}

impl Iterator for StateRange {
    type Item = Result<KeyValue, StoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl fmt::Debug for StateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateRange").finish_non_exhaustive()
    }
}
