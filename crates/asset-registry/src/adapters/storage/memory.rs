use crate::domain::errors::StoreError;
use crate::ports::outbound::{StateRange, WorldState};
use std::collections::BTreeMap;

use super::scan_range;

/// In-memory world state for unit tests and embedding.
#[derive(Debug, Default, Clone)]
pub struct InMemoryWorldState {
    data: BTreeMap<String, Vec<u8>>,
}

impl InMemoryWorldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl WorldState for InMemoryWorldState {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.data.get(key).cloned())
    }

    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.data.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn get_state_by_range(&self, start_key: &str, end_key: &str) -> Result<StateRange, StoreError> {
        Ok(scan_range(&self.data, start_key, end_key))
    }
}
