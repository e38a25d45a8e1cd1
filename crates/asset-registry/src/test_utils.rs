//! Test helpers: a world state that fails on demand.

use crate::adapters::InMemoryWorldState;
use crate::domain::errors::StoreError;
use crate::ports::outbound::{KeyValue, StateRange, WorldState};

/// Message carried by every injected failure.
pub const INJECTED_FAILURE: &str = "failed inserting key";

/// In-memory world state with switchable faults.
#[derive(Debug, Default)]
pub struct FaultyWorldState {
    pub inner: InMemoryWorldState,
    /// Reject every put.
    pub fail_puts: bool,
    /// Reject puts after this many have succeeded.
    pub fail_puts_after: Option<usize>,
    /// Fail every get.
    pub fail_gets: bool,
    /// Yield an error from the scan after this many entries.
    pub fail_scan_after: Option<usize>,
    /// Store this value instead of the given one on the next put.
    pub replace_next_put: Option<Vec<u8>>,
    puts: usize,
}

impl FaultyWorldState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_puts() -> Self {
        Self {
            fail_puts: true,
            ..Self::default()
        }
    }

    /// Number of puts that reached the inner store.
    pub fn successful_puts(&self) -> usize {
        self.puts
    }
}

impl WorldState for FaultyWorldState {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        if self.fail_gets {
            return Err(StoreError::Io {
                message: format!("read of {key} failed"),
            });
        }
        self.inner.get_state(key)
    }

    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let over_budget = self.fail_puts_after.is_some_and(|limit| self.puts >= limit);
        if self.fail_puts || over_budget {
            return Err(StoreError::Rejected {
                key: key.to_string(),
                message: INJECTED_FAILURE.to_string(),
            });
        }

        match self.replace_next_put.take() {
            Some(replacement) => self.inner.put_state(key, &replacement)?,
            None => self.inner.put_state(key, value)?,
        }
        self.puts += 1;
        Ok(())
    }

    fn get_state_by_range(&self, start_key: &str, end_key: &str) -> Result<StateRange, StoreError> {
        let entries: Vec<KeyValue> = self
            .inner
            .get_state_by_range(start_key, end_key)?
            .collect::<Result<_, _>>()?;

        let Some(limit) = self.fail_scan_after else {
            return Ok(StateRange::from_snapshot(entries));
        };

        let mut items: Vec<Result<KeyValue, StoreError>> =
            entries.into_iter().take(limit).map(Ok).collect();
        items.push(Err(StoreError::Io {
            message: "range iterator failed".to_string(),
        }));
        Ok(StateRange::new(items.into_iter()))
    }
}
