//! In-memory match store.

use tracing::{debug, instrument};

use super::{MatchRecord, MatchStore};
use crate::core::PersistenceError;

/// Keeps records in a `Vec`. Never fails.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    records: Vec<MatchRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored records without cloning.
    #[must_use]
    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl MatchStore for MemoryStore {
    #[instrument(skip(self, record), fields(summary = %record.summary))]
    fn append(&mut self, record: MatchRecord) -> Result<(), PersistenceError> {
        self.records.push(record);
        debug!(count = self.records.len(), "record stored");
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<MatchRecord>, PersistenceError> {
        Ok(self.records.clone())
    }

    fn clear(&mut self) -> Result<(), PersistenceError> {
        self.records.clear();
        Ok(())
    }
}
