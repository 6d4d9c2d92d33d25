//! Persistence gateway for completed sessions.
//!
//! The session controller appends one [`MatchRecord`] per won session and
//! never reads the store back. The store's format is its own business.
//!
//! - [`MemoryStore`]: in-process, for tests and headless runs
//! - [`JsonFileStore`]: one JSON document holding the whole history

mod json_file;
mod memory;
mod record;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use record::{MatchHistory, MatchRecord};

use crate::core::PersistenceError;

/// Append-only store of match records.
pub trait MatchStore {
    /// Append one record.
    fn append(&mut self, record: MatchRecord) -> Result<(), PersistenceError>;

    /// Every record, in insertion order. Empty when nothing was stored.
    fn load_all(&self) -> Result<Vec<MatchRecord>, PersistenceError>;

    /// Remove every record.
    fn clear(&mut self) -> Result<(), PersistenceError>;
}

impl<S: MatchStore + ?Sized> MatchStore for Box<S> {
    fn append(&mut self, record: MatchRecord) -> Result<(), PersistenceError> {
        (**self).append(record)
    }

    fn load_all(&self) -> Result<Vec<MatchRecord>, PersistenceError> {
        (**self).load_all()
    }

    fn clear(&mut self) -> Result<(), PersistenceError> {
        (**self).clear()
    }
}
