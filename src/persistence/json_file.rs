//! JSON file match store.
//!
//! The whole history lives in one document:
//!
//! ```json
//! {
//!   "matches": [
//!     { "summary": "8/8", "moves_at_completion": 12, "elapsed_at_completion": 41.2 }
//!   ]
//! }
//! ```
//!
//! Every append rewrites the file through a temporary sibling and a rename,
//! so a crash mid-write leaves the previous history intact.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use super::{MatchHistory, MatchRecord, MatchStore};
use crate::core::PersistenceError;

/// Stores match history as JSON at a fixed path.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Use the file at `path`. It is created on the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn read_history(&self) -> Result<MatchHistory, PersistenceError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(MatchHistory::default()),
            Err(e) => return Err(self.io_error(e)),
        };
        serde_json::from_str(&json).map_err(|source| PersistenceError::Decode {
            path: self.path.clone(),
            source,
        })
    }

    fn write_history(&self, history: &MatchHistory) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let json = serde_json::to_string_pretty(history).map_err(PersistenceError::Encode)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))
    }
}

impl MatchStore for JsonFileStore {
    #[instrument(
        skip(self, record),
        fields(path = %self.path.display(), summary = %record.summary)
    )]
    fn append(&mut self, record: MatchRecord) -> Result<(), PersistenceError> {
        let mut history = self.read_history()?;
        history.matches.push(record);
        self.write_history(&history)?;
        debug!(count = history.matches.len(), "match history written");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load_all(&self) -> Result<Vec<MatchRecord>, PersistenceError> {
        Ok(self.read_history()?.matches)
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn clear(&mut self) -> Result<(), PersistenceError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("match history cleared");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}
