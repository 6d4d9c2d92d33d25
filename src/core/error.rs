//! Error types for session setup, persistence, and the session surface.

use std::path::PathBuf;

/// Invalid session configuration. Fatal to session start; no board is dealt.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("grid must have at least one row and one column, got {rows}x{columns}")]
    EmptyGrid { rows: u16, columns: u16 },

    #[error("grid {rows}x{columns} has an odd number of cells ({cells})")]
    OddCellCount { rows: u16, columns: u16, cells: u32 },

    #[error("face pool has {available} distinct faces, {required} pairs needed")]
    InsufficientFaces { required: u32, available: u32 },

    #[error("time limit must be a positive number of seconds, got {0}")]
    InvalidTimeLimit(f32),

    #[error("{name} must be a non-negative number of seconds, got {value}")]
    InvalidDelay { name: &'static str, value: f32 },

    #[error("malformed configuration document: {0}")]
    Malformed(String),
}

/// A persistence gateway operation failed.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not encode match history: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("stored match history at {} is corrupt: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("match store unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Errors surfaced by [`Session`](crate::session::Session) operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}
