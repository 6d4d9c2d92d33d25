//! Core engine types: entity ids, RNG, configuration, errors.
//!
//! These are the building blocks every other module depends on. Nothing
//! here knows about sessions or presentation.

pub mod entity;
pub mod rng;
pub mod config;
pub mod error;

pub use entity::EntityId;
pub use rng::{GameRng, GameRngState};
pub use config::{ComparatorTiming, SessionConfig};
pub use error::{ConfigError, PersistenceError, SessionError};
