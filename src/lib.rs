//! # rust-pairs
//!
//! A session engine for the matching-pairs ("memory") card game.
//!
//! ## Design Principles
//!
//! 1. **Headless**: The engine owns the rules and the state. Rendering,
//!    sound, and storage are traits the host implements.
//!
//! 2. **Tick-Driven**: Nothing runs on its own. The host calls
//!    `Session::tick(dt)` each frame; delays and flip animations are
//!    budgets consumed by ticks and explicit completion signals.
//!
//! 3. **Deterministic**: Every deal comes from a seeded `GameRng`, so a
//!    seed reproduces the same sequence of boards.
//!
//! ## Architecture
//!
//! - **Single Owner**: The session owns cards and counters. The comparator
//!   mutates them only through `ComparisonHost`.
//!
//! - **Epoch Tokens**: Completion signals carry the epoch they were issued
//!   under. Restarts and terminal transitions advance the epoch, so late
//!   signals from a superseded board are dropped.
//!
//! - **Persistent Data Structures**: Board cards live in an `im::Vector`,
//!   making `Session::snapshot` an O(1) clone.
//!
//! ## Modules
//!
//! - `core`: Entity IDs, RNG, configuration, errors
//! - `cards`: Face identities and card state
//! - `board`: Grid layout and shuffled board generation
//! - `resolve`: Selection queue and pair comparator
//! - `session`: Session lifecycle and controller
//! - `presentation`: Flip/hide rendering interface
//! - `audio`: Sound event sink
//! - `persistence`: Match history storage
//! - `hud`: Display text for counters and history

pub mod core;
pub mod cards;
pub mod board;
pub mod resolve;
pub mod session;
pub mod presentation;
pub mod audio;
pub mod persistence;
pub mod hud;

// Re-export commonly used types
pub use crate::core::{
    EntityId, GameRng, GameRngState,
    ComparatorTiming, SessionConfig,
    ConfigError, PersistenceError, SessionError,
};

pub use crate::cards::{FaceId, Card, RevealState, TransitionKind};

pub use crate::board::{Board, GridPos, generate, generate_for};

pub use crate::resolve::{
    Comparator, ComparisonHost, IgnoreReason, Outcome, Pair,
    ResolutionStatus, Selection, SelectionQueue,
};

pub use crate::session::{Counters, Session, SessionEpoch, SessionSnapshot, SessionStatus};

pub use crate::presentation::{
    CompletionSignal, Presentation, Transition,
    InstantPresentation, DeferredPresentation, TimedPresentation,
};

pub use crate::audio::{AudioEvent, AudioSink, AudioLog, SilentAudio};

pub use crate::persistence::{JsonFileStore, MatchHistory, MatchRecord, MatchStore, MemoryStore};

pub use crate::hud::{HudText, RecordLine};
