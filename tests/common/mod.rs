//! Shared fixtures for integration tests.

#![allow(dead_code)]

use rust_pairs::{
    AudioLog, ComparatorTiming, DeferredPresentation, EntityId, InstantPresentation, MatchRecord,
    MatchStore, MemoryStore, PersistenceError, Session, SessionConfig,
};
use tracing_subscriber::{fmt, EnvFilter};

/// Install a quiet test-writer subscriber. Safe to call from every test.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

/// A store whose appends always fail.
#[derive(Debug, Default)]
pub struct FailingStore {
    pub attempts: u32,
}

impl MatchStore for FailingStore {
    fn append(&mut self, _record: MatchRecord) -> Result<(), PersistenceError> {
        self.attempts += 1;
        Err(PersistenceError::Unavailable {
            reason: "disk full".to_string(),
        })
    }

    fn load_all(&self) -> Result<Vec<MatchRecord>, PersistenceError> {
        Ok(Vec::new())
    }

    fn clear(&mut self) -> Result<(), PersistenceError> {
        Ok(())
    }
}

pub type InstantSession = Session<InstantPresentation, AudioLog, MemoryStore>;
pub type DeferredSession = Session<DeferredPresentation, AudioLog, MemoryStore>;

/// 4x4, 8 faces, 60 seconds, default delays.
pub fn standard_config() -> SessionConfig {
    SessionConfig::new()
        .with_grid(4, 4)
        .with_time_limit(60.0)
        .with_seed(7)
}

pub fn instant_session(config: SessionConfig) -> InstantSession {
    init_logging();
    Session::start_session(config, InstantPresentation, AudioLog::new(), MemoryStore::new())
        .expect("valid config")
}

pub fn deferred_session(config: SessionConfig) -> DeferredSession {
    init_logging();
    Session::start_session(config, DeferredPresentation::new(), AudioLog::new(), MemoryStore::new())
        .expect("valid config")
}

/// Config with zero delays, so one `tick(0.0)` resolves every queued pair.
pub fn immediate_config() -> SessionConfig {
    standard_config().with_timing(ComparatorTiming::immediate())
}

/// Every pair on the board, each as `(lower id, higher id)`, in row-major order.
pub fn pairs<P, A, S>(session: &Session<P, A, S>) -> Vec<(EntityId, EntityId)>
where
    P: rust_pairs::Presentation,
    A: rust_pairs::AudioSink,
    S: MatchStore,
{
    let board = session.board().expect("board dealt");
    board
        .cards()
        .filter_map(|card| {
            let id = card.entity_id();
            let partner = board.partner_of(id)?;
            (id < partner).then_some((id, partner))
        })
        .collect()
}

/// Two cards with different faces.
pub fn mismatched<P, A, S>(session: &Session<P, A, S>) -> (EntityId, EntityId)
where
    P: rust_pairs::Presentation,
    A: rust_pairs::AudioSink,
    S: MatchStore,
{
    let pairs = pairs(session);
    (pairs[0].0, pairs[1].0)
}

/// Deliver every pending signal from a deferred presentation.
pub fn deliver_all(session: &mut DeferredSession) -> usize {
    let signals = session.presentation_mut().take_signals();
    signals
        .into_iter()
        .filter(|&signal| session.complete_transition(signal))
        .count()
}
