//! The session controller.
//!
//! `Session` owns the board, the counters, the selection queue, the
//! comparator, and the injected collaborators. Hosts drive it with three
//! calls:
//!
//! - `select(card)` when the player picks a card
//! - `tick(dt)` once per frame
//! - `complete_transition(signal)` when a pending flip finishes
//!
//! ## Tick order
//!
//! 1. `elapsed += dt`
//! 2. The comparator consumes `dt`, capped at the time that was left
//!    before the deadline, applying any resolved pairs
//! 3. If every pair is found the session is Won, even if the time limit
//!    was crossed in this same tick
//! 4. Otherwise, if `elapsed > time_limit`, the session is Lost
//!
//! The cap means a pair whose delay would only finish after the deadline
//! is never resolved, even inside one long tick.
//!
//! Exactly one terminal transition happens per deal. Both freeze every
//! card, cancel the in-flight comparison, and advance the epoch so late
//! completion signals are dropped.

use tracing::{debug, info, warn};

use super::snapshot::SessionSnapshot;
use super::status::{Counters, SessionEpoch, SessionStatus};
use crate::audio::{AudioEvent, AudioSink};
use crate::board::{generate_for, Board};
use crate::cards::{Card, FaceId, TransitionKind};
use crate::core::{ConfigError, EntityId, GameRng, GameRngState, PersistenceError, SessionConfig};
use crate::hud::HudText;
use crate::persistence::{MatchRecord, MatchStore};
use crate::presentation::{CompletionSignal, Presentation, Transition};
use crate::resolve::{
    Comparator, ComparisonHost, IgnoreReason, Outcome, Pair, ResolutionStatus, Selection,
    SelectionQueue,
};

/// One play-through at a time, restartable.
pub struct Session<P, A, S> {
    config: SessionConfig,
    rng: GameRng,
    status: SessionStatus,
    setup_error: Option<ConfigError>,
    queue: SelectionQueue,
    comparator: Comparator,
    table: Table<P, A, S>,
}

/// Everything the comparator mutates, behind [`ComparisonHost`].
struct Table<P, A, S> {
    board: Option<Board>,
    counters: Counters,
    epoch: SessionEpoch,
    presentation: P,
    audio: A,
    store: S,
}

impl<P: Presentation, A: AudioSink, S: MatchStore> Session<P, A, S> {
    /// Create a session in `Setup`. Call [`start`](Self::start) to deal.
    pub fn new(config: SessionConfig, presentation: P, audio: A, store: S) -> Self {
        let rng = GameRng::new(config.seed);
        let comparator = Comparator::new(config.timing);
        Self {
            config,
            rng,
            status: SessionStatus::Setup,
            setup_error: None,
            queue: SelectionQueue::new(),
            comparator,
            table: Table {
                board: None,
                counters: Counters::default(),
                epoch: SessionEpoch::default(),
                presentation,
                audio,
                store,
            },
        }
    }

    /// Continue the deal sequence from a saved [`rng_state`](Self::rng_state).
    ///
    /// The next `start` deals the same board the saved session would have
    /// dealt on its next start or restart.
    #[must_use]
    pub fn with_rng_state(mut self, state: &GameRngState) -> Self {
        self.rng = GameRng::from_state(state);
        self
    }

    /// Create and start a session in one step.
    pub fn start_session(
        config: SessionConfig,
        presentation: P,
        audio: A,
        store: S,
    ) -> Result<Self, ConfigError> {
        let mut session = Self::new(config, presentation, audio, store);
        session.start()?;
        Ok(session)
    }

    /// Deal a fresh board and enter `Active`.
    ///
    /// On failure the session stays in `Setup` with no board, and the error
    /// is both returned and kept in [`setup_error`](Self::setup_error).
    pub fn start(&mut self) -> Result<(), ConfigError> {
        self.discard_board();

        let dealt = self
            .config
            .validate()
            .and_then(|()| generate_for(&self.config, &mut self.rng.fork()));

        let board = match dealt {
            Ok(board) => board,
            Err(e) => {
                warn!(error = %e, "session setup failed");
                self.status = SessionStatus::Setup;
                self.setup_error = Some(e.clone());
                return Err(e);
            }
        };

        self.table.counters = Counters::new(board.pairs_total());
        self.table.presentation.board_dealt(&board);
        self.table.board = Some(board);
        self.setup_error = None;
        self.status = SessionStatus::Active;

        info!(
            rows = self.config.rows,
            columns = self.config.columns,
            pairs = self.table.counters.pairs_total,
            time_limit = self.config.time_limit,
            epoch = %self.table.epoch,
            "session started"
        );
        Ok(())
    }

    /// Throw away the current board and deal again with the same configuration.
    pub fn restart(&mut self) -> Result<(), ConfigError> {
        info!(previous = ?self.status, "restarting session");
        self.start()
    }

    fn discard_board(&mut self) {
        self.comparator.cancel();
        self.queue.clear();
        self.table.board = None;
        self.table.counters = Counters::default();
        self.table.epoch = self.table.epoch.next();
    }

    /// Offer a card selection.
    ///
    /// Ignored (with a reason, never an error) unless the session is Active
    /// and the card is hidden, unmatched, and selectable.
    pub fn select(&mut self, card: EntityId) -> Selection {
        if !self.status.is_active() {
            return Selection::Ignored(IgnoreReason::SessionInactive);
        }

        let reason = match self.table.board.as_ref().and_then(|b| b.get(card)) {
            None => Some(IgnoreReason::UnknownCard),
            Some(c) => c.ineligibility(),
        };
        if let Some(reason) = reason {
            debug!(%card, ?reason, "selection ignored");
            return Selection::Ignored(reason);
        }

        self.table.reveal(card);
        let woke = self.queue.push(card);
        debug!(%card, queued = self.queue.len(), woke, "selection accepted");
        Selection::Accepted
    }

    /// Advance the session by `dt` seconds.
    ///
    /// Returns the status after the tick. A persistence failure while
    /// recording a win is returned as an error, but the session is Won
    /// regardless.
    pub fn tick(&mut self, dt: f32) -> Result<SessionStatus, PersistenceError> {
        if !self.status.is_active() {
            return Ok(self.status);
        }

        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        let remaining = (self.config.time_limit - self.table.counters.elapsed).max(0.0);
        self.table.counters.elapsed += dt;

        let budget = dt.min(remaining);
        for outcome in self.comparator.process(&mut self.queue, &mut self.table, budget) {
            let (pair, what) = match outcome {
                Outcome::Match(pair) => (pair, "pair matched"),
                Outcome::Mismatch(pair) => (pair, "pair mismatched"),
                Outcome::HideRequested(pair) => (pair, "hiding pair"),
            };
            debug!(first = %pair.first, second = %pair.second, "{what}");
        }

        if self.table.counters.all_found() {
            self.finish(SessionStatus::Won);
            return self.record_win().map(|()| self.status);
        }

        if self.table.counters.elapsed > self.config.time_limit {
            self.finish(SessionStatus::Lost);
        }

        Ok(self.status)
    }

    fn finish(&mut self, status: SessionStatus) {
        self.status = status;
        self.comparator.cancel();
        self.queue.clear();
        if let Some(board) = self.table.board.as_mut() {
            board.freeze_all();
        }
        self.table.epoch = self.table.epoch.next();

        let counters = self.table.counters;
        info!(
            ?status,
            moves = counters.moves,
            matches = %counters.summary(),
            elapsed = counters.elapsed,
            "session finished"
        );
    }

    fn record_win(&mut self) -> Result<(), PersistenceError> {
        let counters = self.table.counters;
        let record = MatchRecord::new(
            counters.matches_found,
            counters.pairs_total,
            counters.moves,
            counters.elapsed,
        );
        self.table.store.append(record).map_err(|e| {
            warn!(error = %e, "failed to record won session");
            e
        })
    }

    /// Deliver a finished flip from the presentation layer.
    ///
    /// Returns false if the signal was dropped: it belongs to a superseded
    /// board (older epoch), or the card is no longer running that transition.
    pub fn complete_transition(&mut self, signal: CompletionSignal) -> bool {
        if signal.epoch() != self.table.epoch {
            debug!(
                card = %signal.card(),
                epoch = %signal.epoch(),
                current = %self.table.epoch,
                "dropped stale completion"
            );
            return false;
        }

        let applied = self
            .table
            .board
            .as_mut()
            .and_then(|b| b.get_mut(signal.card()))
            .is_some_and(|card| card.finish_transition(signal.kind()));

        if !applied {
            debug!(card = %signal.card(), kind = ?signal.kind(), "ignored unexpected completion");
        }
        applied
    }

    // === Accessors ===

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn counters(&self) -> Counters {
        self.table.counters
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Why the last start failed, while the session is stuck in `Setup`.
    #[must_use]
    pub fn setup_error(&self) -> Option<&ConfigError> {
        self.setup_error.as_ref()
    }

    #[must_use]
    pub fn epoch(&self) -> SessionEpoch {
        self.table.epoch
    }

    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        self.table.board.as_ref()
    }

    #[must_use]
    pub fn card(&self, id: EntityId) -> Option<&Card> {
        self.board()?.get(id)
    }

    /// Selections waiting for a partner or for the comparator.
    #[must_use]
    pub fn queue(&self) -> &SelectionQueue {
        &self.queue
    }

    /// What the comparator is doing right now.
    #[must_use]
    pub fn resolution_status(&self) -> ResolutionStatus {
        self.comparator.status(&self.table)
    }

    /// Deal RNG state, for reproducing the next deal with
    /// [`with_rng_state`](Self::with_rng_state).
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// A consistent view of status, counters, and cards (O(1) clone).
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            status: self.status,
            epoch: self.table.epoch,
            counters: self.table.counters,
            cards: self.table.board.as_ref().map(Board::card_vector).unwrap_or_default(),
            pending_selections: self.queue.len(),
        }
    }

    /// HUD text for the current counters and status.
    #[must_use]
    pub fn hud(&self) -> HudText {
        HudText::new(&self.table.counters, self.status)
    }

    pub fn presentation(&self) -> &P {
        &self.table.presentation
    }

    pub fn presentation_mut(&mut self) -> &mut P {
        &mut self.table.presentation
    }

    pub fn audio(&self) -> &A {
        &self.table.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.table.audio
    }

    pub fn store(&self) -> &S {
        &self.table.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.table.store
    }
}

impl<P: Presentation, A: AudioSink, S> Table<P, A, S> {
    fn card_mut(&mut self, id: EntityId) -> &mut Card {
        self.board
            .as_mut()
            .and_then(|b| b.get_mut(id))
            .unwrap_or_else(|| panic!("{id} is not on the current board"))
    }

    fn card(&self, id: EntityId) -> &Card {
        self.board
            .as_ref()
            .and_then(|b| b.get(id))
            .unwrap_or_else(|| panic!("{id} is not on the current board"))
    }

    fn reveal(&mut self, id: EntityId) {
        let signal = CompletionSignal::new(self.epoch, id, TransitionKind::Reveal);
        self.card_mut(id).reveal();
        self.audio.notify(AudioEvent::Flip);

        if let Some(card) = self.board.as_mut().and_then(|b| b.get_mut(id)) {
            if self.presentation.reveal_card(card, signal) == Transition::Complete {
                card.finish_transition(TransitionKind::Reveal);
            }
        }
    }

    fn hide(&mut self, id: EntityId) {
        let signal = CompletionSignal::new(self.epoch, id, TransitionKind::Hide);
        self.card_mut(id).begin_hide();
        self.audio.notify(AudioEvent::Flip);

        if let Some(card) = self.board.as_mut().and_then(|b| b.get_mut(id)) {
            if self.presentation.hide_card(card, signal) == Transition::Complete {
                card.finish_transition(TransitionKind::Hide);
            }
        }
    }
}

impl<P: Presentation, A: AudioSink, S> ComparisonHost for Table<P, A, S> {
    fn face_of(&self, card: EntityId) -> FaceId {
        self.card(card).face()
    }

    fn reveal_settled(&self, card: EntityId) -> bool {
        self.card(card).transition() != Some(TransitionKind::Reveal)
    }

    fn apply_match(&mut self, pair: Pair) {
        assert_eq!(
            self.face_of(pair.first),
            self.face_of(pair.second),
            "match applied to cards with different faces"
        );

        for id in pair.ids() {
            self.card_mut(id).mark_matched();
            if let Some(card) = self.board.as_ref().and_then(|b| b.get(id)) {
                self.presentation.pulse_matched(card);
            }
        }

        self.counters.matches_found += 1;
        self.counters.moves += 1;
        assert!(
            self.counters.matches_found <= self.counters.pairs_total,
            "more matches than pairs on the board"
        );
        self.audio.notify(AudioEvent::Match);
    }

    fn apply_mismatch(&mut self, _pair: Pair) {
        self.counters.moves += 1;
        self.audio.notify(AudioEvent::Mismatch);
    }

    fn request_hide(&mut self, pair: Pair) {
        for id in pair.ids() {
            self.hide(id);
        }
    }
}
