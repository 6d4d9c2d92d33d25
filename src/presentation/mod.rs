//! Presentation layer interface.
//!
//! The engine never renders anything. It tells the presentation layer when
//! a card should flip and waits for the flip to finish before the card's
//! state moves on:
//!
//! - `reveal_card` / `hide_card` receive a [`CompletionSignal`] and return
//!   [`Transition::Complete`] if the flip finished synchronously, or
//!   [`Transition::Pending`] if the host will hand the signal back later
//!   through [`Session::complete_transition`](crate::session::Session::complete_transition).
//! - `pulse_matched` is fire-and-forget.
//!
//! Signals carry the [`SessionEpoch`] they were issued under. A signal
//! delivered after a restart or a terminal transition is dropped.
//!
//! Three hosts ship with the crate:
//!
//! - [`InstantPresentation`]: every flip completes immediately
//! - [`DeferredPresentation`]: collects signals for the caller to deliver
//! - [`TimedPresentation`]: simulates flips of a fixed duration

mod deferred;
mod timed;

pub use deferred::DeferredPresentation;
pub use timed::TimedPresentation;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::cards::{Card, TransitionKind};
use crate::core::EntityId;
use crate::session::SessionEpoch;

/// Token the presentation returns when a flip it was asked for is done.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompletionSignal {
    epoch: SessionEpoch,
    card: EntityId,
    kind: TransitionKind,
}

impl CompletionSignal {
    pub(crate) fn new(epoch: SessionEpoch, card: EntityId, kind: TransitionKind) -> Self {
        Self { epoch, card, kind }
    }

    #[must_use]
    pub fn epoch(&self) -> SessionEpoch {
        self.epoch
    }

    #[must_use]
    pub fn card(&self) -> EntityId {
        self.card
    }

    #[must_use]
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }
}

/// Whether a requested flip already finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// Finished during the call; the signal will not be delivered.
    Complete,
    /// Running; the host delivers the signal when it finishes.
    Pending,
}

/// Renders card state changes.
pub trait Presentation {
    /// A new board was dealt (session start or restart).
    fn board_dealt(&mut self, _board: &Board) {}

    /// Flip a card face up.
    fn reveal_card(&mut self, card: &Card, signal: CompletionSignal) -> Transition;

    /// Flip a card face down.
    fn hide_card(&mut self, card: &Card, signal: CompletionSignal) -> Transition;

    /// Play the matched effect on a card.
    fn pulse_matched(&mut self, _card: &Card) {}
}

impl<P: Presentation + ?Sized> Presentation for Box<P> {
    fn board_dealt(&mut self, board: &Board) {
        (**self).board_dealt(board);
    }

    fn reveal_card(&mut self, card: &Card, signal: CompletionSignal) -> Transition {
        (**self).reveal_card(card, signal)
    }

    fn hide_card(&mut self, card: &Card, signal: CompletionSignal) -> Transition {
        (**self).hide_card(card, signal)
    }

    fn pulse_matched(&mut self, card: &Card) {
        (**self).pulse_matched(card);
    }
}

/// Presentation whose flips finish instantly. Useful headless.
#[derive(Clone, Copy, Debug, Default)]
pub struct InstantPresentation;

impl Presentation for InstantPresentation {
    fn reveal_card(&mut self, _card: &Card, _signal: CompletionSignal) -> Transition {
        Transition::Complete
    }

    fn hide_card(&mut self, _card: &Card, _signal: CompletionSignal) -> Transition {
        Transition::Complete
    }
}
