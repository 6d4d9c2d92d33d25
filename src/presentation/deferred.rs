//! A presentation that hands every signal back to the caller.

use std::collections::VecDeque;

use super::{CompletionSignal, Presentation, Transition};
use crate::board::Board;
use crate::cards::Card;
use crate::core::EntityId;

/// Leaves every flip pending and queues its signal.
///
/// The caller decides when each flip "finishes" by draining signals and
/// passing them to `Session::complete_transition`. Pulses and deals are
/// recorded for inspection.
#[derive(Clone, Debug, Default)]
pub struct DeferredPresentation {
    signals: VecDeque<CompletionSignal>,
    pulses: Vec<EntityId>,
    deals: u32,
}

impl DeferredPresentation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signals not yet taken, oldest first.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.signals.len()
    }

    /// Take the oldest pending signal.
    pub fn next_signal(&mut self) -> Option<CompletionSignal> {
        self.signals.pop_front()
    }

    /// Take every pending signal.
    pub fn take_signals(&mut self) -> Vec<CompletionSignal> {
        self.signals.drain(..).collect()
    }

    /// Cards that received a match pulse, in order.
    #[must_use]
    pub fn pulses(&self) -> &[EntityId] {
        &self.pulses
    }

    /// Number of boards dealt so far.
    #[must_use]
    pub fn deals(&self) -> u32 {
        self.deals
    }
}

impl Presentation for DeferredPresentation {
    fn board_dealt(&mut self, _board: &Board) {
        self.deals += 1;
    }

    fn reveal_card(&mut self, _card: &Card, signal: CompletionSignal) -> Transition {
        self.signals.push_back(signal);
        Transition::Pending
    }

    fn hide_card(&mut self, _card: &Card, signal: CompletionSignal) -> Transition {
        self.signals.push_back(signal);
        Transition::Pending
    }

    fn pulse_matched(&mut self, card: &Card) {
        self.pulses.push(card.entity_id());
    }
}
