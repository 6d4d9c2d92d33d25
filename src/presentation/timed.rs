//! Simulated flip animations.

use super::{CompletionSignal, Presentation, Transition};
use crate::cards::Card;

/// Flips take a fixed time, driven by `advance`.
///
/// A flip is two halves (shrink to the edge, swap sprite, grow back), so
/// it completes after `2 * half_flip` seconds. Starting a new flip on a
/// card abandons the one already running on it.
#[derive(Clone, Debug)]
pub struct TimedPresentation {
    half_flip: f32,
    running: Vec<(CompletionSignal, f32)>,
}

impl Default for TimedPresentation {
    fn default() -> Self {
        Self::new(0.15)
    }
}

impl TimedPresentation {
    /// Create with the duration of one half of a flip, in seconds.
    pub fn new(half_flip: f32) -> Self {
        Self {
            half_flip: half_flip.max(0.0),
            running: Vec::new(),
        }
    }

    /// Full duration of one flip.
    #[must_use]
    pub fn flip_duration(&self) -> f32 {
        self.half_flip * 2.0
    }

    /// Number of flips still running.
    #[must_use]
    pub fn running(&self) -> usize {
        self.running.len()
    }

    /// Advance animations by `dt` seconds, returning the signals of flips
    /// that finished, in the order they were started.
    pub fn advance(&mut self, dt: f32) -> Vec<CompletionSignal> {
        let dt = dt.max(0.0);
        let mut finished = Vec::new();
        self.running.retain_mut(|(signal, remaining)| {
            *remaining -= dt;
            if *remaining <= 0.0 {
                finished.push(*signal);
                false
            } else {
                true
            }
        });
        finished
    }

    fn start(&mut self, signal: CompletionSignal) -> Transition {
        self.running.retain(|(running, _)| running.card() != signal.card());
        if self.half_flip <= 0.0 {
            return Transition::Complete;
        }
        self.running.push((signal, self.flip_duration()));
        Transition::Pending
    }
}

impl Presentation for TimedPresentation {
    fn reveal_card(&mut self, _card: &Card, signal: CompletionSignal) -> Transition {
        self.start(signal)
    }

    fn hide_card(&mut self, _card: &Card, signal: CompletionSignal) -> Transition {
        self.start(signal)
    }
}
