//! Audio notification sink.
//!
//! Fire-and-forget: the engine reports what happened and never waits on
//! or hears back from the sink.
//!
//! - `Flip` fires whenever a card starts flipping (reveal or hide)
//! - `Match` / `Mismatch` fire when the comparator resolves a pair

use serde::{Deserialize, Serialize};

/// Sound-worthy events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioEvent {
    Flip,
    Match,
    Mismatch,
}

/// Receives audio notifications.
pub trait AudioSink {
    fn notify(&mut self, event: AudioEvent);
}

impl<A: AudioSink + ?Sized> AudioSink for Box<A> {
    fn notify(&mut self, event: AudioEvent) {
        (**self).notify(event);
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn notify(&mut self, _event: AudioEvent) {}
}

/// Records events in order.
#[derive(Clone, Debug, Default)]
pub struct AudioLog {
    events: Vec<AudioEvent>,
}

impl AudioLog {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[AudioEvent] {
        &self.events
    }

    /// How many times `event` was heard.
    #[must_use]
    pub fn count(&self, event: AudioEvent) -> usize {
        self.events.iter().filter(|&&e| e == event).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl AudioSink for AudioLog {
    fn notify(&mut self, event: AudioEvent) {
        self.events.push(event);
    }
}
