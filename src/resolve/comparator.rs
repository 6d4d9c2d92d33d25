//! The comparator state machine.
//!
//! ```text
//!            take_pair                  settle delay elapsed
//!   Idle ───────────────▶ Settling ─── and reveals complete ──┐
//!    ▲                                                        │
//!    │ request_hide              faces equal: apply_match ◀───┤
//!    │                                                        │
//!   HideDelay ◀──────────── faces differ: apply_mismatch ◀────┘
//! ```
//!
//! `process` consumes a time budget. Within one call it keeps resolving
//! pairs for as long as the budget lasts, so a long tick may resolve
//! several queued pairs in order. Time spent waiting on a reveal signal
//! is not banked.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::queue::SelectionQueue;
use super::{ComparisonHost, Pair};
use crate::core::ComparatorTiming;

/// Delays shorter than this count as elapsed (absorbs f32 rounding).
const DELAY_EPSILON: f32 = 1e-5;

/// What a `process` call resolved, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The pair matched.
    Match(Pair),
    /// The pair did not match; a hide will follow.
    Mismatch(Pair),
    /// Both cards of a mismatched pair were asked to hide.
    HideRequested(Pair),
}

/// Externally visible comparator state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionStatus {
    /// Nothing in flight.
    Idle,
    /// A pair is waiting out the settle delay.
    Settling(Pair),
    /// The settle delay is over but a reveal has not reported completion.
    AwaitingReveal(Pair),
    /// A mismatched pair is waiting out the hide delay.
    HideDelay(Pair),
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
enum Phase {
    Idle,
    Settling { pair: Pair, remaining: f32 },
    HideDelay { pair: Pair, remaining: f32 },
}

/// Sequential pair resolver. At most one pair is in flight.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Comparator {
    timing: ComparatorTiming,
    phase: Phase,
}

impl Comparator {
    /// Create an idle comparator.
    pub fn new(timing: ComparatorTiming) -> Self {
        Self {
            timing,
            phase: Phase::Idle,
        }
    }

    #[must_use]
    pub fn timing(&self) -> ComparatorTiming {
        self.timing
    }

    /// The pair currently being resolved.
    #[must_use]
    pub fn in_flight(&self) -> Option<Pair> {
        match self.phase {
            Phase::Idle => None,
            Phase::Settling { pair, .. } | Phase::HideDelay { pair, .. } => Some(pair),
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Current state, consulting the host for reveal completion.
    pub fn status(&self, host: &impl ComparisonHost) -> ResolutionStatus {
        match self.phase {
            Phase::Idle => ResolutionStatus::Idle,
            Phase::Settling { pair, remaining } if remaining > DELAY_EPSILON => {
                ResolutionStatus::Settling(pair)
            }
            Phase::Settling { pair, .. } => {
                if reveals_settled(host, pair) {
                    ResolutionStatus::Settling(pair)
                } else {
                    ResolutionStatus::AwaitingReveal(pair)
                }
            }
            Phase::HideDelay { pair, .. } => ResolutionStatus::HideDelay(pair),
        }
    }

    /// Advance by `dt` seconds, resolving as many pairs as the budget allows.
    pub fn process(
        &mut self,
        queue: &mut SelectionQueue,
        host: &mut impl ComparisonHost,
        dt: f32,
    ) -> SmallVec<[Outcome; 2]> {
        let mut budget = dt.max(0.0);
        let mut outcomes = SmallVec::new();

        loop {
            match self.phase {
                Phase::Idle => {
                    if !queue.is_running() {
                        break;
                    }
                    match queue.take_pair() {
                        Some(pair) => {
                            debug!(first = %pair.first, second = %pair.second, "comparing pair");
                            self.phase = Phase::Settling {
                                pair,
                                remaining: self.timing.settle_delay,
                            };
                        }
                        None => break,
                    }
                }
                Phase::Settling { pair, remaining } => {
                    let remaining = consume(&mut budget, remaining);
                    if remaining > DELAY_EPSILON || !reveals_settled(host, pair) {
                        self.phase = Phase::Settling { pair, remaining };
                        break;
                    }

                    if host.face_of(pair.first) == host.face_of(pair.second) {
                        host.apply_match(pair);
                        outcomes.push(Outcome::Match(pair));
                        self.phase = Phase::Idle;
                    } else {
                        host.apply_mismatch(pair);
                        outcomes.push(Outcome::Mismatch(pair));
                        self.phase = Phase::HideDelay {
                            pair,
                            remaining: self.timing.hide_delay,
                        };
                    }
                }
                Phase::HideDelay { pair, remaining } => {
                    let remaining = consume(&mut budget, remaining);
                    if remaining > DELAY_EPSILON {
                        self.phase = Phase::HideDelay { pair, remaining };
                        break;
                    }

                    host.request_hide(pair);
                    outcomes.push(Outcome::HideRequested(pair));
                    self.phase = Phase::Idle;
                }
            }
        }

        outcomes
    }

    /// Abandon the in-flight pair, if any.
    pub fn cancel(&mut self) {
        if let Some(pair) = self.in_flight() {
            debug!(first = %pair.first, second = %pair.second, "cancelled in-flight comparison");
        }
        self.phase = Phase::Idle;
    }
}

/// Spend up to `remaining` seconds of the budget, returning what is left to wait.
fn consume(budget: &mut f32, remaining: f32) -> f32 {
    let spent = budget.min(remaining);
    *budget -= spent;
    remaining - spent
}

fn reveals_settled(host: &impl ComparisonHost, pair: Pair) -> bool {
    host.reveal_settled(pair.first) && host.reveal_settled(pair.second)
}
