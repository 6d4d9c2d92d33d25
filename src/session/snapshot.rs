use im::Vector;
use serde::{Deserialize, Serialize};

use super::status::{Counters, SessionEpoch, SessionStatus};
use crate::cards::Card;

/// Point-in-time view of a session.
///
/// Cards share structure with the live board, so taking a snapshot every
/// frame is cheap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub status: SessionStatus,
    pub epoch: SessionEpoch,
    pub counters: Counters,
    /// Row-major; empty before the first successful deal.
    pub cards: Vector<Card>,
    /// Accepted selections not yet taken by the comparator.
    pub pending_selections: usize,
}

impl SessionSnapshot {
    /// Cards currently face up (including matched ones).
    pub fn revealed(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|c| c.is_revealed())
    }

    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched()).count()
    }
}
