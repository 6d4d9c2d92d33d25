//! FIFO of accepted selections.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::Pair;
use crate::core::EntityId;

/// Pending selections plus the comparator gate.
///
/// The gate is `running` while the comparator has work: it opens when a
/// push makes a full pair available and closes when the comparator finds
/// fewer than two entries left. A single leftover selection waits here,
/// unresolved, until its partner selection arrives.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SelectionQueue {
    pending: VecDeque<EntityId>,
    running: bool,
}

impl SelectionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a selection. Returns true if this push woke the comparator.
    pub fn push(&mut self, card: EntityId) -> bool {
        self.pending.push_back(card);
        if !self.running && self.pending.len() >= 2 {
            self.running = true;
            return true;
        }
        false
    }

    /// Number of selections waiting.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Whether the comparator gate is open.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn contains(&self, card: EntityId) -> bool {
        self.pending.contains(&card)
    }

    /// Waiting selections, oldest first.
    pub fn pending(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.pending.iter().copied()
    }

    /// Dequeue the two oldest selections, or close the gate if there are
    /// fewer than two.
    pub(crate) fn take_pair(&mut self) -> Option<Pair> {
        if self.pending.len() < 2 {
            self.running = false;
            return None;
        }
        let first = self.pending.pop_front()?;
        let second = self.pending.pop_front()?;
        Some(Pair::new(first, second))
    }

    /// Drop everything and close the gate.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.running = false;
    }
}
