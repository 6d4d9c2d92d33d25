//! Selection queue and comparator.
//!
//! Player selections are serialized into pairwise comparisons:
//!
//! - [`SelectionQueue`]: strict FIFO of accepted selections with an
//!   explicit idle/running gate
//! - [`Comparator`]: a tick-driven state machine that takes two entries at
//!   a time, waits for the reveal to settle, compares faces, and on a
//!   mismatch waits again before asking for both cards to be hidden
//!
//! ## Ownership
//!
//! The comparator never touches cards or counters directly. It reads and
//! mutates them through [`ComparisonHost`], which the session controller
//! implements. Only one comparison is in flight at a time; the next pair
//! is not taken until the previous pair's bookkeeping has been applied.
//!
//! ## Example
//!
//! ```
//! use rust_pairs::cards::FaceId;
//! use rust_pairs::core::{ComparatorTiming, EntityId};
//! use rust_pairs::resolve::{Comparator, ComparisonHost, Outcome, Pair, SelectionQueue};
//!
//! struct Faces(Vec<u32>, u32);
//!
//! impl ComparisonHost for Faces {
//!     fn face_of(&self, card: EntityId) -> FaceId { FaceId(self.0[card.index()]) }
//!     fn reveal_settled(&self, _card: EntityId) -> bool { true }
//!     fn apply_match(&mut self, _pair: Pair) { self.1 += 1; }
//!     fn apply_mismatch(&mut self, _pair: Pair) {}
//!     fn request_hide(&mut self, _pair: Pair) {}
//! }
//!
//! let mut host = Faces(vec![4, 4], 0);
//! let mut queue = SelectionQueue::new();
//! let mut comparator = Comparator::new(ComparatorTiming::default());
//!
//! queue.push(EntityId(0));
//! queue.push(EntityId(1));
//!
//! // Still settling after 0.1s
//! assert!(comparator.process(&mut queue, &mut host, 0.1).is_empty());
//!
//! let outcomes = comparator.process(&mut queue, &mut host, 0.1);
//! assert!(matches!(outcomes[0], Outcome::Match(_)));
//! assert_eq!(host.1, 1);
//! ```

mod comparator;
mod queue;

pub use comparator::{Comparator, Outcome, ResolutionStatus};
pub use queue::SelectionQueue;

use serde::{Deserialize, Serialize};

use crate::cards::FaceId;
use crate::core::EntityId;

/// Two selections dequeued together, in acceptance order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    pub first: EntityId,
    pub second: EntityId,
}

impl Pair {
    #[must_use]
    pub const fn new(first: EntityId, second: EntityId) -> Self {
        Self { first, second }
    }

    /// Both entity ids, first then second.
    #[must_use]
    pub const fn ids(self) -> [EntityId; 2] {
        [self.first, self.second]
    }
}

/// Result of offering a card to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// The card was revealed and queued for comparison.
    Accepted,
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl Selection {
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, Selection::Accepted)
    }
}

/// Why a selection was ignored. Ignoring is not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// The session is not Active.
    SessionInactive,
    /// No card with that id on the current board.
    UnknownCard,
    /// The card is already part of a match.
    AlreadyMatched,
    /// The card is face up (queued, resolving, or waiting to be hidden).
    AlreadyRevealed,
    /// The card is frozen or otherwise not selectable.
    NotSelectable,
}

/// The mutation contract the comparator drives.
///
/// Implemented by the session controller, which owns the cards and
/// counters. Methods are called in resolution order.
pub trait ComparisonHost {
    /// Face of a card on the current board.
    fn face_of(&self, card: EntityId) -> FaceId;

    /// Whether the card's reveal transition has completed.
    fn reveal_settled(&self, card: EntityId) -> bool;

    /// Both cards share a face: mark them matched and count the move.
    fn apply_match(&mut self, pair: Pair);

    /// Faces differ: count the move.
    fn apply_mismatch(&mut self, pair: Pair);

    /// The post-mismatch delay elapsed: flip both cards back.
    fn request_hide(&mut self, pair: Pair);
}
