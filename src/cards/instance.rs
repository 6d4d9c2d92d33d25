//! Card entities - runtime card state.
//!
//! A `Card` pairs an immutable identity (entity id, face, grid position)
//! with the mutable state the comparator drives:
//!
//! - `reveal`: Hidden or Revealed
//! - `matched`: monotonic, set only together with the partner card
//! - `selectable`: false while the card is queued, resolving, or frozen
//! - `transition`: the visual transition the presentation has not yet
//!   reported as finished, if any
//!
//! Mutation is crate-private; only the session controller changes cards.

use serde::{Deserialize, Serialize};

use super::face::FaceId;
use crate::board::GridPos;
use crate::core::EntityId;
use crate::resolve::IgnoreReason;

/// Whether a card's face is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevealState {
    /// Face down.
    Hidden,
    /// Face up, pending comparison or matched.
    Revealed,
}

/// A visual transition the presentation layer is running for a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionKind {
    /// Flip to the face.
    Reveal,
    /// Flip back to the card back.
    Hide,
}

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    entity_id: EntityId,
    face: FaceId,
    position: GridPos,
    reveal: RevealState,
    matched: bool,
    selectable: bool,
    transition: Option<TransitionKind>,
}

impl Card {
    /// Create a face-down, selectable card.
    #[must_use]
    pub fn new(entity_id: EntityId, face: FaceId, position: GridPos) -> Self {
        Self {
            entity_id,
            face,
            position,
            reveal: RevealState::Hidden,
            matched: false,
            selectable: true,
            transition: None,
        }
    }

    #[must_use]
    pub fn entity_id(&self) -> EntityId {
        self.entity_id
    }

    /// The pairing key.
    #[must_use]
    pub fn face(&self) -> FaceId {
        self.face
    }

    #[must_use]
    pub fn position(&self) -> GridPos {
        self.position
    }

    #[must_use]
    pub fn reveal_state(&self) -> RevealState {
        self.reveal
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.reveal == RevealState::Revealed
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    #[must_use]
    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    /// Transition still awaiting its completion signal.
    #[must_use]
    pub fn transition(&self) -> Option<TransitionKind> {
        self.transition
    }

    /// Why a selection of this card would be ignored, if it would be.
    #[must_use]
    pub fn ineligibility(&self) -> Option<IgnoreReason> {
        if self.matched {
            Some(IgnoreReason::AlreadyMatched)
        } else if self.is_revealed() {
            Some(IgnoreReason::AlreadyRevealed)
        } else if !self.selectable {
            Some(IgnoreReason::NotSelectable)
        } else {
            None
        }
    }

    /// Turn face up and start the reveal transition.
    pub(crate) fn reveal(&mut self) {
        self.reveal = RevealState::Revealed;
        self.selectable = false;
        self.transition = Some(TransitionKind::Reveal);
    }

    /// Start flipping back. The card stays revealed until the hide completes.
    pub(crate) fn begin_hide(&mut self) {
        self.transition = Some(TransitionKind::Hide);
    }

    /// Apply a finished transition. Returns false if none of that kind was running.
    pub(crate) fn finish_transition(&mut self, kind: TransitionKind) -> bool {
        if self.transition != Some(kind) {
            return false;
        }
        self.transition = None;
        if kind == TransitionKind::Hide {
            self.reveal = RevealState::Hidden;
            self.selectable = !self.matched;
        }
        true
    }

    pub(crate) fn mark_matched(&mut self) {
        self.matched = true;
        self.selectable = false;
    }

    /// Make the card permanently unselectable and abandon any transition.
    pub(crate) fn freeze(&mut self) {
        self.selectable = false;
        self.transition = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Card {
        Card::new(EntityId(3), FaceId::new(1), GridPos::new(0, 3))
    }

    #[test]
    fn test_new_card_is_hidden_and_selectable() {
        let card = card();
        assert_eq!(card.entity_id(), EntityId(3));
        assert_eq!(card.face(), FaceId::new(1));
        assert_eq!(card.position(), GridPos::new(0, 3));
        assert_eq!(card.reveal_state(), RevealState::Hidden);
        assert!(!card.is_matched());
        assert!(card.is_selectable());
        assert_eq!(card.transition(), None);
        assert_eq!(card.ineligibility(), None);
    }

    #[test]
    fn test_reveal_blocks_selection() {
        let mut card = card();
        card.reveal();

        assert!(card.is_revealed());
        assert!(!card.is_selectable());
        assert_eq!(card.transition(), Some(TransitionKind::Reveal));
        assert_eq!(card.ineligibility(), Some(IgnoreReason::AlreadyRevealed));

        assert!(card.finish_transition(TransitionKind::Reveal));
        assert_eq!(card.transition(), None);
        assert!(card.is_revealed());
    }

    #[test]
    fn test_hide_restores_selectability() {
        let mut card = card();
        card.reveal();
        card.finish_transition(TransitionKind::Reveal);

        card.begin_hide();
        assert!(card.is_revealed());
        assert!(!card.is_selectable());

        assert!(card.finish_transition(TransitionKind::Hide));
        assert_eq!(card.reveal_state(), RevealState::Hidden);
        assert!(card.is_selectable());
    }

    #[test]
    fn test_mismatched_completion_is_rejected() {
        let mut card = card();
        card.reveal();

        assert!(!card.finish_transition(TransitionKind::Hide));
        assert_eq!(card.transition(), Some(TransitionKind::Reveal));
        assert!(card.is_revealed());
    }

    #[test]
    fn test_matched_is_sticky() {
        let mut card = card();
        card.reveal();
        card.mark_matched();

        assert!(card.is_matched());
        assert!(!card.is_selectable());
        assert_eq!(card.ineligibility(), Some(IgnoreReason::AlreadyMatched));

        card.finish_transition(TransitionKind::Reveal);
        assert!(card.is_matched());
        assert!(!card.is_selectable());
    }

    #[test]
    fn test_freeze() {
        let mut card = card();
        card.freeze();

        assert!(!card.is_selectable());
        assert_eq!(card.ineligibility(), Some(IgnoreReason::NotSelectable));

        let mut revealed = self::card();
        revealed.reveal();
        revealed.freeze();
        assert_eq!(revealed.transition(), None);
        assert!(!revealed.finish_transition(TransitionKind::Reveal));
    }

    #[test]
    fn test_card_serialization() {
        let mut card = card();
        card.reveal();

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
