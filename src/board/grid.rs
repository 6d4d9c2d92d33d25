//! The dealt board.
//!
//! A `Board` owns every card of one deal in row-major order, so a card's
//! `EntityId` doubles as its index. Cards are stored in an `im::Vector`,
//! which makes cloning a board (for snapshots) O(1).

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::position::GridPos;
use crate::cards::{Card, FaceId};
use crate::core::EntityId;

/// All cards of one deal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: u16,
    columns: u16,
    cards: Vector<Card>,
}

impl Board {
    /// Assemble a board from cards already laid out in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if the card count, entity ids, or positions disagree with
    /// the grid, or if any face appears other than exactly twice. These
    /// are generator defects, not user errors.
    #[must_use]
    pub fn new(rows: u16, columns: u16, cards: Vector<Card>) -> Self {
        assert_eq!(
            cards.len(),
            usize::from(rows) * usize::from(columns),
            "board card count does not match {rows}x{columns} grid"
        );
        for (index, card) in cards.iter().enumerate() {
            assert_eq!(card.entity_id().index(), index, "card entity ids must be row-major");
            assert_eq!(
                card.position(),
                GridPos::from_index(index, columns),
                "card position out of order"
            );
        }

        let board = Self { rows, columns, cards };
        board.assert_pairing();
        board
    }

    #[must_use]
    pub fn rows(&self) -> u16 {
        self.rows
    }

    #[must_use]
    pub fn columns(&self) -> u16 {
        self.columns
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs dealt.
    #[must_use]
    pub fn pairs_total(&self) -> u32 {
        (self.cards.len() / 2) as u32
    }

    /// Look up a card by entity id.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    pub(crate) fn get_mut(&mut self, id: EntityId) -> Option<&mut Card> {
        self.cards.get_mut(id.index())
    }

    /// Look up the card at a grid cell.
    #[must_use]
    pub fn card_at(&self, pos: GridPos) -> Option<&Card> {
        if pos.row >= self.rows || pos.column >= self.columns {
            return None;
        }
        self.get(EntityId::at(pos.row, pos.column, self.columns))
    }

    /// Iterate over cards in row-major order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Shared handle to the card list (O(1) clone).
    #[must_use]
    pub fn card_vector(&self) -> Vector<Card> {
        self.cards.clone()
    }

    /// The other card carrying the same face.
    #[must_use]
    pub fn partner_of(&self, id: EntityId) -> Option<EntityId> {
        let face = self.get(id)?.face();
        self.cards
            .iter()
            .find(|c| c.face() == face && c.entity_id() != id)
            .map(Card::entity_id)
    }

    /// Number of pairs currently matched.
    #[must_use]
    pub fn matched_pairs(&self) -> u32 {
        (self.cards.iter().filter(|c| c.is_matched()).count() / 2) as u32
    }

    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }

    /// Make every card permanently unselectable.
    pub(crate) fn freeze_all(&mut self) {
        for card in self.cards.iter_mut() {
            card.freeze();
        }
    }

    /// Assert that every face appears on exactly two cards.
    ///
    /// # Panics
    ///
    /// Panics on violation; a board breaking this is a generator defect.
    pub fn assert_pairing(&self) {
        let mut counts: FxHashMap<FaceId, u32> = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.face()).or_insert(0) += 1;
        }
        for (face, count) in counts {
            assert_eq!(count, 2, "{face} appears on {count} cards, expected exactly 2");
        }
    }
}
