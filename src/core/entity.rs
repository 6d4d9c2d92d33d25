//! Card instance identification.
//!
//! Every card dealt onto a board has a unique `EntityId`. Two cards that
//! share a face are still distinct entities, so selections and completion
//! signals always address an `EntityId`, never a face.
//!
//! ## ID Layout
//!
//! IDs are allocated in row-major board order: the card at `(row, column)`
//! on a board with `columns` columns has id `row * columns + column`.
//!
//! ```
//! use rust_pairs::core::EntityId;
//!
//! let id = EntityId::at(1, 2, 4);
//! assert_eq!(id, EntityId(6));
//! assert_eq!(id.index(), 6);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card on the current board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Entity id of the card at a grid cell, for a board `columns` wide.
    #[must_use]
    pub const fn at(row: u16, column: u16, columns: u16) -> Self {
        Self(row as u32 * columns as u32 + column as u32)
    }

    /// Position of this entity in board order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_layout() {
        assert_eq!(EntityId::at(0, 0, 4), EntityId(0));
        assert_eq!(EntityId::at(0, 3, 4), EntityId(3));
        assert_eq!(EntityId::at(1, 0, 4), EntityId(4));
        assert_eq!(EntityId::at(3, 3, 4), EntityId(15));
    }

    #[test]
    fn test_index() {
        assert_eq!(EntityId(7).index(), 7);
        assert_eq!(EntityId(7).raw(), 7);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", EntityId(42)), "Entity(42)");
    }

    #[test]
    fn test_serialization() {
        let id = EntityId(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: EntityId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
