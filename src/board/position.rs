//! Grid coordinates.

use serde::{Deserialize, Serialize};

/// A cell on the board, zero-based from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPos {
    pub row: u16,
    pub column: u16,
}

impl GridPos {
    #[must_use]
    pub const fn new(row: u16, column: u16) -> Self {
        Self { row, column }
    }

    /// Cell at `index` when walking a grid `columns` wide in row-major order.
    #[must_use]
    pub const fn from_index(index: usize, columns: u16) -> Self {
        let columns = columns as usize;
        Self {
            row: (index / columns) as u16,
            column: (index % columns) as u16,
        }
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
