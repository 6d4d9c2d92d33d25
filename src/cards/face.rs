//! Face identities - the pairing key.
//!
//! A `FaceId` names what is printed on a card. Exactly two cards on a
//! board share each face; a match is two revealed cards with equal faces.
//! The engine never interprets face values, hosts map them to artwork.

use serde::{Deserialize, Serialize};

/// Identity token shared by the two cards of a pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FaceId(pub u32);

impl FaceId {
    /// Create a new face ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// A pool of `count` distinct faces numbered from zero.
    ///
    /// ```
    /// use rust_pairs::cards::FaceId;
    ///
    /// assert_eq!(FaceId::range(3), vec![FaceId(0), FaceId(1), FaceId(2)]);
    /// ```
    #[must_use]
    pub fn range(count: u32) -> Vec<Self> {
        (0..count).map(Self).collect()
    }
}

impl From<u32> for FaceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for FaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Face({})", self.0)
    }
}
