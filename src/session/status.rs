//! Session status, epoch, and counters.

use serde::{Deserialize, Serialize};

/// Lifecycle of one session: `Setup → Active → {Won | Lost}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// No board dealt yet, or the last start failed.
    Setup,
    /// Accepting selections; the timer runs.
    Active,
    /// Every pair matched within the time limit.
    Won,
    /// The time limit ran out first.
    Lost,
}

impl SessionStatus {
    /// Won or Lost.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Generation counter for completion signals.
///
/// Advances on every deal and every terminal transition. Signals issued
/// under an older epoch belong to a superseded board and are dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionEpoch(pub u64);

impl SessionEpoch {
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for SessionEpoch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Epoch({})", self.0)
    }
}

/// Per-session counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Counters {
    /// Completed two-card comparisons.
    pub moves: u32,
    /// Seconds elapsed while Active.
    pub elapsed: f32,
    /// Pairs matched so far.
    pub matches_found: u32,
    /// Pairs on the board.
    pub pairs_total: u32,
}

impl Counters {
    /// Fresh counters for a board of `pairs_total` pairs.
    #[must_use]
    pub fn new(pairs_total: u32) -> Self {
        Self {
            pairs_total,
            ..Self::default()
        }
    }

    /// `"matches_found/pairs_total"`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{}/{}", self.matches_found, self.pairs_total)
    }

    /// Every pair has been found.
    #[must_use]
    pub fn all_found(&self) -> bool {
        self.pairs_total > 0 && self.matches_found == self.pairs_total
    }
}
