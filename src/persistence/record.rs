//! Persisted session results.

use serde::{Deserialize, Serialize};

/// Summary of one won session. Created once at the Won transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Matches over pairs, e.g. `"8/8"`.
    pub summary: String,

    /// Moves made when the session was won.
    pub moves_at_completion: u32,

    /// Seconds elapsed when the session was won.
    pub elapsed_at_completion: f32,
}

impl MatchRecord {
    /// Build a record, formatting the `"matches/pairs"` summary.
    #[must_use]
    pub fn new(matches_found: u32, pairs_total: u32, moves: u32, elapsed: f32) -> Self {
        Self {
            summary: format!("{matches_found}/{pairs_total}"),
            moves_at_completion: moves,
            elapsed_at_completion: elapsed,
        }
    }
}

/// Every stored record, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchHistory {
    #[serde(default)]
    pub matches: Vec<MatchRecord>,
}
