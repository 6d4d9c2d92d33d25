//! Text for the heads-up display and the history list.
//!
//! ```
//! use rust_pairs::hud::HudText;
//! use rust_pairs::session::{Counters, SessionStatus};
//!
//! let counters = Counters { moves: 5, elapsed: 12.9, matches_found: 3, pairs_total: 8 };
//! let hud = HudText::new(&counters, SessionStatus::Active);
//!
//! assert_eq!(hud.timer, "12s");
//! assert_eq!(hud.matches, "3/8");
//! assert_eq!(hud.banner, None);
//! ```

use serde::Serialize;

use crate::persistence::MatchRecord;
use crate::session::{Counters, SessionStatus};

pub const WIN_BANNER: &str = "You Win!";
pub const LOSE_BANNER: &str = "Game Over";

/// The HUD's four text fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HudText {
    pub moves: String,
    /// Whole seconds, rounded down: `"41s"`.
    pub timer: String,
    pub matches: String,
    /// Shown once the session has ended.
    pub banner: Option<&'static str>,
}

impl HudText {
    #[must_use]
    pub fn new(counters: &Counters, status: SessionStatus) -> Self {
        Self {
            moves: counters.moves.to_string(),
            timer: format_seconds(counters.elapsed),
            matches: counters.summary(),
            banner: banner_for(status),
        }
    }
}

impl std::fmt::Display for HudText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "moves {}  time {}  matches {}", self.moves, self.timer, self.matches)?;
        if let Some(banner) = self.banner {
            write!(f, "  {banner}")?;
        }
        Ok(())
    }
}

/// One line of the match history list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RecordLine {
    pub summary: String,
    pub moves: String,
    pub time: String,
}

impl From<&MatchRecord> for RecordLine {
    fn from(record: &MatchRecord) -> Self {
        Self {
            summary: record.summary.clone(),
            moves: record.moves_at_completion.to_string(),
            time: format_seconds(record.elapsed_at_completion),
        }
    }
}

impl std::fmt::Display for RecordLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} in {} moves, {}", self.summary, self.moves, self.time)
    }
}

fn banner_for(status: SessionStatus) -> Option<&'static str> {
    match status {
        SessionStatus::Won => Some(WIN_BANNER),
        SessionStatus::Lost => Some(LOSE_BANNER),
        SessionStatus::Setup | SessionStatus::Active => None,
    }
}

fn format_seconds(seconds: f32) -> String {
    format!("{}s", seconds.max(0.0).floor() as u32)
}
