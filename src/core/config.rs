//! Session configuration.
//!
//! Hosts configure a session at startup by providing:
//! - Grid dimensions (`rows`, `columns`, product must be even)
//! - A time limit in seconds
//! - A face pool with at least one distinct face per pair
//! - Comparator timing (settle and hide delays)
//!
//! Configs can be built in code or parsed from a JSON document; every
//! field is optional in JSON and falls back to the defaults.
//!
//! ```
//! use rust_pairs::core::SessionConfig;
//!
//! let config = SessionConfig::from_json_str(r#"{ "rows": 2, "columns": 3 }"#).unwrap();
//! assert_eq!(config.pairs_total(), 3);
//! assert!(config.validate().is_ok());
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::FaceId;

/// Fixed delays inside the comparator's resolution loop, in seconds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparatorTiming {
    /// Wait after a pair is dequeued before comparing, so the reveal settles.
    pub settle_delay: f32,

    /// Wait after a mismatch before both cards are hidden again.
    pub hide_delay: f32,
}

impl Default for ComparatorTiming {
    fn default() -> Self {
        Self {
            settle_delay: 0.2,
            hide_delay: 0.5,
        }
    }
}

impl ComparatorTiming {
    /// Timing with no waits at all. Pairs resolve on the next tick.
    #[must_use]
    pub const fn immediate() -> Self {
        Self {
            settle_delay: 0.0,
            hide_delay: 0.0,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let delays = [("settle_delay", self.settle_delay), ("hide_delay", self.hide_delay)];
        for (name, value) in delays {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDelay { name, value });
            }
        }
        Ok(())
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Number of grid rows.
    pub rows: u16,

    /// Number of grid columns.
    pub columns: u16,

    /// Seconds allowed before the session is lost.
    pub time_limit: f32,

    /// Faces available for dealing. The first `pairs_total` distinct faces
    /// are used; duplicates count once.
    pub face_pool: Vec<FaceId>,

    /// Seed for the deal RNG. Each start/restart forks a fresh stream.
    pub seed: u64,

    /// Comparator delays.
    pub timing: ComparatorTiming,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rows: 4,
            columns: 4,
            time_limit: 60.0,
            face_pool: FaceId::range(8),
            seed: 42,
            timing: ComparatorTiming::default(),
        }
    }
}

impl SessionConfig {
    /// Create the default configuration (4x4, 60 seconds, 8 faces).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e.to_string()))
    }

    /// Set grid dimensions.
    #[must_use]
    pub fn with_grid(mut self, rows: u16, columns: u16) -> Self {
        self.rows = rows;
        self.columns = columns;
        self
    }

    /// Set the time limit in seconds.
    #[must_use]
    pub fn with_time_limit(mut self, seconds: f32) -> Self {
        self.time_limit = seconds;
        self
    }

    /// Replace the face pool.
    #[must_use]
    pub fn with_faces(mut self, faces: impl IntoIterator<Item = FaceId>) -> Self {
        self.face_pool = faces.into_iter().collect();
        self
    }

    /// Set the deal seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set comparator timing.
    #[must_use]
    pub fn with_timing(mut self, timing: ComparatorTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Total number of cells on the grid.
    #[must_use]
    pub fn cell_count(&self) -> u32 {
        u32::from(self.rows) * u32::from(self.columns)
    }

    /// Number of pairs the board holds.
    #[must_use]
    pub fn pairs_total(&self) -> u32 {
        self.cell_count() / 2
    }

    /// Check grid dimensions, returning the number of pairs they hold.
    pub fn check_grid(rows: u16, columns: u16) -> Result<u32, ConfigError> {
        if rows == 0 || columns == 0 {
            return Err(ConfigError::EmptyGrid { rows, columns });
        }
        let cells = u32::from(rows) * u32::from(columns);
        if cells % 2 != 0 {
            return Err(ConfigError::OddCellCount { rows, columns, cells });
        }
        Ok(cells / 2)
    }

    /// Number of distinct faces in a pool.
    #[must_use]
    pub fn distinct_faces(pool: &[FaceId]) -> u32 {
        pool.iter().collect::<FxHashSet<_>>().len() as u32
    }

    /// Validate every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pairs = Self::check_grid(self.rows, self.columns)?;

        let available = Self::distinct_faces(&self.face_pool);
        if available < pairs {
            return Err(ConfigError::InsufficientFaces { required: pairs, available });
        }

        if !self.time_limit.is_finite() || self.time_limit <= 0.0 {
            return Err(ConfigError::InvalidTimeLimit(self.time_limit));
        }

        self.timing.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.rows, 4);
        assert_eq!(config.columns, 4);
        assert_eq!(config.pairs_total(), 8);
        assert_eq!(config.face_pool.len(), 8);
        assert_eq!(config.timing, ComparatorTiming::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = SessionConfig::new()
            .with_grid(2, 5)
            .with_time_limit(30.0)
            .with_faces(FaceId::range(5))
            .with_seed(7)
            .with_timing(ComparatorTiming::immediate());

        assert_eq!(config.cell_count(), 10);
        assert_eq!(config.pairs_total(), 5);
        assert_eq!(config.time_limit, 30.0);
        assert_eq!(config.seed, 7);
        assert_eq!(config.timing.settle_delay, 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_odd_grid_rejected() {
        let config = SessionConfig::new().with_grid(3, 3);
        assert_eq!(
            config.validate(),
            Err(ConfigError::OddCellCount { rows: 3, columns: 3, cells: 9 })
        );
    }

    #[test]
    fn test_empty_grid_rejected() {
        let config = SessionConfig::new().with_grid(0, 4);
        assert_eq!(config.validate(), Err(ConfigError::EmptyGrid { rows: 0, columns: 4 }));
    }

    #[test]
    fn test_duplicate_faces_count_once() {
        let pool = vec![FaceId::new(1), FaceId::new(1), FaceId::new(2)];
        assert_eq!(SessionConfig::distinct_faces(&pool), 2);

        let config = SessionConfig::new().with_grid(2, 3).with_faces(pool);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InsufficientFaces { required: 3, available: 2 })
        );
    }

    #[test]
    fn test_time_limit_rejected() {
        for bad in [0.0, -5.0, f32::NAN, f32::INFINITY] {
            let config = SessionConfig::new().with_time_limit(bad);
            assert!(matches!(config.validate(), Err(ConfigError::InvalidTimeLimit(_))));
        }
    }

    #[test]
    fn test_negative_delay_rejected() {
        let timing = ComparatorTiming { settle_delay: 0.2, hide_delay: -0.1 };
        let config = SessionConfig::new().with_timing(timing);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDelay { name: "hide_delay", .. })
        ));
    }

    #[test]
    fn test_from_json_defaults_missing_fields() {
        let config = SessionConfig::from_json_str(r#"{ "rows": 2, "time_limit": 15.5 }"#).unwrap();
        assert_eq!(config.rows, 2);
        assert_eq!(config.columns, 4);
        assert_eq!(config.time_limit, 15.5);
        assert_eq!(config.timing.hide_delay, 0.5);
    }

    #[test]
    fn test_from_json_nested_timing() {
        let json = r#"{
            "face_pool": [3, 4],
            "rows": 1,
            "columns": 4,
            "timing": { "settle_delay": 0.1 }
        }"#;
        let config = SessionConfig::from_json_str(json).unwrap();
        assert_eq!(config.face_pool, vec![FaceId::new(3), FaceId::new(4)]);
        assert_eq!(config.timing.settle_delay, 0.1);
        assert_eq!(config.timing.hide_delay, 0.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_malformed() {
        let result = SessionConfig::from_json_str("{ rows: ");
        assert!(matches!(result, Err(ConfigError::Malformed(_))));
    }
}
