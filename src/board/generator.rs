//! Board generation: pairing, shuffling, and layout.
//!
//! ## Algorithm
//!
//! 1. Validate the grid (non-empty, even cell count).
//! 2. Take the first `pairs_total` distinct faces from the pool, in pool order.
//! 3. Put each face into the deck twice.
//! 4. Fisher–Yates shuffle the deck with the session's `GameRng`.
//! 5. Lay the shuffled deck out in row-major order.
//!
//! ```
//! use rust_pairs::board::generate;
//! use rust_pairs::cards::FaceId;
//! use rust_pairs::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let board = generate(4, 4, &FaceId::range(8), &mut rng).unwrap();
//! assert_eq!(board.len(), 16);
//!
//! assert!(generate(3, 3, &FaceId::range(8), &mut rng).is_err());
//! ```

use im::Vector;
use rustc_hash::FxHashSet;
use tracing::debug;

use super::grid::Board;
use super::position::GridPos;
use crate::cards::{Card, FaceId};
use crate::core::{ConfigError, EntityId, GameRng, SessionConfig};

/// Deal a new board.
///
/// Fails with [`ConfigError`] on an empty grid, an odd cell count, or a
/// face pool with fewer distinct faces than pairs. No cards are produced
/// on failure.
pub fn generate(
    rows: u16,
    columns: u16,
    face_pool: &[FaceId],
    rng: &mut GameRng,
) -> Result<Board, ConfigError> {
    let pairs = SessionConfig::check_grid(rows, columns)? as usize;

    let mut seen = FxHashSet::default();
    let chosen: Vec<FaceId> = face_pool
        .iter()
        .copied()
        .filter(|face| seen.insert(*face))
        .take(pairs)
        .collect();

    if chosen.len() < pairs {
        return Err(ConfigError::InsufficientFaces {
            required: pairs as u32,
            available: SessionConfig::distinct_faces(face_pool),
        });
    }

    let mut deck: Vec<FaceId> = chosen.iter().flat_map(|&face| [face, face]).collect();
    rng.shuffle(&mut deck);

    let cards: Vector<Card> = deck
        .into_iter()
        .enumerate()
        .map(|(index, face)| {
            Card::new(EntityId(index as u32), face, GridPos::from_index(index, columns))
        })
        .collect();

    debug!(rows, columns, pairs, seed = rng.seed(), "dealt board");
    Ok(Board::new(rows, columns, cards))
}

/// Deal a board for a session configuration.
pub fn generate_for(config: &SessionConfig, rng: &mut GameRng) -> Result<Board, ConfigError> {
    generate(config.rows, config.columns, &config.face_pool, rng)
}
