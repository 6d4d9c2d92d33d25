//! Board generation integration tests.
//!
//! Property tests for the pairing and layout guarantees, plus a
//! chi-square check that the shuffle has no positional bias.

use proptest::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

use rust_pairs::{generate, ConfigError, FaceId, GameRng, GridPos};

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Every valid grid gets rows*columns cards, each face exactly twice,
    /// and every cell filled exactly once.
    #[test]
    fn prop_generate_fills_grid_with_pairs(
        rows in 1u16..=8,
        columns in 1u16..=8,
        spare in 0u32..4,
        seed in any::<u64>(),
    ) {
        prop_assume!((rows as u32 * columns as u32) % 2 == 0);
        let pairs = rows as u32 * columns as u32 / 2;
        let pool = FaceId::range(pairs + spare);

        let board = generate(rows, columns, &pool, &mut GameRng::new(seed)).unwrap();

        prop_assert_eq!(board.len(), (rows as usize) * (columns as usize));
        prop_assert_eq!(board.pairs_total(), pairs);

        let mut counts: FxHashMap<FaceId, u32> = FxHashMap::default();
        let mut positions: FxHashSet<GridPos> = FxHashSet::default();
        for card in board.cards() {
            *counts.entry(card.face()).or_insert(0) += 1;
            prop_assert!(card.position().row < rows);
            prop_assert!(card.position().column < columns);
            let position = card.position();
            prop_assert!(positions.insert(position), "duplicate position {}", position);
        }
        prop_assert_eq!(counts.len() as u32, pairs);
        prop_assert!(counts.values().all(|&n| n == 2));
        prop_assert_eq!(positions.len(), board.len());
    }

    /// Odd grids always fail and deal nothing.
    #[test]
    fn prop_odd_grid_rejected(half_rows in 0u16..4, half_columns in 0u16..4, seed in any::<u64>()) {
        let rows = half_rows * 2 + 1;
        let columns = half_columns * 2 + 1;
        let result = generate(rows, columns, &FaceId::range(64), &mut GameRng::new(seed));
        let is_odd_error = matches!(result, Err(ConfigError::OddCellCount { .. }));
        prop_assert!(is_odd_error);
    }

    /// Partners always share a face and sit on different cells.
    #[test]
    fn prop_partner_is_symmetric(seed in any::<u64>()) {
        let board = generate(4, 4, &FaceId::range(8), &mut GameRng::new(seed)).unwrap();
        for card in board.cards() {
            let partner = board.partner_of(card.entity_id()).unwrap();
            prop_assert_ne!(partner, card.entity_id());
            prop_assert_eq!(board.get(partner).unwrap().face(), card.face());
            prop_assert_eq!(board.partner_of(partner), Some(card.entity_id()));
        }
    }
}

// =============================================================================
// Shuffle Quality
// =============================================================================

/// Where face 0 lands over many deals should be flat across the 16 cells.
#[test]
fn test_no_positional_bias() {
    const DEALS: u64 = 4000;
    let faces = FaceId::range(8);
    let mut hits = [0u32; 16];

    for seed in 0..DEALS {
        let board = generate(4, 4, &faces, &mut GameRng::new(seed)).unwrap();
        for card in board.cards().filter(|c| c.face() == FaceId(0)) {
            hits[card.entity_id().index()] += 1;
        }
    }

    // Two copies per deal spread over 16 cells.
    let expected = (DEALS * 2) as f64 / 16.0;
    let chi_square: f64 = hits
        .iter()
        .map(|&observed| {
            let diff = f64::from(observed) - expected;
            diff * diff / expected
        })
        .sum();

    // 15 degrees of freedom; 37.7 is the p = 0.001 critical value.
    assert!(chi_square < 37.7, "chi-square {chi_square:.2} over {hits:?}");
}

/// Successive deals from one RNG differ.
#[test]
fn test_successive_deals_differ() {
    let mut rng = GameRng::new(42);
    let faces = FaceId::range(8);
    let first = generate(4, 4, &faces, &mut rng).unwrap();
    let second = generate(4, 4, &faces, &mut rng).unwrap();

    assert_ne!(first, second);
}

/// The same seed always deals the same board.
#[test]
fn test_fixed_seed_is_deterministic() {
    let faces = FaceId::range(8);
    let layout = |seed| -> Vec<FaceId> {
        let board = generate(4, 4, &faces, &mut GameRng::new(seed)).unwrap();
        board.cards().map(|c| c.face()).collect()
    };

    for seed in [0, 1, 42, u64::MAX] {
        assert_eq!(layout(seed), layout(seed));
    }
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_three_by_three_fails() {
    let result = generate(3, 3, &FaceId::range(8), &mut GameRng::new(42));
    assert_eq!(result, Err(ConfigError::OddCellCount { rows: 3, columns: 3, cells: 9 }));
}

#[test]
fn test_empty_grid_fails() {
    let result = generate(0, 4, &FaceId::range(8), &mut GameRng::new(42));
    assert_eq!(result, Err(ConfigError::EmptyGrid { rows: 0, columns: 4 }));
}

#[test]
fn test_duplicate_faces_count_once() {
    let pool = [FaceId(1), FaceId(1), FaceId(2), FaceId(2)];
    let result = generate(2, 3, &pool, &mut GameRng::new(42));
    assert_eq!(result, Err(ConfigError::InsufficientFaces { required: 3, available: 2 }));
}
