//! Board layout and generation.
//!
//! - `GridPos`: a (row, column) cell
//! - `Board`: the cards of one deal, row-major
//! - `generate`: pairs faces, shuffles them, and lays them out

mod generator;
mod grid;
mod position;

pub use generator::{generate, generate_for};
pub use grid::Board;
pub use position::GridPos;
