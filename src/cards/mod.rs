//! Card system: face identities and card entities.
//!
//! ## Key Types
//!
//! - `FaceId`: Identity token, shared by exactly two cards per board
//! - `Card`: A card entity with its reveal, match, and selectable state
//! - `RevealState`: Hidden or Revealed
//! - `TransitionKind`: Reveal or Hide, for visual completion signals

pub mod face;
pub mod instance;

pub use face::FaceId;
pub use instance::{Card, RevealState, TransitionKind};
