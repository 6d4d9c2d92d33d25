//! Session lifecycle.
//!
//! A session deals a board, accepts selections while Active, and ends in
//! exactly one of Won or Lost:
//!
//! ```text
//!   Setup ──start──▶ Active ──all pairs found──▶ Won
//!     ▲                │
//!     │                └──elapsed > time limit──▶ Lost
//!     └── start fails
//! ```
//!
//! `restart` is allowed from any state and always deals a new board.
//!
//! ## Example
//!
//! ```
//! use rust_pairs::audio::SilentAudio;
//! use rust_pairs::core::{ComparatorTiming, SessionConfig};
//! use rust_pairs::persistence::MemoryStore;
//! use rust_pairs::presentation::InstantPresentation;
//! use rust_pairs::session::{Session, SessionStatus};
//!
//! let config = SessionConfig::new()
//!     .with_grid(2, 2)
//!     .with_timing(ComparatorTiming::immediate());
//! let mut session =
//!     Session::start_session(config, InstantPresentation, SilentAudio, MemoryStore::new())
//!         .unwrap();
//!
//! // Play perfectly using the board's pairing.
//! let board = session.board().unwrap().clone();
//! for card in board.cards() {
//!     let id = card.entity_id();
//!     let partner = board.partner_of(id).unwrap();
//!     if id < partner {
//!         session.select(id);
//!         session.select(partner);
//!         session.tick(0.0).unwrap();
//!     }
//! }
//!
//! assert_eq!(session.status(), SessionStatus::Won);
//! assert_eq!(session.store().records()[0].summary, "2/2");
//! ```

mod controller;
mod snapshot;
mod status;

pub use controller::Session;
pub use snapshot::SessionSnapshot;
pub use status::{Counters, SessionEpoch, SessionStatus};
