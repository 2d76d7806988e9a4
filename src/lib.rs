// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Gridhunt: a two-phase, turn-based treasure hunt on a bounded grid.
//!
//! A human-controlled hunter competes against computer-controlled monsters
//! to collect valued treasures. The engine owns all game logic (grid and
//! entity state, move legality, turn sequencing, the monster policy, and
//! end-of-game determination) and exposes a synchronous command/query
//! surface for a front end to drive:
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Front end (TUI / scenario file)   │
//! ├─────────────────────────────────────┤
//! │   Engine command + query surface    │
//! ├─────────────────────────────────────┤
//! │   Grid / registry / rules / policy  │
//! └─────────────────────────────────────┘
//! ```
//!
//! Commands either succeed with a [`game::Reply`] (message plus severity
//! tag) or fail with a typed [`error::CommandError`]; no error escapes the
//! command boundary or leaves the engine partially updated.

pub mod error;
pub mod game;
pub mod scenario;

pub use error::{CommandError, CommandResult, Severity};

// Re-export key game types at crate root for convenience
pub use game::{Cell, Coord, Direction, Engine, Grid, Outcome, Phase, PlaceKind, Reply};
