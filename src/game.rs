//! Game engine for the treasure hunt.
//!
//! Implements the full rule set on top of a dumb grid store:
//! - Grid with tagged cell contents (hunter, monsters, obstacles, treasures)
//! - Setup placement state machine
//! - Turn sequencing: one hunter move, then the monster pass
//! - Monster decision policy (capture, collect, close in)
//! - End-of-game determination

mod engine;
mod entities;
mod grid;
pub mod invariants;
mod policy;
pub mod rules;

pub use engine::{DEFAULT_HEIGHT, DEFAULT_WIDTH, Engine, Outcome, Phase, PlaceKind, Reply};
pub use entities::Registry;
pub use grid::{Cell, Coord, Grid};
pub use policy::{Decision, choose_move};
pub use rules::{Direction, Role, is_legal};
