//! Engine consistency checks.
//!
//! The grid is the source of truth and the registry is a cache kept in
//! lockstep with it; these checks detect any divergence, along with
//! treasure-count drift and phase/outcome mismatches. They should never
//! trigger in a correct engine. If they do, it indicates a bug.

use std::fmt;

use crate::game::{Cell, Coord, Engine, Phase};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all engine invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(engine: &Engine) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let grid = engine.grid();

    // Treasure counter tracks the live treasure cells.
    let live_treasures = grid.count_treasures();
    if engine.treasures_remaining() != live_treasures {
        violations.push(InvariantViolation {
            message: format!(
                "treasures_remaining is {} but the grid holds {} treasure cells",
                engine.treasures_remaining(),
                live_treasures
            ),
        });
    }

    // Hunter cache agrees with the grid.
    let hunter_cells: Vec<Coord> = grid
        .iter()
        .filter(|&(_, cell)| cell == Cell::Hunter)
        .map(|(coord, _)| coord)
        .collect();
    match engine.hunter() {
        Some(position) => {
            if hunter_cells != [position] {
                violations.push(InvariantViolation {
                    message: format!(
                        "registry places the hunter at {position:?} but the grid \
                         has hunter cells at {hunter_cells:?}"
                    ),
                });
            }
        }
        None => {
            if !hunter_cells.is_empty() {
                violations.push(InvariantViolation {
                    message: format!(
                        "registry has no hunter but the grid has hunter cells at \
                         {hunter_cells:?}"
                    ),
                });
            }
        }
    }

    // Every registered monster sits on a monster cell, one each.
    let monster_cells = grid
        .iter()
        .filter(|&(_, cell)| cell == Cell::Monster)
        .count();
    if monster_cells != engine.monsters().len() {
        violations.push(InvariantViolation {
            message: format!(
                "registry tracks {} monsters but the grid has {} monster cells",
                engine.monsters().len(),
                monster_cells
            ),
        });
    }
    for (index, &position) in engine.monsters().iter().enumerate() {
        if grid.get(position) != Some(Cell::Monster) {
            violations.push(InvariantViolation {
                message: format!("monster {index} registered at {position:?} is not on the grid"),
            });
        }
    }
    for (index, &position) in engine.monsters().iter().enumerate() {
        if engine.monsters()[..index].contains(&position) {
            violations.push(InvariantViolation {
                message: format!("monster {index} shares {position:?} with an earlier monster"),
            });
        }
    }

    // Selection only exists during setup, and only on an empty cell.
    if let Some(selection) = engine.selection() {
        if engine.phase() != Phase::Setup {
            violations.push(InvariantViolation {
                message: format!("active selection {selection:?} outside the setup phase"),
            });
        } else if grid.get(selection) != Some(Cell::Empty) {
            violations.push(InvariantViolation {
                message: format!("active selection {selection:?} is not an empty cell"),
            });
        }
    }

    // The outcome exists exactly when the game has ended.
    if (engine.phase() == Phase::End) != engine.outcome().is_some() {
        violations.push(InvariantViolation {
            message: format!(
                "phase is {} but outcome is {:?}",
                engine.phase(),
                engine.outcome()
            ),
        });
    }

    violations
}

/// Assert all engine invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with a detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(engine: &Engine) {
    let violations = check_invariants(engine);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Engine invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_engine: &Engine) {}
