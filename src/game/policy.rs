//! Monster decision procedure.
//!
//! A monster looks at its 8 neighbouring cells and picks a destination by
//! strict priority: capture the hunter if adjacent, otherwise the best
//! reachable treasure, otherwise the empty cell closest to the hunter.
//! The scan builds an explicit candidate list and ranks it with a stable
//! comparator; no search beyond one step.

use std::cmp::Ordering;

use crate::game::rules::{self, Role, RING};
use crate::game::{Cell, Coord, Grid};

/// What a monster decided to do with its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The hunter is adjacent: move onto its cell. Overrides everything.
    Capture(Coord),
    /// Move to the best-ranked candidate cell.
    Move(Coord),
    /// No candidates: monsters are never forced to move.
    Stay,
}

/// A scored candidate destination.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    target: Coord,
    /// 1 = treasure, 2 = empty cell. Lower ranks first.
    priority: u8,
    /// Treasure value (higher better) or Manhattan distance to the hunter
    /// (lower better), depending on priority.
    value: u32,
}

fn compare(a: &Candidate, b: &Candidate) -> Ordering {
    if a.priority != b.priority {
        return a.priority.cmp(&b.priority);
    }
    if a.priority == 1 {
        // Treasures: higher value first.
        return b.value.cmp(&a.value);
    }
    // Empty cells: shorter distance to the hunter first.
    a.value.cmp(&b.value)
}

/// Choose a move for the monster at `monster`, given the hunter at `hunter`.
///
/// Neighbours are scanned in the fixed [`RING`] order and the candidate
/// sort is stable, so equally ranked cells resolve to the first one
/// scanned. The capture check short-circuits the scan entirely.
#[must_use]
pub fn choose_move(grid: &Grid, monster: Coord, hunter: Coord) -> Decision {
    let mut candidates: Vec<Candidate> = Vec::with_capacity(RING.len());

    for &(dx, dy) in &RING {
        let Some(target) = monster.offset(dx, dy) else {
            continue;
        };
        let Some(cell) = grid.get(target) else {
            continue;
        };

        // First priority: catch the hunter if adjacent.
        if target == hunter {
            return Decision::Capture(target);
        }

        match cell {
            // Second priority: collect treasure, highest value first.
            Cell::Treasure(v) => candidates.push(Candidate {
                target,
                priority: 1,
                value: u32::from(v),
            }),
            // Third priority: step into an empty cell, closing on the hunter.
            Cell::Empty if rules::is_legal(grid, target, Role::Monster) => {
                candidates.push(Candidate {
                    target,
                    priority: 2,
                    value: target.manhattan(hunter),
                });
            }
            // Obstacles and other monsters are never candidates.
            _ => {}
        }
    }

    candidates.sort_by(compare);
    match candidates.first() {
        Some(best) => Decision::Move(best.target),
        None => Decision::Stay,
    }
}
