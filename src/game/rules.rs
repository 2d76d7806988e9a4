//! Move legality and mobility rules.

use std::fmt;
use std::str::FromStr;

use crate::error::CommandError;
use crate::game::{Cell, Coord, Grid};

/// Which agent a legality question is being asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The player-controlled hunter.
    Hunter,
    /// A computer-controlled monster.
    Monster,
}

/// One of the hunter's four orthogonal movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Negative y.
    Up,
    /// Positive y.
    Down,
    /// Negative x.
    Left,
    /// Positive x.
    Right,
}

impl Direction {
    /// Signed (dx, dy) delta for this direction.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// All four directions, in up/down/left/right order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

impl FromStr for Direction {
    type Err = CommandError;

    /// Accepts direction names and the w/a/s/d movement keys.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" | "w" => Ok(Direction::Up),
            "down" | "s" => Ok(Direction::Down),
            "left" | "a" => Ok(Direction::Left),
            "right" | "d" => Ok(Direction::Right),
            other => Err(CommandError::InvalidInput(format!(
                "unknown direction {other:?}, expected up/down/left/right or w/a/s/d"
            ))),
        }
    }
}

/// The 8-neighbourhood deltas in scan order (dy outer, dx inner).
///
/// The monster policy depends on this order for its tie behaviour, so it is
/// part of the rules, not an implementation detail of the scan loop.
pub const RING: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Decide whether `role` may occupy `target`.
///
/// Out-of-bounds cells are never legal. The hunter is blocked only by
/// obstacles; stepping onto a monster is legal and triggers capture
/// upstream. A monster is blocked by obstacles and other monsters, but may
/// step onto the hunter (capture) or a treasure (collection). The asymmetry
/// is deliberate.
#[must_use]
pub fn is_legal(grid: &Grid, target: Coord, role: Role) -> bool {
    let Some(cell) = grid.get(target) else {
        return false;
    };

    match role {
        Role::Hunter => cell != Cell::Obstacle,
        Role::Monster => cell != Cell::Obstacle && cell != Cell::Monster,
    }
}

/// Whether the hunter has any legal orthogonal move from `from`.
#[must_use]
pub fn hunter_can_move(grid: &Grid, from: Coord) -> bool {
    Direction::ALL.iter().any(|dir| {
        let (dx, dy) = dir.delta();
        from.offset(dx, dy)
            .is_some_and(|target| is_legal(grid, target, Role::Hunter))
    })
}

/// Whether a monster at `from` has any legal move in its 8-neighbourhood.
#[must_use]
pub fn monster_can_move(grid: &Grid, from: Coord) -> bool {
    RING.iter().any(|&(dx, dy)| {
        from.offset(dx, dy)
            .is_some_and(|target| is_legal(grid, target, Role::Monster))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(cells: &[(Coord, Cell)]) -> Grid {
        let mut grid = Grid::new(10, 10).unwrap();
        for &(coord, cell) in cells {
            grid.set(coord, cell);
        }
        grid
    }

    #[test]
    fn test_out_of_bounds_is_illegal_for_both_roles() {
        let grid = grid_with(&[]);
        assert!(!is_legal(&grid, Coord::new(10, 0), Role::Hunter));
        assert!(!is_legal(&grid, Coord::new(0, 10), Role::Monster));
    }

    #[test]
    fn test_hunter_legality_table() {
        let grid = grid_with(&[
            (Coord::new(1, 1), Cell::Obstacle),
            (Coord::new(2, 2), Cell::Monster),
            (Coord::new(3, 3), Cell::Treasure(5)),
        ]);

        assert!(is_legal(&grid, Coord::new(0, 0), Role::Hunter));
        assert!(!is_legal(&grid, Coord::new(1, 1), Role::Hunter));
        // Stepping onto a monster is legal for the hunter (capture upstream).
        assert!(is_legal(&grid, Coord::new(2, 2), Role::Hunter));
        assert!(is_legal(&grid, Coord::new(3, 3), Role::Hunter));
    }

    #[test]
    fn test_monster_legality_table() {
        let grid = grid_with(&[
            (Coord::new(1, 1), Cell::Obstacle),
            (Coord::new(2, 2), Cell::Monster),
            (Coord::new(3, 3), Cell::Treasure(5)),
            (Coord::new(4, 4), Cell::Hunter),
        ]);

        assert!(is_legal(&grid, Coord::new(0, 0), Role::Monster));
        assert!(!is_legal(&grid, Coord::new(1, 1), Role::Monster));
        assert!(!is_legal(&grid, Coord::new(2, 2), Role::Monster));
        assert!(is_legal(&grid, Coord::new(3, 3), Role::Monster));
        assert!(is_legal(&grid, Coord::new(4, 4), Role::Monster));
    }

    #[test]
    fn test_hunter_mobility() {
        // Walled in on all four orthogonal sides.
        let grid = grid_with(&[
            (Coord::new(5, 4), Cell::Obstacle),
            (Coord::new(5, 6), Cell::Obstacle),
            (Coord::new(4, 5), Cell::Obstacle),
            (Coord::new(6, 5), Cell::Obstacle),
        ]);
        assert!(!hunter_can_move(&grid, Coord::new(5, 5)));

        // Corner hunter blocked by two obstacles.
        let grid = grid_with(&[
            (Coord::new(1, 0), Cell::Obstacle),
            (Coord::new(0, 1), Cell::Obstacle),
        ]);
        assert!(!hunter_can_move(&grid, Coord::new(0, 0)));

        // A monster on an orthogonal neighbour does not block the hunter.
        let grid = grid_with(&[(Coord::new(5, 4), Cell::Monster)]);
        assert!(hunter_can_move(&grid, Coord::new(5, 5)));
    }

    #[test]
    fn test_monster_mobility_uses_diagonals() {
        // All orthogonal neighbours blocked, one diagonal open.
        let grid = grid_with(&[
            (Coord::new(5, 4), Cell::Obstacle),
            (Coord::new(5, 6), Cell::Obstacle),
            (Coord::new(4, 5), Cell::Obstacle),
            (Coord::new(6, 5), Cell::Obstacle),
        ]);
        assert!(monster_can_move(&grid, Coord::new(5, 5)));
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!("up".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!("W".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!("d".parse::<Direction>().unwrap(), Direction::Right);
        assert!("north".parse::<Direction>().is_err());
    }

    #[test]
    fn test_direction_deltas() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }
}
