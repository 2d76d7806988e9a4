//! Grid and cell types.

/// A coordinate on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    /// X coordinate (column).
    pub x: u16,
    /// Y coordinate (row).
    pub y: u16,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Offset this coordinate by a signed delta.
    ///
    /// Returns `None` if the result would be negative. Upper bounds are the
    /// grid's business, not the coordinate's.
    #[must_use]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Coord> {
        let x = i32::from(self.x).checked_add(dx)?;
        let y = i32::from(self.y).checked_add(dy)?;
        if x < 0 || y < 0 {
            return None;
        }
        Some(Coord::new(u16::try_from(x).ok()?, u16::try_from(y).ok()?))
    }

    /// Manhattan distance to another coordinate.
    #[must_use]
    pub fn manhattan(self, other: Coord) -> u32 {
        let dx = i32::from(self.x) - i32::from(other.x);
        let dy = i32::from(self.y) - i32::from(other.y);
        dx.unsigned_abs() + dy.unsigned_abs()
    }
}

/// Contents of a single grid cell.
///
/// Exactly one logical occupant per cell; `Empty` is the default. Treasure
/// values are carried in the variant rather than packed into an integer
/// range, so matches are exhaustive and no magic offsets exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Nothing here.
    #[default]
    Empty,
    /// The player-controlled hunter.
    Hunter,
    /// A computer-controlled monster.
    Monster,
    /// A permanent impassable placed cell (distinct from the fence, which
    /// is simply out-of-bounds space).
    Obstacle,
    /// A collectible with value 1-9, removed on collection.
    Treasure(u8),
}

impl Cell {
    /// Treasure value if this cell holds a treasure.
    #[must_use]
    pub const fn treasure_value(self) -> Option<u8> {
        match self {
            Cell::Treasure(v) => Some(v),
            _ => None,
        }
    }

    /// Check whether this cell is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Single-character glyph for text rendering.
    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Hunter => 'H',
            Cell::Monster => 'M',
            Cell::Obstacle => '#',
            Cell::Treasure(v) => char::from_digit(u32::from(v), 10).unwrap_or('?'),
        }
    }
}

/// The game grid: a fixed-size rectangular array of cells.
///
/// A dumb store: `set` does not enforce move legality, that is the rules
/// layer's responsibility.
#[derive(Debug, Clone)]
pub struct Grid {
    width: u16,
    height: u16,
    /// Cells stored in row-major order.
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid filled with empty cells.
    ///
    /// Returns `None` if width or height is zero.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }

        let size = usize::from(width) * usize::from(height);
        Some(Self {
            width,
            height,
            cells: vec![Cell::Empty; size],
        })
    }

    /// Width of the grid.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Height of the grid.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Check if a coordinate is inside the grid (everything outside is the
    /// impassable fence).
    #[must_use]
    pub const fn in_bounds(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    fn coord_to_index(&self, coord: Coord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(usize::from(coord.y) * usize::from(self.width) + usize::from(coord.x))
        } else {
            None
        }
    }

    /// Get the cell at the given coordinate, `None` outside the grid.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.coord_to_index(coord).map(|idx| self.cells[idx])
    }

    /// Set the cell at the given coordinate.
    ///
    /// Returns `false` if the coordinate is out of bounds.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> bool {
        if let Some(idx) = self.coord_to_index(coord) {
            self.cells[idx] = cell;
            true
        } else {
            false
        }
    }

    /// Reset every cell to empty, keeping the dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Iterate over all coordinates and cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells.iter().enumerate().map(|(idx, cell)| {
            let x = (idx % usize::from(self.width)) as u16;
            let y = (idx / usize::from(self.width)) as u16;
            (Coord::new(x, y), *cell)
        })
    }

    /// Count the treasure cells currently on the grid.
    #[must_use]
    pub fn count_treasures(&self) -> u32 {
        self.cells
            .iter()
            .filter(|cell| cell.treasure_value().is_some())
            .count() as u32
    }
}
