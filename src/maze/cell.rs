use std::fmt;

/// A coordinate pair on the maze grid.
///
/// Coordinates are signed so a cell may sit off the grid while the carver is still
/// deciding whether to keep it. Bounds are always checked against a [`Grid`](super::Grid)
/// before the cell is used to read or write.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const ORIGIN: Cell = Cell { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    /// Returns the cell displaced by `(dx, dy)`.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Cell {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns the cell halfway between `self` and `other`, truncating toward zero.
    pub const fn midpoint(self, other: Cell) -> Self {
        Cell {
            x: (self.x + other.x) / 2,
            y: (self.y + other.y) / 2,
        }
    }

    /// Checks if `other` is exactly one unit step away along a single axis.
    pub fn is_adjacent(self, other: Cell) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }

    /// The four axis-aligned cells at distance `step`, in right, left, down, up order.
    pub const fn axis_offsets(step: i32) -> [(i32, i32); 4] {
        [(step, 0), (-step, 0), (0, step), (0, -step)]
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Cell { x, y }
    }
}

impl From<Cell> for (i32, i32) {
    fn from(cell: Cell) -> Self {
        (cell.x, cell.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_truncates() {
        assert_eq!(Cell::new(2, 0).midpoint(Cell::new(0, 0)), Cell::new(1, 0));
        assert_eq!(Cell::new(4, 6).midpoint(Cell::new(4, 4)), Cell::new(4, 5));
        assert_eq!(Cell::ORIGIN.midpoint(Cell::ORIGIN), Cell::ORIGIN);
    }

    #[test]
    fn test_adjacency() {
        let c = Cell::new(3, 3);
        assert!(c.is_adjacent(Cell::new(4, 3)));
        assert!(c.is_adjacent(Cell::new(3, 2)));
        assert!(!c.is_adjacent(Cell::new(4, 4)));
        assert!(!c.is_adjacent(c));
        assert!(!c.is_adjacent(Cell::new(5, 3)));
    }

    #[test]
    fn test_tuple_conversion() {
        let c: Cell = (7, -2).into();
        assert_eq!(c, Cell::new(7, -2));
        assert_eq!(<(i32, i32)>::from(c), (7, -2));
    }
}
