mod uniform_cost;

pub use uniform_cost::solve_uniform_cost;

use crate::maze::{Cell, Grid};

/// An ordered route of cells from a start to a goal, both inclusive.
/// Consecutive cells are one unit step apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    /// # Panics
    /// If `cells` is empty. A path always contains at least its start.
    fn new(cells: Vec<Cell>) -> Self {
        assert!(!cells.is_empty(), "A path must contain at least one cell");
        Path { cells }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn start(&self) -> Cell {
        self.cells[0]
    }

    pub fn goal(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    /// Number of steps taken, one less than the number of cells.
    pub fn cost(&self) -> usize {
        self.cells.len() - 1
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }
}

impl IntoIterator for Path {
    type Item = Cell;
    type IntoIter = std::vec::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

/// Finds the route between two cells of a carved maze.
///
/// Returns `None` if the goal cannot be reached, which is an ordinary outcome
/// (for instance when an even width leaves the far corner walled in).
pub fn find_path(grid: &Grid, from: impl Into<Cell>, to: impl Into<Cell>) -> Option<Path> {
    solve_uniform_cost(grid, from.into(), to.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::generate_maze;
    use crate::maze::Dimensions;

    fn assert_valid_path(grid: &Grid, path: &Path, from: Cell, to: Cell) {
        assert_eq!(path.start(), from);
        assert_eq!(path.goal(), to);
        assert!(path.iter().all(|c| grid.is_walkway(c)));
        assert!(path.cells().windows(2).all(|w| w[0].is_adjacent(w[1])));
    }

    #[test]
    fn test_corner_to_corner_on_generated_maze() {
        let grid = generate_maze(Dimensions::new(5, 5).unwrap(), Some(3));
        let path = find_path(&grid, (0, 0), (4, 4)).unwrap();
        assert!(!path.is_empty());
        assert_valid_path(&grid, &path, Cell::new(0, 0), Cell::new(4, 4));
    }

    #[test]
    fn test_any_two_walkways_are_connected() {
        for seed in 0..4 {
            let grid = generate_maze(Dimensions::new(21, 15).unwrap(), Some(seed));
            let walkways: Vec<Cell> = grid
                .cells()
                .filter(|&(_, w)| w)
                .map(|(c, _)| c)
                .step_by(7)
                .collect();
            for pair in walkways.windows(2) {
                let path = find_path(&grid, pair[0], pair[1]).unwrap();
                assert_valid_path(&grid, &path, pair[0], pair[1]);
                // No cell is visited twice on the unique route of a tree
                let mut cells = path.cells().to_vec();
                cells.sort();
                cells.dedup();
                assert_eq!(cells.len(), path.len());
            }
        }
    }

    #[test]
    fn test_single_cell_maze() {
        let grid = generate_maze(Dimensions::new(1, 1).unwrap(), None);
        let path = find_path(&grid, (0, 0), (0, 0)).unwrap();
        assert_eq!(path.cells(), &[Cell::ORIGIN]);
        assert_eq!(path.cost(), 0);
    }

    #[test]
    fn test_even_dimensions_leave_far_corner_unreachable() {
        let dims = Dimensions::new(8, 8).unwrap();
        let grid = generate_maze(dims, Some(1));
        assert!(find_path(&grid, Cell::ORIGIN, dims.far_corner()).is_none());
    }
}
