use std::fmt;

use super::{Cell, Dimensions};

/// A fixed-size field of walkway flags addressed by linear index `x + y * width`.
///
/// Cells that were never marked are walls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[bool]>,
    width: u16,
    height: u16,
}

impl Grid {
    /// Creates a grid of the given dimensions with every cell a wall.
    pub fn new(dimensions: Dimensions) -> Self {
        let (width, height) = (dimensions.width(), dimensions.height());
        let data = vec![false; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::from_grid(self.width, self.height)
    }

    /// Total number of cells, walls included.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn in_bounds(&self, cell: impl Into<Cell>) -> bool {
        let Cell { x, y } = cell.into();
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    /// Linear index of an in-bounds cell, or `None` if the cell lies off the grid.
    pub fn index(&self, cell: impl Into<Cell>) -> Option<usize> {
        let cell = cell.into();
        self.in_bounds(cell)
            .then(|| cell.x as usize + cell.y as usize * self.width as usize)
    }

    /// Inverse of [`Grid::index`].
    pub fn cell_at(&self, index: usize) -> Option<Cell> {
        (index < self.data.len()).then(|| {
            let width = self.width as usize;
            Cell::new((index % width) as i32, (index / width) as i32)
        })
    }

    /// Off-grid cells are never walkways.
    pub fn is_walkway(&self, cell: impl Into<Cell>) -> bool {
        self.index(cell).is_some_and(|idx| self.data[idx])
    }

    /// Marks a cell as walkway.
    ///
    /// # Panics
    /// If `cell` is out of bounds. Callers are expected to bounds-check first.
    pub fn set_walkway(&mut self, cell: impl Into<Cell>) {
        let cell = cell.into();
        match self.index(cell) {
            Some(idx) => self.data[idx] = true,
            None => panic!(
                "Cannot mark {} as walkway on a {}x{} grid: out of bounds",
                cell, self.width, self.height
            ),
        }
    }

    /// Number of walkway cells.
    pub fn walkway_count(&self) -> usize {
        self.data.iter().filter(|&&walkway| walkway).count()
    }

    /// Iterates every cell with its walkway flag, in index order.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, bool)> + '_ {
        let width = self.width as usize;
        self.data.iter().enumerate().map(move |(i, &walkway)| {
            (Cell::new((i % width) as i32, (i / width) as i32), walkway)
        })
    }
}

impl std::ops::Index<Cell> for Grid {
    type Output = bool;

    fn index(&self, cell: Cell) -> &Self::Output {
        match Grid::index(self, cell) {
            Some(idx) => &self.data[idx],
            None => panic!("The given coordinate {} is out of bounds", cell),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.width as usize) {
            for &walkway in row {
                f.write_str(if walkway { " " } else { "█" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
