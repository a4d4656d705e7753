use rand::Rng;

use crate::{
    generators::shuffle,
    maze::{Cell, Grid},
};

/// A cell proposed for carving, together with the carved cell that proposed it.
#[derive(Debug, Clone, Copy)]
struct Frontier {
    cell: Cell,
    /// `None` only for the root of the maze.
    parent: Option<Cell>,
}

impl Frontier {
    /// The cell between `cell` and its parent, i.e. the wall knocked out to connect them.
    /// The root has no parent and connects to itself.
    fn connector(&self) -> Cell {
        match self.parent {
            Some(parent) => self.cell.midpoint(parent),
            None => self.cell,
        }
    }
}

/// Carves a perfect maze into `grid`, rooted at `(0, 0)`.
///
/// Cells two steps apart are joined through the cell between them, so carved cells sit
/// on even coordinates and odd cells stay walls unless they connect two carved cells.
/// Frontier entries are explored depth-first with their branch order shuffled, which
/// gives the long winding corridors of a recursive backtracker.
///
/// Walkway status doubles as the visited flag: an entry whose cell is already a walkway
/// is dropped, so every cell is claimed by the first entry that reaches it and the
/// carved cells form a spanning tree.
pub fn randomized_frontier<R: Rng>(grid: &mut Grid, rng: &mut R) {
    let mut stack = vec![Frontier {
        cell: Cell::ORIGIN,
        parent: None,
    }];

    while let Some(entry) = stack.pop() {
        // Either out of bounds, or already carved
        if !grid.in_bounds(entry.cell) || grid.is_walkway(entry.cell) {
            continue;
        }

        // Parent is carved and in bounds, so the connector is too
        grid.set_walkway(entry.cell);
        grid.set_walkway(entry.connector());

        let mut offsets = Cell::axis_offsets(2);
        shuffle(&mut offsets, rng);
        stack.extend(offsets.iter().map(|&(dx, dy)| Frontier {
            cell: entry.cell.offset(dx, dy),
            parent: Some(entry.cell),
        }));
    }
}
