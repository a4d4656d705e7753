use std::{cmp::Reverse, collections::BinaryHeap};

use super::Path;
use crate::maze::{Cell, Grid};

/// A cell reached during the search.
struct SearchNode {
    /// Coordinates of the cell in the maze
    coord: Cell,
    /// Arena slot of the node this one was reached from
    parent: Option<usize>,
    /// Number of unit steps from the start
    traveling_cost: usize,
}

/// Every node created during one search. Predecessors are arena indices, so the
/// chain back to the start is walked and freed without recursion.
struct SearchArena {
    nodes: Vec<SearchNode>,
}

impl SearchArena {
    fn push(&mut self, node: SearchNode) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Follows parent links from `slot` back to the start and returns the cells start-first.
    fn backtrack(&self, slot: usize) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(self.nodes[slot].traveling_cost + 1);
        let mut next = Some(slot);
        while let Some(current) = next {
            let node = &self.nodes[current];
            cells.push(node.coord);
            next = node.parent;
        }
        cells.reverse();
        cells
    }
}

/// Uniform-cost search over the walkway cells of `grid`, with every step costing 1.
///
/// Works on any walkway layout, not only on trees. Returns `None` when either endpoint
/// is off the grid or no walkway route joins them. The start cell itself is not
/// required to be a walkway.
pub fn solve_uniform_cost(grid: &Grid, from: Cell, to: Cell) -> Option<Path> {
    let goal_idx = grid.index(to)?;
    grid.index(from)?;

    let mut arena = SearchArena { nodes: Vec::new() };
    let root = arena.push(SearchNode {
        coord: from,
        parent: None,
        traveling_cost: 0,
    });

    // Min-heap of (cost, arena slot). Equal costs come out in arbitrary order.
    let mut pq: BinaryHeap<Reverse<(usize, usize)>> = BinaryHeap::new();
    pq.push(Reverse((0, root)));
    let mut closed = vec![false; grid.len()].into_boxed_slice();
    let mut expanded = 0usize;

    while let Some(Reverse((cost, slot))) = pq.pop() {
        let coord = arena.nodes[slot].coord;
        let Some(idx) = grid.index(coord) else {
            continue;
        };
        // Stale entry, the cell was already settled through a cheaper or equal route
        if closed[idx] {
            continue;
        }
        closed[idx] = true;
        expanded += 1;

        if idx == goal_idx {
            tracing::debug!(
                "[solve] reached {} from {} at cost {} after expanding {} cells",
                to,
                from,
                cost,
                expanded
            );
            return Some(Path::new(arena.backtrack(slot)));
        }

        let new_cost = cost + 1;
        for (dx, dy) in Cell::axis_offsets(1) {
            let neighbor = coord.offset(dx, dy);
            // Off-grid cells have no index, and walls are impassable
            let Some(neighbor_idx) = grid.index(neighbor) else {
                continue;
            };
            if closed[neighbor_idx] || !grid.is_walkway(neighbor) {
                continue;
            }
            let child = arena.push(SearchNode {
                coord: neighbor,
                parent: Some(slot),
                traveling_cost: new_cost,
            });
            pq.push(Reverse((new_cost, child)));
        }
    }

    tracing::debug!(
        "[solve] no path from {} to {} after expanding {} cells",
        from,
        to,
        expanded
    );
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Dimensions;

    /// Builds a grid from rows of text, `.` for walkways and `#` for walls.
    fn grid_from(rows: &[&str]) -> Grid {
        let dims = Dimensions::new(rows[0].len() as u16, rows.len() as u16).unwrap();
        let mut grid = Grid::new(dims);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch == '.' {
                    grid.set_walkway((x as i32, y as i32));
                }
            }
        }
        grid
    }

    #[test]
    fn test_finds_shortest_route_in_open_room() {
        let grid = grid_from(&["....", "....", "...."]);
        let path = solve_uniform_cost(&grid, Cell::new(0, 0), Cell::new(3, 2)).unwrap();
        assert_eq!(path.cost(), 5);
        assert_eq!(path.start(), Cell::new(0, 0));
        assert_eq!(path.goal(), Cell::new(3, 2));
    }

    #[test]
    fn test_takes_shorter_branch_around_loop() {
        // Two routes from the top-left to the bottom-left, the left one is shorter
        let grid = grid_from(&[
            ".....", //
            ".#.#.", //
            ".#...", //
            ".#.#.", //
            ".....",
        ]);
        let path = solve_uniform_cost(&grid, Cell::new(0, 0), Cell::new(0, 4)).unwrap();
        assert_eq!(path.cost(), 4);
        assert!(path.iter().all(|c| c.x == 0));
    }

    #[test]
    fn test_walls_block_the_route() {
        let grid = grid_from(&["..#..", "..#..", "..#.."]);
        assert!(solve_uniform_cost(&grid, Cell::new(0, 0), Cell::new(4, 2)).is_none());
    }

    #[test]
    fn test_wall_goal_is_unreachable() {
        let grid = grid_from(&["..#"]);
        assert!(solve_uniform_cost(&grid, Cell::new(0, 0), Cell::new(2, 0)).is_none());
    }

    #[test]
    fn test_off_grid_endpoints() {
        let grid = grid_from(&["...", "..."]);
        assert!(solve_uniform_cost(&grid, Cell::new(-1, 0), Cell::new(2, 1)).is_none());
        assert!(solve_uniform_cost(&grid, Cell::new(0, 0), Cell::new(3, 1)).is_none());
    }

    #[test]
    fn test_long_route_does_not_exhaust_the_stack() {
        // Corridors of a 4001x4001 maze run to hundreds of thousands of cells.
        // Run on a thread with an 8 MiB stack so deep recursion would show up.
        let handle = std::thread::Builder::new()
            .stack_size(8 * 1024 * 1024)
            .spawn(|| {
                let dims = Dimensions::new(4001, 4001).unwrap();
                let grid = crate::generators::generate_maze(dims, Some(1));
                let path = solve_uniform_cost(&grid, Cell::ORIGIN, dims.far_corner()).unwrap();
                assert_eq!(path.start(), Cell::ORIGIN);
                assert_eq!(path.goal(), dims.far_corner());
                path.len()
            })
            .unwrap();
        let len = handle.join().expect("search thread should not crash");
        assert!(len >= 4001 * 2 - 1);
    }

    #[test]
    fn test_start_equals_goal() {
        let grid = grid_from(&["#"]);
        let path = solve_uniform_cost(&grid, Cell::new(0, 0), Cell::new(0, 0)).unwrap();
        assert_eq!(path.cells(), &[Cell::new(0, 0)]);
        assert_eq!(path.cost(), 0);
    }
}
