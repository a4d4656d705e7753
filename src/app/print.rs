//! Non-interactive mode: print one maze and its solution as text.

use crate::{
    config::Config,
    error::{MazeError, Result},
    generators::generate_maze,
    maze::{Cell, Dimensions, Grid},
    solvers::{Path, find_path},
};

/// Renders `grid` as text with walls as `█`, the route as `·`, and its ends as `S` and `G`.
pub fn render_text(grid: &Grid, path: Option<&Path>) -> String {
    let mut on_path = vec![false; grid.len()];
    if let Some(path) = path {
        path.iter()
            .filter_map(|cell| grid.index(cell))
            .for_each(|idx| on_path[idx] = true);
    }

    let mut out = String::with_capacity(grid.len() * 3 + grid.height() as usize);
    for (idx, (cell, walkway)) in grid.cells().enumerate() {
        let symbol = match path {
            Some(path) if cell == path.start() => 'S',
            Some(path) if cell == path.goal() => 'G',
            _ if on_path[idx] => '·',
            _ if walkway => ' ',
            _ => '█',
        };
        out.push(symbol);
        if cell.x == grid.width() as i32 - 1 {
            out.push('\n');
        }
    }
    out
}

/// Handles `--print WIDTH HEIGHT [SEED]`.
pub fn run(config: &Config, args: &[String]) -> Result<()> {
    let (width, height, seed) = match args {
        [w, h] => (w, h, None),
        [w, h, seed] => (w, h, Some(seed)),
        _ => {
            return Err(MazeError::InvalidArgument(
                "expected --print WIDTH HEIGHT [SEED]".to_string(),
            ));
        }
    };
    let dimensions = Dimensions::parse(width, height)?;
    let seed = match seed {
        Some(s) => Some(
            s.parse::<u64>()
                .map_err(|_| MazeError::InvalidArgument(format!("seed {:?} is not a number", s)))?,
        ),
        None => config.seed,
    };

    let grid = generate_maze(dimensions, seed);
    let (from, to) = (Cell::ORIGIN, dimensions.far_corner());
    let path = find_path(&grid, from, to);
    print!("{}", render_text(&grid, path.as_ref()));
    match path {
        Some(path) => println!("Path from {} to {}: {} steps", from, to, path.cost()),
        None => println!("No path from {} to {}", from, to),
    }
    Ok(())
}
