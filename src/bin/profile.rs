use std::time::{Duration, Instant};

use mazecarve::{
    config::Config,
    generators::generate_maze,
    maze::{Cell, Dimensions},
    render::{FrameBuffer, Layout, Rgb, draw_maze, draw_solution},
};

/// Generates, solves and draws the largest odd square maze a byte can describe, repeatedly,
/// and reports the mean time spent in each phase.
fn main() -> mazecarve::error::Result<()> {
    let config = Config::from_env();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(10)
        .max(1);

    let dimensions = Dimensions::new(u8::MAX as u16, u8::MAX as u16)?;
    let layout = Layout::square(config.cell_size);
    let mut frame = FrameBuffer::new(0, 0, Rgb::BLACK);
    let (mut generate, mut solve) = (Duration::ZERO, Duration::ZERO);

    for i in 0..num_iters {
        let start = Instant::now();
        let grid = generate_maze(dimensions, config.seed.map(|s| s.wrapping_add(i as u64)));
        generate += start.elapsed();

        let start = Instant::now();
        draw_maze(&grid, &layout, &mut frame);
        let path = draw_solution(
            &grid,
            &layout,
            Cell::ORIGIN,
            dimensions.far_corner(),
            &mut frame,
        );
        solve += start.elapsed();

        if path.is_none() {
            eprintln!("iteration {}: no path found", i);
        }
    }

    println!(
        "{} iterations on {}x{}: generate {:?}/iter, draw+solve {:?}/iter",
        num_iters,
        dimensions.width(),
        dimensions.height(),
        generate / num_iters,
        solve / num_iters
    );
    Ok(())
}
