//! Painting a maze and its solution onto a pixel surface.
//!
//! The maze core knows nothing about pixels. A [`Renderer`] is an explicit drawing
//! surface owned by the caller, and [`Layout`] maps grid cells to pixel rectangles.

mod framebuffer;
mod terminal;

pub use framebuffer::FrameBuffer;
pub use terminal::TerminalRenderer;

use crate::{
    maze::{Cell, Grid},
    solvers::{Path, find_path},
};

/// An opaque RGB color.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb(0xff, 0xff, 0xff);
    pub const GREEN: Rgb = Rgb(0x00, 0xff, 0x00);
    pub const RED: Rgb = Rgb(0xff, 0x00, 0x00);
}

/// A drawing surface that can paint filled rectangles and stroked line segments.
pub trait Renderer {
    /// Resizes the surface. Previous contents may be discarded.
    fn resize(&mut self, width: u32, height: u32);

    /// Fills the rectangle with top-left corner `(x, y)`. Parts outside the surface are clipped.
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb);

    /// Strokes connected segments through `points`, in order.
    fn stroke_polyline(&mut self, points: &[(f32, f32)], color: Rgb);
}

/// Pixel geometry of maze cells.
///
/// Neighbouring cells are placed half a cell apart, so a walkway cell overlaps the
/// wall cells beside it and carved corridors read as solid strips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub cell_width: u32,
    pub cell_height: u32,
}

impl Default for Layout {
    fn default() -> Self {
        Layout::square(11)
    }
}

impl Layout {
    /// Largest cell side accepted by [`Layout::square`].
    pub const MAX_CELL_SIZE: u32 = 1024;

    /// A layout whose cells are `size` pixels on each side, clamped to `1..=MAX_CELL_SIZE`.
    pub fn square(size: u32) -> Self {
        let size = size.clamp(1, Self::MAX_CELL_SIZE);
        Layout {
            cell_width: size,
            cell_height: size,
        }
    }

    /// Horizontal distance between neighbouring cell origins, `ceil(cell_width / 2)`.
    pub fn offset_x(&self) -> u32 {
        self.cell_width.div_ceil(2)
    }

    /// Vertical distance between neighbouring cell origins, `ceil(cell_height / 2)`.
    pub fn offset_y(&self) -> u32 {
        self.cell_height.div_ceil(2)
    }

    /// Canvas size needed to draw `grid`. Saturates at `u32::MAX`.
    pub fn canvas_size(&self, grid: &Grid) -> (u32, u32) {
        let side = |cells: u16, offset: u32| {
            (cells as u32 + 1).saturating_mul(offset).saturating_sub(1)
        };
        (
            side(grid.width(), self.offset_x()),
            side(grid.height(), self.offset_y()),
        )
    }

    /// Top-left pixel of a cell. Saturates at the `i32` range.
    pub fn cell_origin(&self, cell: Cell) -> (i32, i32) {
        let scale = |v: i32, offset: u32| v.saturating_mul(i32::try_from(offset).unwrap_or(i32::MAX));
        (
            scale(cell.x, self.offset_x()),
            scale(cell.y, self.offset_y()),
        )
    }

    /// Center of a cell in pixel space.
    pub fn cell_center(&self, cell: Cell) -> (f32, f32) {
        let (x, y) = self.cell_origin(cell);
        (
            x as f32 + self.cell_width as f32 * 0.5,
            y as f32 + self.cell_height as f32 * 0.5,
        )
    }

    fn fill_cell(&self, renderer: &mut impl Renderer, cell: Cell, color: Rgb) {
        let (x, y) = self.cell_origin(cell);
        renderer.fill_rect(x, y, self.cell_width, self.cell_height, color);
    }
}

/// Sizes the surface to the maze, clears it to black and paints every walkway white.
pub fn draw_maze(grid: &Grid, layout: &Layout, renderer: &mut impl Renderer) {
    let (width, height) = layout.canvas_size(grid);
    renderer.resize(width, height);
    renderer.fill_rect(0, 0, width, height, Rgb::BLACK);

    grid.cells()
        .filter(|&(_, walkway)| walkway)
        .for_each(|(cell, _)| layout.fill_cell(renderer, cell, Rgb::WHITE));
}

/// Strokes the route between `from` and `to`, if any, through the cell centers, then
/// marks `from` in green and `to` in red.
///
/// Markers go on top so they stay visible when cells are a single pixel.
/// Returns the route so the caller can report when there is none.
pub fn draw_solution(
    grid: &Grid,
    layout: &Layout,
    from: Cell,
    to: Cell,
    renderer: &mut impl Renderer,
) -> Option<Path> {
    let path = find_path(grid, from, to);
    if let Some(path) = &path {
        let points = path
            .iter()
            .map(|cell| layout.cell_center(cell))
            .collect::<Vec<_>>();
        renderer.stroke_polyline(&points, Rgb::RED);
    }

    layout.fill_cell(renderer, from, Rgb::GREEN);
    layout.fill_cell(renderer, to, Rgb::RED);
    path
}
