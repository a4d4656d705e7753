use std::io::{Stdout, Write};

use crossterm::{
    QueueableCommand, cursor, queue,
    style::{self, Attribute, Color, StyledContent, Stylize},
    terminal::{self, ClearType},
};

use super::{FrameBuffer, Renderer, Rgb};

/// Draws canvas pixels as colored terminal cells, two columns per pixel so that
/// pixels come out roughly square.
///
/// Drawing calls only touch an in-memory [`FrameBuffer`]. Nothing reaches the terminal
/// until [`TerminalRenderer::present`] is called.
pub struct TerminalRenderer {
    /// Standard output handle to write to the terminal
    stdout: Stdout,
    /// Pixels waiting to be presented
    frame: FrameBuffer,
    /// Terminal row where the top edge of the canvas is drawn
    origin_row: u16,
}

impl TerminalRenderer {
    /// The width of each pixel when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;

    pub fn new(origin_row: u16) -> Self {
        Self {
            stdout: std::io::stdout(),
            frame: FrameBuffer::new(0, 0, Rgb::BLACK),
            origin_row,
        }
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Checks if the canvas fits in a terminal of the given size
    pub fn fits(&self, term_width: u16, term_height: u16) -> bool {
        let needed_width = self.frame.width() as u64 * Self::CELL_WIDTH as u64;
        let needed_height = self.frame.height() as u64 + self.origin_row as u64;
        needed_width <= term_width as u64 && needed_height <= term_height as u64
    }

    fn glyph(color: Rgb) -> StyledContent<&'static str> {
        let Rgb(r, g, b) = color;
        let styled = "  ".on(Color::Rgb { r, g, b });

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled.content().width(),
                Self::CELL_WIDTH as usize,
                "Each pixel must occupy exactly two character widths."
            );
        }

        styled
    }

    /// Writes the buffered canvas to the terminal.
    /// Returns Ok(false) without drawing the canvas if the terminal is too small for it,
    /// after printing a notice in its place.
    pub fn present(&mut self) -> std::io::Result<bool> {
        let (term_width, term_height) = terminal::size()?;
        if !self.fits(term_width, term_height) {
            let msg = format!(
                "Terminal size is too small ({}x{}) for the maze canvas ({}x{}). Please resize the terminal.\r\n",
                term_width,
                term_height,
                self.frame.width() as u64 * Self::CELL_WIDTH as u64,
                self.frame.height() as u64 + self.origin_row as u64,
            );
            queue!(
                self.stdout,
                cursor::MoveTo(0, self.origin_row),
                terminal::Clear(ClearType::FromCursorDown),
                style::PrintStyledContent(msg.with(Color::Yellow).attribute(Attribute::Bold)),
            )?;
            self.stdout.flush()?;
            return Ok(false);
        }

        queue!(
            self.stdout,
            cursor::MoveTo(0, self.origin_row),
            terminal::Clear(ClearType::FromCursorDown)
        )?;
        for (y, row) in self.frame.rows().enumerate() {
            self.stdout
                .queue(cursor::MoveTo(0, self.origin_row + y as u16))?;
            for &pixel in row {
                self.stdout
                    .queue(style::PrintStyledContent(Self::glyph(pixel)))?;
            }
        }
        self.stdout.queue(style::ResetColor)?;
        self.stdout.flush()?;
        Ok(true)
    }
}

impl Renderer for TerminalRenderer {
    fn resize(&mut self, width: u32, height: u32) {
        self.frame.resize(width, height);
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb) {
        self.frame.fill_rect(x, y, width, height, color);
    }

    fn stroke_polyline(&mut self, points: &[(f32, f32)], color: Rgb) {
        self.frame.stroke_polyline(points, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fits_accounts_for_double_width_pixels() {
        let mut renderer = TerminalRenderer::new(2);
        renderer.resize(10, 5);
        assert!(renderer.fits(20, 7));
        assert!(!renderer.fits(19, 7));
        assert!(!renderer.fits(20, 6));
    }

    #[test]
    fn test_drawing_is_buffered() {
        let mut renderer = TerminalRenderer::new(0);
        renderer.resize(3, 3);
        renderer.fill_rect(1, 1, 1, 1, Rgb::WHITE);
        assert_eq!(renderer.frame().pixel(1, 1), Some(Rgb::WHITE));
        assert_eq!(renderer.frame().pixel(0, 0), Some(Rgb::BLACK));
    }
}
