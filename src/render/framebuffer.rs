use super::{Renderer, Rgb};

/// An in-memory RGB pixel surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
    background: Rgb,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        FrameBuffer {
            width,
            height,
            pixels: vec![background; width as usize * height as usize],
            background,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        self.pixel_index(x, y).map(|idx| self.pixels[idx])
    }

    /// Rows of pixels, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        // chunks panics on 0
        self.pixels.chunks(self.width.max(1) as usize)
    }

    pub fn clear(&mut self) {
        self.pixels.fill(self.background);
    }

    fn pixel_index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(idx) = self.pixel_index(x, y) {
            self.pixels[idx] = color;
        }
    }

    /// Rasterises one segment by stepping along its longer axis.
    fn draw_segment(&mut self, from: (f32, f32), to: (f32, f32), color: Rgb) {
        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as u32;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let x = (from.0 + dx * t).floor() as i32;
            let y = (from.1 + dy * t).floor() as i32;
            self.set_pixel(x, y, color);
        }
    }
}

impl Renderer for FrameBuffer {
    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = vec![self.background; width as usize * height as usize];
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let extent = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);
        let x1 = x.saturating_add(extent(width)).min(extent(self.width));
        let y1 = y.saturating_add(extent(height)).min(extent(self.height));
        for py in y0..y1 {
            for px in x0..x1 {
                self.set_pixel(px, py, color);
            }
        }
    }

    fn stroke_polyline(&mut self, points: &[(f32, f32)], color: Rgb) {
        match points {
            [] => {}
            [point] => self.set_pixel(point.0.floor() as i32, point.1.floor() as i32, color),
            _ => points
                .windows(2)
                .for_each(|w| self.draw_segment(w[0], w[1], color)),
        }
    }
}
