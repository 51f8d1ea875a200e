use raylib::prelude::*;

use crate::textures::Pixmap;

/// CPU pixel surface the frame is composed into before being blitted
/// to the window. Every draw is bounds-checked; out-of-range writes
/// are dropped.
pub struct Framebuffer {
    pub color_buffer: Vec<Color>,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let bg = Color::BLACK;
        Self {
            color_buffer: vec![bg; (width * height) as usize],
            width,
            height,
            background_color: bg,
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.color_buffer.fill(self.background_color);
    }

    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x < self.width && y < self.height {
            self.color_buffer[(y * self.width + x) as usize] = color;
        }
    }

    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Color {
        if x < self.width && y < self.height {
            return self.color_buffer[(y * self.width + x) as usize];
        }
        self.background_color
    }

    /// Fills full-width rows [y0, y1) with one color.
    pub fn fill_rows(&mut self, y0: u32, y1: u32, color: Color) {
        let y1 = y1.min(self.height);
        for y in y0..y1 {
            let row = (y * self.width) as usize;
            self.color_buffer[row..row + self.width as usize].fill(color);
        }
    }

    /// Draws a 1-pixel-wide textured strip at column `x`, stretching
    /// texture column `tex_x` over [top, top + height).
    pub fn draw_textured_strip(&mut self, x: u32, top: u32, height: u32, tex: &Pixmap, tex_x: u32) {
        if height == 0 {
            return;
        }
        let bottom = (top + height).min(self.height);
        for y in top..bottom {
            let rel = (y - top) as f32 / height as f32;
            let tex_y = (rel * tex.height() as f32) as u32;
            self.set_pixel(x, y, tex.sample(tex_x, tex_y));
        }
    }
}
