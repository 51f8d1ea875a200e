use raylib::prelude::*;

/// Immutable CPU-side pixel grid, sampled per pixel with wrapping
/// coordinates so textures tile.
#[derive(Clone)]
pub struct Pixmap {
    w: u32,
    h: u32,
    px: Vec<Color>,
}

impl Pixmap {
    pub fn width(&self) -> u32 {
        self.w
    }

    pub fn height(&self) -> u32 {
        self.h
    }

    #[inline]
    pub fn sample(&self, x: u32, y: u32) -> Color {
        let xi = (x % self.w) as usize;
        let yi = (y % self.h) as usize;
        self.px[yi * self.w as usize + xi]
    }
}

/// Loads the wall texture from assets if present, otherwise builds a
/// procedural checker so the renderer works with no files on disk.
pub fn load_wall_texture() -> Pixmap {
    for path in ["assets/wall.png", "wall.png"] {
        if let Ok(img) = Image::load_image(path) {
            let w = img.width().max(1) as u32;
            let h = img.height().max(1) as u32;
            let px = img.get_image_data().to_vec();
            return Pixmap { w, h, px };
        }
    }
    make_checker(64, 64, Color::new(150, 150, 150, 255))
}

fn make_checker(w: u32, h: u32, base: Color) -> Pixmap {
    let mut px = vec![base; (w * h) as usize];
    let cell = 8u32;
    for y in 0..h {
        for x in 0..w {
            if ((x / cell) + (y / cell)) % 2 == 0 {
                let i = (y * w + x) as usize;
                px[i] = mix(px[i], Color::WHITE, 24);
            }
        }
    }
    Pixmap { w, h, px }
}

#[inline]
fn mix(a: Color, b: Color, t: u8) -> Color {
    let ta = t as u16;
    let na = 255u16 - ta;
    let ch = |x: u8, y: u8| -> u8 { (((x as u16) * na + (y as u16) * ta) / 255) as u8 };
    Color::new(ch(a.r, b.r), ch(a.g, b.g), ch(a.b, b.b), ch(a.a, b.a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampling_wraps_both_axes() {
        let pm = make_checker(64, 64, Color::new(150, 150, 150, 255));
        assert_eq!(pm.sample(3, 5), pm.sample(3 + 64, 5 + 128));
    }

    #[test]
    fn checker_alternates() {
        let pm = make_checker(64, 64, Color::new(150, 150, 150, 255));
        // Adjacent 8x8 blocks differ in brightness.
        assert_ne!(pm.sample(0, 0), pm.sample(8, 0));
        assert_eq!(pm.sample(0, 0), pm.sample(16, 0));
    }
}
