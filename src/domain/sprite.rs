//! Pre-rasterized heart sprite
//!
//! Built once at startup by filling the traced outline with a scanline
//! pass, then handed to the render loop as an immutable value.

use crate::core::Vector2;
use crate::systems::surface::SpriteImage;

use super::curve::sprite_outline;

/// Square RGBA sprite. Pixels are little-endian `0xAABBGGRR`, row-major,
/// so the byte view matches canvas `ImageData` layout.
#[derive(Clone, Debug)]
pub struct Sprite {
    size: u32,
    pixels: Vec<u32>,
}

impl Sprite {
    /// Fill the heart outline into a `size × size` image.
    pub fn rasterize(size: u32, fill: u32) -> Self {
        let outline = sprite_outline(size as f64);
        let mut pixels = vec![0u32; (size as usize) * (size as usize)];
        fill_polygon(&outline, size, fill, &mut pixels);
        Self { size, pixels }
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> u32 {
        self.pixels[(y * self.size + x) as usize]
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// RGBA byte copy for `ImageData`
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_le_bytes()).collect()
    }

    pub fn filled_pixel_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p != 0).count()
    }
}

impl SpriteImage for Sprite {
    fn width(&self) -> f64 {
        self.size as f64
    }
}

/// Even-odd scanline fill sampled at pixel centres.
fn fill_polygon(points: &[Vector2], size: u32, color: u32, out: &mut [u32]) {
    if points.len() < 3 {
        return;
    }

    let mut crossings: Vec<f64> = Vec::with_capacity(16);
    let edge_count = points.len();

    for row in 0..size {
        let yc = row as f64 + 0.5;
        crossings.clear();

        for i in 0..edge_count {
            let a = points[i];
            let b = points[(i + 1) % edge_count];
            let spans = (a.y <= yc && yc < b.y) || (b.y <= yc && yc < a.y);
            if spans {
                crossings.push(a.x + (yc - a.y) * (b.x - a.x) / (b.y - a.y));
            }
        }

        crossings.sort_by(|l, r| l.total_cmp(r));

        let row_start = (row * size) as usize;
        for pair in crossings.chunks_exact(2) {
            let start = (pair[0] - 0.5).ceil().max(0.0) as u32;
            let end = ((pair[1] - 0.5).ceil().max(0.0) as u32).min(size);
            for col in start..end {
                out[row_start + col as usize] = color;
            }
        }
    }
}
