//! Drawing surface abstraction and the software raster backend

/// An image the surface can draw scaled
pub trait SpriteImage {
    /// Native width in pixels
    fn width(&self) -> f64;
}

/// 2D raster target the particle pool renders into.
pub trait DrawSurface {
    type Image: SpriteImage;

    fn width(&self) -> f64;
    fn height(&self) -> f64;

    /// Clear the whole surface to transparent
    fn clear(&mut self);

    /// Draw `image` scaled into the rect at `(x, y)` of size `w × h`, with
    /// global opacity `alpha`.
    fn draw_image(&mut self, image: &Self::Image, x: f64, y: f64, w: f64, h: f64, alpha: f64);
}

/// CPU-side RGBA framebuffer (little-endian `0xAABBGGRR` pixels).
///
/// JS can blit it straight into `ImageData` through `as_ptr`.
pub struct PixelSurface {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl PixelSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u32; (width as usize) * (height as usize)],
        }
    }

    /// Resize, dropping the current contents
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize((width as usize) * (height as usize), 0);
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> u32 {
        self.pixels[(y * self.width + x) as usize]
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Get raw pointer for JS interop
    pub fn as_ptr(&self) -> *const u32 {
        self.pixels.as_ptr()
    }

    pub fn len_bytes(&self) -> usize {
        self.pixels.len() * std::mem::size_of::<u32>()
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl DrawSurface for PixelSurface {
    type Image = crate::domain::Sprite;

    fn width(&self) -> f64 {
        self.width as f64
    }

    fn height(&self) -> f64 {
        self.height as f64
    }

    fn clear(&mut self) {
        self.pixels.fill(0);
    }

    fn draw_image(&mut self, image: &Self::Image, x: f64, y: f64, w: f64, h: f64, alpha: f64) {
        // NaN fails every comparison below and is skipped too.
        if !(w > 0.0 && h > 0.0 && alpha > 0.0) {
            return;
        }
        let alpha = alpha.min(1.0);

        let x0 = (x - 0.5).ceil().max(0.0);
        let y0 = (y - 0.5).ceil().max(0.0);
        let x1 = (x + w - 0.5).ceil().min(self.width as f64);
        let y1 = (y + h - 0.5).ceil().min(self.height as f64);
        if !(x0 < x1 && y0 < y1) {
            return;
        }

        let src_size = image.size();
        let scale_x = src_size as f64 / w;
        let scale_y = src_size as f64 / h;

        for py in y0 as u32..y1 as u32 {
            let sy = (((py as f64 + 0.5 - y) * scale_y) as u32).min(src_size - 1);
            let row = (py * self.width) as usize;
            for px in x0 as u32..x1 as u32 {
                let sx = (((px as f64 + 0.5 - x) * scale_x) as u32).min(src_size - 1);
                let src = image.pixel(sx, sy);
                if src >> 24 == 0 {
                    continue;
                }
                let dst = &mut self.pixels[row + px as usize];
                *dst = blend_over(src, *dst, alpha);
            }
        }
    }
}

/// Source-over compositing of non-premultiplied RGBA with extra opacity.
fn blend_over(src: u32, dst: u32, alpha: f64) -> u32 {
    let [sr, sg, sb, sa] = src.to_le_bytes();
    let [dr, dg, db, da] = dst.to_le_bytes();

    let sa = (sa as f64 / 255.0) * alpha;
    let da = da as f64 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return 0;
    }

    let mix = |s: u8, d: u8| -> u8 {
        let v = (s as f64 * sa + d as f64 * da * (1.0 - sa)) / out_a;
        v.round().clamp(0.0, 255.0) as u8
    };

    u32::from_le_bytes([
        mix(sr, dr),
        mix(sg, dg),
        mix(sb, db),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    ])
}
