//! HTML canvas backend for `DrawSurface`

use wasm_bindgen::{Clamped, JsCast};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, ImageData};

use crate::domain::Sprite;
use crate::systems::{DrawSurface, SpriteImage};

use super::error::GlueError;

/// The sprite uploaded into an offscreen canvas, ready for `drawImage`
pub struct CanvasSprite {
    canvas: HtmlCanvasElement,
    size: u32,
}

impl CanvasSprite {
    pub fn upload(document: &Document, sprite: &Sprite) -> Result<Self, GlueError> {
        let size = sprite.size();
        let canvas = create_canvas(document)?;
        canvas.set_width(size);
        canvas.set_height(size);

        let ctx = context_2d(&canvas)?;
        let bytes = sprite.to_rgba_bytes();
        let data = ImageData::new_with_u8_clamped_array_and_sh(Clamped(bytes.as_slice()), size, size)?;
        ctx.put_image_data(&data, 0.0, 0.0)?;

        Ok(Self { canvas, size })
    }
}

impl SpriteImage for CanvasSprite {
    fn width(&self) -> f64 {
        self.size as f64
    }
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, GlueError> {
        let ctx = context_2d(&canvas)?;
        Ok(Self { canvas, ctx })
    }

    /// Look up `<canvas id=...>` in the document
    pub fn from_element_id(document: &Document, id: &str) -> Result<Self, GlueError> {
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| GlueError::MissingElement(id.to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| GlueError::NotACanvas(id.to_string()))?;
        Self::new(canvas)
    }

    /// Match the backing store to the element's layout size
    pub fn fit_to_layout(&self) {
        let w = self.canvas.offset_width().max(0) as u32;
        let h = self.canvas.offset_height().max(0) as u32;
        if w != self.canvas.width() || h != self.canvas.height() {
            self.canvas.set_width(w);
            self.canvas.set_height(h);
            log::debug!("canvas resized to {}x{}", w, h);
        }
    }
}

impl DrawSurface for CanvasSurface {
    type Image = CanvasSprite;

    fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    fn height(&self) -> f64 {
        self.canvas.height() as f64
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width(), self.height());
    }

    fn draw_image(&mut self, image: &CanvasSprite, x: f64, y: f64, w: f64, h: f64, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
        if let Err(err) = self
            .ctx
            .draw_image_with_html_canvas_element_and_dw_and_dh(&image.canvas, x, y, w, h)
        {
            log::trace!("drawImage failed: {:?}", err);
        }
    }
}

fn create_canvas(document: &Document) -> Result<HtmlCanvasElement, GlueError> {
    document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| GlueError::NotACanvas("<offscreen>".to_string()))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, GlueError> {
    canvas
        .get_context("2d")?
        .ok_or(GlueError::NoContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| GlueError::NoContext)
}
