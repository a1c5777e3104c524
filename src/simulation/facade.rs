use wasm_bindgen::prelude::*;

use crate::domain::{ParticleSettings, Sprite};
use crate::systems::{DrawSurface, PixelSurface};

use super::frame_stats::FrameStats;
use super::{now_secs, HeartCore};

/// Software-rendered heart effect for JS hosts that blit the frame
/// themselves (`putImageData` from `frame_ptr`).
#[wasm_bindgen]
pub struct HeartEffect {
    core: HeartCore,
    sprite: Sprite,
    surface: PixelSurface,
}

impl HeartEffect {
    pub fn with_settings(width: u32, height: u32, settings: ParticleSettings) -> Result<Self, crate::domain::SettingsError> {
        let core = HeartCore::new(settings)?;
        let sprite = core.rasterize_sprite();
        Ok(Self {
            core,
            sprite,
            surface: PixelSurface::new(width, height),
        })
    }

    pub fn core(&self) -> &HeartCore {
        &self.core
    }

    pub fn surface(&self) -> &PixelSurface {
        &self.surface
    }
}

#[wasm_bindgen]
impl HeartEffect {
    /// Create an effect rendering into a `width × height` buffer.
    /// `settings_json` may be omitted for the stock settings.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, settings_json: Option<String>) -> Result<HeartEffect, JsError> {
        let settings = match settings_json {
            Some(json) => ParticleSettings::from_json(&json)?,
            None => ParticleSettings::default(),
        };
        Ok(Self::with_settings(width, height, settings)?)
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.surface.size().0 }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.surface.size().1 }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.pool().len() as u32 }

    #[wasm_bindgen(getter)]
    pub fn spawn_rate(&self) -> f64 { self.core.spawn_rate() }

    /// Resize the framebuffer (canvas resize)
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface.resize(width, height);
    }

    /// Render a frame timed by the wall clock
    pub fn tick(&mut self) {
        self.core.render(now_secs(), &mut self.surface, &self.sprite);
    }

    /// Render a frame with an explicit timestep in seconds
    pub fn step(&mut self, dt: f64) {
        self.core.step(dt, &mut self.surface, &self.sprite);
    }

    /// Call on focus so the time spent unfocused is not simulated
    pub fn reset_clock(&mut self) {
        self.core.reset_clock();
    }

    pub fn clear(&mut self) {
        self.core.clear();
        self.surface.clear();
    }

    /// Get last frame snapshot
    pub fn stats(&self) -> FrameStats {
        self.core.stats()
    }

    /// Get pointer to the RGBA frame (for JS rendering)
    pub fn frame_ptr(&self) -> u32 {
        self.surface.as_ptr() as usize as u32
    }

    pub fn frame_len_bytes(&self) -> u32 {
        self.surface.len_bytes() as u32
    }

    /// Pre-rasterized sprite as RGBA bytes
    pub fn sprite_rgba(&self) -> Vec<u8> {
        self.sprite.to_rgba_bytes()
    }

    #[wasm_bindgen(getter)]
    pub fn sprite_size(&self) -> u32 { self.sprite.size() }
}
