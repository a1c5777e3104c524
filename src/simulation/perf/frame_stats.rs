use wasm_bindgen::prelude::*;

/// Snapshot of the last rendered frame
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameStats {
    pub(super) frame_ms: f64,
    pub(super) delta_time: f64,
    pub(super) spawned: u32,
    pub(super) active: u32,
    pub(super) frame: u64,
}

#[wasm_bindgen]
impl FrameStats {
    /// Time spent in the last `render` call
    #[wasm_bindgen(getter)]
    pub fn frame_ms(&self) -> f64 { self.frame_ms }
    #[wasm_bindgen(getter)]
    pub fn delta_time(&self) -> f64 { self.delta_time }
    #[wasm_bindgen(getter)]
    pub fn spawned(&self) -> u32 { self.spawned }
    #[wasm_bindgen(getter)]
    pub fn active(&self) -> u32 { self.active }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
}
