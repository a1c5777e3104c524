//! Pinkboard Engine - heart-outline particle effect in WASM
//!
//! Architecture:
//! - core/        - Vector math, console logging
//! - domain/      - Settings, heart curve, sprite rasterization
//! - systems/     - Particle, circular particle pool, drawing surfaces
//! - simulation/  - Per-frame orchestration and the JS facade
//! - api/         - Canvas backend, frame scheduling, page events

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod api;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    crate::core::logging::init_logger(level);

    log::info!("Pinkboard engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::start;
pub use crate::core::Vector2;
pub use domain::{ParticleSettings, SettingsError, Sprite};
pub use simulation::{FrameStats, HeartCore, HeartEffect};
pub use systems::{DrawSurface, Particle, ParticlePool, PixelSurface, SpriteImage};
