//! Domain: effect configuration, the heart curve and its sprite

pub mod curve;
pub mod settings;
pub mod sprite;

pub use settings::{ParticleSettings, SettingsError};
pub use sprite::Sprite;
