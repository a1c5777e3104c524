use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected configuration
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("particle pool capacity must be at least 1")]
    ZeroCapacity,
    #[error("particle duration must be a positive number of seconds, got {0}")]
    InvalidDuration(f64),
    #[error("sprite size must be at least 1 pixel")]
    InvalidSpriteSize,
    #[error("invalid fill colour {0:?}, expected #rrggbb")]
    InvalidColor(String),
    #[error("settings json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Static effect configuration, fixed at startup.
///
/// JSON keys are camelCase; missing keys keep their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParticleSettings {
    /// Maximum number of live particles
    pub length: usize,
    /// Particle lifetime in seconds
    pub duration: f64,
    /// Initial speed in pixels/sec
    pub velocity: f64,
    /// Acceleration as a multiple of the initial velocity (negative = drag)
    pub effect: f64,
    /// Sprite edge in pixels
    pub size: u32,
    /// Sprite fill, `#rrggbb`
    pub fill: String,
    /// RNG seed; 0 means "seed from the clock"
    pub seed: u32,
}

impl Default for ParticleSettings {
    fn default() -> Self {
        Self {
            length: 500,
            duration: 2.0,
            velocity: 100.0,
            effect: -0.75,
            size: 30,
            fill: "#ea80b0".to_string(),
            seed: 0,
        }
    }
}

impl ParticleSettings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: ParticleSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_pool(self.length, self.duration)?;
        if self.size == 0 {
            return Err(SettingsError::InvalidSpriteSize);
        }
        self.fill_rgba()?;
        Ok(())
    }

    /// Particles per second needed to refill the whole pool once per lifetime.
    pub fn spawn_rate(&self) -> f64 {
        self.length as f64 / self.duration
    }

    /// Fill colour packed as little-endian RGBA (`0xAABBGGRR`), opaque.
    pub fn fill_rgba(&self) -> Result<u32, SettingsError> {
        parse_hex_color(&self.fill)
    }
}

pub(crate) fn validate_pool(length: usize, duration: f64) -> Result<(), SettingsError> {
    if length == 0 {
        return Err(SettingsError::ZeroCapacity);
    }
    if !(duration.is_finite() && duration > 0.0) {
        return Err(SettingsError::InvalidDuration(duration));
    }
    Ok(())
}

fn parse_hex_color(s: &str) -> Result<u32, SettingsError> {
    let hex = s
        .strip_prefix('#')
        .filter(|h| h.len() == 6 && h.bytes().all(|b| b.is_ascii_hexdigit()))
        .ok_or_else(|| SettingsError::InvalidColor(s.to_string()))?;
    let rgb = u32::from_str_radix(hex, 16).map_err(|_| SettingsError::InvalidColor(s.to_string()))?;

    let r = (rgb >> 16) & 0xFF;
    let g = (rgb >> 8) & 0xFF;
    let b = rgb & 0xFF;
    Ok(0xFF00_0000 | (b << 16) | (g << 8) | r)
}
