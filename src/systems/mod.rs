//! Systems: per-particle simulation, the particle pool, drawing surfaces

pub mod particle;
pub mod pool;
pub mod surface;

pub use particle::Particle;
pub use pool::ParticlePool;
pub use surface::{DrawSurface, PixelSurface, SpriteImage};
