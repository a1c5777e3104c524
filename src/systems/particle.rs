use crate::core::Vector2;

use super::surface::{DrawSurface, SpriteImage};

/// Cubic ease-out on normalized age: 0 at birth, 1 at end of life.
///
/// Not clamped; ages past the lifetime extrapolate.
#[inline]
pub fn ease(t: f64) -> f64 {
    let u = t - 1.0;
    u * u * u + 1.0
}

/// Global opacity for normalized age `t` (linear fade-out)
#[inline]
pub fn opacity(t: f64) -> f64 {
    1.0 - t
}

/// One sprite in flight. Lives in a pool slot and is re-initialized in place.
#[derive(Clone, Copy, Debug, Default)]
pub struct Particle {
    pub position: Vector2,
    pub velocity: Vector2,
    pub acceleration: Vector2,
    /// Seconds since `initialize`
    pub age: f64,
}

impl Particle {
    /// Reset the slot. `effect` scales the initial velocity into a constant
    /// acceleration (negative values brake and curl the particle back).
    pub fn initialize(&mut self, x: f64, y: f64, dx: f64, dy: f64, effect: f64) {
        self.position = Vector2::new(x, y);
        self.velocity = Vector2::new(dx, dy);
        self.acceleration = Vector2::new(dx * effect, dy * effect);
        self.age = 0.0;
    }

    /// Semi-implicit Euler step
    #[inline]
    pub fn update(&mut self, dt: f64) {
        self.position += self.velocity * dt;
        self.velocity += self.acceleration * dt;
        self.age += dt;
    }

    pub fn draw<S: DrawSurface>(&self, surface: &mut S, sprite: &S::Image, duration: f64) {
        let t = self.age / duration;
        let size = sprite.width() * ease(t);
        surface.draw_image(
            sprite,
            self.position.x - size / 2.0,
            self.position.y - size / 2.0,
            size,
            size,
            opacity(t),
        );
    }
}
