use crate::core::Vector2;
use crate::domain::curve::{parameter_from_unit, point_on_heart};

use super::random::next_unit;
use super::HeartCore;

/// Whole particles owed for a frame of `dt` seconds.
///
/// The fractional part is dropped, not carried into the next frame.
#[inline]
pub fn spawn_count(rate: f64, dt: f64) -> usize {
    let amount = rate * dt;
    if amount.is_finite() && amount > 0.0 {
        amount.floor() as usize
    } else {
        0
    }
}

/// Spawn origin (screen space, y-down) and outward velocity for one particle.
pub(super) fn heart_spawn(t: f64, width: f64, height: f64, speed: f64) -> (Vector2, Vector2) {
    let pos = point_on_heart(t);
    let mut dir = pos;
    dir.scale_to_length(speed);
    (
        Vector2::new(width / 2.0 + pos.x, height / 2.0 - pos.y),
        Vector2::new(dir.x, -dir.y),
    )
}

/// Spawns at most one pool's worth per frame; anything past that would only
/// overwrite particles born in the same frame.
pub(super) fn spawn_particles(core: &mut HeartCore, dt: f64, width: f64, height: f64) -> usize {
    let amount = spawn_count(core.spawn_rate, dt).min(core.pool.capacity());
    let speed = core.settings.velocity;

    for _ in 0..amount {
        let t = parameter_from_unit(next_unit(&mut core.rng_state));
        let (origin, velocity) = heart_spawn(t, width, height, speed);
        core.pool.add(origin.x, origin.y, velocity.x, velocity.y);
    }
    amount
}
