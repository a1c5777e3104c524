//! Parametric heart curve
//!
//! x = 160 sin³t
//! y = 130 cos t − 50 cos 2t − 20 cos 3t − 10 cos 4t + 25
//!
//! Curve space is y-up with the heart roughly spanning x ∈ [-160, 160] and
//! y ∈ [-145, 115]. Callers flip y when mapping to screen space.

use std::f64::consts::PI;

use crate::core::Vector2;

/// Parameter increment used when tracing the sprite outline
pub const OUTLINE_STEP: f64 = 0.01;

/// Curve units covered by one sprite edge
const OUTLINE_SPAN: f64 = 350.0;

/// Point on the heart for `t` in `[-π, π]`.
pub fn point_on_heart(t: f64) -> Vector2 {
    Vector2::new(
        160.0 * t.sin().powi(3),
        130.0 * t.cos() - 50.0 * (2.0 * t).cos() - 20.0 * (3.0 * t).cos() - 10.0 * (4.0 * t).cos() + 25.0,
    )
}

/// Map a uniform sample `u` in `[0, 1)` to a curve parameter in `(-π, π]`.
#[inline]
pub fn parameter_from_unit(u: f64) -> f64 {
    PI - 2.0 * PI * u
}

/// Closed outline of the heart in sprite pixel space (y-down, centred in a
/// `size × size` box).
pub fn sprite_outline(size: f64) -> Vec<Vector2> {
    let to_sprite = |t: f64| {
        let p = point_on_heart(t);
        Vector2::new(size / 2.0 + p.x * size / OUTLINE_SPAN, size / 2.0 - p.y * size / OUTLINE_SPAN)
    };

    let mut points = Vec::with_capacity((2.0 * PI / OUTLINE_STEP) as usize + 2);
    let mut t = -PI;
    points.push(to_sprite(t));
    while t < PI {
        t += OUTLINE_STEP;
        points.push(to_sprite(t));
    }
    points
}
