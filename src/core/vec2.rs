/// 2D vector used for particle kinematics and curve points
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Normalize in place. The zero vector becomes NaN.
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        self.x /= len;
        self.y /= len;
        self
    }

    /// Rescale in place so that `length() == target`.
    ///
    /// Undefined at the origin (produces NaN), same as `normalize`.
    pub fn scale_to_length(&mut self, target: f64) -> &mut Self {
        self.normalize();
        self.x *= target;
        self.y *= target;
        self
    }
}

impl std::ops::Add for Vector2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub for Vector2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::ops::Mul<f64> for Vector2 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_is_euclidean() {
        assert_eq!(Vector2::new(3.0, 4.0).length(), 5.0);
        assert_eq!(Vector2::zero().length(), 0.0);
    }

    #[test]
    fn scale_to_length_keeps_direction() {
        let mut v = Vector2::new(3.0, 4.0);
        v.scale_to_length(10.0);
        assert!((v.x - 6.0).abs() < 1e-12);
        assert!((v.y - 8.0).abs() < 1e-12);
    }

    #[test]
    fn scale_to_length_chains_and_leaves_clone_untouched() {
        let original = Vector2::new(0.0, -2.0);
        let mut copy = original;
        let len = copy.scale_to_length(5.0).length();
        assert!((len - 5.0).abs() < 1e-12);
        assert_eq!(original, Vector2::new(0.0, -2.0));
    }

    #[test]
    fn scale_to_length_at_origin_is_nan() {
        let mut v = Vector2::zero();
        v.scale_to_length(100.0);
        assert!(v.x.is_nan());
        assert!(v.y.is_nan());
    }
}
