//! 2D vector type for positions and offsets

use serde::{Deserialize, Serialize};

/// 2D vector for positions and pointer offsets
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Zero vector
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Create a new vector
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise maximum
    #[inline]
    pub fn max(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Component-wise minimum
    #[inline]
    pub fn min(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Clamp each component into `[lo, hi]`
    ///
    /// Unlike `f32::clamp` this never panics: when `hi < lo` the lower bound wins.
    #[inline]
    pub fn clamp_to(self, lo: Vec2, hi: Vec2) -> Vec2 {
        self.min(hi).max(lo)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, s: f32) -> Vec2 {
        Vec2::new(self.x * s, self.y * s)
    }
}

impl std::ops::Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, s: f32) -> Vec2 {
        Vec2::new(self.x / s, self.y / s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);

        let sum = a + b;
        assert!((sum.x - 4.0).abs() < 0.001);
        assert!((sum.y - 6.0).abs() < 0.001);

        let diff = b - a;
        assert!((diff.x - 2.0).abs() < 0.001);
        assert!((diff.y - 2.0).abs() < 0.001);

        let half = (a * 3.0) / 2.0;
        assert!((half.x - 1.5).abs() < 0.001);
        assert!((half.y - 3.0).abs() < 0.001);
    }

    #[test]
    fn test_vec2_clamp_inside_bounds() {
        let v = Vec2::new(-5.0, 900.0).clamp_to(Vec2::ZERO, Vec2::new(100.0, 500.0));
        assert!((v.x - 0.0).abs() < 0.001);
        assert!((v.y - 500.0).abs() < 0.001);
    }

    #[test]
    fn test_vec2_clamp_inverted_bounds_prefers_lower() {
        // Window wider than the viewport: upper bound is negative
        let v = Vec2::new(50.0, 50.0).clamp_to(Vec2::ZERO, Vec2::new(-200.0, -10.0));
        assert!((v.x - 0.0).abs() < 0.001);
        assert!((v.y - 0.0).abs() < 0.001);
    }
}
