//! 2D size type for dimensions

use serde::{Deserialize, Serialize};
use super::Vec2;

/// Width and height in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Zero size
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Convert to Vec2
    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Check if size is zero or negative
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Both dimensions are finite numbers
    #[inline]
    pub fn is_finite(self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }

    /// Shrink height, saturating at zero
    #[inline]
    pub fn minus_height(self, amount: f32) -> Self {
        Self::new(self.width, (self.height - amount).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_as_vec2() {
        let v = Size::new(100.0, 200.0).as_vec2();
        assert!((v.x - 100.0).abs() < 0.001);
        assert!((v.y - 200.0).abs() < 0.001);
    }

    #[test]
    fn test_size_is_empty() {
        assert!(Size::ZERO.is_empty());
        assert!(Size::new(10.0, 0.0).is_empty());
        assert!(!Size::new(1.0, 1.0).is_empty());
    }

    #[test]
    fn test_size_minus_height_saturates() {
        let s = Size::new(1280.0, 40.0).minus_height(48.0);
        assert!((s.width - 1280.0).abs() < 0.001);
        assert!((s.height - 0.0).abs() < 0.001);
    }
}
