//! Drag state for window moves

use crate::math::Vec2;
use crate::window::WindowId;

/// An in-progress window move
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    /// Window being moved
    pub window_id: WindowId,
    /// Offset from window origin to the pointer at drag start
    pub offset: Vec2,
}

impl DragState {
    /// Capture the pointer-to-window offset
    pub fn capture(window_id: WindowId, pointer: Vec2, window_position: Vec2) -> Self {
        Self {
            window_id,
            offset: pointer - window_position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_offset() {
        let state = DragState::capture(7, Vec2::new(150.0, 130.0), Vec2::new(100.0, 100.0));

        assert_eq!(state.window_id, 7);
        assert!((state.offset.x - 50.0).abs() < 0.001);
        assert!((state.offset.y - 30.0).abs() < 0.001);
    }
}
