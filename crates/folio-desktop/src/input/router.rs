//! Input router state machine

use crate::math::Vec2;
use crate::window::WindowId;
use super::DragState;

/// Input router holding the single active drag
pub struct InputRouter {
    /// Current drag state
    drag: Option<DragState>,
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl InputRouter {
    /// Create a new input router
    pub fn new() -> Self {
        Self { drag: None }
    }

    /// Get current drag state
    #[inline]
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Check if currently dragging
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Window currently being dragged
    #[inline]
    pub fn dragged_window(&self) -> Option<WindowId> {
        self.drag.map(|d| d.window_id)
    }

    /// Start window move operation, replacing any previous drag
    pub fn start_window_move(&mut self, window_id: WindowId, pointer: Vec2, window_position: Vec2) {
        self.drag = Some(DragState::capture(window_id, pointer, window_position));
    }

    /// End current drag operation
    pub fn end_drag(&mut self) {
        self.drag = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_router_move() {
        let mut router = InputRouter::new();
        assert!(!router.is_dragging());

        router.start_window_move(1, Vec2::new(110.0, 110.0), Vec2::new(100.0, 100.0));
        assert!(router.is_dragging());
        assert_eq!(router.dragged_window(), Some(1));

        router.end_drag();
        assert!(!router.is_dragging());
        assert_eq!(router.dragged_window(), None);
    }

    #[test]
    fn test_only_one_drag_at_a_time() {
        let mut router = InputRouter::new();
        router.start_window_move(1, Vec2::ZERO, Vec2::ZERO);
        router.start_window_move(2, Vec2::ZERO, Vec2::ZERO);

        assert_eq!(router.dragged_window(), Some(2));
    }

    #[test]
    fn test_end_drag_without_drag() {
        let mut router = InputRouter::new();
        router.end_drag();
        assert!(!router.is_dragging());
    }
}
