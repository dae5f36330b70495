//! Pointer drag operations

use tracing::debug;
use crate::error::DesktopError;
use crate::events::DesktopEvent;
use crate::input::{calculate_drag_position, InputResult};
use crate::math::Vec2;
use crate::window::WindowId;
use super::DesktopEngine;

impl DesktopEngine {
    /// Title bar pointer down: focus the window and start moving it
    ///
    /// Refused for unknown, minimized and maximized windows.
    pub fn begin_drag(&mut self, id: WindowId, x: f32, y: f32) -> InputResult {
        match self.try_begin_drag(id, Vec2::new(x, y)) {
            Ok(()) => InputResult::Handled,
            Err(e) => {
                debug!(error = %e, "drag refused");
                InputResult::Unhandled
            }
        }
    }

    pub fn try_begin_drag(&mut self, id: WindowId, pointer: Vec2) -> Result<(), DesktopError> {
        let window = self.windows.get(id).ok_or(DesktopError::UnknownWindow(id))?;
        if window.is_minimized() {
            return Err(DesktopError::WindowMinimized(id));
        }
        if window.is_maximized() {
            return Err(DesktopError::WindowMaximized(id));
        }
        let position = window.position;

        self.try_focus(id)?;
        self.input.start_window_move(id, pointer, position);
        Ok(())
    }

    /// Pointer move: reposition the dragged window, if any
    pub fn update_drag(&mut self, x: f32, y: f32) -> InputResult {
        let drag = match self.input.drag_state() {
            Some(drag) => *drag,
            None => return InputResult::Unhandled,
        };

        let size = match self.windows.get(drag.window_id) {
            Some(window) => window.size,
            None => {
                self.input.end_drag();
                return InputResult::Unhandled;
            }
        };

        let position = calculate_drag_position(Vec2::new(x, y), drag.offset, size, self.workspace_rect());
        self.windows.move_window(drag.window_id, position);
        self.publish(DesktopEvent::WindowMoved { id: drag.window_id, position });
        InputResult::Handled
    }

    /// Pointer up: stop any drag
    pub fn end_drag(&mut self) -> InputResult {
        let was_dragging = self.input.is_dragging();
        self.input.end_drag();
        InputResult::from(was_dragging)
    }
}
