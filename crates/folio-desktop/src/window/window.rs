//! Window struct and state

use serde::{Deserialize, Serialize};
use crate::math::{Rect, Size, Vec2};
use super::WindowId;

/// Window lifecycle state
///
/// `Normal -> Minimized -> Normal` via the taskbar, `Normal <-> Maximized`
/// via the maximize control. Closing removes the record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowState {
    #[default]
    Normal,
    Minimized,
    Maximized,
}

/// A simulated application window
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Window {
    /// Unique identifier
    pub id: WindowId,
    /// App this window was opened for
    pub app_id: String,
    /// Title bar text
    pub title: String,
    /// Icon class shown in the title bar and taskbar
    pub icon: String,
    /// Key handed to the content provider
    pub content_key: String,
    /// Top-left corner in page coordinates
    pub position: Vec2,
    /// Size including the title bar
    pub size: Size,
    /// Current state
    pub state: WindowState,
    /// Z-order (higher = on top)
    pub z_order: u32,
    /// State to return to when un-minimized
    #[serde(skip)]
    pub(crate) prev_state: Option<WindowState>,
}

impl Window {
    /// Get the window's stored bounding rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    /// Rectangle actually shown: the workspace when maximized, the stored geometry otherwise
    pub fn effective_rect(&self, workspace: Rect) -> Rect {
        match self.state {
            WindowState::Maximized => workspace,
            _ => self.rect(),
        }
    }

    #[inline]
    pub fn is_minimized(&self) -> bool {
        self.state == WindowState::Minimized
    }

    #[inline]
    pub fn is_maximized(&self) -> bool {
        self.state == WindowState::Maximized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_window() -> Window {
        Window {
            id: 1,
            app_id: "about".to_string(),
            title: "About Me".to_string(),
            icon: "fas fa-user".to_string(),
            content_key: "about".to_string(),
            position: Vec2::new(100.0, 100.0),
            size: Size::new(500.0, 400.0),
            state: WindowState::Normal,
            z_order: 1001,
            prev_state: None,
        }
    }

    #[test]
    fn test_window_rect() {
        let w = create_test_window();
        let r = w.rect();
        assert!((r.x - 100.0).abs() < 0.001);
        assert!((r.y - 100.0).abs() < 0.001);
        assert!((r.width - 500.0).abs() < 0.001);
        assert!((r.height - 400.0).abs() < 0.001);
    }

    #[test]
    fn test_effective_rect_when_maximized() {
        let mut w = create_test_window();
        let workspace = Rect::new(0.0, 0.0, 1920.0, 1032.0);

        assert_eq!(w.effective_rect(workspace), w.rect());

        w.state = WindowState::Maximized;
        assert_eq!(w.effective_rect(workspace), workspace);
        // Stored geometry is untouched for restore
        assert!((w.size.width - 500.0).abs() < 0.001);
    }

    #[test]
    fn test_state_serializes_lowercase() {
        let json = serde_json::to_string(&WindowState::Minimized).unwrap();
        assert_eq!(json, "\"minimized\"");
    }
}
