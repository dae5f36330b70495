//! Window manager for lifecycle, flags, and z-order

use crate::math::Vec2;
use super::{Window, WindowConfig, WindowId, WindowState};

/// Window store handling lifecycle flags and stacking order
///
/// Windows are kept in the order they were opened. Ids come from a counter
/// and are never reused; z-order values come from a second monotonic
/// counter so the most recently raised window always has the largest value.
pub struct WindowManager {
    /// Open windows, oldest first
    windows: Vec<Window>,
    /// Next window ID
    next_id: u64,
    /// Next z-order value
    next_z: u32,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl WindowManager {
    /// Create a new window manager handing out z-order values from `z_base`
    pub fn new(z_base: u32) -> Self {
        Self {
            windows: Vec::new(),
            next_id: 1,
            next_z: z_base,
        }
    }

    /// Create a new window on top of the stack
    pub fn create(&mut self, config: WindowConfig) -> WindowId {
        let id = self.next_id;
        self.next_id += 1;

        let z_order = self.take_z();

        self.windows.push(Window {
            id,
            app_id: config.app_id,
            title: config.title,
            icon: config.icon,
            content_key: config.content_key,
            position: config.position,
            size: config.size,
            state: WindowState::Normal,
            z_order,
            prev_state: None,
        });

        id
    }

    fn take_z(&mut self) -> u32 {
        self.next_z += 1;
        self.next_z
    }

    /// Remove a window, returning it if it existed
    pub fn close(&mut self, id: WindowId) -> Option<Window> {
        let index = self.windows.iter().position(|w| w.id == id)?;
        Some(self.windows.remove(index))
    }

    /// Get a window by ID
    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// Get a mutable window by ID
    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    /// Check whether a window is open
    #[inline]
    pub fn contains(&self, id: WindowId) -> bool {
        self.get(id).is_some()
    }

    /// Raise a window above all others, returning its new z-order
    pub fn raise(&mut self, id: WindowId) -> Option<u32> {
        if !self.contains(id) {
            return None;
        }
        let z = self.take_z();
        let window = self.get_mut(id)?;
        window.z_order = z;
        Some(z)
    }

    /// Move a window to a new position
    pub fn move_window(&mut self, id: WindowId, position: Vec2) -> bool {
        match self.get_mut(id) {
            Some(window) => {
                window.position = position;
                true
            }
            None => false,
        }
    }

    /// Minimize a window, remembering its previous state
    ///
    /// Returns false if the window is unknown or already minimized.
    pub fn minimize(&mut self, id: WindowId) -> bool {
        match self.get_mut(id) {
            Some(window) if window.state != WindowState::Minimized => {
                window.prev_state = Some(window.state);
                window.state = WindowState::Minimized;
                true
            }
            _ => false,
        }
    }

    /// Restore a minimized window to the state it had before
    ///
    /// Returns false if the window is unknown or not minimized.
    pub fn restore(&mut self, id: WindowId) -> bool {
        match self.get_mut(id) {
            Some(window) if window.state == WindowState::Minimized => {
                window.state = window.prev_state.take().unwrap_or(WindowState::Normal);
                true
            }
            _ => false,
        }
    }

    /// Toggle between Normal and Maximized
    ///
    /// Minimized windows are left alone. Returns the new state on change.
    pub fn toggle_maximize(&mut self, id: WindowId) -> Option<WindowState> {
        let window = self.get_mut(id)?;
        window.state = match window.state {
            WindowState::Normal => WindowState::Maximized,
            WindowState::Maximized => WindowState::Normal,
            WindowState::Minimized => return None,
        };
        Some(window.state)
    }

    /// Get windows sorted by z-order (back to front)
    pub fn windows_by_z(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.windows.iter().collect();
        windows.sort_by_key(|w| w.z_order);
        windows
    }

    /// Windows in the order they were opened
    pub fn iter(&self) -> impl Iterator<Item = &Window> {
        self.windows.iter()
    }

    /// Highest z-order currently assigned to an open window
    pub fn top_z(&self) -> Option<u32> {
        self.windows.iter().map(|w| w.z_order).max()
    }

    /// Get the number of windows
    pub fn count(&self) -> usize {
        self.windows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Size;

    fn config(app: &str) -> WindowConfig {
        WindowConfig {
            app_id: app.to_string(),
            title: app.to_string(),
            position: Vec2::new(100.0, 100.0),
            size: Size::new(500.0, 400.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_window_creation() {
        let mut wm = WindowManager::new(1000);
        let id = wm.create(config("about"));

        let window = wm.get(id).unwrap();
        assert_eq!(window.state, WindowState::Normal);
        assert_eq!(window.z_order, 1001);
        assert_eq!(wm.count(), 1);
    }

    #[test]
    fn test_ids_are_unique_and_not_reused() {
        let mut wm = WindowManager::default();
        let a = wm.create(config("about"));
        wm.close(a);
        let b = wm.create(config("about"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_raise_puts_window_on_top() {
        let mut wm = WindowManager::default();
        let id1 = wm.create(config("one"));
        let id2 = wm.create(config("two"));

        assert!(wm.get(id2).unwrap().z_order > wm.get(id1).unwrap().z_order);

        let z = wm.raise(id1).unwrap();
        assert_eq!(wm.top_z(), Some(z));
        assert!(wm.get(id1).unwrap().z_order > wm.get(id2).unwrap().z_order);
    }

    #[test]
    fn test_raise_unknown_is_none() {
        let mut wm = WindowManager::default();
        assert_eq!(wm.raise(42), None);
    }

    #[test]
    fn test_window_close() {
        let mut wm = WindowManager::default();
        let id = wm.create(config("about"));

        assert!(wm.close(id).is_some());
        assert_eq!(wm.count(), 0);
        assert!(wm.close(id).is_none());
    }

    #[test]
    fn test_window_minimize_restore() {
        let mut wm = WindowManager::default();
        let id = wm.create(config("about"));

        assert!(wm.minimize(id));
        assert!(!wm.minimize(id));
        assert_eq!(wm.get(id).unwrap().state, WindowState::Minimized);

        assert!(wm.restore(id));
        assert!(!wm.restore(id));
        assert_eq!(wm.get(id).unwrap().state, WindowState::Normal);
    }

    #[test]
    fn test_minimized_maximized_window_restores_maximized() {
        let mut wm = WindowManager::default();
        let id = wm.create(config("about"));

        wm.toggle_maximize(id);
        wm.minimize(id);
        wm.restore(id);

        assert_eq!(wm.get(id).unwrap().state, WindowState::Maximized);
    }

    #[test]
    fn test_toggle_maximize() {
        let mut wm = WindowManager::default();
        let id = wm.create(config("about"));

        assert_eq!(wm.toggle_maximize(id), Some(WindowState::Maximized));
        assert_eq!(wm.toggle_maximize(id), Some(WindowState::Normal));

        wm.minimize(id);
        assert_eq!(wm.toggle_maximize(id), None);
        assert_eq!(wm.toggle_maximize(99), None);
    }

    #[test]
    fn test_windows_by_z_back_to_front() {
        let mut wm = WindowManager::default();
        let id1 = wm.create(config("one"));
        let id2 = wm.create(config("two"));
        wm.raise(id1);

        let order: Vec<WindowId> = wm.windows_by_z().iter().map(|w| w.id).collect();
        assert_eq!(order, vec![id2, id1]);

        let opened: Vec<WindowId> = wm.iter().map(|w| w.id).collect();
        assert_eq!(opened, vec![id1, id2]);
    }
}
