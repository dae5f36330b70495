//! Taskbar entries mirroring open windows

use serde::Serialize;
use crate::window::WindowId;

/// Taskbar button for one open window
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskbarEntry {
    pub window_id: WindowId,
    pub title: String,
    pub icon: String,
    /// Highlighted when its window has focus
    pub active: bool,
}

/// Ordered list of taskbar entries, at most one active
#[derive(Clone, Debug, Default)]
pub struct Taskbar {
    entries: Vec<TaskbarEntry>,
}

impl Taskbar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an inactive entry for a newly opened window
    pub fn add(&mut self, window_id: WindowId, title: &str, icon: &str) {
        if self.get(window_id).is_some() {
            return;
        }
        self.entries.push(TaskbarEntry {
            window_id,
            title: title.to_string(),
            icon: icon.to_string(),
            active: false,
        });
    }

    /// Remove the entry for a window
    pub fn remove(&mut self, window_id: WindowId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.window_id != window_id);
        self.entries.len() != before
    }

    /// Mark one entry active and every other entry inactive
    pub fn set_active(&mut self, window_id: WindowId) {
        for entry in &mut self.entries {
            entry.active = entry.window_id == window_id;
        }
    }

    /// Mark an entry inactive
    pub fn deactivate(&mut self, window_id: WindowId) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.window_id == window_id) {
            entry.active = false;
        }
    }

    pub fn get(&self, window_id: WindowId) -> Option<&TaskbarEntry> {
        self.entries.iter().find(|e| e.window_id == window_id)
    }

    /// Window whose entry is highlighted
    pub fn active(&self) -> Option<WindowId> {
        self.entries.iter().find(|e| e.active).map(|e| e.window_id)
    }

    pub fn entries(&self) -> &[TaskbarEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_remove() {
        let mut taskbar = Taskbar::new();
        taskbar.add(1, "About Me", "fas fa-user");
        taskbar.add(2, "Projects", "fas fa-folder");
        taskbar.add(1, "About Me", "fas fa-user");

        assert_eq!(taskbar.len(), 2);
        assert!(taskbar.remove(1));
        assert!(!taskbar.remove(1));
        assert_eq!(taskbar.entries()[0].window_id, 2);
    }

    #[test]
    fn test_single_active_entry() {
        let mut taskbar = Taskbar::new();
        taskbar.add(1, "a", "");
        taskbar.add(2, "b", "");
        taskbar.add(3, "c", "");

        taskbar.set_active(2);
        assert_eq!(taskbar.active(), Some(2));

        taskbar.set_active(3);
        assert_eq!(taskbar.active(), Some(3));
        assert_eq!(taskbar.entries().iter().filter(|e| e.active).count(), 1);

        taskbar.deactivate(3);
        assert_eq!(taskbar.active(), None);
    }
}
