//! App registry
//!
//! Static table mapping an app name to its window title, icon and default
//! size. The window manager only looks entries up; content comes from the
//! content provider under the same key.

use serde::Serialize;
use crate::math::Size;

/// Display metadata for one desktop app
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AppSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub width: f32,
    pub height: f32,
}

impl AppSpec {
    /// Default window size
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Lookup table of launchable apps
pub trait AppRegistry {
    /// Find an app by name
    fn lookup(&self, app_id: &str) -> Option<&AppSpec>;

    /// All registered apps in display order
    fn apps(&self) -> &[AppSpec];

    /// Names of all registered apps in display order
    fn names(&self) -> Vec<&str> {
        self.apps().iter().map(|app| app.id).collect()
    }
}

const BUILTIN_APPS: &[AppSpec] = &[
    AppSpec { id: "about", title: "About Me", icon: "fas fa-user", width: 500.0, height: 400.0 },
    AppSpec { id: "projects", title: "Projects", icon: "fas fa-folder", width: 600.0, height: 500.0 },
    AppSpec { id: "skills", title: "Skills", icon: "fas fa-chart-bar", width: 550.0, height: 450.0 },
    AppSpec { id: "contact", title: "Contact", icon: "fas fa-envelope", width: 450.0, height: 350.0 },
    AppSpec { id: "resume", title: "Resume", icon: "fas fa-file-pdf", width: 400.0, height: 300.0 },
    AppSpec { id: "browser", title: "Web Browser", icon: "fab fa-chrome", width: 800.0, height: 600.0 },
    AppSpec { id: "calculator", title: "Calculator", icon: "fas fa-calculator", width: 300.0, height: 400.0 },
    AppSpec { id: "notepad", title: "Notepad", icon: "fas fa-sticky-note", width: 500.0, height: 400.0 },
    AppSpec { id: "settings", title: "Settings", icon: "fas fa-cog", width: 600.0, height: 500.0 },
    AppSpec { id: "file-manager", title: "File Manager", icon: "fas fa-folder-open", width: 700.0, height: 500.0 },
];

/// The apps shipped with the desktop page
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinApps;

impl AppRegistry for BuiltinApps {
    fn lookup(&self, app_id: &str) -> Option<&AppSpec> {
        BUILTIN_APPS.iter().find(|app| app.id == app_id)
    }

    fn apps(&self) -> &[AppSpec] {
        BUILTIN_APPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let apps = BuiltinApps;
        let spec = apps.lookup("projects").unwrap();
        assert_eq!(spec.title, "Projects");
        assert!((spec.size().width - 600.0).abs() < 0.001);
        assert!((spec.size().height - 500.0).abs() < 0.001);
    }

    #[test]
    fn test_builtin_lookup_unknown() {
        assert!(BuiltinApps.lookup("minesweeper").is_none());
        assert!(BuiltinApps.lookup("").is_none());
    }

    #[test]
    fn test_builtin_ids_unique() {
        let apps = BuiltinApps.apps();
        assert_eq!(apps.len(), 10);
        assert_eq!(BuiltinApps.names()[0], "about");
        for (i, a) in apps.iter().enumerate() {
            assert!(apps[i + 1..].iter().all(|b| b.id != a.id), "duplicate id {}", a.id);
        }
    }
}
