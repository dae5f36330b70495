//! Desktop error types

use crate::window::WindowId;

/// Errors from desktop lookups and configuration
///
/// The public window operations never surface these: an unknown id is a
/// silent no-op there. They are returned by the `try_*` variants and by
/// configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum DesktopError {
    /// No app with this name in the registry
    #[error("unknown app: {0}")]
    UnknownApp(String),

    /// No open window with this id
    #[error("unknown window: {0}")]
    UnknownWindow(WindowId),

    /// Minimized windows cannot be dragged
    #[error("window {0} is minimized")]
    WindowMinimized(WindowId),

    /// Maximized windows cannot be dragged
    #[error("window {0} is maximized")]
    WindowMaximized(WindowId),

    /// Configuration values are out of range
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Configuration JSON could not be parsed
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
