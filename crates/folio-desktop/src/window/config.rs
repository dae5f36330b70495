//! Window configuration for creation

use crate::apps::AppSpec;
use crate::math::{Size, Vec2};

/// Configuration for creating a window
#[derive(Clone, Debug, Default)]
pub struct WindowConfig {
    /// App identifier
    pub app_id: String,
    /// Window title
    pub title: String,
    /// Icon class
    pub icon: String,
    /// Content provider key
    pub content_key: String,
    /// Initial position
    pub position: Vec2,
    /// Initial size
    pub size: Size,
}

impl WindowConfig {
    /// Build a config from a registry entry placed at `position`
    pub fn from_app(spec: &AppSpec, position: Vec2) -> Self {
        Self {
            app_id: spec.id.to_string(),
            title: spec.title.to_string(),
            icon: spec.icon.to_string(),
            content_key: spec.id.to_string(),
            position,
            size: spec.size(),
        }
    }
}
