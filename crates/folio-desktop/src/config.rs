//! Desktop configuration

use serde::{Deserialize, Serialize};
use crate::error::DesktopError;
use crate::math::Size;

/// Layout constants for the desktop
///
/// Defaults match the desktop page: a 48px taskbar, windows cascading by
/// 30px and kept 20px clear of the top-left corner, stacking from z 1000.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DesktopConfig {
    /// Page viewport size
    pub viewport: Size,
    /// Height of the taskbar along the bottom edge
    pub taskbar_height: f32,
    /// Offset applied per already-open window when placing a new one
    pub cascade_step: f32,
    /// Minimum distance of a new window from the top-left corner
    pub min_margin: f32,
    /// First z-order value handed out
    pub z_base: u32,
    /// Rendered size of the desktop context menu, used to keep it on screen
    pub context_menu_size: Size,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            viewport: Size::new(1920.0, 1080.0),
            taskbar_height: 48.0,
            cascade_step: 30.0,
            min_margin: 20.0,
            z_base: 1000,
            context_menu_size: Size::new(200.0, 120.0),
        }
    }
}

impl DesktopConfig {
    /// Config for a given viewport with default layout constants
    pub fn with_viewport(width: f32, height: f32) -> Self {
        Self {
            viewport: Size::new(width, height),
            ..Default::default()
        }
    }

    /// Parse and validate config from JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, DesktopError> {
        let config: DesktopConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that all values are usable
    pub fn validate(&self) -> Result<(), DesktopError> {
        let scalars = [self.taskbar_height, self.cascade_step, self.min_margin];
        if !self.viewport.is_finite()
            || !self.context_menu_size.is_finite()
            || scalars.iter().any(|v| !v.is_finite())
        {
            return Err(DesktopError::InvalidConfig("all sizes must be finite numbers".to_string()));
        }
        if self.viewport.is_empty() {
            return Err(DesktopError::InvalidConfig(format!(
                "viewport must be positive, got {}x{}",
                self.viewport.width, self.viewport.height
            )));
        }
        if self.taskbar_height < 0.0 || self.cascade_step < 0.0 || self.min_margin < 0.0 {
            return Err(DesktopError::InvalidConfig(
                "taskbar_height, cascade_step and min_margin must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}
