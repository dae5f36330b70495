//! Start, power and context menu state

use std::str::FromStr;
use serde::Serialize;
use crate::math::{Size, Vec2};

/// Open/closed state of the three desktop menus
///
/// The start and power menus are mutually exclusive: opening one closes
/// the other. The context menu is independent and carries its on-screen
/// position while shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuState {
    pub start_open: bool,
    pub power_open: bool,
    pub context_at: Option<Vec2>,
}

impl MenuState {
    pub fn toggle_start(&mut self) {
        self.start_open = !self.start_open;
        if self.start_open {
            self.power_open = false;
        }
    }

    pub fn toggle_power(&mut self) {
        self.power_open = !self.power_open;
        if self.power_open {
            self.start_open = false;
        }
    }

    /// Show the context menu at `at`, shifted so a menu of `menu` size stays inside `viewport`
    pub fn show_context(&mut self, at: Vec2, menu: Size, viewport: Size) {
        let hi = viewport.as_vec2() - menu.as_vec2();
        self.context_at = Some(at.clamp_to(Vec2::ZERO, hi));
    }

    pub fn close_all(&mut self) {
        *self = Self::default();
    }

    /// True when any menu is showing
    pub fn any_open(&self) -> bool {
        self.start_open || self.power_open || self.context_at.is_some()
    }
}

/// Entries of the power menu
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerAction {
    Restart,
    Shutdown,
    Home,
}

impl FromStr for PowerAction {
    type Err = String;

    /// Parse the `data-action` attribute of a power menu item
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "restart" => Ok(PowerAction::Restart),
            "shutdown" => Ok(PowerAction::Shutdown),
            "home" => Ok(PowerAction::Home),
            other => Err(format!("unknown power action: {}", other)),
        }
    }
}

/// Entries of the desktop context menu
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextAction {
    Refresh,
    Personalize,
    Display,
}

impl FromStr for ContextAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "refresh" => Ok(ContextAction::Refresh),
            "personalize" => Ok(ContextAction::Personalize),
            "display" => Ok(ContextAction::Display),
            other => Err(format!("unknown context action: {}", other)),
        }
    }
}
