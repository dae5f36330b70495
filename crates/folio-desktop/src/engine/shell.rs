//! Menus, icon selection and keyboard shortcuts

use tracing::debug;
use crate::events::{DesktopEvent, ShellEffect};
use crate::input::InputResult;
use crate::math::Vec2;
use crate::shell::{ContextAction, KeyCommand, Modifiers, PowerAction};
use crate::window::WindowId;
use super::DesktopEngine;

impl DesktopEngine {
    /// Currently selected desktop icon
    pub fn selected_icon(&self) -> Option<&str> {
        self.selected_icon.as_deref()
    }

    /// Single-click on a desktop icon
    pub fn select_icon(&mut self, app_id: &str) {
        self.selected_icon = Some(app_id.to_string());
        self.publish(DesktopEvent::IconSelected { app: self.selected_icon.clone() });
    }

    pub fn deselect_icons(&mut self) {
        if self.selected_icon.take().is_some() {
            self.publish(DesktopEvent::IconSelected { app: None });
        }
    }

    pub fn toggle_start_menu(&mut self) {
        self.menus.toggle_start();
        self.publish_menus();
    }

    pub fn close_start_menu(&mut self) {
        if self.menus.start_open {
            self.menus.start_open = false;
            self.publish_menus();
        }
    }

    /// Start menu item click: open the app and close the menu
    pub fn launch_from_start_menu(&mut self, app_id: &str) -> Option<WindowId> {
        let id = self.open(app_id);
        self.close_start_menu();
        id
    }

    pub fn toggle_power_menu(&mut self) {
        self.menus.toggle_power();
        self.publish_menus();
    }

    pub fn close_power_menu(&mut self) {
        if self.menus.power_open {
            self.menus.power_open = false;
            self.publish_menus();
        }
    }

    /// Run a power menu entry and close the menu
    pub fn power_action(&mut self, action: PowerAction) {
        let effect = match action {
            PowerAction::Restart => ShellEffect::Reload,
            PowerAction::Shutdown => ShellEffect::Shutdown,
            PowerAction::Home => ShellEffect::Navigate { url: self.content.links().home_url.clone() },
        };
        debug!(?action, "power action");
        self.publish(DesktopEvent::Effect { effect });
        self.close_power_menu();
    }

    /// Right-click on the desktop background
    pub fn show_context_menu(&mut self, x: f32, y: f32) {
        self.menus
            .show_context(Vec2::new(x, y), self.config.context_menu_size, self.config.viewport);
        self.publish_menus();
    }

    pub fn hide_context_menu(&mut self) {
        if self.menus.context_at.take().is_some() {
            self.publish_menus();
        }
    }

    /// Run a context menu entry and hide the menu
    pub fn context_action(&mut self, action: ContextAction) {
        debug!(?action, "context action");
        match action {
            ContextAction::Refresh => {
                self.publish(DesktopEvent::Effect { effect: ShellEffect::Reload });
            }
            ContextAction::Personalize | ContextAction::Display => {
                self.open("settings");
            }
        }
        self.hide_context_menu();
    }

    pub fn close_all_menus(&mut self) {
        if self.menus.any_open() {
            self.menus.close_all();
            self.publish_menus();
        }
    }

    /// Click on the bare desktop: drop icon selection and close every menu
    pub fn desktop_click(&mut self) {
        self.deselect_icons();
        self.close_all_menus();
    }

    /// Key press anywhere on the page
    pub fn handle_key(&mut self, key: &str, modifiers: Modifiers) -> InputResult {
        match KeyCommand::from_key(key, modifiers) {
            Some(KeyCommand::CloseMenus) => {
                self.close_all_menus();
                InputResult::Handled
            }
            Some(KeyCommand::OpenSelected) => match self.selected_icon.clone() {
                Some(app) => InputResult::from(self.open(&app).is_some()),
                None => InputResult::Unhandled,
            },
            None => InputResult::Unhandled,
        }
    }

    fn publish_menus(&mut self) {
        let menus = self.menus;
        self.publish(DesktopEvent::MenusChanged {
            start: menus.start_open,
            power: menus.power_open,
            context: menus.context_at,
        });
    }
}
