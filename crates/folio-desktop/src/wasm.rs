//! WASM exports for the desktop
//!
//! This module provides wasm-bindgen exports for the DesktopEngine so the
//! page script can forward DOM events and read state back as JSON.

use wasm_bindgen::prelude::*;

use crate::config::DesktopConfig;
use crate::engine::DesktopEngine;
use crate::events::{DesktopEvent, ShellEffect};
use crate::shell::{format_clock, ContextAction, Modifiers, PowerAction};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Carry out a shell effect on the current page
fn perform_effect(effect: &ShellEffect) {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };
    let result = match effect {
        ShellEffect::Reload => window.location().reload(),
        ShellEffect::Navigate { url } => window.location().set_href(url),
        ShellEffect::Shutdown => match window.document().and_then(|d| d.body()) {
            Some(body) => body.class_list().add_1("shutdown"),
            None => Ok(()),
        },
    };
    if let Err(e) = result {
        log(&format!("[folio-desktop] effect {:?} failed: {:?}", effect, e));
    }
}

/// Desktop controller for WASM - wraps DesktopEngine with JS-friendly API
#[wasm_bindgen]
pub struct DesktopController {
    engine: DesktopEngine,
}

#[wasm_bindgen]
impl DesktopController {
    /// Create a controller for a viewport of the given size
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        Self::from_config(DesktopConfig::with_viewport(width, height))
    }

    /// Create a controller from a JSON `DesktopConfig`
    #[wasm_bindgen]
    pub fn with_config_json(json: &str) -> Result<DesktopController, JsValue> {
        let config = DesktopConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: DesktopConfig) -> Self {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        log(&format!(
            "[folio-desktop] {}x{} viewport",
            config.viewport.width, config.viewport.height
        ));

        let mut engine = DesktopEngine::new(config);
        engine.subscribe(Box::new(|event: &DesktopEvent| {
            if let DesktopEvent::Effect { effect } = event {
                perform_effect(effect);
            }
        }));
        Self { engine }
    }

    // =========================================================================
    // Windows
    // =========================================================================

    /// Open an app by name; returns the new window id
    #[wasm_bindgen]
    pub fn open_app(&mut self, app_id: &str) -> Option<u64> {
        self.engine.open(app_id)
    }

    #[wasm_bindgen]
    pub fn focus_window(&mut self, id: u64) {
        self.engine.focus(id);
    }

    #[wasm_bindgen]
    pub fn close_window(&mut self, id: u64) {
        self.engine.close(id);
    }

    #[wasm_bindgen]
    pub fn minimize_window(&mut self, id: u64) {
        self.engine.minimize(id);
    }

    #[wasm_bindgen]
    pub fn toggle_maximize(&mut self, id: u64) {
        self.engine.toggle_maximize(id);
    }

    /// Taskbar button click
    #[wasm_bindgen]
    pub fn activate_taskbar_entry(&mut self, id: u64) {
        self.engine.activate_taskbar_entry(id);
    }

    /// Resize the page viewport
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.engine.resize_viewport(width, height);
    }

    /// Get all windows as JSON, back to front
    #[wasm_bindgen]
    pub fn get_windows_json(&self) -> String {
        let workspace = self.engine.workspace_rect();
        let focused = self.engine.taskbar().active();

        let windows: Vec<serde_json::Value> = self
            .engine
            .windows()
            .windows_by_z()
            .iter()
            .map(|w| {
                let rect = w.effective_rect(workspace);
                serde_json::json!({
                    "id": w.id,
                    "appId": w.app_id,
                    "title": w.title,
                    "icon": w.icon,
                    "state": w.state,
                    "zOrder": w.z_order,
                    "focused": focused == Some(w.id),
                    "x": rect.x,
                    "y": rect.y,
                    "width": rect.width,
                    "height": rect.height,
                })
            })
            .collect();

        serde_json::to_string(&windows).unwrap_or_else(|_| "[]".to_string())
    }

    /// Get taskbar entries as JSON, in opening order
    #[wasm_bindgen]
    pub fn get_taskbar_json(&self) -> String {
        serde_json::to_string(self.engine.taskbar().entries()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Get the document for a window's content as JSON
    #[wasm_bindgen]
    pub fn get_window_content_json(&self, id: u64) -> String {
        self.engine
            .window_document(id)
            .and_then(|doc| serde_json::to_string(&doc).ok())
            .unwrap_or_else(|| "null".to_string())
    }

    /// Drain pending change events as JSON
    #[wasm_bindgen]
    pub fn take_events_json(&mut self) -> String {
        let events = self.engine.take_events();
        serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())
    }

    // =========================================================================
    // Pointer
    // =========================================================================

    /// Pointer down on a window title bar
    #[wasm_bindgen]
    pub fn title_pointer_down(&mut self, id: u64, x: f32, y: f32) -> String {
        let result = self.engine.begin_drag(id, x, y);
        serde_json::to_string(&result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
    }

    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> String {
        let result = self.engine.update_drag(x, y);
        serde_json::to_string(&result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
    }

    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> String {
        let result = self.engine.end_drag();
        serde_json::to_string(&result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
    }

    // =========================================================================
    // Shell
    // =========================================================================

    #[wasm_bindgen]
    pub fn select_icon(&mut self, app_id: &str) {
        self.engine.select_icon(app_id);
    }

    /// Click on the bare desktop background
    #[wasm_bindgen]
    pub fn desktop_click(&mut self) {
        self.engine.desktop_click();
    }

    #[wasm_bindgen]
    pub fn toggle_start_menu(&mut self) {
        self.engine.toggle_start_menu();
    }

    #[wasm_bindgen]
    pub fn launch_from_start_menu(&mut self, app_id: &str) -> Option<u64> {
        self.engine.launch_from_start_menu(app_id)
    }

    #[wasm_bindgen]
    pub fn toggle_power_menu(&mut self) {
        self.engine.toggle_power_menu();
    }

    /// Power menu item click with its `data-action` value
    #[wasm_bindgen]
    pub fn power_action(&mut self, action: &str) {
        match action.parse::<PowerAction>() {
            Ok(action) => self.engine.power_action(action),
            Err(e) => log(&format!("[folio-desktop] {}", e)),
        }
    }

    #[wasm_bindgen]
    pub fn show_context_menu(&mut self, x: f32, y: f32) {
        self.engine.show_context_menu(x, y);
    }

    #[wasm_bindgen]
    pub fn hide_context_menu(&mut self) {
        self.engine.hide_context_menu();
    }

    /// Context menu item click with its `data-action` value
    #[wasm_bindgen]
    pub fn context_action(&mut self, action: &str) {
        match action.parse::<ContextAction>() {
            Ok(action) => self.engine.context_action(action),
            Err(e) => log(&format!("[folio-desktop] {}", e)),
        }
    }

    /// Get menu state as JSON
    #[wasm_bindgen]
    pub fn get_menus_json(&self) -> String {
        serde_json::to_string(self.engine.menus()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Keydown handler; returns true when the page should prevent the default action
    #[wasm_bindgen]
    pub fn key_down(&mut self, key: &str, ctrl: bool, meta: bool) -> bool {
        self.engine.handle_key(key, Modifiers { ctrl, meta }).is_handled()
    }

    /// Current taskbar clock text as `{ "time": ..., "date": ... }`
    #[wasm_bindgen]
    pub fn get_clock_json(&self) -> String {
        let now = js_sys::Date::new_0();
        let (time, date) = format_clock(
            now.get_hours(),
            now.get_minutes(),
            now.get_month() + 1,
            now.get_date(),
            now.get_full_year() as i32,
        );
        serde_json::to_string(&serde_json::json!({ "time": time, "date": date }))
            .unwrap_or_else(|_| "{}".to_string())
    }
}
