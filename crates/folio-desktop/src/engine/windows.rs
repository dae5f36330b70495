//! Window lifecycle and operations

use folio_content::Document;
use tracing::debug;
use crate::error::DesktopError;
use crate::events::DesktopEvent;
use crate::math::{Size, Vec2};
use crate::window::{Window, WindowConfig, WindowId, WindowState};
use super::DesktopEngine;

impl DesktopEngine {
    /// Open a window for a registered app and focus it
    ///
    /// Unknown app names are ignored.
    pub fn open(&mut self, app_id: &str) -> Option<WindowId> {
        match self.try_open(app_id) {
            Ok(id) => Some(id),
            Err(e) => {
                debug!(error = %e, "open ignored");
                None
            }
        }
    }

    pub fn try_open(&mut self, app_id: &str) -> Result<WindowId, DesktopError> {
        let spec = *self
            .registry
            .lookup(app_id)
            .ok_or_else(|| DesktopError::UnknownApp(app_id.to_string()))?;

        let position = self.cascade_position(spec.size());
        let id = self.windows.create(WindowConfig::from_app(&spec, position));
        self.taskbar.add(id, spec.title, spec.icon);

        if let Some(window) = self.windows.get(id) {
            let event = DesktopEvent::WindowOpened {
                id,
                app_id: window.app_id.clone(),
                title: window.title.clone(),
                icon: window.icon.clone(),
                rect: window.rect(),
                z_order: window.z_order,
            };
            self.publish(event);
        }
        debug!(id, app = app_id, "window opened");

        self.try_focus(id)?;
        Ok(id)
    }

    /// Initial position for a new window of `size`
    ///
    /// Centred in the workspace, shifted down-right by one cascade step per
    /// open window, and never closer than `min_margin` to the top-left corner.
    pub fn cascade_position(&self, size: Size) -> Vec2 {
        let workspace = self.workspace_rect().size();
        let centre = (workspace.as_vec2() - size.as_vec2()) / 2.0;
        let shift = self.config.cascade_step * self.windows.count() as f32;
        let margin = self.config.min_margin;
        (centre + Vec2::new(shift, shift)).max(Vec2::new(margin, margin))
    }

    /// Raise a window above all others and highlight its taskbar entry
    ///
    /// A minimized window is restored first.
    pub fn focus(&mut self, id: WindowId) {
        if let Err(e) = self.try_focus(id) {
            debug!(error = %e, "focus ignored");
        }
    }

    pub fn try_focus(&mut self, id: WindowId) -> Result<u32, DesktopError> {
        if !self.windows.contains(id) {
            return Err(DesktopError::UnknownWindow(id));
        }
        if self.windows.restore(id) {
            self.publish(DesktopEvent::WindowRestored { id });
        }
        let z_order = self.windows.raise(id).ok_or(DesktopError::UnknownWindow(id))?;
        self.taskbar.set_active(id);
        self.publish(DesktopEvent::WindowFocused { id, z_order });
        Ok(z_order)
    }

    /// Window whose taskbar entry is active
    pub fn focused_window(&self) -> Option<&Window> {
        self.taskbar.active().and_then(|id| self.windows.get(id))
    }

    /// Document shown inside a window, looked up by its content key
    pub fn window_document(&self, id: WindowId) -> Option<Document> {
        let window = self.windows.get(id)?;
        self.content.app_document(&window.content_key)
    }

    /// Remove a window and its taskbar entry
    pub fn close(&mut self, id: WindowId) {
        if let Err(e) = self.try_close(id) {
            debug!(error = %e, "close ignored");
        }
    }

    pub fn try_close(&mut self, id: WindowId) -> Result<(), DesktopError> {
        self.windows.close(id).ok_or(DesktopError::UnknownWindow(id))?;
        self.taskbar.remove(id);
        self.release_drag_of(id);
        self.publish(DesktopEvent::WindowClosed { id });
        debug!(id, "window closed");
        Ok(())
    }

    /// Hide a window, keeping it in the window list and taskbar
    pub fn minimize(&mut self, id: WindowId) {
        if let Err(e) = self.try_minimize(id) {
            debug!(error = %e, "minimize ignored");
        }
    }

    pub fn try_minimize(&mut self, id: WindowId) -> Result<(), DesktopError> {
        if !self.windows.contains(id) {
            return Err(DesktopError::UnknownWindow(id));
        }
        if self.windows.minimize(id) {
            self.taskbar.deactivate(id);
            self.release_drag_of(id);
            self.publish(DesktopEvent::WindowMinimized { id });
        }
        Ok(())
    }

    /// Taskbar click: un-minimize if needed, then focus
    pub fn activate_taskbar_entry(&mut self, id: WindowId) {
        if let Err(e) = self.try_activate_taskbar_entry(id) {
            debug!(error = %e, "taskbar activation ignored");
        }
    }

    pub fn try_activate_taskbar_entry(&mut self, id: WindowId) -> Result<(), DesktopError> {
        self.try_focus(id)?;
        Ok(())
    }

    /// Switch between normal and maximized geometry
    ///
    /// Minimized windows are left alone.
    pub fn toggle_maximize(&mut self, id: WindowId) {
        if let Err(e) = self.try_toggle_maximize(id) {
            debug!(error = %e, "maximize ignored");
        }
    }

    pub fn try_toggle_maximize(&mut self, id: WindowId) -> Result<(), DesktopError> {
        if !self.windows.contains(id) {
            return Err(DesktopError::UnknownWindow(id));
        }
        match self.windows.toggle_maximize(id) {
            Some(state) => {
                let maximized = state == WindowState::Maximized;
                if maximized {
                    self.release_drag_of(id);
                }
                self.publish(DesktopEvent::WindowMaximized { id, maximized });
            }
            None => debug!(id, "maximize skipped for minimized window"),
        }
        Ok(())
    }

    /// Update the viewport used for placement, drag bounds and maximized geometry
    pub fn resize_viewport(&mut self, width: f32, height: f32) {
        let viewport = Size::new(width, height);
        if viewport.is_empty() || !viewport.is_finite() {
            debug!(width, height, "resize ignored");
            return;
        }
        self.config.viewport = viewport;
    }

    fn release_drag_of(&mut self, id: WindowId) {
        if self.input.dragged_window() == Some(id) {
            self.input.end_drag();
        }
    }
}
