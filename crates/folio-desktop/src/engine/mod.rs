//! Desktop engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `windows`: Window lifecycle, focus and placement
//! - `input`: Pointer drag operations
//! - `shell`: Menus, icon selection and keyboard shortcuts

mod windows;
mod input;
mod shell;

use folio_content::{ContentProvider, PortfolioContent};
use tracing::info;
use crate::apps::{AppRegistry, BuiltinApps};
use crate::config::DesktopConfig;
use crate::events::{DesktopEvent, EventBus, EventSink};
use crate::input::InputRouter;
use crate::math::{Rect, Vec2};
use crate::shell::MenuState;
use crate::taskbar::Taskbar;
use crate::window::WindowManager;

/// Desktop engine coordinating all desktop components
///
/// This is the per-page controller, managing:
/// - Window manager (window records, flags, z-order)
/// - Taskbar (one entry per open window)
/// - Input router (the single active drag)
/// - Shell chrome (menus and the selected desktop icon)
/// - Content provider (documents shown inside windows)
///
/// Every transition is published on the event bus.
pub struct DesktopEngine {
    pub(crate) config: DesktopConfig,
    pub(crate) windows: WindowManager,
    pub(crate) taskbar: Taskbar,
    pub(crate) input: InputRouter,
    pub(crate) menus: MenuState,
    pub(crate) selected_icon: Option<String>,
    registry: Box<dyn AppRegistry>,
    content: Box<dyn ContentProvider>,
    events: EventBus,
}

impl Default for DesktopEngine {
    fn default() -> Self {
        Self::new(DesktopConfig::default())
    }
}

impl DesktopEngine {
    /// Create a desktop with the built-in apps
    pub fn new(config: DesktopConfig) -> Self {
        Self::with_registry(config, Box::new(BuiltinApps))
    }

    /// Create a desktop with a custom app registry
    pub fn with_registry(config: DesktopConfig, registry: Box<dyn AppRegistry>) -> Self {
        info!(
            width = config.viewport.width,
            height = config.viewport.height,
            apps = registry.apps().len(),
            "desktop engine created"
        );
        Self {
            windows: WindowManager::new(config.z_base),
            config,
            taskbar: Taskbar::new(),
            input: InputRouter::new(),
            menus: MenuState::default(),
            selected_icon: None,
            registry,
            content: Box::new(PortfolioContent::default()),
            events: EventBus::new(),
        }
    }

    /// Replace the content provider
    pub fn with_content(mut self, content: Box<dyn ContentProvider>) -> Self {
        self.content = content;
        self
    }

    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    pub fn windows(&self) -> &WindowManager {
        &self.windows
    }

    pub fn taskbar(&self) -> &Taskbar {
        &self.taskbar
    }

    pub fn input(&self) -> &InputRouter {
        &self.input
    }

    pub fn menus(&self) -> &MenuState {
        &self.menus
    }

    pub fn registry(&self) -> &dyn AppRegistry {
        self.registry.as_ref()
    }

    pub fn content(&self) -> &dyn ContentProvider {
        self.content.as_ref()
    }

    /// Area above the taskbar; maximized windows fill it and drags stay inside it
    pub fn workspace_rect(&self) -> Rect {
        Rect::from_pos_size(Vec2::ZERO, self.config.viewport.minus_height(self.config.taskbar_height))
    }

    /// Register a subscriber for change notifications
    pub fn subscribe(&mut self, sink: Box<dyn EventSink>) {
        self.events.subscribe(sink);
    }

    /// Drain events published since the last call
    pub fn take_events(&mut self) -> Vec<DesktopEvent> {
        self.events.take()
    }

    pub(crate) fn publish(&mut self, event: DesktopEvent) {
        self.events.publish(event);
    }
}
