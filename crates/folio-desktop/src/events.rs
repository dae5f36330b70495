//! Change notifications
//!
//! The engine never touches the page. Every state transition is published
//! as a [`DesktopEvent`]; rendering adapters subscribe through
//! [`EventSink`] and tests read the queued events back with
//! `DesktopEngine::take_events`.

use serde::Serialize;
use crate::math::{Rect, Vec2};
use crate::window::WindowId;

/// Fire-and-forget action the host page performs on the engine's behalf
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ShellEffect {
    /// Reload the page
    Reload,
    /// Fade out and show the shutdown screen
    Shutdown,
    /// Navigate the current tab
    Navigate { url: String },
}

/// A state change in the desktop
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DesktopEvent {
    #[serde(rename_all = "camelCase")]
    WindowOpened {
        id: WindowId,
        app_id: String,
        title: String,
        icon: String,
        rect: Rect,
        z_order: u32,
    },
    #[serde(rename_all = "camelCase")]
    WindowFocused { id: WindowId, z_order: u32 },
    WindowClosed { id: WindowId },
    WindowMinimized { id: WindowId },
    WindowRestored { id: WindowId },
    WindowMaximized { id: WindowId, maximized: bool },
    WindowMoved { id: WindowId, position: Vec2 },
    MenusChanged {
        start: bool,
        power: bool,
        context: Option<Vec2>,
    },
    IconSelected { app: Option<String> },
    Effect { effect: ShellEffect },
}

/// Subscriber to desktop events
pub trait EventSink {
    fn on_event(&mut self, event: &DesktopEvent);
}

impl<F> EventSink for F
where
    F: FnMut(&DesktopEvent),
{
    fn on_event(&mut self, event: &DesktopEvent) {
        self(event)
    }
}

/// Fan-out of events to subscribers plus a pending queue
#[derive(Default)]
pub struct EventBus {
    sinks: Vec<Box<dyn EventSink>>,
    pending: Vec<DesktopEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber; it sees every event published afterwards
    pub fn subscribe(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Deliver an event to all subscribers and queue it
    pub fn publish(&mut self, event: DesktopEvent) {
        for sink in &mut self.sinks {
            sink.on_event(&event);
        }
        self.pending.push(event);
    }

    /// Drain queued events
    pub fn take(&mut self) -> Vec<DesktopEvent> {
        std::mem::take(&mut self.pending)
    }
}
