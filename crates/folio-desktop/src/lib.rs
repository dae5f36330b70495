//! Desktop window manager for the Folio OS portfolio page
//!
//! This crate provides the state behind the desktop-style portfolio:
//! - Window management (open, close, focus, z-order, minimize, maximize)
//! - A taskbar kept in sync with the open windows
//! - Title bar dragging clamped above the taskbar
//! - Start, power and context menus plus keyboard shortcuts
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Rect`, `Size`)
//! - [`window`]: Window records and the window manager
//! - [`input`]: Drag state machine
//! - [`shell`]: Menu state, shortcuts and clock text
//! - [`events`]: Change notifications for renderers
//!
//! ## Example
//!
//! ```rust
//! use folio_desktop::{DesktopConfig, DesktopEngine};
//!
//! let mut engine = DesktopEngine::new(DesktopConfig::with_viewport(1280.0, 720.0));
//!
//! let about = engine.open("about").unwrap();
//! let projects = engine.open("projects").unwrap();
//! engine.focus(about);
//!
//! let z = |id| engine.windows().get(id).unwrap().z_order;
//! assert!(z(about) > z(projects));
//! ```
//!
//! The engine never touches the DOM. Renderers subscribe to
//! [`DesktopEvent`]s; the `wasm` feature adds a `DesktopController` that
//! exposes the engine to the page script.

pub mod math;
pub mod window;
pub mod input;
pub mod shell;
pub mod events;
pub mod apps;
pub mod taskbar;

mod config;
mod engine;
mod error;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

pub use math::{Rect, Size, Vec2};
pub use window::{Window, WindowConfig, WindowId, WindowManager, WindowState};
pub use input::{DragState, InputResult, InputRouter};
pub use shell::{format_clock, ContextAction, KeyCommand, MenuState, Modifiers, PowerAction};
pub use events::{DesktopEvent, EventBus, EventSink, ShellEffect};
pub use apps::{AppRegistry, AppSpec, BuiltinApps};
pub use taskbar::{Taskbar, TaskbarEntry};

pub use config::DesktopConfig;
pub use engine::DesktopEngine;
pub use error::DesktopError;
