//! Window management module
//!
//! Provides window records, lifecycle flags and stacking order.

#[allow(clippy::module_inception)]
mod window;
mod config;
mod manager;

pub use window::{Window, WindowState};
pub use config::WindowConfig;
pub use manager::WindowManager;

/// Unique window identifier
pub type WindowId = u64;
