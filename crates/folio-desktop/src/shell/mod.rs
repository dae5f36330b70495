//! Shell chrome around the windows
//!
//! Start, power and context menus, the desktop keyboard shortcuts and the
//! taskbar clock text.

mod menus;
mod keyboard;
mod clock;

pub use menus::{ContextAction, MenuState, PowerAction};
pub use keyboard::{KeyCommand, Modifiers};
pub use clock::format_clock;
