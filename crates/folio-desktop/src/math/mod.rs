//! Screen geometry
//!
//! All coordinates are CSS pixels relative to the top-left of the page
//! viewport.

mod vec2;
mod rect;
mod size;

pub use vec2::Vec2;
pub use rect::Rect;
pub use size::Size;
