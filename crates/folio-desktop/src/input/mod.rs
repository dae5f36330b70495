//! Input routing module
//!
//! Provides the drag state machine for moving windows.

mod router;
mod drag;
mod result;

pub use router::InputRouter;
pub use drag::DragState;
pub use result::InputResult;

use crate::math::{Rect, Size, Vec2};

/// Position of a dragged window for a pointer position
///
/// `pointer - offset`, clamped so the window stays inside `bounds`. When the
/// window is larger than `bounds` it is pinned to the top-left edge.
pub fn calculate_drag_position(pointer: Vec2, offset: Vec2, size: Size, bounds: Rect) -> Vec2 {
    let lo = bounds.position();
    let hi = Vec2::new(bounds.right() - size.width, bounds.bottom() - size.height);
    (pointer - offset).clamp_to(lo, hi)
}
