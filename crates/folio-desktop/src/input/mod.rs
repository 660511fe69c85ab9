//! Input routing module
//!
//! Pointer gesture state machine for window drag/resize and widget drag,
//! plus keyboard shortcut decoding. The router only computes geometry; the
//! engine decides what reaches the stores.

mod drag;
mod result;
mod router;
mod shortcut;

pub use drag::DragState;
pub use result::InputResult;
pub use router::{DragUpdate, InputRouter};
pub use shortcut::Shortcut;

use crate::geometry::{clamp_size, clamp_to_bounds};
use crate::math::{Size, SizeConstraints, Vec2};

/// Position of a dragged item: start position plus pointer delta, kept inside the viewport
pub fn drag_position(start_position: Vec2, delta: Vec2, size: Size, viewport: Size) -> Vec2 {
    clamp_to_bounds(start_position + delta, size, viewport)
}

/// Size of a window being resized from its bottom-right corner
///
/// Never below `min_size`; never past the viewport's right/bottom edge unless
/// the minimum itself does not fit.
pub fn resize_size(
    start_size: Size,
    delta: Vec2,
    min_size: Size,
    position: Vec2,
    viewport: Size,
) -> Size {
    let proposed = Size::new(start_size.width + delta.x, start_size.height + delta.y);
    let max = if viewport.is_finite() && !viewport.is_empty() {
        Size::new(
            (viewport.width - position.x).max(min_size.width),
            (viewport.height - position.y).max(min_size.height),
        )
    } else {
        Size::new(f32::INFINITY, f32::INFINITY)
    };
    clamp_size(proposed, &SizeConstraints::bounded(min_size, max))
}
