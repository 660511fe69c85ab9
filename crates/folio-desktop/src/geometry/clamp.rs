//! Bounds and size clamping

use tracing::warn;

use crate::math::{Size, SizeConstraints, Vec2};

/// Position returned when no sensible placement can be computed
pub const FALLBACK_POSITION: Vec2 = Vec2::new(20.0, 20.0);

/// Clamp a rectangle's position so it stays inside `bounds`
///
/// Returns `position` unchanged when the rectangle already fits. Otherwise
/// each axis is shifted independently into `0..=max(0, bound - extent)`.
/// Non-finite coordinates are treated as 0; a non-finite container leaves
/// the (sanitized) position as is. Idempotent.
pub fn clamp_to_bounds(position: Vec2, size: Size, bounds: Size) -> Vec2 {
    let position = sanitize_position(position);

    if !bounds.is_finite() {
        warn!(?bounds, "clamp_to_bounds: container bounds are not finite");
        return position;
    }

    let width = finite_or_zero(size.width);
    let height = finite_or_zero(size.height);
    let max_x = (bounds.width - width).max(0.0);
    let max_y = (bounds.height - height).max(0.0);

    Vec2::new(position.x.clamp(0.0, max_x), position.y.clamp(0.0, max_y))
}

/// Clamp each dimension into `[min, max ?? ∞]`
///
/// A non-finite dimension is replaced with the constraint minimum. When a
/// maximum is below its minimum the maximum wins.
pub fn clamp_size(size: Size, constraints: &SizeConstraints) -> Size {
    Size::new(
        clamp_dimension(size.width, constraints.min_width, constraints.max_width),
        clamp_dimension(size.height, constraints.min_height, constraints.max_height),
    )
}

fn clamp_dimension(value: f32, min: f32, max: Option<f32>) -> f32 {
    let value = if value.is_finite() {
        value
    } else {
        warn!(value, "clamp_size: non-finite dimension, using minimum");
        min
    };

    let value = value.max(min);
    match max {
        Some(max) if max.is_finite() => value.min(max),
        _ => value,
    }
}

fn sanitize_position(position: Vec2) -> Vec2 {
    if position.is_finite() {
        return position;
    }
    warn!(?position, "clamp_to_bounds: non-finite position");
    Vec2::new(finite_or_zero(position.x), finite_or_zero(position.y))
}

#[inline]
fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}
