//! Responsive placement and bounds clamping
//!
//! Everything here is pure and never fails: bad input (NaN, a missing
//! viewport) degrades to a fixed fallback and a `warn!` so layout keeps
//! rendering.

mod breakpoint;
mod clamp;
mod layout;

pub use breakpoint::Breakpoint;
pub use clamp::{clamp_size, clamp_to_bounds, FALLBACK_POSITION};
pub use layout::{compute_default_position, fallback_position, LayoutTable};

/// Distance kept between formula-placed items and the viewport edge
pub const EDGE_INSET: f32 = 20.0;

/// Vertical space the dock occupies at the bottom of the viewport
pub const DOCK_ALLOWANCE: f32 = 80.0;
