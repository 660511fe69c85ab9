//! Minimize/restore transitions between a window and its dock icon
//!
//! Transitions only describe the animation. Completing one is an explicit
//! call into the window store made by the engine's `tick`.

mod easing;
mod window;

pub use easing::{ease_in_out, ease_out_cubic};
pub use window::{dock_icon_rect, TransitionFrame, TransitionKind, WindowTransition};

/// Default minimize animation duration in milliseconds
pub const MINIMIZE_DURATION_MS: f64 = 300.0;

/// Default restore animation duration in milliseconds
pub const RESTORE_DURATION_MS: f64 = 250.0;
