//! Application windows
//!
//! Window lifecycle, two-phase minimize/restore, z-order and hit testing.

#[allow(clippy::module_inception)]
mod window;
mod config;
mod region;
mod store;

pub use window::{Window, WindowPhase};
pub use config::{UnmaximizePolicy, WindowPlacement};
pub use region::WindowRegion;
pub use store::{DockEntry, WindowStore};

/// Unique window identifier
pub type WindowId = String;
