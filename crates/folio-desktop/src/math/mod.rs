//! Core geometry types for the desktop
//!
//! Plain 2D value types shared by windows, widgets and the interaction
//! controller. All coordinates are CSS pixels relative to the viewport.

mod vec2;
mod rect;
mod size;
mod chrome;

pub use vec2::Vec2;
pub use rect::Rect;
pub use size::{Size, SizeConstraints};
pub use chrome::{WindowChrome, WINDOW_CHROME};
