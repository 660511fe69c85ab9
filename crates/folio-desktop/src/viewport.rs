//! Browser viewport the desktop is laid out in

use crate::geometry::Breakpoint;
use crate::math::Size;

/// Current screen size
///
/// Starts empty until the front end reports real dimensions; geometry
/// helpers treat an empty viewport as missing and fall back.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Screen size in pixels
    pub screen_size: Size,
}

impl Viewport {
    /// Create a new viewport with the given screen size
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        Self {
            screen_size: Size::new(screen_width, screen_height),
        }
    }

    /// Whether real dimensions have been reported
    pub fn is_known(&self) -> bool {
        self.screen_size.is_finite() && !self.screen_size.is_empty()
    }

    /// Responsive tier for the current width
    pub fn breakpoint(&self) -> Option<Breakpoint> {
        Breakpoint::from_width(self.screen_size.width)
    }

    /// Whether the mobile launcher replaces the desktop
    pub fn is_mobile(&self) -> bool {
        self.breakpoint().map(Breakpoint::is_mobile).unwrap_or(true)
    }
}
