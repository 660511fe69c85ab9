//! Window instance and its lifecycle phase

use serde::Serialize;

use super::WindowId;
use crate::apps::AppDefinition;
use crate::math::{Rect, Size, Vec2, WINDOW_CHROME};

/// Minimize/restore lifecycle of a window
///
/// Replaces independent `isMinimized` / `isAnimatingMinimize` /
/// `isAnimatingRestore` flags so that contradictory combinations cannot be
/// represented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowPhase {
    /// On screen, no transition running
    #[default]
    Idle,
    /// Minimize animation playing; still mounted and laid out
    Minimizing,
    /// Hidden in the dock
    Minimized,
    /// Restore animation playing
    Restoring,
}

/// An open application window
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Window {
    /// Unique identifier
    pub id: WindowId,
    /// Registry id of the application shown
    pub app_id: String,
    /// Window title
    pub title: String,
    pub position: Vec2,
    pub size: Size,
    /// Smallest size an interactive resize may produce
    pub min_size: Size,
    pub is_maximized: bool,
    pub phase: WindowPhase,
    pub is_visible: bool,
    /// Stacking key (higher renders above)
    pub z_index: u32,
    pub resizable: bool,
    pub draggable: bool,
    /// Geometry before maximizing, kept only under the pre-maximize policy
    #[serde(skip)]
    pub(crate) restore_rect: Option<Rect>,
}

impl Window {
    /// Build a window for `app` at the given geometry
    pub(crate) fn new(id: WindowId, app: &AppDefinition, position: Vec2, z_index: u32) -> Self {
        Self {
            id,
            app_id: app.id.to_string(),
            title: app.name.to_string(),
            position,
            size: app.default_size,
            min_size: app.min_size,
            is_maximized: false,
            phase: WindowPhase::Idle,
            is_visible: true,
            z_index,
            resizable: app.resizable,
            draggable: app.draggable,
            restore_rect: None,
        }
    }

    /// Minimized into the dock
    #[inline]
    pub fn is_minimized(&self) -> bool {
        self.phase == WindowPhase::Minimized
    }

    /// Minimize animation in flight
    #[inline]
    pub fn is_animating_minimize(&self) -> bool {
        self.phase == WindowPhase::Minimizing
    }

    /// Restore animation in flight
    #[inline]
    pub fn is_animating_restore(&self) -> bool {
        self.phase == WindowPhase::Restoring
    }

    /// Laid out on the desktop (visible and not minimized)
    #[inline]
    pub fn is_rendered(&self) -> bool {
        self.is_visible && !self.is_minimized()
    }

    /// Get the window rectangle
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    /// Get the header rectangle
    pub fn header_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.size.width,
            WINDOW_CHROME.header_height,
        )
    }

    /// Header button rectangle; buttons sit left to right as close, minimize, maximize
    fn button_rect(&self, slot: usize) -> Rect {
        let x = self.position.x
            + WINDOW_CHROME.button_margin
            + slot as f32 * (WINDOW_CHROME.button_size + WINDOW_CHROME.button_spacing);
        let y = self.position.y + (WINDOW_CHROME.header_height - WINDOW_CHROME.button_size) / 2.0;
        Rect::new(x, y, WINDOW_CHROME.button_size, WINDOW_CHROME.button_size)
    }

    /// Get the close button rectangle
    pub fn close_button_rect(&self) -> Rect {
        self.button_rect(0)
    }

    /// Get the minimize button rectangle
    pub fn minimize_button_rect(&self) -> Rect {
        self.button_rect(1)
    }

    /// Get the maximize button rectangle
    pub fn maximize_button_rect(&self) -> Rect {
        self.button_rect(2)
    }

    /// Get the bottom-right resize corner
    pub fn resize_handle_rect(&self) -> Rect {
        let handle = WINDOW_CHROME.resize_handle_size;
        let rect = self.rect();
        Rect::new(rect.right() - handle, rect.bottom() - handle, handle, handle)
    }

    /// Whether a drag gesture may start on this window
    #[inline]
    pub fn can_drag(&self) -> bool {
        self.draggable && !self.is_maximized
    }

    /// Whether a resize gesture may start on this window
    #[inline]
    pub fn can_resize(&self) -> bool {
        self.resizable && !self.is_maximized
    }
}
