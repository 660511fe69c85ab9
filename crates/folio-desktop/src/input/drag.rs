//! Drag state for pointer gestures

use crate::math::{Size, Vec2};
use crate::widget::WidgetId;
use crate::window::WindowId;

/// Gesture in progress between pointer-down and pointer-up
///
/// Each variant keeps the pointer and geometry captured at pointer-down so
/// every move is computed from the start, not accumulated.
#[derive(Clone, Debug, PartialEq)]
pub enum DragState {
    /// Dragging a window by its title bar
    MoveWindow {
        window_id: WindowId,
        /// Pointer position at pointer-down
        start_pointer: Vec2,
        /// Window position at pointer-down
        start_position: Vec2,
        /// Window size, used for clamping
        size: Size,
    },
    /// Resizing a window from its bottom-right corner
    ResizeWindow {
        window_id: WindowId,
        start_pointer: Vec2,
        /// Window position (fixed while resizing)
        position: Vec2,
        /// Window size at pointer-down
        start_size: Size,
        /// Smallest size allowed
        min_size: Size,
        /// Size shown while dragging; committed to the store on release
        current: Size,
    },
    /// Dragging a desktop widget
    MoveWidget {
        widget_id: WidgetId,
        start_pointer: Vec2,
        start_position: Vec2,
        size: Size,
    },
}

impl DragState {
    /// Check if this is a window move operation
    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, DragState::MoveWindow { .. })
    }

    /// Check if this is a window resize operation
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, DragState::ResizeWindow { .. })
    }

    /// Check if this is a widget move operation
    #[inline]
    pub fn is_widget_move(&self) -> bool {
        matches!(self, DragState::MoveWidget { .. })
    }

    /// Get the window ID if this is a window operation
    pub fn window_id(&self) -> Option<&str> {
        match self {
            DragState::MoveWindow { window_id, .. } => Some(window_id),
            DragState::ResizeWindow { window_id, .. } => Some(window_id),
            DragState::MoveWidget { .. } => None,
        }
    }

    /// Get the widget ID if this is a widget operation
    pub fn widget_id(&self) -> Option<&str> {
        match self {
            DragState::MoveWidget { widget_id, .. } => Some(widget_id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_window_state() {
        let state = DragState::MoveWindow {
            window_id: "w-1".to_string(),
            start_pointer: Vec2::new(10.0, 20.0),
            start_position: Vec2::new(100.0, 100.0),
            size: Size::new(800.0, 600.0),
        };

        assert!(state.is_move());
        assert!(!state.is_resize());
        assert!(!state.is_widget_move());
        assert_eq!(state.window_id(), Some("w-1"));
        assert_eq!(state.widget_id(), None);
    }

    #[test]
    fn test_resize_window_state() {
        let state = DragState::ResizeWindow {
            window_id: "w-2".to_string(),
            start_pointer: Vec2::new(900.0, 700.0),
            position: Vec2::new(100.0, 100.0),
            start_size: Size::new(800.0, 600.0),
            min_size: Size::new(400.0, 300.0),
            current: Size::new(800.0, 600.0),
        };

        assert!(state.is_resize());
        assert_eq!(state.window_id(), Some("w-2"));
    }

    #[test]
    fn test_move_widget_state() {
        let state = DragState::MoveWidget {
            widget_id: "clock".to_string(),
            start_pointer: Vec2::ZERO,
            start_position: Vec2::new(100.0, 100.0),
            size: Size::new(200.0, 200.0),
        };

        assert!(state.is_widget_move());
        assert_eq!(state.window_id(), None);
        assert_eq!(state.widget_id(), Some("clock"));
    }
}
