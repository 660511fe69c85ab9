//! Input router state machine

use super::{drag_position, resize_size, DragState};
use crate::math::{Size, Vec2};
use crate::widget::{Widget, WidgetId};
use crate::window::{Window, WindowId};

/// Geometry produced by one pointer move
#[derive(Clone, Debug, PartialEq)]
pub enum DragUpdate {
    /// Window moved; written to the store on every move
    WindowMoved { window_id: WindowId, position: Vec2 },
    /// Window resized; held locally until release
    WindowResized { window_id: WindowId, size: Size },
    /// Widget moved; written to the store on every move
    WidgetMoved { widget_id: WidgetId, position: Vec2 },
}

/// Input router managing drag state
///
/// At most one gesture runs at a time; starting a new one replaces the old.
#[derive(Debug, Default)]
pub struct InputRouter {
    /// Current drag state
    drag: Option<DragState>,
}

impl InputRouter {
    /// Create a new input router
    pub fn new() -> Self {
        Self { drag: None }
    }

    /// Get current drag state
    #[inline]
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Check if currently dragging
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Start window move operation
    pub fn start_window_move(&mut self, window: &Window, pointer: Vec2) {
        self.drag = Some(DragState::MoveWindow {
            window_id: window.id.clone(),
            start_pointer: pointer,
            start_position: window.position,
            size: window.size,
        });
    }

    /// Start window resize operation
    pub fn start_window_resize(&mut self, window: &Window, pointer: Vec2) {
        self.drag = Some(DragState::ResizeWindow {
            window_id: window.id.clone(),
            start_pointer: pointer,
            position: window.position,
            start_size: window.size,
            min_size: window.min_size,
            current: window.size,
        });
    }

    /// Start widget move operation
    pub fn start_widget_move(&mut self, widget: &Widget, pointer: Vec2) {
        self.drag = Some(DragState::MoveWidget {
            widget_id: widget.id.clone(),
            start_pointer: pointer,
            start_position: widget.position,
            size: widget.size,
        });
    }

    /// Advance the current gesture to `pointer`
    pub fn update(&mut self, pointer: Vec2, viewport: Size) -> Option<DragUpdate> {
        match self.drag.as_mut()? {
            DragState::MoveWindow {
                window_id,
                start_pointer,
                start_position,
                size,
            } => Some(DragUpdate::WindowMoved {
                window_id: window_id.clone(),
                position: drag_position(*start_position, pointer - *start_pointer, *size, viewport),
            }),
            DragState::ResizeWindow {
                window_id,
                start_pointer,
                position,
                start_size,
                min_size,
                current,
            } => {
                *current = resize_size(
                    *start_size,
                    pointer - *start_pointer,
                    *min_size,
                    *position,
                    viewport,
                );
                Some(DragUpdate::WindowResized {
                    window_id: window_id.clone(),
                    size: *current,
                })
            }
            DragState::MoveWidget {
                widget_id,
                start_pointer,
                start_position,
                size,
            } => Some(DragUpdate::WidgetMoved {
                widget_id: widget_id.clone(),
                position: drag_position(*start_position, pointer - *start_pointer, *size, viewport),
            }),
        }
    }

    /// End current drag operation, handing back its final state
    pub fn end_drag(&mut self) -> Option<DragState> {
        self.drag.take()
    }

    /// Cancel current drag operation
    #[inline]
    pub fn cancel(&mut self) {
        self.drag = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apps;
    use crate::window::WindowStore;

    const SCREEN: Size = Size::new(1920.0, 1080.0);

    fn about() -> (WindowStore, WindowId) {
        let mut store = WindowStore::default();
        let id = store.open("about").unwrap();
        (store, id)
    }

    #[test]
    fn test_move_is_relative_to_start() {
        let (store, id) = about();
        let mut router = InputRouter::new();
        router.start_window_move(store.get(&id).unwrap(), Vec2::new(300.0, 120.0));
        assert!(router.is_dragging());

        router.update(Vec2::new(310.0, 130.0), SCREEN);
        let update = router.update(Vec2::new(350.0, 170.0), SCREEN);
        assert_eq!(
            update,
            Some(DragUpdate::WindowMoved {
                window_id: id,
                position: Vec2::new(150.0, 150.0),
            })
        );
    }

    #[test]
    fn test_resize_tracks_local_size() {
        let (store, id) = about();
        let mut router = InputRouter::new();
        router.start_window_resize(store.get(&id).unwrap(), Vec2::new(900.0, 700.0));

        let update = router.update(Vec2::new(1000.0, 650.0), SCREEN);
        assert_eq!(
            update,
            Some(DragUpdate::WindowResized {
                window_id: id.clone(),
                size: Size::new(900.0, 550.0),
            })
        );

        match router.end_drag() {
            Some(DragState::ResizeWindow { current, .. }) => {
                assert_eq!(current, Size::new(900.0, 550.0));
            }
            other => panic!("Expected ResizeWindow, got {other:?}"),
        }
        assert!(!router.is_dragging());
        // Router never touches the store
        assert_eq!(store.get(&id).unwrap().size, apps::lookup("about").unwrap().default_size);
    }

    #[test]
    fn test_update_without_gesture() {
        let mut router = InputRouter::new();
        assert_eq!(router.update(Vec2::ZERO, SCREEN), None);
        assert_eq!(router.end_drag(), None);
    }

    #[test]
    fn test_new_gesture_replaces_old() {
        let (store, id) = about();
        let window = store.get(&id).unwrap();
        let mut router = InputRouter::new();
        router.start_window_move(window, Vec2::ZERO);
        router.start_window_resize(window, Vec2::ZERO);
        assert!(router.drag_state().map(DragState::is_resize).unwrap_or(false));
        router.cancel();
        assert!(!router.is_dragging());
    }
}
