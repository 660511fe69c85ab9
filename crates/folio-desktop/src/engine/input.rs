//! Input handling for pointer events, drag operations and shortcuts

use tracing::debug;

use super::DesktopEngine;
use crate::input::{DragState, DragUpdate, InputResult, Shortcut};
use crate::math::{Size, Vec2};
use crate::widget::WidgetPatch;
use crate::window::{WindowId, WindowRegion};

impl DesktopEngine {
    /// Handle pointer down
    ///
    /// Windows are hit first, topmost first; the widget layer underneath
    /// only sees presses that miss every window.
    pub fn handle_pointer_down(&mut self, x: f32, y: f32, now_ms: f64) -> InputResult {
        let pos = Vec2::new(x, y);

        if let Some((window_id, region)) = self.windows.region_at(pos) {
            return self.handle_window_press(window_id, region, pos, now_ms);
        }

        let widget_id = match self.widgets.widget_at(pos) {
            Some(widget) => widget.id.clone(),
            None => return InputResult::Unhandled,
        };
        if self.focus_widget(&widget_id).is_err() {
            return InputResult::Unhandled;
        }
        if let Some(widget) = self.widgets.get(&widget_id) {
            self.input.start_widget_move(widget, pos);
        }
        InputResult::Handled
    }

    /// Handle press inside a window
    fn handle_window_press(
        &mut self,
        window_id: WindowId,
        region: WindowRegion,
        pos: Vec2,
        now_ms: f64,
    ) -> InputResult {
        let outcome = match region {
            WindowRegion::CloseButton => self.close_window(&window_id),
            WindowRegion::MinimizeButton => self.minimize_window(&window_id, now_ms),
            WindowRegion::MaximizeButton => self.maximize_window(&window_id).map(|_| ()),
            WindowRegion::TitleBar => self.focus_window(&window_id).map(|_| {
                if let Some(window) = self.windows.get(&window_id).filter(|w| w.can_drag()) {
                    self.input.start_window_move(window, pos);
                }
            }),
            WindowRegion::ResizeHandle => self.focus_window(&window_id).map(|_| {
                if let Some(window) = self.windows.get(&window_id).filter(|w| w.can_resize()) {
                    self.input.start_window_resize(window, pos);
                }
            }),
            WindowRegion::Content => {
                return match self.focus_window(&window_id) {
                    Ok(_) => {
                        let local = self
                            .windows
                            .get(&window_id)
                            .map(|w| pos - w.position)
                            .unwrap_or(Vec2::ZERO);
                        InputResult::Forward {
                            window_id,
                            local_x: local.x,
                            local_y: local.y,
                        }
                    }
                    Err(_) => InputResult::Unhandled,
                };
            }
        };

        match outcome {
            Ok(()) => InputResult::Handled,
            Err(_) => InputResult::Unhandled,
        }
    }

    /// Handle pointer move
    ///
    /// Window and widget drags reach their store on every move; a resize
    /// only updates the router's local size.
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        let update = match self.input.update(Vec2::new(x, y), self.screen_size()) {
            Some(update) => update,
            None => return InputResult::Unhandled,
        };

        let outcome = match update {
            DragUpdate::WindowMoved { window_id, position } => {
                if !self.windows.get(&window_id).is_some_and(|w| w.can_drag()) {
                    self.input.cancel();
                    return InputResult::Unhandled;
                }
                self.windows.move_window(&window_id, position)
            }
            DragUpdate::WindowResized { window_id, .. } => {
                if !self.windows.get(&window_id).is_some_and(|w| w.can_resize()) {
                    self.input.cancel();
                    return InputResult::Unhandled;
                }
                Ok(())
            }
            DragUpdate::WidgetMoved { widget_id, position } => self
                .widgets
                .update(&widget_id, WidgetPatch::position(position))
                .map(|_| ()),
        };

        if outcome.is_err() {
            // Target vanished mid-gesture
            self.input.cancel();
            return InputResult::Unhandled;
        }
        InputResult::Handled
    }

    /// Handle pointer up
    ///
    /// Ends whatever gesture is running; a resize writes its final size to
    /// the window store here and nowhere else.
    pub fn handle_pointer_up(&mut self) -> InputResult {
        match self.input.end_drag() {
            Some(DragState::ResizeWindow {
                window_id, current, ..
            }) => {
                // Maximized since the press
                if !self.windows.get(&window_id).is_some_and(|w| w.can_resize()) {
                    return InputResult::Unhandled;
                }
                if self.windows.resize(&window_id, current).is_ok() {
                    debug!(window = %window_id, ?current, "resize committed");
                }
                InputResult::Handled
            }
            Some(_) => InputResult::Handled,
            None => InputResult::Unhandled,
        }
    }

    /// Size shown for the window being resized, before it is committed
    pub fn resize_preview(&self) -> Option<(&str, Size)> {
        match self.input.drag_state()? {
            DragState::ResizeWindow {
                window_id, current, ..
            } => Some((window_id.as_str(), *current)),
            _ => None,
        }
    }

    /// Handle a key press, dispatching window shortcuts to the topmost window
    pub fn handle_key(&mut self, key: &str, ctrl: bool, meta: bool, now_ms: f64) -> InputResult {
        let shortcut = match Shortcut::from_key(key, ctrl, meta) {
            Some(shortcut) => shortcut,
            None => return InputResult::Unhandled,
        };
        let target = match self.topmost_window_id() {
            Some(id) => id,
            None => return InputResult::Unhandled,
        };

        let outcome = match shortcut {
            Shortcut::Close => self.close_window(&target),
            Shortcut::Minimize => self.minimize_window(&target, now_ms),
            Shortcut::Maximize => self.maximize_window(&target).map(|_| ()),
        };
        match outcome {
            Ok(()) => InputResult::Handled,
            Err(_) => InputResult::Unhandled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::WidgetType;
    use crate::window::WindowPhase;

    fn create_test_engine() -> DesktopEngine {
        let mut engine = DesktopEngine::new();
        engine.init(1920.0, 1080.0);
        engine
    }

    /// About window sits at (100,100) 800x600
    fn engine_with_about() -> (DesktopEngine, WindowId) {
        let mut engine = create_test_engine();
        let id = engine.open_window("about", 0.0).unwrap();
        (engine, id)
    }

    #[test]
    fn test_pointer_down_on_empty_area_unhandled() {
        let mut engine = create_test_engine();
        let result = engine.handle_pointer_down(1000.0, 700.0, 0.0);
        assert_eq!(result, InputResult::Unhandled);
        assert!(!engine.input.is_dragging());
    }

    #[test]
    fn test_title_bar_drag_writes_every_move() {
        let (mut engine, id) = engine_with_about();

        let result = engine.handle_pointer_down(400.0, 120.0, 0.0);
        assert_eq!(result, InputResult::Handled);
        assert!(engine.input.is_dragging());

        engine.handle_pointer_move(450.0, 150.0);
        let window = engine.windows.get(&id).unwrap();
        assert!((window.position.x - 150.0).abs() < 0.001);
        assert!((window.position.y - 130.0).abs() < 0.001);

        engine.handle_pointer_move(480.0, 170.0);
        let window = engine.windows.get(&id).unwrap();
        assert!((window.position.x - 180.0).abs() < 0.001);

        assert_eq!(engine.handle_pointer_up(), InputResult::Handled);
        assert!(!engine.input.is_dragging());
        assert_eq!(engine.handle_pointer_up(), InputResult::Unhandled);
    }

    #[test]
    fn test_drag_is_clamped_to_viewport() {
        let (mut engine, id) = engine_with_about();
        engine.handle_pointer_down(400.0, 120.0, 0.0);
        engine.handle_pointer_move(-2000.0, -2000.0);
        let window = engine.windows.get(&id).unwrap();
        assert_eq!(window.position, Vec2::ZERO);
    }

    #[test]
    fn test_resize_commits_once_on_release() {
        let (mut engine, id) = engine_with_about();
        let original = engine.windows.get(&id).unwrap().size;

        engine.handle_pointer_down(895.0, 695.0, 0.0);
        engine.handle_pointer_move(995.0, 745.0);
        engine.handle_pointer_move(1095.0, 795.0);

        // Store untouched during the gesture
        assert_eq!(engine.windows.get(&id).unwrap().size, original);
        let (preview_id, preview) = engine.resize_preview().unwrap();
        assert_eq!(preview_id, id);
        assert_eq!(preview, Size::new(1000.0, 700.0));

        engine.handle_pointer_up();
        assert_eq!(engine.windows.get(&id).unwrap().size, Size::new(1000.0, 700.0));
        assert!(engine.resize_preview().is_none());
    }

    #[test]
    fn test_resize_respects_min_size() {
        let (mut engine, id) = engine_with_about();
        engine.handle_pointer_down(895.0, 695.0, 0.0);
        engine.handle_pointer_move(0.0, 0.0);
        engine.handle_pointer_up();
        let window = engine.windows.get(&id).unwrap();
        assert_eq!(window.size, window.min_size);
    }

    #[test]
    fn test_maximized_window_does_not_drag() {
        let (mut engine, id) = engine_with_about();
        engine.maximize_window(&id).unwrap();
        let result = engine.handle_pointer_down(400.0, 20.0, 0.0);
        assert_eq!(result, InputResult::Handled);
        assert!(!engine.input.is_dragging());
    }

    #[test]
    fn test_maximize_shortcut_cancels_drag() {
        let (mut engine, id) = engine_with_about();
        engine.handle_pointer_down(400.0, 120.0, 0.0);
        assert!(engine.input.is_dragging());

        assert_eq!(engine.handle_key("ArrowUp", true, false, 0.0), InputResult::Handled);
        assert!(!engine.input.is_dragging());

        assert_eq!(engine.handle_pointer_move(450.0, 150.0), InputResult::Unhandled);
        engine.handle_pointer_up();
        let window = engine.windows.get(&id).unwrap();
        assert!(window.is_maximized);
        assert_eq!(window.position, Vec2::ZERO);
        assert!((window.size.width - 1920.0).abs() < 0.001);
    }

    #[test]
    fn test_maximize_shortcut_discards_pending_resize() {
        let (mut engine, id) = engine_with_about();
        engine.handle_pointer_down(895.0, 695.0, 0.0);
        engine.handle_pointer_move(995.0, 745.0);

        engine.handle_key("ArrowUp", true, false, 0.0);
        assert!(engine.resize_preview().is_none());
        assert_eq!(engine.handle_pointer_up(), InputResult::Unhandled);

        let window = engine.windows.get(&id).unwrap();
        assert!(window.is_maximized);
        assert!((window.size.width - 1920.0).abs() < 0.001);
        assert!(window.size != Size::new(900.0, 650.0));
    }

    #[test]
    fn test_minimize_shortcut_cancels_drag() {
        let (mut engine, id) = engine_with_about();
        engine.handle_pointer_down(400.0, 120.0, 0.0);
        engine.handle_key("m", true, false, 0.0);
        assert!(!engine.input.is_dragging());

        engine.handle_pointer_move(450.0, 150.0);
        assert_eq!(engine.windows.get(&id).unwrap().position, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_stale_gesture_on_maximized_window_is_dropped() {
        let (mut engine, id) = engine_with_about();
        engine.handle_pointer_down(895.0, 695.0, 0.0);
        // Bypass the engine so the router keeps its gesture
        let viewport = engine.screen_size();
        engine.windows.maximize(&id, viewport).unwrap();

        assert_eq!(engine.handle_pointer_move(995.0, 745.0), InputResult::Unhandled);
        assert!(!engine.input.is_dragging());
        assert_eq!(engine.handle_pointer_up(), InputResult::Unhandled);
        assert!((engine.windows.get(&id).unwrap().size.width - 1920.0).abs() < 0.001);
    }

    #[test]
    fn test_buttons_dispatch() {
        let (mut engine, id) = engine_with_about();
        let minimize = engine.windows.get(&id).unwrap().minimize_button_rect().center();
        engine.handle_pointer_down(minimize.x, minimize.y, 0.0);
        assert_eq!(engine.windows.get(&id).unwrap().phase, WindowPhase::Minimizing);
        assert!(!engine.input.is_dragging());

        engine.tick(1000.0);
        engine.restore_window(&id, 1000.0).unwrap();
        engine.tick(2000.0);

        let close = engine.windows.get(&id).unwrap().close_button_rect().center();
        engine.handle_pointer_down(close.x, close.y, 2000.0);
        assert!(engine.windows.get(&id).is_none());
    }

    #[test]
    fn test_content_click_forwards_local_coords() {
        let (mut engine, id) = engine_with_about();
        let result = engine.handle_pointer_down(300.0, 400.0, 0.0);
        assert_eq!(
            result,
            InputResult::Forward {
                window_id: id,
                local_x: 200.0,
                local_y: 300.0,
            }
        );
        assert!(!engine.input.is_dragging());
    }

    #[test]
    fn test_press_focuses_lower_window() {
        let (mut engine, about) = engine_with_about();
        let projects = engine.open_window("projects", 0.0).unwrap();
        assert!(engine.windows.is_topmost(&projects));

        // Strip of the about title bar above the projects window
        engine.handle_pointer_down(700.0, 115.0, 0.0);
        assert!(engine.windows.is_topmost(&about));
        assert_eq!(engine.windows.active_id(), Some(about.as_str()));
    }

    #[test]
    fn test_widget_drag() {
        let mut engine = create_test_engine();
        // Clock sits at (100,100) on a 2xl viewport
        let result = engine.handle_pointer_down(150.0, 150.0, 0.0);
        assert_eq!(result, InputResult::Handled);
        assert!(engine.input.drag_state().unwrap().is_widget_move());

        engine.handle_pointer_move(250.0, 200.0);
        let clock = engine
            .widgets
            .iter()
            .find(|w| w.kind == WidgetType::AnalogClock)
            .unwrap();
        assert_eq!(clock.position, Vec2::new(200.0, 150.0));
        engine.handle_pointer_up();
    }

    #[test]
    fn test_shortcuts_target_topmost() {
        let (mut engine, about) = engine_with_about();
        let projects = engine.open_window("projects", 0.0).unwrap();

        assert_eq!(engine.handle_key("w", true, false, 0.0), InputResult::Handled);
        assert!(engine.windows.get(&projects).is_none());
        assert!(engine.windows.get(&about).is_some());

        assert_eq!(engine.handle_key("ArrowUp", false, true, 0.0), InputResult::Handled);
        assert!(engine.windows.get(&about).unwrap().is_maximized);

        assert_eq!(engine.handle_key("m", true, false, 0.0), InputResult::Handled);
        assert!(engine.windows.get(&about).unwrap().is_animating_minimize());

        assert_eq!(engine.handle_key("w", false, false, 0.0), InputResult::Unhandled);
    }

    #[test]
    fn test_shortcut_without_windows() {
        let mut engine = create_test_engine();
        assert_eq!(engine.handle_key("w", true, false, 0.0), InputResult::Unhandled);
    }
}
