//! Window lifecycle and operations

use tracing::warn;

use super::DesktopEngine;
use crate::error::{DesktopError, DesktopResult};
use crate::geometry::clamp_to_bounds;
use crate::input::resize_size;
use crate::math::{Size, Vec2};
use crate::transition::TransitionKind;
use crate::window::{WindowId, WindowPhase};

impl DesktopEngine {
    /// Open an application, or bring its existing window forward
    pub fn open_window(&mut self, app_id: &str, now_ms: f64) -> DesktopResult<WindowId> {
        let id = self.windows.open(app_id)?;
        let restoring = self
            .windows
            .get(&id)
            .map(|w| w.is_animating_restore())
            .unwrap_or(false);
        if restoring && !self.has_transition(&id, TransitionKind::Restore) {
            self.start_transition(&id, TransitionKind::Restore, now_ms);
        }
        Ok(id)
    }

    /// Close a window
    pub fn close_window(&mut self, id: &str) -> DesktopResult<()> {
        self.cancel_transitions(id);
        self.cancel_gesture_on(id);
        self.windows
            .close(id)
            .map(|_| ())
            .ok_or_else(|| not_found("close_window", id))
    }

    /// Start minimizing a window into the dock
    pub fn minimize_window(&mut self, id: &str, now_ms: f64) -> DesktopResult<()> {
        self.windows.minimize(id).map_err(|e| logged("minimize_window", e))?;
        self.cancel_gesture_on(id);
        let minimizing = self
            .windows
            .get(id)
            .map(|w| w.is_animating_minimize())
            .unwrap_or(false);
        if minimizing && !self.has_transition(id, TransitionKind::Minimize) {
            self.start_transition(id, TransitionKind::Minimize, now_ms);
        }
        Ok(())
    }

    /// Start restoring a window out of the dock
    pub fn restore_window(&mut self, id: &str, now_ms: f64) -> DesktopResult<()> {
        self.windows.restore(id).map_err(|e| logged("restore_window", e))?;
        self.start_transition(id, TransitionKind::Restore, now_ms);
        Ok(())
    }

    /// Toggle maximized state against the current viewport
    pub fn maximize_window(&mut self, id: &str) -> DesktopResult<bool> {
        let viewport = self.screen_size();
        let maximized = self
            .windows
            .maximize(id, viewport)
            .map_err(|e| logged("maximize_window", e))?;
        self.cancel_gesture_on(id);
        Ok(maximized)
    }

    /// Focus a window
    pub fn focus_window(&mut self, id: &str) -> DesktopResult<u32> {
        let z = self.windows.focus(id).map_err(|e| logged("focus_window", e))?;
        // A minimized window shown by focus has nothing left to animate
        if self.windows.get(id).map(|w| w.phase) == Some(WindowPhase::Idle) {
            self.cancel_transitions(id);
        }
        Ok(z)
    }

    /// Move a window, keeping it inside the viewport
    pub fn move_window(&mut self, id: &str, x: f32, y: f32) -> DesktopResult<()> {
        let size = self.window_size(id)?;
        let position = clamp_to_bounds(Vec2::new(x, y), size, self.screen_size());
        self.windows.move_window(id, position)
    }

    /// Resize a window, respecting its minimum size and the viewport
    pub fn resize_window(&mut self, id: &str, width: f32, height: f32) -> DesktopResult<()> {
        let window = self
            .windows
            .get(id)
            .ok_or_else(|| not_found("resize_window", id))?;
        let size = resize_size(
            Size::new(width, height),
            Vec2::ZERO,
            window.min_size,
            window.position,
            self.screen_size(),
        );
        self.windows.resize(id, size)
    }

    /// Target of keyboard shortcuts
    pub(crate) fn topmost_window_id(&self) -> Option<WindowId> {
        self.windows.topmost().map(|w| w.id.clone())
    }

    /// Drop a drag or resize that targets this window
    fn cancel_gesture_on(&mut self, id: &str) {
        if self.input.drag_state().and_then(|d| d.window_id()) == Some(id) {
            self.input.cancel();
        }
    }

    fn window_size(&self, id: &str) -> DesktopResult<Size> {
        self.windows
            .get(id)
            .map(|w| w.size)
            .ok_or_else(|| not_found("move_window", id))
    }
}

fn not_found(op: &'static str, id: &str) -> DesktopError {
    logged(op, DesktopError::WindowNotFound(id.to_string()))
}

/// Log a failed operation before handing the error back
pub(super) fn logged(op: &'static str, err: DesktopError) -> DesktopError {
    warn!(op, %err, "operation ignored");
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_engine() -> DesktopEngine {
        let mut engine = DesktopEngine::new();
        engine.init(1920.0, 1080.0);
        engine
    }

    #[test]
    fn test_open_reuses_window() {
        let mut engine = create_test_engine();
        let first = engine.open_window("about", 0.0).unwrap();
        let second = engine.open_window("about", 10.0).unwrap();
        assert_eq!(first, second);
        assert_eq!(engine.windows.count(), 1);
    }

    #[test]
    fn test_open_minimized_window_animates_restore() {
        let mut engine = create_test_engine();
        let id = engine.open_window("about", 0.0).unwrap();
        engine.minimize_window(&id, 0.0).unwrap();
        engine.tick(1000.0);

        engine.open_window("about", 2000.0).unwrap();
        assert!(engine.has_transition(&id, TransitionKind::Restore));
        engine.tick(3000.0);
        assert_eq!(engine.windows.get(&id).unwrap().phase, WindowPhase::Idle);
    }

    #[test]
    fn test_move_window_clamps() {
        let mut engine = create_test_engine();
        let id = engine.open_window("about", 0.0).unwrap();
        engine.move_window(&id, -40.0, 5000.0).unwrap();
        let window = engine.windows.get(&id).unwrap();
        assert!((window.position.x - 0.0).abs() < 0.001);
        assert!((window.position.y - 480.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_window_clamps_to_min() {
        let mut engine = create_test_engine();
        let id = engine.open_window("about", 0.0).unwrap();
        engine.resize_window(&id, 10.0, 10.0).unwrap();
        let window = engine.windows.get(&id).unwrap();
        assert_eq!(window.size, window.min_size);
    }

    #[test]
    fn test_close_cancels_transition_and_drag() {
        let mut engine = create_test_engine();
        let id = engine.open_window("about", 0.0).unwrap();
        engine.minimize_window(&id, 0.0).unwrap();
        engine.close_window(&id).unwrap();

        assert!(engine.transitions.is_empty());
        assert!(engine.close_window(&id).is_err());
        // Late tick on a closed window is harmless
        engine.tick(1000.0);
    }

    #[test]
    fn test_focus_minimized_drops_minimize_transition() {
        let mut engine = create_test_engine();
        let id = engine.open_window("about", 0.0).unwrap();
        engine.minimize_window(&id, 0.0).unwrap();
        engine.tick(1000.0);

        engine.focus_window(&id).unwrap();
        assert_eq!(engine.windows.get(&id).unwrap().phase, WindowPhase::Idle);
        assert!(engine.transitions.is_empty());
    }

    #[test]
    fn test_maximize_before_init_is_rejected() {
        let mut engine = DesktopEngine::new();
        let id = engine.open_window("about", 0.0).unwrap();
        assert!(engine.maximize_window(&id).is_err());
    }

    #[test]
    fn test_unknown_app() {
        let mut engine = create_test_engine();
        assert!(matches!(
            engine.open_window("nope", 0.0),
            Err(DesktopError::UnknownApp(_))
        ));
    }
}
