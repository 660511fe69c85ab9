//! Minimize/restore transition bookkeeping

use tracing::debug;

use super::DesktopEngine;
use crate::apps;
use crate::math::Rect;
use crate::transition::{dock_icon_rect, TransitionFrame, TransitionKind, WindowTransition};
use crate::window::WindowId;

impl DesktopEngine {
    /// Advance time-driven state
    ///
    /// Completes finished minimize/restore transitions, deletes dismissed
    /// widgets whose delay elapsed and expires notifications. Returns `true`
    /// while animations are still running.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let (finished, running): (Vec<_>, Vec<_>) = self
            .transitions
            .drain(..)
            .partition(|t| t.is_complete(now_ms));
        self.transitions = running;

        for transition in finished {
            // Completion re-checks the phase, so a window closed or
            // re-targeted mid-animation is left alone
            let completed = match transition.kind {
                TransitionKind::Minimize => self.windows.complete_minimize(&transition.window),
                TransitionKind::Restore => self.windows.complete_restore(&transition.window),
            };
            debug!(window = %transition.window, kind = ?transition.kind, completed, "transition finished");
        }

        self.widgets.purge_dismissed(now_ms);
        self.notifications.expire(now_ms);

        !self.transitions.is_empty()
    }

    /// Check if any transition is active
    pub fn is_transitioning(&self) -> bool {
        !self.transitions.is_empty()
    }

    /// Running transitions
    pub fn transitions(&self) -> &[WindowTransition] {
        &self.transitions
    }

    /// Frame of every running transition at `now_ms`
    pub fn transition_frames(&self, now_ms: f64) -> Vec<(WindowId, TransitionFrame)> {
        self.transitions
            .iter()
            .map(|t| (t.window.clone(), t.frame(now_ms)))
            .collect()
    }

    pub(crate) fn has_transition(&self, id: &str, kind: TransitionKind) -> bool {
        self.transitions.iter().any(|t| t.window == id && t.kind == kind)
    }

    /// Replace any transition on `id` with a new one of `kind`
    pub(crate) fn start_transition(&mut self, id: &str, kind: TransitionKind, now_ms: f64) {
        let Some(window) = self.windows.get(id) else {
            return;
        };
        let duration_ms = match kind {
            TransitionKind::Minimize => self.config.minimize_duration_ms,
            TransitionKind::Restore => self.config.restore_duration_ms,
        };
        let transition = WindowTransition::new(
            id.to_string(),
            kind,
            now_ms,
            duration_ms,
            window.rect(),
            self.dock_rect_for(&window.app_id),
        );
        self.cancel_transitions(id);
        self.transitions.push(transition);
    }

    pub(crate) fn cancel_transitions(&mut self, id: &str) {
        self.transitions.retain(|t| t.window != id);
    }

    /// Dock icon of `app_id`
    fn dock_rect_for(&self, app_id: &str) -> Rect {
        let registry = apps::all();
        let index = registry.iter().position(|a| a.id == app_id).unwrap_or(0);
        dock_icon_rect(index, registry.len(), self.screen_size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::WindowPhase;

    fn engine_with_about() -> (DesktopEngine, WindowId) {
        let mut engine = DesktopEngine::new();
        engine.init(1920.0, 1080.0);
        let id = engine.open_window("about", 0.0).unwrap();
        (engine, id)
    }

    #[test]
    fn test_tick_completes_minimize_after_duration() {
        let (mut engine, id) = engine_with_about();
        engine.minimize_window(&id, 1000.0).unwrap();

        assert!(engine.tick(1100.0));
        assert_eq!(engine.windows.get(&id).unwrap().phase, WindowPhase::Minimizing);

        assert!(!engine.tick(1300.0));
        assert_eq!(engine.windows.get(&id).unwrap().phase, WindowPhase::Minimized);
    }

    #[test]
    fn test_restore_mid_minimize_supersedes_it() {
        let (mut engine, id) = engine_with_about();
        engine.minimize_window(&id, 0.0).unwrap();
        engine.restore_window(&id, 100.0).unwrap();

        assert_eq!(engine.transitions().len(), 1);
        assert_eq!(engine.transitions()[0].kind, TransitionKind::Restore);

        engine.tick(400.0);
        assert_eq!(engine.windows.get(&id).unwrap().phase, WindowPhase::Idle);
    }

    #[test]
    fn test_stale_completion_is_noop() {
        let (mut engine, id) = engine_with_about();
        engine.minimize_window(&id, 0.0).unwrap();
        // Phase changed behind the transition's back
        engine.windows.restore(&id).unwrap();
        engine.windows.complete_restore(&id);

        engine.tick(1000.0);
        assert_eq!(engine.windows.get(&id).unwrap().phase, WindowPhase::Idle);
    }

    #[test]
    fn test_frames_target_dock_icon() {
        let (mut engine, id) = engine_with_about();
        engine.minimize_window(&id, 0.0).unwrap();

        let frames = engine.transition_frames(300.0);
        assert_eq!(frames.len(), 1);
        let expected = dock_icon_rect(0, apps::all().len(), engine.screen_size());
        assert_eq!(frames[0].0, id);
        assert!((frames[0].1.rect.x - expected.x).abs() < 0.001);
    }

    #[test]
    fn test_tick_purges_dismissed_widgets() {
        let (mut engine, _) = engine_with_about();
        let widget = engine.widgets.iter().next().unwrap().id.clone();
        engine.dismiss_widget(&widget, 0.0).unwrap();

        engine.tick(100.0);
        assert!(engine.widgets.get(&widget).is_some());
        engine.tick(300.0);
        assert!(engine.widgets.get(&widget).is_none());
    }
}
