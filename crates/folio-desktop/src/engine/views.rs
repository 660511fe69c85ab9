//! Serialized views for the front end

use serde::Serialize;

use super::DesktopEngine;
use crate::error::DesktopResult;
use crate::math::{Size, Vec2};
use crate::window::{Window, WindowId};

/// Window as the front end sees it
///
/// Flattens the lifecycle phase back into the flags the components read.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowView<'a> {
    pub id: &'a str,
    pub app_id: &'a str,
    pub title: &'a str,
    pub position: Vec2,
    pub size: Size,
    pub min_size: Size,
    pub is_maximized: bool,
    pub is_minimized: bool,
    pub is_animating_minimize: bool,
    pub is_animating_restore: bool,
    pub is_visible: bool,
    pub is_active: bool,
    pub z_index: u32,
    pub resizable: bool,
    pub draggable: bool,
}

impl<'a> WindowView<'a> {
    fn new(window: &'a Window, active: Option<&str>) -> Self {
        Self {
            id: &window.id,
            app_id: &window.app_id,
            title: &window.title,
            position: window.position,
            size: window.size,
            min_size: window.min_size,
            is_maximized: window.is_maximized,
            is_minimized: window.is_minimized(),
            is_animating_minimize: window.is_animating_minimize(),
            is_animating_restore: window.is_animating_restore(),
            is_visible: window.is_visible,
            is_active: active == Some(window.id.as_str()),
            z_index: window.z_index,
            resizable: window.resizable,
            draggable: window.draggable,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FrameView<'a> {
    window_id: &'a WindowId,
    #[serde(flatten)]
    frame: crate::transition::TransitionFrame,
}

impl DesktopEngine {
    /// Windows back to front
    pub fn window_views(&self) -> Vec<WindowView<'_>> {
        let active = self.windows.active_id();
        self.windows
            .windows_by_z()
            .into_iter()
            .map(|w| WindowView::new(w, active))
            .collect()
    }

    /// Windows back to front, as JSON
    pub fn windows_json(&self) -> DesktopResult<String> {
        Ok(serde_json::to_string(&self.window_views())?)
    }

    /// Widgets back to front, as JSON
    pub fn widgets_json(&self) -> DesktopResult<String> {
        Ok(serde_json::to_string(&self.widgets.widgets_by_z())?)
    }

    /// Dock entries, as JSON
    pub fn dock_json(&self) -> DesktopResult<String> {
        Ok(serde_json::to_string(&self.windows.dock_entries())?)
    }

    /// Notifications in display order, as JSON
    pub fn notifications_json(&self) -> DesktopResult<String> {
        let items: Vec<_> = self.notifications.iter().collect();
        Ok(serde_json::to_string(&items)?)
    }

    /// Persisted state, as JSON
    pub fn state_json(&self) -> DesktopResult<String> {
        self.state.to_json()
    }

    /// Running transition frames at `now_ms`, as JSON
    pub fn transitions_json(&self, now_ms: f64) -> DesktopResult<String> {
        let frames = self.transition_frames(now_ms);
        let views: Vec<FrameView<'_>> = frames
            .iter()
            .map(|(window_id, frame)| FrameView {
                window_id,
                frame: *frame,
            })
            .collect();
        Ok(serde_json::to_string(&views)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn create_test_engine() -> DesktopEngine {
        let mut engine = DesktopEngine::new();
        engine.init(1920.0, 1080.0);
        engine
    }

    #[test]
    fn test_windows_json_flags() {
        let mut engine = create_test_engine();
        let about = engine.open_window("about", 0.0).unwrap();
        engine.open_window("projects", 0.0).unwrap();
        engine.minimize_window(&about, 0.0).unwrap();

        let json: Value = serde_json::from_str(&engine.windows_json().unwrap()).unwrap();
        let windows = json.as_array().unwrap();
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0]["id"], about.as_str());
        assert_eq!(windows[0]["isAnimatingMinimize"], true);
        assert_eq!(windows[0]["isMinimized"], false);
        assert_eq!(windows[0]["appId"], "about");
        assert_eq!(windows[1]["isActive"], true);
        assert!(windows[1]["zIndex"].as_u64() > windows[0]["zIndex"].as_u64());
    }

    #[test]
    fn test_widgets_json_uses_type_tag() {
        let engine = create_test_engine();
        let json: Value = serde_json::from_str(&engine.widgets_json().unwrap()).unwrap();
        let widgets = json.as_array().unwrap();
        assert_eq!(widgets.len(), 5);
        // Spotlight renders last
        assert_eq!(widgets[4]["type"], "search-spotlight");
        assert!(widgets[0]["settings"].is_object());
    }

    #[test]
    fn test_dock_and_transitions_json() {
        let mut engine = create_test_engine();
        let id = engine.open_window("contact", 0.0).unwrap();
        engine.minimize_window(&id, 0.0).unwrap();

        let dock: Value = serde_json::from_str(&engine.dock_json().unwrap()).unwrap();
        let contact = dock
            .as_array()
            .unwrap()
            .iter()
            .find(|e| e["appId"] == "contact")
            .unwrap();
        assert_eq!(contact["isOpen"], true);

        let frames: Value = serde_json::from_str(&engine.transitions_json(150.0).unwrap()).unwrap();
        assert_eq!(frames[0]["windowId"], id.as_str());
        assert!(frames[0]["opacity"].as_f64().unwrap() < 1.0);
        assert!(frames[0]["rect"].is_object());
    }

    #[test]
    fn test_state_and_notifications_json() {
        let mut engine = create_test_engine();
        engine.notify_timed("Hello", "", crate::notification::NotificationKind::Info, 0.0);
        let notes: Value = serde_json::from_str(&engine.notifications_json().unwrap()).unwrap();
        assert_eq!(notes[0]["title"], "Hello");

        let state: Value = serde_json::from_str(&engine.state_json().unwrap()).unwrap();
        assert_eq!(state["settings"]["showNotifications"], true);
    }
}
