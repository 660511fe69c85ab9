//! Widget lifecycle and operations

use serde_json::Value;

use super::windows::logged;
use super::DesktopEngine;
use crate::error::{DesktopError, DesktopResult};
use crate::geometry::clamp_to_bounds;
use crate::math::Vec2;
use crate::widget::{WidgetId, WidgetPatch, WidgetType};

impl DesktopEngine {
    /// Add a widget by type tag, with optional settings overrides
    pub fn add_widget(&mut self, kind: &str, overrides: Option<&Value>) -> DesktopResult<WidgetId> {
        let kind = kind.parse::<WidgetType>().map_err(|e| logged("add_widget", e))?;
        Ok(self.widgets.add(kind, overrides, self.screen_size()))
    }

    /// Delete a widget immediately
    pub fn remove_widget(&mut self, id: &str) -> DesktopResult<()> {
        self.widgets
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| logged("remove_widget", DesktopError::WidgetNotFound(id.to_string())))
    }

    /// Hide a widget now and delete it once the removal delay has passed
    pub fn dismiss_widget(&mut self, id: &str, now_ms: f64) -> DesktopResult<()> {
        let delay = self.config.widget_removal_delay_ms;
        self.widgets
            .dismiss(id, now_ms, delay)
            .map_err(|e| logged("dismiss_widget", e))
    }

    /// Apply a JSON patch `{position?, size?, isVisible?, settings?}`
    ///
    /// `settings` is shallow-merged onto the widget's current settings.
    pub fn update_widget(&mut self, id: &str, patch: &Value) -> DesktopResult<()> {
        let mut typed: WidgetPatch = serde_json::from_value(patch.clone())?;
        if let Some(overrides) = patch.get("settings") {
            let current = self
                .widgets
                .get(id)
                .ok_or_else(|| logged("update_widget", DesktopError::WidgetNotFound(id.to_string())))?;
            typed.settings = Some(current.settings.merged(overrides)?);
        }
        self.widgets
            .update(id, typed)
            .map(|_| ())
            .map_err(|e| logged("update_widget", e))
    }

    /// Move a widget, keeping it inside the viewport
    pub fn move_widget(&mut self, id: &str, x: f32, y: f32) -> DesktopResult<()> {
        let size = self
            .widgets
            .get(id)
            .map(|w| w.size)
            .ok_or_else(|| logged("move_widget", DesktopError::WidgetNotFound(id.to_string())))?;
        let position = clamp_to_bounds(Vec2::new(x, y), size, self.screen_size());
        self.widgets.update(id, WidgetPatch::position(position))?;
        Ok(())
    }

    /// Raise a widget
    pub fn focus_widget(&mut self, id: &str) -> DesktopResult<u32> {
        self.widgets.focus(id).map_err(|e| logged("focus_widget", e))
    }

    /// Whether a visible widget with this type tag exists
    ///
    /// Unknown tags count as absent.
    pub fn has_visible_widget(&self, kind: &str) -> bool {
        kind.parse::<WidgetType>()
            .map(|kind| self.widgets.has_visible(kind))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::WidgetSettings;
    use serde_json::json;

    fn create_test_engine() -> DesktopEngine {
        let mut engine = DesktopEngine::new();
        engine.init(1920.0, 1080.0);
        engine
    }

    fn clock_id(engine: &DesktopEngine) -> WidgetId {
        engine
            .widgets
            .iter()
            .find(|w| w.kind == WidgetType::AnalogClock)
            .map(|w| w.id.clone())
            .unwrap()
    }

    #[test]
    fn test_add_widget_by_tag() {
        let mut engine = create_test_engine();
        let id = engine
            .add_widget("quote", Some(&json!({ "category": "science" })))
            .unwrap();
        match &engine.widgets.get(&id).unwrap().settings {
            WidgetSettings::Quote(quote) => assert_eq!(quote.category, "science"),
            other => panic!("expected quote settings, got {other:?}"),
        }
        assert!(engine.add_widget("weather", None).is_err());
    }

    #[test]
    fn test_update_widget_merges_settings() {
        let mut engine = create_test_engine();
        let id = clock_id(&engine);
        engine
            .update_widget(&id, &json!({ "settings": { "showSeconds": false }, "size": { "width": 50, "height": 999 } }))
            .unwrap();

        let widget = engine.widgets.get(&id).unwrap();
        assert!((widget.size.width - 150.0).abs() < 0.001);
        assert!((widget.size.height - 300.0).abs() < 0.001);
        match &widget.settings {
            WidgetSettings::Clock(clock) => {
                assert!(!clock.show_seconds);
                assert_eq!(clock.timezone, "local");
            }
            other => panic!("expected clock settings, got {other:?}"),
        }
    }

    #[test]
    fn test_update_widget_rejects_foreign_fields() {
        let mut engine = create_test_engine();
        let id = clock_id(&engine);
        assert!(engine
            .update_widget(&id, &json!({ "settings": { "maxResults": 3 } }))
            .is_err());
    }

    #[test]
    fn test_move_widget_clamps() {
        let mut engine = create_test_engine();
        let id = clock_id(&engine);
        engine.move_widget(&id, 5000.0, -10.0).unwrap();
        let widget = engine.widgets.get(&id).unwrap();
        assert!((widget.position.x - 1720.0).abs() < 0.001);
        assert!((widget.position.y - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_has_visible_widget() {
        let mut engine = create_test_engine();
        assert!(engine.has_visible_widget("analog-clock"));
        let id = clock_id(&engine);
        engine.dismiss_widget(&id, 0.0).unwrap();
        assert!(!engine.has_visible_widget("analog-clock"));
        assert!(!engine.has_visible_widget("weather"));
    }
}
