//! WASM exports for the desktop state core
//!
//! Wraps [`DesktopEngine`] with a JS-friendly API. Failures are logged and
//! reported as `false`/`undefined` so the UI keeps rendering.

use serde_json::Value;
use tracing::warn;
use wasm_bindgen::prelude::*;

use crate::console;
use crate::engine::DesktopEngine;
use crate::error::DesktopResult;
use crate::persistence::{LocalStorage, StateStorage};
use crate::{DesktopConfig, NewNotification};

fn date_now() -> f64 {
    js_sys::Date::now()
}

/// Log and flatten an engine result
fn report<T>(op: &str, result: DesktopResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(op, %err, "desktop operation failed");
            None
        }
    }
}

fn json_or_empty(op: &str, result: DesktopResult<String>, empty: &str) -> String {
    report(op, result).unwrap_or_else(|| empty.to_string())
}

fn parse_json(op: &str, json: &str) -> Option<Value> {
    report(op, serde_json::from_str(json).map_err(Into::into))
}

/// Desktop controller for WASM - wraps DesktopEngine with JS-friendly API
#[wasm_bindgen]
pub struct DesktopController {
    engine: DesktopEngine,
    storage: Option<LocalStorage>,
}

impl DesktopController {
    fn with_engine(mut engine: DesktopEngine) -> Self {
        let storage = report("open_storage", LocalStorage::open());
        if let Some(storage) = &storage {
            engine.load_state(storage as &dyn StateStorage);
        }
        Self { engine, storage }
    }

    /// Write settings back to localStorage if they changed
    fn persist(&mut self) {
        if let Some(storage) = self.storage.as_mut() {
            report("save_state", self.engine.save_state(storage));
        }
    }
}

impl Default for DesktopController {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl DesktopController {
    /// Create a controller and load persisted settings from localStorage
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console::init();
        Self::with_engine(DesktopEngine::new())
    }

    /// Create a controller from a (possibly partial) JSON config
    #[wasm_bindgen]
    pub fn with_config(config_json: &str) -> Self {
        console::init();
        let config = report("with_config", DesktopConfig::from_json(config_json)).unwrap_or_default();
        Self::with_engine(DesktopEngine::with_config(config))
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Initialize the desktop with screen dimensions
    #[wasm_bindgen]
    pub fn init(&mut self, width: f32, height: f32) {
        self.engine.init(width, height);
    }

    /// Resize the desktop viewport
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.engine.resize(width, height);
    }

    /// Advance animations and timers; returns true while animating
    #[wasm_bindgen]
    pub fn tick(&mut self) -> bool {
        self.engine.tick(date_now())
    }

    // =========================================================================
    // Windows
    // =========================================================================

    /// Open an app, returning the window id
    #[wasm_bindgen]
    pub fn open_window(&mut self, app_id: &str) -> Option<String> {
        report("open_window", self.engine.open_window(app_id, date_now()))
    }

    #[wasm_bindgen]
    pub fn close_window(&mut self, id: &str) -> bool {
        report("close_window", self.engine.close_window(id)).is_some()
    }

    #[wasm_bindgen]
    pub fn minimize_window(&mut self, id: &str) -> bool {
        report("minimize_window", self.engine.minimize_window(id, date_now())).is_some()
    }

    #[wasm_bindgen]
    pub fn restore_window(&mut self, id: &str) -> bool {
        report("restore_window", self.engine.restore_window(id, date_now())).is_some()
    }

    /// Toggle maximize; returns the new maximized state
    #[wasm_bindgen]
    pub fn maximize_window(&mut self, id: &str) -> Option<bool> {
        report("maximize_window", self.engine.maximize_window(id))
    }

    #[wasm_bindgen]
    pub fn focus_window(&mut self, id: &str) -> bool {
        report("focus_window", self.engine.focus_window(id)).is_some()
    }

    #[wasm_bindgen]
    pub fn move_window(&mut self, id: &str, x: f32, y: f32) -> bool {
        report("move_window", self.engine.move_window(id, x, y)).is_some()
    }

    #[wasm_bindgen]
    pub fn resize_window(&mut self, id: &str, width: f32, height: f32) -> bool {
        report("resize_window", self.engine.resize_window(id, width, height)).is_some()
    }

    /// Id of the topmost window
    #[wasm_bindgen]
    pub fn get_topmost_window(&self) -> Option<String> {
        self.engine.windows.topmost().map(|w| w.id.clone())
    }

    /// Get all windows as JSON
    #[wasm_bindgen]
    pub fn get_windows_json(&self) -> String {
        json_or_empty("get_windows_json", self.engine.windows_json(), "[]")
    }

    /// Get dock entries as JSON
    #[wasm_bindgen]
    pub fn get_dock_json(&self) -> String {
        json_or_empty("get_dock_json", self.engine.dock_json(), "[]")
    }

    /// Get running transition frames as JSON
    #[wasm_bindgen]
    pub fn get_transitions_json(&self) -> String {
        json_or_empty("get_transitions_json", self.engine.transitions_json(date_now()), "[]")
    }

    // =========================================================================
    // Widgets
    // =========================================================================

    /// Add a widget; `overrides_json` may be empty
    #[wasm_bindgen]
    pub fn add_widget(&mut self, kind: &str, overrides_json: &str) -> Option<String> {
        let overrides = if overrides_json.trim().is_empty() {
            None
        } else {
            Some(parse_json("add_widget", overrides_json)?)
        };
        report("add_widget", self.engine.add_widget(kind, overrides.as_ref()))
    }

    #[wasm_bindgen]
    pub fn remove_widget(&mut self, id: &str) -> bool {
        report("remove_widget", self.engine.remove_widget(id)).is_some()
    }

    #[wasm_bindgen]
    pub fn dismiss_widget(&mut self, id: &str) -> bool {
        report("dismiss_widget", self.engine.dismiss_widget(id, date_now())).is_some()
    }

    #[wasm_bindgen]
    pub fn update_widget(&mut self, id: &str, patch_json: &str) -> bool {
        parse_json("update_widget", patch_json)
            .and_then(|patch| report("update_widget", self.engine.update_widget(id, &patch)))
            .is_some()
    }

    #[wasm_bindgen]
    pub fn focus_widget(&mut self, id: &str) -> bool {
        report("focus_widget", self.engine.focus_widget(id)).is_some()
    }

    #[wasm_bindgen]
    pub fn has_visible_widget(&self, kind: &str) -> bool {
        self.engine.has_visible_widget(kind)
    }

    /// Get all widgets as JSON
    #[wasm_bindgen]
    pub fn get_widgets_json(&self) -> String {
        json_or_empty("get_widgets_json", self.engine.widgets_json(), "[]")
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handle pointer down; returns an InputResult as JSON
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, x: f32, y: f32) -> String {
        let result = self.engine.handle_pointer_down(x, y, date_now());
        json_or_empty("pointer_down", serde_json::to_string(&result).map_err(Into::into), "{}")
    }

    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.engine.handle_pointer_move(x, y).is_handled()
    }

    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> bool {
        self.engine.handle_pointer_up().is_handled()
    }

    /// Handle a key press; returns true when a shortcut fired
    #[wasm_bindgen]
    pub fn key_down(&mut self, key: &str, ctrl: bool, meta: bool) -> bool {
        self.engine.handle_key(key, ctrl, meta, date_now()).is_handled()
    }

    /// Local size of the window being resized as JSON, or empty
    #[wasm_bindgen]
    pub fn get_resize_preview_json(&self) -> String {
        match self.engine.resize_preview() {
            Some((id, size)) => serde_json::json!({ "windowId": id, "size": size }).to_string(),
            None => String::new(),
        }
    }

    // =========================================================================
    // Settings & notifications
    // =========================================================================

    /// Get persisted state as JSON
    #[wasm_bindgen]
    pub fn get_state_json(&self) -> String {
        json_or_empty("get_state_json", self.engine.state_json(), "{}")
    }

    #[wasm_bindgen]
    pub fn update_settings(&mut self, patch_json: &str) -> bool {
        let applied = parse_json("update_settings", patch_json)
            .and_then(|patch| report("update_settings", self.engine.update_settings(&patch)))
            .is_some();
        self.persist();
        applied
    }

    #[wasm_bindgen]
    pub fn set_wallpaper(&mut self, wallpaper: &str) -> bool {
        let changed = self.engine.set_wallpaper(wallpaper);
        self.persist();
        changed
    }

    #[wasm_bindgen]
    pub fn cycle_wallpaper(&mut self) -> Option<String> {
        let next = self.engine.cycle_wallpaper();
        self.persist();
        next
    }

    #[wasm_bindgen]
    pub fn set_logged_in(&mut self, logged_in: bool) {
        self.engine.set_logged_in(logged_in);
        self.persist();
    }

    #[wasm_bindgen]
    pub fn mark_visited(&mut self) {
        self.engine.mark_visited();
        self.persist();
    }

    /// Queue a notification from `{title, message, type, duration?}`
    #[wasm_bindgen]
    pub fn notify(&mut self, notification_json: &str) -> Option<f64> {
        let notification: NewNotification = report(
            "notify",
            serde_json::from_str(notification_json).map_err(Into::into),
        )?;
        self.engine
            .notify(notification, date_now())
            .map(|id| id as f64)
    }

    #[wasm_bindgen]
    pub fn dismiss_notification(&mut self, id: f64) -> bool {
        self.engine.dismiss_notification(id as u64)
    }

    #[wasm_bindgen]
    pub fn clear_notifications(&mut self) {
        self.engine.clear_notifications();
    }

    /// Get notifications as JSON
    #[wasm_bindgen]
    pub fn get_notifications_json(&self) -> String {
        json_or_empty("get_notifications_json", self.engine.notifications_json(), "[]")
    }
}
