//! Persisted settings, session flags and notifications

use serde_json::Value;
use tracing::debug;

use super::DesktopEngine;
use crate::error::{DesktopError, DesktopResult};
use crate::notification::{NewNotification, NotificationId, NotificationKind};
use crate::persistence::{self, DesktopSettings, StateStorage};

impl DesktopEngine {
    /// Current desktop settings
    pub fn settings(&self) -> &DesktopSettings {
        &self.state.settings
    }

    /// Replace the persisted state with whatever `storage` holds
    pub fn load_state(&mut self, storage: &dyn StateStorage) {
        self.state = persistence::load_state(storage);
        self.state_dirty = false;
    }

    /// Write the persisted state if it changed since the last save
    ///
    /// Returns whether anything was written.
    pub fn save_state(&mut self, storage: &mut dyn StateStorage) -> DesktopResult<bool> {
        if !self.state_dirty {
            return Ok(false);
        }
        persistence::save_state(storage, &self.state)?;
        self.state_dirty = false;
        Ok(true)
    }

    /// Whether the persisted state has unsaved changes
    pub fn is_state_dirty(&self) -> bool {
        self.state_dirty
    }

    /// Shallow-merge a JSON object into the settings
    pub fn update_settings(&mut self, patch: &Value) -> DesktopResult<()> {
        let Value::Object(patch) = patch else {
            return Err(DesktopError::Serialization(
                "settings patch must be a JSON object".to_string(),
            ));
        };
        let mut merged = serde_json::to_value(&self.state.settings)?;
        if let Value::Object(base) = &mut merged {
            for (key, value) in patch {
                base.insert(key.clone(), value.clone());
            }
        }
        let settings: DesktopSettings = serde_json::from_value(merged)?;

        if !settings.show_notifications {
            self.notifications.clear();
        }
        if settings.wallpaper != self.state.settings.wallpaper {
            let wallpaper = settings.wallpaper.clone();
            self.state.settings = DesktopSettings {
                wallpaper: self.state.settings.wallpaper.clone(),
                ..settings
            };
            self.set_wallpaper(&wallpaper);
        } else {
            self.state.settings = settings;
        }
        self.state_dirty = true;
        Ok(())
    }

    /// Change the wallpaper, remembering the previous one
    pub fn set_wallpaper(&mut self, wallpaper: &str) -> bool {
        let changed = self
            .state
            .set_wallpaper(wallpaper, self.config.wallpaper_history_cap);
        if changed {
            self.state_dirty = true;
            debug!(wallpaper, "wallpaper changed");
        }
        changed
    }

    /// Advance to the next built-in wallpaper if cycling is enabled
    pub fn cycle_wallpaper(&mut self) -> Option<String> {
        let next = self
            .state
            .cycle_wallpaper(self.config.wallpaper_history_cap)
            .map(str::to_string)?;
        self.state_dirty = true;
        Some(next)
    }

    pub fn set_logged_in(&mut self, logged_in: bool) {
        if self.state.is_logged_in != logged_in {
            self.state.is_logged_in = logged_in;
            self.state_dirty = true;
        }
    }

    /// Record that the intro has been seen
    pub fn mark_visited(&mut self) {
        if !self.state.has_visited {
            self.state.has_visited = true;
            self.state_dirty = true;
        }
    }

    /// Queue a notification
    ///
    /// Returns `None` when notifications are switched off.
    pub fn notify(&mut self, notification: NewNotification, now_ms: f64) -> Option<NotificationId> {
        if !self.state.settings.show_notifications {
            debug!(title = %notification.title, "notification suppressed");
            return None;
        }
        Some(self.notifications.add(notification, now_ms))
    }

    /// Queue a notification that expires after the configured default duration
    pub fn notify_timed(
        &mut self,
        title: &str,
        message: &str,
        kind: NotificationKind,
        now_ms: f64,
    ) -> Option<NotificationId> {
        self.notify(
            NewNotification {
                title: title.to_string(),
                message: message.to_string(),
                kind,
                duration: Some(self.config.notification_duration_ms),
            },
            now_ms,
        )
    }

    pub fn dismiss_notification(&mut self, id: NotificationId) -> bool {
        self.notifications.dismiss(id)
    }

    pub fn clear_notifications(&mut self) {
        self.notifications.clear();
    }
}
