//! Persisted settings snapshot

use serde::{Deserialize, Serialize};

use super::wallpaper::{WALLPAPERS, WALLPAPER_HISTORY_CAP};
use crate::error::DesktopResult;

/// Storage key the snapshot is saved under
pub const STORAGE_KEY: &str = "folio-desktop-state";

/// Color scheme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
    /// Follow the OS preference
    System,
}

/// Screen edge the dock is attached to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DockPosition {
    #[default]
    Bottom,
    Left,
    Right,
}

/// User-facing desktop settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DesktopSettings {
    pub wallpaper: String,
    pub theme: Theme,
    pub dock_position: DockPosition,
    pub show_notifications: bool,
    pub sound_enabled: bool,
    pub wallpaper_cycling: bool,
}

impl Default for DesktopSettings {
    fn default() -> Self {
        Self {
            wallpaper: WALLPAPERS[0].to_string(),
            theme: Theme::default(),
            dock_position: DockPosition::default(),
            show_notifications: true,
            sound_enabled: true,
            wallpaper_cycling: false,
        }
    }
}

/// Snapshot of everything that survives a reload
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistedState {
    /// Version for migration support
    pub version: u32,
    pub settings: DesktopSettings,
    pub is_logged_in: bool,
    pub has_visited: bool,
    /// Previously used wallpapers, most recent first
    pub wallpaper_history: Vec<String>,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            settings: DesktopSettings::default(),
            is_logged_in: false,
            has_visited: false,
            wallpaper_history: Vec::new(),
        }
    }
}

impl PersistedState {
    /// Current snapshot version
    ///
    /// Version 1 predates `wallpaperCycling` and the history cap.
    pub const CURRENT_VERSION: u32 = 2;

    /// Check if snapshot needs migration
    pub fn needs_migration(&self) -> bool {
        self.version < Self::CURRENT_VERSION
    }

    /// Migrate snapshot to current version
    pub fn migrate(&mut self) {
        if self.version < 2 {
            self.wallpaper_history.truncate(WALLPAPER_HISTORY_CAP);
            self.settings.wallpaper_cycling = false;
        }
        self.version = Self::CURRENT_VERSION;
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> DesktopResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse from JSON, migrating older versions
    ///
    /// Snapshots without a `version` field count as version 0.
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let has_version = value.get("version").is_some();
        let mut state: PersistedState = serde_json::from_value(value)?;
        if !has_version {
            state.version = 0;
        }
        if state.needs_migration() {
            state.migrate();
        }
        Ok(state)
    }

    /// Change the wallpaper, remembering the previous one
    ///
    /// The history keeps at most `history_cap` entries, newest first.
    /// Returns `false` if `wallpaper` is already set.
    pub fn set_wallpaper(&mut self, wallpaper: &str, history_cap: usize) -> bool {
        if self.settings.wallpaper == wallpaper {
            return false;
        }
        let previous = std::mem::replace(&mut self.settings.wallpaper, wallpaper.to_string());
        self.wallpaper_history
            .retain(|w| *w != previous && w.as_str() != wallpaper);
        self.wallpaper_history.insert(0, previous);
        self.wallpaper_history.truncate(history_cap);
        true
    }

    /// Advance to the next built-in wallpaper when cycling is enabled
    ///
    /// A custom wallpaper not in the built-in list cycles to the first one.
    pub fn cycle_wallpaper(&mut self, history_cap: usize) -> Option<&str> {
        if !self.settings.wallpaper_cycling {
            return None;
        }
        let next = WALLPAPERS
            .iter()
            .position(|w| *w == self.settings.wallpaper)
            .map(|index| (index + 1) % WALLPAPERS.len())
            .unwrap_or(0);
        self.set_wallpaper(WALLPAPERS[next], history_cap);
        Some(self.settings.wallpaper.as_str())
    }
}
