//! Engine configuration

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DesktopError, DesktopResult};
use crate::persistence::WALLPAPER_HISTORY_CAP;
use crate::transition::{MINIMIZE_DURATION_MS, RESTORE_DURATION_MS};
use crate::window::WindowPlacement;

/// Tunables for [`DesktopEngine`](crate::DesktopEngine)
///
/// Every field has a default, so a partial JSON object is a valid config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DesktopConfig {
    /// Cascade, maximize and un-maximize rules
    pub placement: WindowPlacement,
    pub minimize_duration_ms: f64,
    pub restore_duration_ms: f64,
    /// Delay between hiding a dismissed widget and deleting it
    pub widget_removal_delay_ms: f64,
    /// Lifetime given to notifications that do not set one
    pub notification_duration_ms: f64,
    pub wallpaper_history_cap: usize,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            placement: WindowPlacement::default(),
            minimize_duration_ms: MINIMIZE_DURATION_MS,
            restore_duration_ms: RESTORE_DURATION_MS,
            widget_removal_delay_ms: 300.0,
            notification_duration_ms: 5000.0,
            wallpaper_history_cap: WALLPAPER_HISTORY_CAP,
        }
    }
}

impl DesktopConfig {
    /// Parse a (possibly partial) JSON config
    ///
    /// Only a JSON object is accepted; serde would otherwise read an empty
    /// array as an all-default struct.
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(DesktopError::Serialization(
                "config must be a JSON object".to_string(),
            ));
        }
        Ok(serde_json::from_value(value)?)
    }
}
