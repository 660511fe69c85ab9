//! Placement rules for new and un-maximized windows

use serde::{Deserialize, Serialize};

use crate::geometry::DOCK_ALLOWANCE;
use crate::math::{Size, Vec2};

/// What un-maximizing a window restores
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnmaximizePolicy {
    /// Snap to [`WindowPlacement::unmaximized_position`] / `unmaximized_size`
    #[default]
    FixedDefault,
    /// Return to the geometry held before maximizing
    PreMaximize,
}

/// Placement rules used by the window store
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WindowPlacement {
    /// Position of the first cascaded window
    pub cascade_base: Vec2,
    /// Step added per already-open window
    pub cascade_offset: Vec2,
    /// Cascade restarts at the base every this many windows
    pub cascade_wrap: usize,
    /// Height reserved for the dock when maximizing
    pub dock_allowance: f32,
    pub unmaximize: UnmaximizePolicy,
    pub unmaximized_position: Vec2,
    pub unmaximized_size: Size,
}

impl Default for WindowPlacement {
    fn default() -> Self {
        Self {
            cascade_base: Vec2::new(100.0, 100.0),
            cascade_offset: Vec2::new(30.0, 30.0),
            cascade_wrap: 10,
            dock_allowance: DOCK_ALLOWANCE,
            unmaximize: UnmaximizePolicy::FixedDefault,
            unmaximized_position: Vec2::new(100.0, 100.0),
            unmaximized_size: Size::new(800.0, 600.0),
        }
    }
}

impl WindowPlacement {
    /// Cascade position for a window opened while `open_count` windows exist
    pub fn cascade_position(&self, open_count: usize) -> Vec2 {
        let step = (open_count % self.cascade_wrap.max(1)) as f32;
        self.cascade_base + self.cascade_offset * step
    }
}
