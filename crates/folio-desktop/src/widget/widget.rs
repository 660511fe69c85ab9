//! Widget instance

use serde::{Deserialize, Serialize};

use super::{WidgetId, WidgetSettings, WidgetType};
use crate::math::{Rect, Size, SizeConstraints, Vec2};

/// A desktop widget instance
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    /// Unique identifier
    pub id: WidgetId,
    /// Type tag
    #[serde(rename = "type")]
    pub kind: WidgetType,
    pub position: Vec2,
    pub size: Size,
    pub constraints: SizeConstraints,
    pub is_visible: bool,
    pub z_index: u32,
    pub settings: WidgetSettings,
}

impl Widget {
    /// Bounding rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }
}

/// Partial update applied by [`WidgetStore::update`](super::WidgetStore::update)
///
/// `None` fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetPatch {
    pub position: Option<Vec2>,
    pub size: Option<Size>,
    pub is_visible: Option<bool>,
    #[serde(skip)]
    pub settings: Option<WidgetSettings>,
}

impl WidgetPatch {
    /// Patch that only moves the widget
    pub fn position(position: Vec2) -> Self {
        Self {
            position: Some(position),
            ..Default::default()
        }
    }

    /// Patch that only resizes the widget
    pub fn size(size: Size) -> Self {
        Self {
            size: Some(size),
            ..Default::default()
        }
    }

    /// Patch that only replaces the settings
    pub fn settings(settings: WidgetSettings) -> Self {
        Self {
            settings: Some(settings),
            ..Default::default()
        }
    }
}
