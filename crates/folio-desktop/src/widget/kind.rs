//! Widget type tags and their templates

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::WidgetSettings;
use crate::error::DesktopError;
use crate::math::{Size, SizeConstraints};

/// Widget type tag selecting renderer, template and settings shape
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetType {
    AnalogClock,
    Calendar,
    SearchSpotlight,
    SkillMeter,
    Quote,
}

impl WidgetType {
    /// Built-in widget types in default desktop order
    pub const ALL: [WidgetType; 5] = [
        WidgetType::AnalogClock,
        WidgetType::Calendar,
        WidgetType::SearchSpotlight,
        WidgetType::SkillMeter,
        WidgetType::Quote,
    ];

    /// Tag as used by the front end
    pub const fn as_str(self) -> &'static str {
        match self {
            WidgetType::AnalogClock => "analog-clock",
            WidgetType::Calendar => "calendar",
            WidgetType::SearchSpotlight => "search-spotlight",
            WidgetType::SkillMeter => "skill-meter",
            WidgetType::Quote => "quote",
        }
    }

    /// Size a freshly added widget gets
    pub const fn default_size(self) -> Size {
        match self {
            WidgetType::AnalogClock => Size::new(200.0, 200.0),
            WidgetType::Calendar => Size::new(280.0, 300.0),
            WidgetType::SearchSpotlight => Size::new(480.0, 56.0),
            WidgetType::SkillMeter => Size::new(300.0, 320.0),
            WidgetType::Quote => Size::new(320.0, 180.0),
        }
    }

    /// Size limits enforced on every resize
    pub const fn constraints(self) -> SizeConstraints {
        match self {
            WidgetType::AnalogClock => {
                SizeConstraints::bounded(Size::new(150.0, 150.0), Size::new(300.0, 300.0))
            }
            WidgetType::Calendar => {
                SizeConstraints::bounded(Size::new(240.0, 260.0), Size::new(400.0, 420.0))
            }
            WidgetType::SearchSpotlight => {
                SizeConstraints::bounded(Size::new(300.0, 48.0), Size::new(720.0, 72.0))
            }
            WidgetType::SkillMeter => {
                SizeConstraints::bounded(Size::new(240.0, 200.0), Size::new(480.0, 600.0))
            }
            WidgetType::Quote => {
                SizeConstraints::bounded(Size::new(240.0, 140.0), Size::new(520.0, 320.0))
            }
        }
    }

    /// Settings a freshly added widget gets
    pub fn default_settings(self) -> WidgetSettings {
        match self {
            WidgetType::AnalogClock => WidgetSettings::Clock(Default::default()),
            WidgetType::Calendar => WidgetSettings::Calendar(Default::default()),
            WidgetType::SearchSpotlight => WidgetSettings::Search(Default::default()),
            WidgetType::SkillMeter => WidgetSettings::SkillMeter(Default::default()),
            WidgetType::Quote => WidgetSettings::Quote(Default::default()),
        }
    }

    /// Whether this type is pinned above every other widget
    #[inline]
    pub fn is_pinned_top(self) -> bool {
        self == WidgetType::SearchSpotlight
    }
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WidgetType {
    type Err = DesktopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DesktopError::UnknownWidgetType(s.to_string()))
    }
}
