//! Typed per-kind widget settings

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::WidgetType;
use crate::error::DesktopResult;

/// Settings bag of a widget, one variant per [`WidgetType`]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WidgetSettings {
    Clock(ClockSettings),
    Calendar(CalendarSettings),
    Search(SearchSettings),
    SkillMeter(SkillMeterSettings),
    Quote(QuoteSettings),
}

/// Analog clock settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ClockSettings {
    /// IANA zone name, or `local`
    pub timezone: String,
    pub show_seconds: bool,
    pub show_numbers: bool,
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            timezone: "local".to_string(),
            show_seconds: true,
            show_numbers: true,
        }
    }
}

/// Calendar settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CalendarSettings {
    /// 0 = Sunday
    pub first_day_of_week: u8,
    pub show_week_numbers: bool,
    pub highlight_today: bool,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            first_day_of_week: 0,
            show_week_numbers: false,
            highlight_today: true,
        }
    }
}

/// Search spotlight settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SearchSettings {
    pub placeholder: String,
    pub max_results: u8,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            placeholder: "Search apps and sections…".to_string(),
            max_results: 6,
        }
    }
}

/// One bar of the skill meter
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillLevel {
    pub name: String,
    /// Percentage, 0..=100; larger values are clamped on load
    #[serde(deserialize_with = "percent")]
    pub level: u8,
}

fn percent<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let level = u64::deserialize(deserializer)?;
    Ok(level.min(100) as u8)
}

impl SkillLevel {
    fn new(name: &str, level: u8) -> Self {
        Self {
            name: name.to_string(),
            level: level.min(100),
        }
    }
}

/// Skill meter settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SkillMeterSettings {
    pub skills: Vec<SkillLevel>,
    pub animate: bool,
}

impl Default for SkillMeterSettings {
    fn default() -> Self {
        Self {
            skills: vec![
                SkillLevel::new("Rust", 85),
                SkillLevel::new("TypeScript", 90),
                SkillLevel::new("React", 88),
                SkillLevel::new("Node.js", 80),
                SkillLevel::new("SQL", 75),
            ],
            animate: true,
        }
    }
}

/// Quote panel settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct QuoteSettings {
    pub refresh_interval_secs: u32,
    pub category: String,
}

impl Default for QuoteSettings {
    fn default() -> Self {
        Self {
            refresh_interval_secs: 3600,
            category: "tech".to_string(),
        }
    }
}

impl WidgetSettings {
    /// Widget type these settings belong to
    pub fn widget_type(&self) -> WidgetType {
        match self {
            WidgetSettings::Clock(_) => WidgetType::AnalogClock,
            WidgetSettings::Calendar(_) => WidgetType::Calendar,
            WidgetSettings::Search(_) => WidgetType::SearchSpotlight,
            WidgetSettings::SkillMeter(_) => WidgetType::SkillMeter,
            WidgetSettings::Quote(_) => WidgetType::Quote,
        }
    }

    /// Parse a full settings object for `kind`
    ///
    /// Missing fields take their defaults; unknown fields are rejected.
    pub fn from_value(kind: WidgetType, value: Value) -> DesktopResult<Self> {
        Ok(match kind {
            WidgetType::AnalogClock => WidgetSettings::Clock(parse(value)?),
            WidgetType::Calendar => WidgetSettings::Calendar(parse(value)?),
            WidgetType::SearchSpotlight => WidgetSettings::Search(parse(value)?),
            WidgetType::SkillMeter => WidgetSettings::SkillMeter(parse(value)?),
            WidgetType::Quote => WidgetSettings::Quote(parse(value)?),
        })
    }

    /// Shallow-merge `overrides` onto these settings
    ///
    /// Top-level keys of `overrides` replace the matching fields; the result
    /// must still be valid settings for the same type.
    pub fn merged(&self, overrides: &Value) -> DesktopResult<Self> {
        let mut base = serde_json::to_value(self)?;
        if let (Value::Object(base), Value::Object(overrides)) = (&mut base, overrides) {
            for (key, value) in overrides {
                base.insert(key.clone(), value.clone());
            }
        } else if !overrides.is_null() {
            return Err(crate::error::DesktopError::Serialization(
                "settings overrides must be a JSON object".to_string(),
            ));
        }
        Self::from_value(self.widget_type(), base)
    }
}

fn parse<T: DeserializeOwned>(value: Value) -> DesktopResult<T> {
    Ok(serde_json::from_value(value)?)
}
