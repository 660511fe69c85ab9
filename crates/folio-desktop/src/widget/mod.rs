//! Desktop widgets
//!
//! Clock, calendar, search spotlight, skill meter and quote panels. Widgets
//! stack independently of windows and carry typed per-kind settings.

mod kind;
mod settings;
#[allow(clippy::module_inception)]
mod widget;
mod store;

pub use kind::WidgetType;
pub use settings::{
    CalendarSettings, ClockSettings, QuoteSettings, SearchSettings, SkillLevel,
    SkillMeterSettings, WidgetSettings,
};
pub use widget::{Widget, WidgetPatch};
pub use store::WidgetStore;

/// Unique widget identifier
pub type WidgetId = String;
