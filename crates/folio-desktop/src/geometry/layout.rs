//! Breakpoint-keyed default placement

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use tracing::warn;

use super::{clamp_to_bounds, Breakpoint, DOCK_ALLOWANCE, EDGE_INSET, FALLBACK_POSITION};
use crate::math::{Size, Vec2};
use crate::widget::WidgetType;

/// Hand-tuned default positions per breakpoint and widget type
///
/// Lookups that miss (no tier for the viewport, or no entry for the type in
/// that tier) fall through to [`fallback_position`].
#[derive(Clone, Debug, Default)]
pub struct LayoutTable {
    entries: BTreeMap<Breakpoint, HashMap<WidgetType, Vec2>>,
}

impl LayoutTable {
    /// Empty table (every lookup uses the fallback formula)
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in desktop layout
    pub fn builtin() -> &'static LayoutTable {
        static TABLE: OnceLock<LayoutTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            use WidgetType::*;

            let mut table = LayoutTable::new();
            let rows: [(Breakpoint, [(WidgetType, f32, f32); 5]); 6] = [
                (
                    Breakpoint::Xxl,
                    [
                        (AnalogClock, 100.0, 100.0),
                        (Calendar, 100.0, 360.0),
                        (SearchSpotlight, 560.0, 40.0),
                        (SkillMeter, 1200.0, 120.0),
                        (Quote, 1200.0, 460.0),
                    ],
                ),
                (
                    Breakpoint::Xl,
                    [
                        (AnalogClock, 80.0, 90.0),
                        (Calendar, 80.0, 330.0),
                        (SearchSpotlight, 400.0, 36.0),
                        (SkillMeter, 940.0, 110.0),
                        (Quote, 940.0, 450.0),
                    ],
                ),
                (
                    Breakpoint::Lg,
                    [
                        (AnalogClock, 60.0, 80.0),
                        (Calendar, 60.0, 300.0),
                        (SearchSpotlight, 272.0, 32.0),
                        (SkillMeter, 700.0, 100.0),
                        (Quote, 680.0, 440.0),
                    ],
                ),
                (
                    Breakpoint::Md,
                    [
                        (AnalogClock, 40.0, 70.0),
                        (Calendar, 40.0, 290.0),
                        (SearchSpotlight, 144.0, 28.0),
                        (SkillMeter, 440.0, 90.0),
                        (Quote, 420.0, 430.0),
                    ],
                ),
                (
                    Breakpoint::Sm,
                    [
                        (AnalogClock, 24.0, 64.0),
                        (Calendar, 24.0, 280.0),
                        (SearchSpotlight, 80.0, 24.0),
                        (SkillMeter, 320.0, 80.0),
                        (Quote, 300.0, 420.0),
                    ],
                ),
                (
                    Breakpoint::Xs,
                    [
                        (AnalogClock, 16.0, 84.0),
                        (Calendar, 16.0, 300.0),
                        (SearchSpotlight, 16.0, 16.0),
                        (SkillMeter, 16.0, 620.0),
                        (Quote, 16.0, 960.0),
                    ],
                ),
            ];

            for (breakpoint, row) in rows {
                for (kind, x, y) in row {
                    table.insert(breakpoint, kind, Vec2::new(x, y));
                }
            }
            table
        })
    }

    /// Set the position for a type at a breakpoint
    pub fn insert(&mut self, breakpoint: Breakpoint, kind: WidgetType, position: Vec2) {
        self.entries
            .entry(breakpoint)
            .or_default()
            .insert(kind, position);
    }

    /// Table entry for a type at a breakpoint, if any
    pub fn lookup(&self, breakpoint: Breakpoint, kind: WidgetType) -> Option<Vec2> {
        self.entries
            .get(&breakpoint)
            .and_then(|row| row.get(&kind))
            .copied()
    }

    /// Default position for `kind` in a viewport of the given size
    ///
    /// Table entries are clamped like the formula, so a short or narrow
    /// screen inside a tier still shows the whole widget where it fits.
    pub fn position_for(&self, kind: WidgetType, viewport: Size) -> Vec2 {
        if !viewport.is_finite() || viewport.is_empty() {
            warn!(?viewport, %kind, "default position requested without a usable viewport");
            return FALLBACK_POSITION;
        }

        match Breakpoint::from_width(viewport.width).and_then(|bp| self.lookup(bp, kind)) {
            Some(position) => clamp_to_bounds(position, kind.default_size(), viewport),
            None => fallback_position(kind, viewport),
        }
    }
}

/// Default position for `kind` using the built-in table
pub fn compute_default_position(kind: WidgetType, viewport: Size) -> Vec2 {
    LayoutTable::builtin().position_for(kind, viewport)
}

/// Formula placement used when the table has no entry
///
/// The result is clamped so the widget's far edge stays inside the viewport.
pub fn fallback_position(kind: WidgetType, viewport: Size) -> Vec2 {
    if !viewport.is_finite() || viewport.is_empty() {
        warn!(?viewport, %kind, "fallback placement without a usable viewport");
        return FALLBACK_POSITION;
    }

    let size = kind.default_size();
    let raw = match kind {
        WidgetType::SearchSpotlight => {
            Vec2::new((viewport.width - size.width) / 2.0, EDGE_INSET)
        }
        WidgetType::AnalogClock => Vec2::new(EDGE_INSET, 80.0),
        WidgetType::Calendar => Vec2::new(EDGE_INSET, 300.0),
        WidgetType::SkillMeter => Vec2::new(
            EDGE_INSET,
            viewport.height - size.height - DOCK_ALLOWANCE,
        ),
        WidgetType::Quote => Vec2::new(viewport.width - size.width - EDGE_INSET, 80.0),
    };

    clamp_to_bounds(raw, size, viewport)
}
