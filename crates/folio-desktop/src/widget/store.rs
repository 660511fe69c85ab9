//! Widget store: collection, stacking and two-step removal

use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use super::{Widget, WidgetId, WidgetPatch, WidgetType};
use crate::error::{DesktopError, DesktopResult};
use crate::geometry::{clamp_size, clamp_to_bounds, compute_default_position};
use crate::math::{Size, Vec2};

/// Owns every desktop widget
///
/// Widgets are kept in insertion order. Stacking uses a counter of its own,
/// separate from the window store's, and search-spotlight widgets are kept
/// above every other widget after each add or focus.
#[derive(Debug, Default)]
pub struct WidgetStore {
    widgets: Vec<Widget>,
    /// Last z-index handed out
    z_counter: u32,
    /// Hidden widgets awaiting deletion, with their due time (ms)
    pending_removal: Vec<(WidgetId, f64)>,
}

impl WidgetStore {
    /// Create an empty widget store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the five built-in widgets laid out for `viewport`
    pub fn with_defaults(viewport: Size) -> Self {
        let mut store = Self::new();
        for kind in WidgetType::ALL {
            store.add(kind, None, viewport);
        }
        store
    }

    /// Add a widget of `kind`
    ///
    /// `overrides` is shallow-merged onto the type's default settings; an
    /// override that does not fit the settings shape is dropped with a
    /// warning. Adding the same type twice yields two widgets.
    pub fn add(&mut self, kind: WidgetType, overrides: Option<&Value>, viewport: Size) -> WidgetId {
        let defaults = kind.default_settings();
        let settings = match overrides {
            Some(overrides) => defaults.merged(overrides).unwrap_or_else(|err| {
                warn!(%kind, %err, "ignoring widget settings overrides");
                defaults.clone()
            }),
            None => defaults,
        };

        let size = kind.default_size();
        let id = Uuid::new_v4().to_string();
        self.z_counter += 1;

        let widget = Widget {
            id: id.clone(),
            kind,
            position: compute_default_position(kind, viewport),
            size,
            constraints: kind.constraints(),
            is_visible: true,
            z_index: self.z_counter,
            settings,
        };

        debug!(%kind, widget = %id, z = widget.z_index, "widget added");
        self.widgets.push(widget);
        self.pin_spotlight();
        id
    }

    /// Delete a widget immediately
    pub fn remove(&mut self, id: &str) -> Option<Widget> {
        self.pending_removal.retain(|(pending, _)| pending != id);
        let index = self.widgets.iter().position(|w| w.id == id)?;
        debug!(widget = %id, "widget removed");
        Some(self.widgets.remove(index))
    }

    /// Hide a widget now and schedule its deletion `delay_ms` later
    pub fn dismiss(&mut self, id: &str, now_ms: f64, delay_ms: f64) -> DesktopResult<()> {
        let widget = self.get_mut(id)?;
        widget.is_visible = false;

        let due = now_ms + delay_ms;
        match self.pending_removal.iter_mut().find(|(pending, _)| pending == id) {
            Some(entry) => entry.1 = due,
            None => self.pending_removal.push((id.to_string(), due)),
        }
        Ok(())
    }

    /// Delete dismissed widgets whose delay has elapsed
    ///
    /// A widget made visible again since its dismissal is kept.
    pub fn purge_dismissed(&mut self, now_ms: f64) -> Vec<WidgetId> {
        let (due, waiting): (Vec<_>, Vec<_>) = self
            .pending_removal
            .drain(..)
            .partition(|(_, due)| *due <= now_ms);
        self.pending_removal = waiting;

        let mut purged = Vec::new();
        for (id, _) in due {
            let still_hidden = self.get(&id).map(|w| !w.is_visible).unwrap_or(false);
            if still_hidden && self.remove(&id).is_some() {
                purged.push(id);
            }
        }
        purged
    }

    /// Shallow-merge `patch` into a widget
    ///
    /// Sizes are clamped to the widget's constraints. Settings must belong
    /// to the widget's type.
    pub fn update(&mut self, id: &str, patch: WidgetPatch) -> DesktopResult<&Widget> {
        let widget = self.get_mut(id)?;

        if let Some(settings) = &patch.settings {
            if settings.widget_type() != widget.kind {
                return Err(DesktopError::SettingsMismatch {
                    widget: id.to_string(),
                    expected: widget.kind,
                });
            }
        }

        if let Some(position) = patch.position {
            widget.position = position;
        }
        if let Some(size) = patch.size {
            widget.size = clamp_size(size, &widget.constraints);
        }
        if let Some(visible) = patch.is_visible {
            widget.is_visible = visible;
        }
        if let Some(settings) = patch.settings {
            widget.settings = settings;
        }
        Ok(&*widget)
    }

    /// Raise a widget to the top of the widget layer
    ///
    /// Returns the widget's new z-index. Search spotlights stay above it.
    pub fn focus(&mut self, id: &str) -> DesktopResult<u32> {
        let z = self.max_z().max(self.z_counter) + 1;
        let widget = self.get_mut(id)?;
        widget.z_index = z;
        self.z_counter = z;
        self.pin_spotlight();
        Ok(self.get(id).map(|w| w.z_index).unwrap_or(z))
    }

    /// Pull every widget back inside a resized viewport
    pub fn revalidate(&mut self, viewport: Size) {
        for widget in &mut self.widgets {
            let clamped = clamp_to_bounds(widget.position, widget.size, viewport);
            if clamped != widget.position {
                debug!(widget = %widget.id, "widget moved back inside viewport");
                widget.position = clamped;
            }
        }
    }

    /// Get a widget by ID
    pub fn get(&self, id: &str) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id == id)
    }

    fn get_mut(&mut self, id: &str) -> DesktopResult<&mut Widget> {
        self.widgets
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| DesktopError::WidgetNotFound(id.to_string()))
    }

    /// All widgets in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Widget> {
        self.widgets.iter()
    }

    /// Widgets back to front
    pub fn widgets_by_z(&self) -> Vec<&Widget> {
        let mut widgets: Vec<&Widget> = self.widgets.iter().collect();
        widgets.sort_by_key(|w| (w.kind.is_pinned_top(), w.z_index));
        widgets
    }

    /// Topmost visible widget under a point
    pub fn widget_at(&self, pos: Vec2) -> Option<&Widget> {
        self.widgets_by_z()
            .into_iter()
            .rev()
            .find(|w| w.is_visible && w.rect().contains(pos))
    }

    /// Whether a visible widget of `kind` exists
    pub fn has_visible(&self, kind: WidgetType) -> bool {
        self.widgets.iter().any(|w| w.kind == kind && w.is_visible)
    }

    /// Number of widgets, hidden ones included
    pub fn count(&self) -> usize {
        self.widgets.len()
    }

    fn max_z(&self) -> u32 {
        self.widgets.iter().map(|w| w.z_index).max().unwrap_or(0)
    }

    /// Keep search spotlights above every other widget
    fn pin_spotlight(&mut self) {
        let top_other = self
            .widgets
            .iter()
            .filter(|w| !w.kind.is_pinned_top())
            .map(|w| w.z_index)
            .max()
            .unwrap_or(0);

        for widget in self.widgets.iter_mut().filter(|w| w.kind.is_pinned_top()) {
            if widget.z_index <= top_other {
                self.z_counter = self.z_counter.max(top_other) + 1;
                widget.z_index = self.z_counter;
            }
        }
    }
}
