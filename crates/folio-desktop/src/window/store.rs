//! Window store: lifecycle, focus and z-order

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use super::{UnmaximizePolicy, Window, WindowId, WindowPhase, WindowPlacement, WindowRegion};
use crate::apps;
use crate::error::{DesktopError, DesktopResult};
use crate::math::{Rect, Size, Vec2};

/// Dock indicator state for one registered application
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DockEntry {
    pub app_id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub is_open: bool,
    pub is_minimized: bool,
    pub is_active: bool,
}

/// Window store handling window lifecycle, z-order and focus
///
/// Holds at most one visible window per application. Every z-index handed
/// out (open, focus, restore) is strictly greater than all earlier ones.
pub struct WindowStore {
    /// All windows by ID
    windows: HashMap<WindowId, Window>,
    /// Most recently opened, focused or restored window
    active: Option<WindowId>,
    /// Next z-order value
    next_z: u32,
    placement: WindowPlacement,
}

impl Default for WindowStore {
    fn default() -> Self {
        Self::new(WindowPlacement::default())
    }
}

impl WindowStore {
    /// Create an empty window store
    pub fn new(placement: WindowPlacement) -> Self {
        Self {
            windows: HashMap::new(),
            active: None,
            next_z: 1,
            placement,
        }
    }

    /// Placement rules in effect
    pub fn placement(&self) -> &WindowPlacement {
        &self.placement
    }

    fn issue_z(&mut self) -> u32 {
        let z = self.next_z;
        self.next_z += 1;
        z
    }

    /// Open an application
    ///
    /// If the app already has a visible window it is raised (and restored
    /// when minimized) instead of opening a second one. Returns the id of the
    /// window that ends up active.
    pub fn open(&mut self, app_id: &str) -> DesktopResult<WindowId> {
        let existing = self
            .windows
            .values()
            .find(|w| w.app_id == app_id && w.is_visible)
            .map(|w| (w.id.clone(), w.phase));

        if let Some((id, phase)) = existing {
            match phase {
                WindowPhase::Minimized | WindowPhase::Minimizing => {
                    self.restore(&id)?;
                }
                WindowPhase::Idle | WindowPhase::Restoring => {
                    self.focus(&id)?;
                }
            }
            return Ok(id);
        }

        let app = apps::lookup(app_id).ok_or_else(|| {
            warn!(app_id, "open_window: no such app in registry");
            DesktopError::UnknownApp(app_id.to_string())
        })?;

        let id = Uuid::new_v4().to_string();
        let position = self.placement.cascade_position(self.windows.len());
        let z = self.issue_z();
        let window = Window::new(id.clone(), app, position, z);

        debug!(app_id, window = %id, z, "window opened");
        self.windows.insert(id.clone(), window);
        self.active = Some(id.clone());
        Ok(id)
    }

    /// Close a window, discarding its state
    pub fn close(&mut self, id: &str) -> Option<Window> {
        let removed = self.windows.remove(id);
        if self.active.as_deref() == Some(id) {
            self.active = None;
        }
        if removed.is_some() {
            debug!(window = %id, "window closed");
        }
        removed
    }

    /// Begin minimizing a window
    ///
    /// Only flags the transition; geometry is untouched and the window stays
    /// laid out until [`complete_minimize`](Self::complete_minimize).
    pub fn minimize(&mut self, id: &str) -> DesktopResult<()> {
        let window = self.get_mut(id)?;
        match window.phase {
            WindowPhase::Idle | WindowPhase::Restoring => {
                window.phase = WindowPhase::Minimizing;
                debug!(window = %id, "minimize started");
            }
            WindowPhase::Minimizing | WindowPhase::Minimized => {}
        }
        Ok(())
    }

    /// Finish a minimize transition
    ///
    /// Returns `false` (and changes nothing) unless the window is still
    /// minimizing.
    pub fn complete_minimize(&mut self, id: &str) -> bool {
        match self.windows.get_mut(id) {
            Some(window) if window.phase == WindowPhase::Minimizing => {
                window.phase = WindowPhase::Minimized;
                true
            }
            _ => false,
        }
    }

    /// Begin restoring a window: un-minimize, raise and activate it
    ///
    /// Returns the new z-index.
    pub fn restore(&mut self, id: &str) -> DesktopResult<u32> {
        if !self.windows.contains_key(id) {
            return Err(DesktopError::WindowNotFound(id.to_string()));
        }
        let z = self.issue_z();
        let window = self.get_mut(id)?;
        window.phase = WindowPhase::Restoring;
        window.z_index = z;
        self.active = Some(id.to_string());
        debug!(window = %id, z, "restore started");
        Ok(z)
    }

    /// Finish a restore transition
    ///
    /// Returns `false` (and changes nothing) unless the window is still
    /// restoring.
    pub fn complete_restore(&mut self, id: &str) -> bool {
        match self.windows.get_mut(id) {
            Some(window) if window.phase == WindowPhase::Restoring => {
                window.phase = WindowPhase::Idle;
                true
            }
            _ => false,
        }
    }

    /// Toggle maximized state
    ///
    /// Maximizing fills `viewport` minus the dock allowance. Un-maximizing
    /// follows the store's [`UnmaximizePolicy`]. Returns the new state.
    pub fn maximize(&mut self, id: &str, viewport: Size) -> DesktopResult<bool> {
        if !viewport.is_finite() || viewport.is_empty() {
            warn!(?viewport, window = %id, "maximize_window without a usable viewport");
            return Err(DesktopError::InvalidOperation {
                op: "maximize_window",
                reason: "viewport is not usable",
            });
        }

        let placement = self.placement.clone();
        let window = self.get_mut(id)?;

        if window.is_maximized {
            window.is_maximized = false;
            let fixed = Rect::from_pos_size(
                placement.unmaximized_position,
                placement.unmaximized_size,
            );
            let target = match placement.unmaximize {
                UnmaximizePolicy::FixedDefault => fixed,
                UnmaximizePolicy::PreMaximize => window.restore_rect.unwrap_or(fixed),
            };
            window.restore_rect = None;
            window.position = target.position();
            window.size = target.size();
        } else {
            if placement.unmaximize == UnmaximizePolicy::PreMaximize {
                window.restore_rect = Some(window.rect());
            }
            window.is_maximized = true;
            window.position = Vec2::ZERO;
            window.size = Size::new(
                viewport.width,
                (viewport.height - placement.dock_allowance).max(0.0),
            );
        }
        Ok(window.is_maximized)
    }

    /// Raise and activate a window
    ///
    /// A fully minimized window is shown again immediately, without a restore
    /// transition. Returns the new z-index.
    pub fn focus(&mut self, id: &str) -> DesktopResult<u32> {
        if !self.windows.contains_key(id) {
            return Err(DesktopError::WindowNotFound(id.to_string()));
        }
        let z = self.issue_z();
        let window = self.get_mut(id)?;
        window.z_index = z;
        if window.phase == WindowPhase::Minimized {
            window.phase = WindowPhase::Idle;
        }
        self.active = Some(id.to_string());
        Ok(z)
    }

    /// Move a window; the caller is responsible for clamping
    pub fn move_window(&mut self, id: &str, position: Vec2) -> DesktopResult<()> {
        self.get_mut(id)?.position = position;
        Ok(())
    }

    /// Resize a window; stores the size as given
    pub fn resize(&mut self, id: &str, size: Size) -> DesktopResult<()> {
        self.get_mut(id)?.size = size;
        Ok(())
    }

    /// Get a window by ID
    pub fn get(&self, id: &str) -> Option<&Window> {
        self.windows.get(id)
    }

    fn get_mut(&mut self, id: &str) -> DesktopResult<&mut Window> {
        self.windows
            .get_mut(id)
            .ok_or_else(|| DesktopError::WindowNotFound(id.to_string()))
    }

    /// Currently active window
    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Laid-out window with the highest z-index
    ///
    /// Recomputed on every call; keyboard shortcuts are routed here.
    pub fn topmost(&self) -> Option<&Window> {
        self.windows
            .values()
            .filter(|w| w.is_rendered())
            .max_by_key(|w| w.z_index)
    }

    /// Whether `id` is the topmost window
    pub fn is_topmost(&self, id: &str) -> bool {
        self.topmost().map(|w| w.id == id).unwrap_or(false)
    }

    /// Get windows sorted by z-order (back to front)
    pub fn windows_by_z(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.windows.values().collect();
        windows.sort_by_key(|w| w.z_index);
        windows
    }

    /// Get all windows
    pub fn iter(&self) -> impl Iterator<Item = &Window> {
        self.windows.values()
    }

    /// Get the number of windows
    pub fn count(&self) -> usize {
        self.windows.len()
    }

    /// Dock indicators, one per registered app in registry order
    pub fn dock_entries(&self) -> Vec<DockEntry> {
        apps::all()
            .iter()
            .map(|app| {
                let window = self
                    .windows
                    .values()
                    .find(|w| w.app_id == app.id && w.is_visible);
                DockEntry {
                    app_id: app.id,
                    name: app.name,
                    icon: app.icon,
                    is_open: window.is_some(),
                    is_minimized: window.map(|w| w.is_minimized()).unwrap_or(false),
                    is_active: window
                        .map(|w| self.active.as_deref() == Some(w.id.as_str()))
                        .unwrap_or(false),
                }
            })
            .collect()
    }

    /// Find which region of which window is at a point (topmost first)
    pub fn region_at(&self, pos: Vec2) -> Option<(WindowId, WindowRegion)> {
        let mut windows: Vec<&Window> = self.windows.values().filter(|w| w.is_rendered()).collect();
        windows.sort_by_key(|w| std::cmp::Reverse(w.z_index));

        windows
            .into_iter()
            .find(|w| w.rect().contains(pos))
            .map(|w| (w.id.clone(), hit_test_window(w, pos)))
    }
}

/// Hit test a window known to contain `pos`
fn hit_test_window(window: &Window, pos: Vec2) -> WindowRegion {
    if window.close_button_rect().contains(pos) {
        return WindowRegion::CloseButton;
    }
    if window.minimize_button_rect().contains(pos) {
        return WindowRegion::MinimizeButton;
    }
    if window.maximize_button_rect().contains(pos) {
        return WindowRegion::MaximizeButton;
    }
    if window.can_resize() && window.resize_handle_rect().contains(pos) {
        return WindowRegion::ResizeHandle;
    }
    if window.header_rect().contains(pos) {
        return WindowRegion::TitleBar;
    }
    WindowRegion::Content
}
