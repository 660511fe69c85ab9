//! Desktop engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `windows`: Window lifecycle and operations
//! - `widgets`: Widget lifecycle and operations
//! - `input`: Pointer event handling, drag operations and shortcuts
//! - `transitions`: Minimize/restore animation bookkeeping
//! - `session`: Persisted settings and notifications
//! - `views`: Serialized views for the front end

mod input;
mod session;
mod transitions;
mod views;
mod widgets;
mod windows;

use crate::config::DesktopConfig;
use crate::input::InputRouter;
use crate::math::Size;
use crate::notification::NotificationQueue;
use crate::persistence::PersistedState;
use crate::transition::WindowTransition;
use crate::viewport::Viewport;
use crate::widget::WidgetStore;
use crate::window::WindowStore;

pub use views::WindowView;

/// Desktop engine coordinating all desktop components
///
/// Owns every piece of desktop state; the front end holds one engine and
/// routes every event through it:
/// - Window store (lifecycle, focus, z-order)
/// - Widget store (widget layer, spotlight stacking)
/// - Input router (drag/resize gesture state)
/// - Running minimize/restore transitions
/// - Notifications and persisted settings
pub struct DesktopEngine {
    pub viewport: Viewport,
    pub config: DesktopConfig,
    /// Window store
    pub windows: WindowStore,
    /// Widget store
    pub widgets: WidgetStore,
    /// Input router
    pub input: InputRouter,
    pub notifications: NotificationQueue,
    /// Settings that survive a reload
    pub state: PersistedState,
    /// Running minimize/restore animations
    pub(crate) transitions: Vec<WindowTransition>,
    /// Set whenever `state` changes and cleared once saved
    pub(crate) state_dirty: bool,
}

impl Default for DesktopEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopEngine {
    /// Create a new desktop engine with default configuration
    pub fn new() -> Self {
        Self::with_config(DesktopConfig::default())
    }

    /// Create a new desktop engine
    pub fn with_config(config: DesktopConfig) -> Self {
        Self {
            viewport: Viewport::default(),
            windows: WindowStore::new(config.placement.clone()),
            widgets: WidgetStore::new(),
            input: InputRouter::new(),
            notifications: NotificationQueue::new(),
            state: PersistedState::default(),
            transitions: Vec::new(),
            state_dirty: false,
            config,
        }
    }

    /// Initialize the desktop with screen dimensions
    ///
    /// Lays out the built-in widgets on first call; later calls only resize
    /// so a front end that mounts twice does not duplicate widgets.
    pub fn init(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        if self.widgets.count() == 0 {
            self.widgets = WidgetStore::with_defaults(self.screen_size());
        } else {
            self.widgets.revalidate(self.screen_size());
        }
    }

    /// Resize the viewport, pulling widgets back inside it
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        self.widgets.revalidate(self.screen_size());
    }

    /// Current screen size
    #[inline]
    pub fn screen_size(&self) -> Size {
        self.viewport.screen_size
    }
}
